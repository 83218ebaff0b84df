//! Passive scanning scenarios

use crate::harness::{parse_reply, TestBot};

/// Test: The repeated form wins over a later single form
#[test]
fn test_repeated_form_priority() {
    let bot = TestBot::scanning().unwrap();

    let reply = bot
        .say("#rpg", "I rolled 3#2d6 and also 1d20+5 today")
        .expect("no reply");
    let (header, totals) = parse_reply(&reply);

    assert_eq!(header, "2d6");
    assert_eq!(totals.len(), 3);
    assert!(totals.iter().all(|t| (2..=12).contains(t)));
}

/// Test: A single expression anywhere in the text is rolled
#[test]
fn test_single_form_in_text() {
    let bot = TestBot::scanning().unwrap();

    let (header, totals) = parse_reply(&bot.say("#rpg", "fireball! 8d6 damage").unwrap());
    assert_eq!(header, "8d6");
    assert!((8..=48).contains(&totals[0]));
}

/// Test: /me actions are unwrapped before scanning
#[test]
fn test_action_text() {
    let bot = TestBot::scanning().unwrap();

    let reply = bot
        .say("#rpg", "\u{1}ACTION rolls 1d20+2 to hit\u{1}")
        .expect("no reply");
    assert!(reply.starts_with("[1d20+2] "), "unexpected reply {:?}", reply);
}

/// Test: Invalid or missing expressions stay silent
#[test]
fn test_silent_on_failure() {
    let bot = TestBot::scanning().unwrap();

    assert_eq!(bot.send("#rpg", "good morning"), None);
    assert_eq!(bot.send("#rpg", "2000d6 is a lot"), None);
    assert_eq!(bot.send("#rpg", "a 1d1 is not a die"), None);
}

/// Test: 31 repeats is too many, so the single form inside is rolled instead
#[test]
fn test_invalid_set_falls_back() {
    let bot = TestBot::scanning().unwrap();

    let (header, totals) = parse_reply(&bot.say("#rpg", "31#2d6").unwrap());
    assert_eq!(header, "2d6");
    assert_eq!(totals.len(), 1);
}

/// Test: Scanning follows the channel and private switches
#[test]
fn test_scan_switches() {
    let bot = TestBot::start(
        r##"
        [auto_roll]
        default = false
        private = false

        [auto_roll.channels]
        "#dice" = true
        "##,
    )
    .unwrap();

    assert!(bot.say("#dice", "2d6").is_some());
    assert!(bot.say("#DICE", "2d6").is_some());
    assert_eq!(bot.send("#chat", "2d6"), None);
    assert_eq!(bot.send("alice", "2d6"), None);
}

/// Test: Private scanning is independent of channels
#[test]
fn test_private_only() {
    let bot = TestBot::start("[auto_roll]\nprivate = true").unwrap();

    assert!(bot.say("alice", "3#1d4").is_some());
    assert_eq!(bot.send("#rpg", "3#1d4"), None);
}

/// Test: Disabled scanning ignores everything
#[test]
fn test_disabled_everywhere() {
    let bot = TestBot::start("").unwrap();

    for text in ["2d6", "3#2d6", "I rolled 3#2d6 and also 1d20+5 today"] {
        assert_eq!(bot.send("#rpg", text), None);
        assert_eq!(bot.send("bob", text), None);
    }
}
