//! Concurrency scenarios

use std::thread;

use crate::harness::{parse_reply, TestBot};

/// Test: Many threads rolling through one bot all get well-formed replies
#[test]
fn test_parallel_handlers() {
    let bot = TestBot::scanning().unwrap();

    thread::scope(|scope| {
        for worker in 0..8 {
            let bot = &bot;
            scope.spawn(move || {
                for _ in 0..50 {
                    let target = format!("#table{}", worker);
                    let (header, totals) = parse_reply(&bot.say(&target, "5#3d6+1").unwrap());
                    assert_eq!(header, "3d6+1");
                    assert_eq!(totals.len(), 5);
                    assert!(totals.iter().all(|t| (4..=19).contains(t)));
                }
            });
        }
    });
}
