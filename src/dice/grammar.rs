//! Expression grammar
//!
//! Two textual forms are recognised, ASCII digits only, lowercase `d`:
//! - single: `<count>d<sides>` with an optional `+<n>` or `-<n>` modifier
//! - repeated: `<repeats>#<count>d<sides>` with the same optional modifier
//!
//! Numbers too large for their field saturate instead of failing to match,
//! so `99999999999d6` is still recognised (and later rejected by bounds).

use super::{DiceExpression, RollSet};

/// Which textual form to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// `<count>d<sides>[<modifier>]`
    Single,
    /// `<repeats>#<count>d<sides>[<modifier>]`
    Repeated,
}

/// Result of searching text for one form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    NoMatch,
    Single(DiceExpression),
    RepeatedSet(RollSet),
}

impl Extraction {
    pub fn is_match(&self) -> bool {
        !matches!(self, Extraction::NoMatch)
    }
}

/// Cursor over the input bytes.
///
/// Working on bytes is safe for UTF-8 input: every byte the grammar accepts
/// is ASCII, and no continuation byte is ever mistaken for one.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn at(bytes: &'a [u8], pos: usize) -> Self {
        Self { bytes, pos }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a maximal run of one or more ASCII digits
    fn digits(&mut self) -> Option<&'a [u8]> {
        let bytes = self.bytes;
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        (self.pos > start).then(|| &bytes[start..self.pos])
    }

    /// Optional signed modifier; leaves the cursor untouched when absent
    fn modifier(&mut self) -> i64 {
        let start = self.pos;
        let negative = match self.peek() {
            Some(b'+') => false,
            Some(b'-') => true,
            _ => return 0,
        };
        self.pos += 1;

        match self.digits() {
            Some(digits) => parse_modifier(digits, negative),
            None => {
                // A dangling sign is not part of the match
                self.pos = start;
                0
            }
        }
    }

    fn single(&mut self) -> Option<DiceExpression> {
        let count = parse_unsigned(self.digits()?);
        if !self.eat(b'd') {
            return None;
        }
        let sides = parse_unsigned(self.digits()?);
        let modifier = self.modifier();

        Some(DiceExpression::new(count, sides, modifier))
    }

    fn roll_set(&mut self) -> Option<RollSet> {
        let repeats = parse_unsigned(self.digits()?);
        if !self.eat(b'#') {
            return None;
        }
        let expression = self.single()?;

        Some(RollSet::new(repeats, expression))
    }

    fn extract(&mut self, form: Form) -> Option<Extraction> {
        match form {
            Form::Single => self.single().map(Extraction::Single),
            Form::Repeated => self.roll_set().map(Extraction::RepeatedSet),
        }
    }
}

fn parse_unsigned(digits: &[u8]) -> u32 {
    digits.iter().fold(0u32, |acc, d| {
        acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
    })
}

fn parse_modifier(digits: &[u8], negative: bool) -> i64 {
    digits.iter().fold(0i64, |acc, d| {
        let digit = i64::from(d - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    })
}

/// Find the leftmost occurrence of `form` anywhere in `text`.
///
/// # Examples
/// ```
/// use dicebot::dice::grammar::{find, Extraction, Form};
/// use dicebot::dice::DiceExpression;
///
/// assert_eq!(
///     find("I attack for 2d6+1 damage", Form::Single),
///     Extraction::Single(DiceExpression::new(2, 6, 1))
/// );
/// assert_eq!(find("no dice here", Form::Single), Extraction::NoMatch);
/// ```
pub fn find(text: &str, form: Form) -> Extraction {
    let bytes = text.as_bytes();
    let mut start = 0;

    while let Some(&byte) = bytes.get(start) {
        if !byte.is_ascii_digit() {
            start += 1;
            continue;
        }

        let mut scanner = Scanner::at(bytes, start);
        if let Some(found) = scanner.extract(form) {
            return found;
        }

        // Every start inside this digit run reaches the same delimiter, so
        // none of them can match either.
        while bytes.get(start).is_some_and(|b| b.is_ascii_digit()) {
            start += 1;
        }
    }

    Extraction::NoMatch
}

/// Match the whole of `text` against the single form, with nothing left over
pub fn parse_exact(text: &str) -> Option<DiceExpression> {
    let bytes = text.as_bytes();
    let mut scanner = Scanner::at(bytes, 0);
    let expression = scanner.single()?;

    (scanner.pos == bytes.len()).then_some(expression)
}
