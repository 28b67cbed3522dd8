use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::error::ShiftError;

/// Number of MIDI note values in one octave.
pub const SEMITONES_PER_OCTAVE: i64 = 12;

/// The octave a note map is written for.
///
/// `numeral` keeps the text exactly as typed (trimmed); note names are matched
/// and rewritten against that text, while `value` is used to compute the next
/// octave.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Octave {
    pub value: i64,
    pub numeral: String,
}

impl Octave {
    /// The octave directly above this one.
    pub fn next(&self) -> Result<Octave, ShiftError> {
        let value = self
            .value
            .checked_add(1)
            .ok_or_else(|| ShiftError::Overflow(self.numeral.clone()))?;
        Ok(Octave { value, numeral: value.to_string() })
    }
}

impl FromStr for Octave {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numeral = s.trim();
        let value = numeral
            .parse::<i64>()
            .map_err(|e| parse_error(e, numeral, ShiftError::InvalidOctave))?;
        Ok(Octave { value, numeral: numeral.to_string() })
    }
}

/// One entry of a note map: either a note name such as `c#5` or a MIDI value such as `61`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Name(String),
    Value(i64),
}

impl Token {
    /// Decide once whether `raw` is a note name for `octave` or a note value.
    ///
    /// A token is a name when its last character equals the octave numeral.
    /// Everything else has to be an integer.
    pub fn classify(raw: &str, octave: &Octave) -> Result<Token, ShiftError> {
        if ends_with_octave(raw, octave) {
            return Ok(Token::Name(raw.to_string()));
        }
        raw.parse::<i64>()
            .map(Token::Value)
            .map_err(|e| parse_error(e, raw, ShiftError::InvalidToken))
    }

    /// Move this token up by one octave.
    ///
    /// Names get the first occurrence of the octave numeral replaced with the
    /// next octave's numeral; values get twelve semitones added.
    pub fn shift_up(&self, octave: &Octave) -> Result<Token, ShiftError> {
        match self {
            Token::Name(name) => {
                let next = octave.next()?;
                Ok(Token::Name(name.replacen(&octave.numeral, &next.numeral, 1)))
            }
            Token::Value(v) => v
                .checked_add(SEMITONES_PER_OCTAVE)
                .map(Token::Value)
                .ok_or_else(|| ShiftError::Overflow(v.to_string())),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Name(name) => f.write_str(name),
            Token::Value(v) => write!(f, "{}", v),
        }
    }
}

/// Integers too large for `i64` are reported as out of range, not as malformed.
fn parse_error(e: ParseIntError, raw: &str, invalid: fn(String) -> ShiftError) -> ShiftError {
    match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ShiftError::Overflow(raw.to_string()),
        _ => invalid(raw.to_string()),
    }
}

fn ends_with_octave(raw: &str, octave: &Octave) -> bool {
    match raw.chars().next_back() {
        Some(last) => {
            let mut buf = [0u8; 4];
            &*last.encode_utf8(&mut buf) == octave.numeral.as_str()
        }
        None => false,
    }
}

/// Split a note map line into classified tokens. A blank line gives no tokens.
pub fn tokenize(line: &str, octave: &Octave) -> Result<Vec<Token>, ShiftError> {
    line.split_whitespace()
        .map(|raw| Token::classify(raw, octave))
        .collect()
}

/// Shift every token of a note map written for `octave` up by one octave.
/// Order and count are preserved.
pub fn shift_up_one_octave(octave: &Octave, tokens: &[Token]) -> Result<Vec<Token>, ShiftError> {
    tokens.iter().map(|t| t.shift_up(octave)).collect()
}

pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse both console lines, shift, and render the result line.
pub fn shift_line(octave_line: &str, notes_line: &str) -> Result<String, ShiftError> {
    let octave: Octave = octave_line.parse()?;
    crate::general::check::debug_log(&format!(
        "octave {} -> {}",
        octave.numeral,
        octave.value.saturating_add(1)
    ));
    let tokens = tokenize(notes_line, &octave)?;
    crate::general::check::debug_log(&format!("{} tokens parsed", tokens.len()));
    let shifted = shift_up_one_octave(&octave, &tokens)?;
    Ok(join_tokens(&shifted))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn octave(s: &str) -> Octave {
        s.parse().unwrap()
    }

    #[test]
    fn test_names_and_values() {
        assert_eq!(shift_line("5", "c5 60 c#5 61").unwrap(), "c6 72 c#6 73");
        assert_eq!(
            shift_line("5", "note-c5 60 note-c#5 61 note-d5 62").unwrap(),
            "note-c6 72 note-c#6 73 note-d6 74"
        );
    }

    #[test]
    fn test_values_only() {
        assert_eq!(shift_line("5", "60 61 62").unwrap(), "72 73 74");
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(shift_line("5", "").unwrap(), "");
        assert_eq!(shift_line("5", "   ").unwrap(), "");
    }

    #[test]
    fn test_invalid_octave() {
        assert_eq!(
            shift_line("five", "c5 60"),
            Err(ShiftError::InvalidOctave("five".to_string()))
        );
    }

    #[test]
    fn test_invalid_token() {
        assert_eq!(
            shift_line("5", "c5 sixty"),
            Err(ShiftError::InvalidToken("sixty".to_string()))
        );
        // name written for another octave is not a name for this one
        assert_eq!(
            shift_line("5", "c4 48"),
            Err(ShiftError::InvalidToken("c4".to_string()))
        );
    }

    #[test]
    fn test_octave_is_trimmed() {
        let o = octave(" 5\n");
        assert_eq!(o.value, 5);
        assert_eq!(o.numeral, "5");
    }

    #[test]
    fn test_classify() {
        let o = octave("5");
        assert_eq!(Token::classify("c5", &o).unwrap(), Token::Name("c5".to_string()));
        assert_eq!(Token::classify("60", &o).unwrap(), Token::Value(60));
        assert_eq!(Token::classify("-3", &o).unwrap(), Token::Value(-3));
        // values ending in the octave digit read as names
        assert_eq!(Token::classify("65", &o).unwrap(), Token::Name("65".to_string()));
    }

    #[test]
    fn test_first_occurrence_replaced() {
        let o = octave("4");
        let shifted = Token::Name("x4-a4".to_string()).shift_up(&o).unwrap();
        assert_eq!(shifted, Token::Name("x5-a4".to_string()));
    }

    #[test]
    fn test_order_and_count_preserved() {
        let o = octave("3");
        let tokens = tokenize("c3 48 d3 50 e3 52", &o).unwrap();
        let shifted = shift_up_one_octave(&o, &tokens).unwrap();
        assert_eq!(shifted.len(), tokens.len());
        assert_eq!(join_tokens(&shifted), "c4 60 d4 62 e4 64");
    }

    #[test]
    fn test_not_idempotent() {
        let once = shift_line("5", "c5 60").unwrap();
        assert_eq!(once, "c6 72");
        // same octave again: "c6" is no longer a name for octave 5
        assert!(shift_line("5", &once).is_err());
        // next octave composes to a two octave shift
        assert_eq!(shift_line("6", &once).unwrap(), "c7 84");
    }

    #[test]
    fn test_value_overflow() {
        let o = octave("5");
        let err = Token::Value(i64::MAX).shift_up(&o).unwrap_err();
        assert_eq!(err, ShiftError::Overflow(i64::MAX.to_string()));
    }

    #[test]
    fn test_huge_integers_are_out_of_range() {
        assert_eq!(
            shift_line("5", "c5 99999999999999999999"),
            Err(ShiftError::Overflow("99999999999999999999".to_string()))
        );
        assert_eq!(
            shift_line("5", "-99999999999999999999"),
            Err(ShiftError::Overflow("-99999999999999999999".to_string()))
        );
        assert_eq!(
            shift_line("99999999999999999999", ""),
            Err(ShiftError::Overflow("99999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_next_octave() {
        assert_eq!(octave("9").next().unwrap().numeral, "10");
        assert!(octave(&i64::MAX.to_string()).next().is_err());
    }
}
