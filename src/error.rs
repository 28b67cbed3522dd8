use thiserror::Error;

/// Failures while parsing or shifting a note map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftError {
    #[error("invalid octave '{0}': expected an integer")]
    InvalidOctave(String),

    /// A token that is not a note name for the current octave and not an integer either
    #[error("invalid note value '{0}': expected an integer")]
    InvalidToken(String),

    #[error("value out of range while shifting '{0}'")]
    Overflow(String),
}
