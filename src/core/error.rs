//! Recoverable engine errors
//!
//! Every variant is local to one call: the caller reports it and keeps playing.

use thiserror::Error;

/// Errors raised while scoring, recording or searching
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Length mismatch, malformed score pair or a call the game mode forbids
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A textual color the palette does not know
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Row or column access outside the table
    #[error("{what} index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// A row claiming more pegs than there are columns
    #[error("score {full} full + {partial} partial exceeds {columns} columns")]
    InvariantViolation {
        full: usize,
        partial: usize,
        columns: usize,
    },

    /// The guesser ran past its step or time budget
    #[error("search aborted after {steps} steps: {reason}")]
    SearchAborted { steps: u64, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = Error::IndexOutOfBounds {
            what: "row",
            index: 3,
            len: 2,
        };
        assert_eq!(err.to_string(), "row index 3 out of bounds (len 2)");

        let err = Error::InvariantViolation {
            full: 3,
            partial: 2,
            columns: 4,
        };
        assert_eq!(
            err.to_string(),
            "score 3 full + 2 partial exceeds 4 columns"
        );

        assert_eq!(
            Error::InvalidColor("Q".to_string()).to_string(),
            "invalid color: \"Q\""
        );
    }
}
