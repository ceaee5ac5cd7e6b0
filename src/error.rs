use thiserror::Error;

/// Precondition that a shuffle request failed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("source string is null, empty or white space")]
    BlankSource,

    #[error("count of iterations is less than 0: {0}")]
    NegativeCount(i64),
}

#[derive(Error, Debug)]
pub enum ShuffleError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

impl ShuffleError {
    /// True for errors raised by input validation
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ShuffleError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, ShuffleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_blank_source() {
        let err = ShuffleError::from(InvalidInput::BlankSource);
        assert_eq!(
            err.to_string(),
            "Invalid input: source string is null, empty or white space"
        );
    }

    #[test]
    fn test_display_negative_count() {
        let err = ShuffleError::from(InvalidInput::NegativeCount(-3));
        assert_eq!(
            err.to_string(),
            "Invalid input: count of iterations is less than 0: -3"
        );
    }

    #[test]
    fn test_is_invalid_input() {
        assert!(ShuffleError::from(InvalidInput::BlankSource).is_invalid_input());
        assert!(!ShuffleError::UnsupportedFormat("xml".into()).is_invalid_input());
    }
}
