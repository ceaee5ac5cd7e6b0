use crate::error::{Result, ShuffleError};
use serde::{Deserialize, Serialize};

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Just the resulting text
    #[default]
    Text,
    /// A JSON report with the result and iteration statistics
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ShuffleError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ShuffleError::UnsupportedFormat(s.to_string())),
        }
    }
}
