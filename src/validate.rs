use crate::error::{InvalidInput, Result};
use tracing::debug;

/// Check the preconditions of a shuffle request.
///
/// Returns the source and the count as an unsigned pass count. The source
/// is checked first, so a blank source is reported even when the count is
/// negative as well.
pub fn validate(source: Option<&str>, count: i64) -> Result<(&str, u64)> {
    let source = match source {
        Some(s) if !is_blank(s) => s,
        _ => {
            debug!("rejecting blank source");
            return Err(InvalidInput::BlankSource.into());
        }
    };

    let passes = match u64::try_from(count) {
        Ok(passes) => passes,
        Err(_) => {
            debug!(count, "rejecting negative count");
            return Err(InvalidInput::NegativeCount(count).into());
        }
    };

    Ok((source, passes))
}

/// Empty or made only of white space
fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}
