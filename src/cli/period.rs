use crate::engine::content_period;
use crate::error::Result;
use crate::interleave::Interleaver;

/// Describe how many passes it takes for `source` to come back
pub fn show_period(source: &str) -> Result<String> {
    let period = content_period(source)?;
    let len = source.chars().count();
    let order = Interleaver::new(len).order();

    let mut output = String::new();
    output.push_str(&format!("Length: {}\n", len));
    output.push_str(&format!("Period: {}\n", period));
    output.push_str(&format!("Positional order: {}\n", order));

    Ok(output)
}
