use crate::cli::format::OutputFormat;
use crate::engine::{shuffle_with, unshuffle_chars, ShuffleConfig};
use crate::error::Result;
use serde::Serialize;
use std::io::Read;

/// Options for the shuffle and unshuffle commands
#[derive(Debug, Clone)]
pub struct ShuffleOptions {
    pub count: i64,
    pub format: OutputFormat,
    pub cycle_detection: bool,
}

impl Default for ShuffleOptions {
    fn default() -> Self {
        Self {
            count: 1,
            format: OutputFormat::default(),
            cycle_detection: true,
        }
    }
}

#[derive(Serialize)]
struct UnshuffleReport<'a> {
    result: &'a str,
    count: i64,
}

/// Resolve the TEXT argument; `-` reads it from `input`
pub fn read_source(arg: &str, input: &mut impl Read) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }

    let mut text = String::new();
    input.read_to_string(&mut text)?;

    // Drop one trailing line ending
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }

    Ok(text)
}

/// Shuffle `source` and render the result
pub fn run_shuffle(source: &str, options: &ShuffleOptions) -> Result<String> {
    let config = ShuffleConfig {
        cycle_detection: options.cycle_detection,
    };
    let outcome = shuffle_with(source, options.count, &config)?;

    match options.format {
        OutputFormat::Text => Ok(format!("{}\n", outcome.result)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&outcome)?)),
    }
}

/// Unshuffle `source` and render the result
pub fn run_unshuffle(source: &str, options: &ShuffleOptions) -> Result<String> {
    let result = unshuffle_chars(source, options.count)?;

    match options.format {
        OutputFormat::Text => Ok(format!("{}\n", result)),
        OutputFormat::Json => {
            let report = UnshuffleReport {
                result: &result,
                count: options.count,
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
        }
    }
}
