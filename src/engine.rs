//! Cycle-aware iteration of the interleave pass.
//!
//! Applying the pass `count` times literally costs `count` passes. Since the
//! pass is a fixed permutation of positions, the text returns to its starting
//! arrangement after some period `p <= len`; once that happens only
//! `count % p` further passes are needed.

use crate::error::Result;
use crate::interleave::Interleaver;
use crate::validate::validate;
use serde::Serialize;
use tracing::debug;

/// Options for a shuffle run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleConfig {
    /// Stop iterating once the text returns to its original arrangement
    pub cycle_detection: bool,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            cycle_detection: true,
        }
    }
}

/// Result of a shuffle run together with how it was reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShuffleOutcome {
    pub result: String,
    /// Requested number of passes
    pub count: u64,
    /// Passes actually executed
    pub passes_applied: u64,
    /// Period of the text, if it was reached within `count` passes
    pub period: Option<u64>,
}

/// Shuffle `source` by applying the interleave pass `count` times.
///
/// Fails with [`InvalidInput`](crate::ShuffleError::InvalidInput) when the
/// source is absent, empty or white space, or when `count` is negative.
///
/// ```
/// use shufflechars::shuffle_chars;
///
/// assert_eq!(shuffle_chars("123456789", 1).unwrap(), "135792468");
/// assert_eq!(shuffle_chars("123456789", 7).unwrap(), "135792468");
/// assert!(shuffle_chars(None, 1).is_err());
/// ```
pub fn shuffle_chars<'a>(source: impl Into<Option<&'a str>>, count: i64) -> Result<String> {
    shuffle_with(source, count, &ShuffleConfig::default()).map(|outcome| outcome.result)
}

/// Shuffle with explicit options, reporting the work done
pub fn shuffle_with<'a>(
    source: impl Into<Option<&'a str>>,
    count: i64,
    config: &ShuffleConfig,
) -> Result<ShuffleOutcome> {
    let (source, count) = validate(source.into(), count)?;
    let interleaver = Interleaver::new(source.chars().count());
    Ok(iterate(source, count, &interleaver, config))
}

/// Undo `count` passes: the returned text shuffles back to `source`
pub fn unshuffle_chars<'a>(source: impl Into<Option<&'a str>>, count: i64) -> Result<String> {
    let (source, count) = validate(source.into(), count)?;
    let interleaver = Interleaver::new(source.chars().count()).invert();
    Ok(iterate(source, count, &interleaver, &ShuffleConfig::default()).result)
}

/// Least number of passes after which `source` is unchanged
pub fn content_period<'a>(source: impl Into<Option<&'a str>>) -> Result<u64> {
    let (source, _) = validate(source.into(), 0)?;
    let original: Vec<char> = source.chars().collect();
    let interleaver = Interleaver::new(original.len());
    let order = interleaver.order();

    let mut buf = original.clone();
    let mut scratch = Vec::with_capacity(buf.len());
    for pass in 1..order {
        interleaver.apply(&mut buf, &mut scratch);
        if buf == original {
            return Ok(pass);
        }
    }

    // `order` passes restore every position
    Ok(order)
}

fn iterate(
    source: &str,
    count: u64,
    interleaver: &Interleaver,
    config: &ShuffleConfig,
) -> ShuffleOutcome {
    let original: Vec<char> = source.chars().collect();
    let mut buf = original.clone();
    let mut scratch = Vec::with_capacity(buf.len());
    let mut passes_applied = 0u64;

    // Search for the period, or run out of passes
    let mut period = None;
    for pass in 1..=count {
        interleaver.apply(&mut buf, &mut scratch);
        passes_applied += 1;

        if config.cycle_detection && buf == original {
            period = Some(pass);
            break;
        }
    }

    // Whole periods are the identity; only the remainder is left
    if let Some(period) = period {
        let remaining = count % period;
        debug!(len = original.len(), count, period, remaining, "cycle detected");

        for _ in 0..remaining {
            interleaver.apply(&mut buf, &mut scratch);
            passes_applied += 1;
        }
    }

    ShuffleOutcome {
        result: buf.into_iter().collect(),
        count,
        passes_applied,
        period,
    }
}
