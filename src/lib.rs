//! ShuffleChars - deterministic interleave shuffle of text
//!
//! One pass of the shuffle moves every character at an even position to the
//! front, in order, followed by every character at an odd position. The
//! shuffle applies that pass a requested number of times. Since a pass is a
//! permutation of positions, repeated passes eventually bring the text back
//! to where it started; the engine detects that point and skips the whole
//! periods, so even `i32::MAX` passes cost at most `len` passes of work.
//!
//! ## Components
//!
//! ```text
//! validate → engine (cycle-aware iteration) → interleave (single pass)
//! ```
//!
//! - **validate**: rejects absent/blank source text and negative counts
//! - **interleave**: precomputed permutation of one pass, its inverse and order
//! - **engine**: `shuffle_chars`, `unshuffle_chars`, `content_period`
//! - **cli**: output rendering for the `shufflechars` binary
//!
//! ## Example
//!
//! ```
//! use shufflechars::{shuffle_chars, unshuffle_chars};
//!
//! let shuffled = shuffle_chars("Hello EPAM!", 2).unwrap();
//! assert_eq!(shuffled, "HoAe MlE!lP");
//! assert_eq!(unshuffle_chars(shuffled.as_str(), 2).unwrap(), "Hello EPAM!");
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod interleave;
pub mod validate;

pub use engine::{
    content_period, shuffle_chars, shuffle_with, unshuffle_chars, ShuffleConfig, ShuffleOutcome,
};
pub use error::{InvalidInput, Result, ShuffleError};
pub use interleave::{single_pass, Interleaver};
