//! Transcript tokenizing and record normalization.
//!
//! - [`tokenizer`] splits raw text into [`RawSegment`]s at timestamp lines
//! - [`normalizer`] turns each segment into a [`Message`](crate::Message)

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{TIMESTAMP_FORMAT, normalize, parse_timestamp, split_speaker};
pub use tokenizer::{BOUNDARY_PATTERN, RawSegment, is_boundary_line, tokenize};
