//! Converts LMF `LexicalResource` XML lexicons into JSONL entry records and
//! CSV exports, and serves pre-split per-lemgram records.

pub mod error;
pub mod model;
pub mod parsers;
pub mod protocol;
pub mod services;

pub use error::{LexiconError, Result};
