//! Free-text path: tokenization, keyword-category scans, persona estimates.

mod analyzer;
pub mod categories;
mod extractor;
pub mod tokenizer;

pub use analyzer::{tokenize_with_timeout, WorkerGate};
pub use extractor::{Extraction, TextSignalExtractor};
