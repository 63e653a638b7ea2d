// Utils

pub mod common;
pub mod prometheus_metrics;
pub mod text;

pub use text::{split_into_sentences, split_into_words, PUNCTUATION};
