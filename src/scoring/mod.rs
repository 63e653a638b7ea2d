// src/scoring/mod.rs

pub mod lexicon;
pub mod quality;
pub mod readability;
pub mod sentiment;

pub use quality::{score, score_breakdown, QualityBreakdown};
pub use readability::{flesch_reading_ease, readability_component};
pub use sentiment::{analyze, Sentiment};
