// src/utils/prometheus_metrics.rs

use once_cell::sync::Lazy;
use prometheus::{register_counter, register_histogram, Counter, Encoder, Histogram, TextEncoder};

use crate::error::{LensError, Result};

pub static PAPERS_LOADED_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!(
        "catalog_papers_loaded_total",
        "Total number of paper records loaded into a catalog."
    )
    .expect("Failed to register PAPERS_LOADED_TOTAL counter")
});

pub static ANSWERS_SCORED_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!(
        "catalog_answers_scored_total",
        "Total number of detailed answers passed through the quality scorer."
    )
    .expect("Failed to register ANSWERS_SCORED_TOTAL counter")
});

pub static ANSWERS_MISSING_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!(
        "catalog_answers_missing_total",
        "Total number of detailed answers that were missing or blank and scored 0."
    )
    .expect("Failed to register ANSWERS_MISSING_TOTAL counter")
});

pub static QUALITY_SCORE: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "catalog_quality_score",
        "Distribution of detailed-answer quality scores.",
        vec![-50.0, -25.0, 0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
    )
    .expect("Failed to register QUALITY_SCORE histogram")
});

pub static SCORING_DURATION_SECONDS: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "catalog_scoring_duration_seconds",
        "Histogram of the time taken to score every record of a loaded catalog."
    )
    .expect("Failed to register SCORING_DURATION_SECONDS histogram")
});

/// Renders the default registry in the Prometheus text exposition format.
pub fn gather_metrics_text() -> Result<String> {
    let encoder = TextEncoder::new();
    let mut buffer = vec![];
    encoder
        .encode(&prometheus::gather(), &mut buffer)
        .map_err(|e| LensError::Unexpected(format!("Could not encode prometheus metrics: {}", e)))?;
    String::from_utf8(buffer)
        .map_err(|e| LensError::Unexpected(format!("Prometheus metrics UTF-8 error: {}", e)))
}
