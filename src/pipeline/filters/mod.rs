// src/pipeline/filters/mod.rs

mod category_filter;
mod quality_filter;
mod title_filter;

pub use category_filter::CategoryFilter;
pub use quality_filter::QualityThresholdFilter;
pub use title_filter::TitleFilter;
