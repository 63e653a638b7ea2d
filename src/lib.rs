#![allow(non_snake_case)]

// Library modules; the browser binary imports them as `PaperLens::module_name`.
pub mod catalog;
pub mod config;
pub mod data_model;
pub mod error;
pub mod executor;
pub mod pipeline;
pub mod scoring;
pub mod utils;

pub use catalog::{filter_papers, PaperCatalog};
pub use error::{LensError, Result};
pub use scoring::score;
