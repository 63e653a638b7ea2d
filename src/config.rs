// src/config.rs
use crate::data_model::{QualityThreshold, QualityThresholds};
use crate::error::{LensError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod cli;

pub const DEFAULT_DATASET_PATH: &str = "final_combined_answers.csv";
pub const DEFAULT_CATEGORY: &str = "Machine learning";
pub const DEFAULT_TITLE: &str = "A Limit Theorem in Singular Regression Problem";
pub const DEFAULT_CONFIG_PATH: &str = "config/browser.yaml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Output format of log events.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Browser settings read from YAML. Every field is optional in the file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// CSV file holding the paper records.
    pub dataset_path: PathBuf,
    /// Category preselected when none is requested and it exists.
    pub default_category: String,
    /// Title preselected within the category when none is requested and it exists.
    pub default_title: String,
    /// Minimum quality applied to all four detailed questions.
    pub min_quality: Option<i64>,
    /// Per-question minimum quality, in topic order. Overrides `min_quality`.
    pub min_quality_per_question: Option<[i64; 4]>,
    pub log_level: String,
    pub log_format: LogFormat,
    pub log_file: Option<PathBuf>,
    /// Show a progress bar while scoring the dataset.
    pub show_progress: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            default_category: DEFAULT_CATEGORY.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            min_quality: None,
            min_quality_per_question: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            log_file: None,
            show_progress: false,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.dataset_path.as_os_str().is_empty() {
            return Err(LensError::ConfigValidationError(
                "AppConfig: dataset_path cannot be empty".to_string(),
            ));
        }
        if let Some(t) = self.min_quality {
            if !(0..=100).contains(&t) {
                return Err(LensError::ConfigValidationError(format!(
                    "AppConfig: min_quality must be between 0 and 100, got {}",
                    t
                )));
            }
        }
        if let Some(per_question) = self.min_quality_per_question {
            for (idx, t) in per_question.iter().enumerate() {
                if !(0..=100).contains(t) {
                    return Err(LensError::ConfigValidationError(format!(
                        "AppConfig: min_quality_per_question at index {} must be between 0 and 100, got {}",
                        idx, t
                    )));
                }
            }
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(LensError::ConfigValidationError(format!(
                "AppConfig: log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }
        Ok(())
    }

    /// Thresholds to filter with, if any are configured.
    pub fn thresholds(&self) -> Result<Option<QualityThresholds>> {
        if let Some(per_question) = self.min_quality_per_question {
            let mut thresholds = [QualityThreshold::default(); 4];
            for (slot, value) in thresholds.iter_mut().zip(per_question) {
                *slot = QualityThreshold::new(value)?;
            }
            return Ok(Some(QualityThresholds::per_question(thresholds)));
        }
        self.min_quality
            .map(|t| QualityThreshold::new(t).map(QualityThresholds::uniform))
            .transpose()
    }
}

/// Loads, parses and validates the browser configuration YAML file.
pub fn load_app_config<P: AsRef<Path>>(config_path: P) -> Result<AppConfig> {
    let path_ref = config_path.as_ref();
    let config_content = fs::read_to_string(path_ref).map_err(|e| {
        LensError::ConfigError(format!(
            "Failed to read config file '{}': {}",
            path_ref.display(),
            e
        ))
    })?;

    let config: AppConfig = serde_yaml::from_str(&config_content).map_err(|e| {
        LensError::ConfigError(format!(
            "Failed to parse config YAML from '{}': {}",
            path_ref.display(),
            e
        ))
    })?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_model::Topic;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "{}", content).expect("Failed to write to temp file");
        temp_file
    }

    #[test]
    fn test_load_valid_config() {
        let yaml_content = r#"
dataset_path: data/papers.csv
default_category: Physics
min_quality: 40
log_format: json
        "#;
        let temp_file = create_temp_config_file(yaml_content);
        let config = load_app_config(temp_file.path()).unwrap();
        assert_eq!(config.dataset_path, PathBuf::from("data/papers.csv"));
        assert_eq!(config.default_category, "Physics");
        assert_eq!(config.default_title, DEFAULT_TITLE);
        assert_eq!(config.log_format, LogFormat::Json);

        let thresholds = config.thresholds().unwrap().unwrap();
        for topic in Topic::ALL {
            assert_eq!(thresholds.get(topic).value(), 40);
        }
    }

    #[test]
    fn test_per_question_overrides_uniform() {
        let config = AppConfig {
            min_quality: Some(90),
            min_quality_per_question: Some([10, 20, 30, 40]),
            ..Default::default()
        };
        let thresholds = config.thresholds().unwrap().unwrap();
        assert_eq!(thresholds.get(Topic::ResearchProblem).value(), 10);
        assert_eq!(thresholds.get(Topic::Limitations).value(), 40);
    }

    #[test]
    fn test_no_thresholds_by_default() {
        assert!(AppConfig::default().thresholds().unwrap().is_none());
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_threshold_fails_validation() {
        let temp_file = create_temp_config_file("min_quality: 150");
        match load_app_config(temp_file.path()) {
            Err(LensError::ConfigValidationError(msg)) => {
                assert!(msg.contains("min_quality must be between 0 and 100"));
            }
            other => panic!("Expected ConfigValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let temp_file = create_temp_config_file("min_qualty: 10");
        match load_app_config(temp_file.path()) {
            Err(LensError::ConfigError(msg)) => {
                assert!(msg.contains("Failed to parse config YAML"));
            }
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        match load_app_config("non_existent_config.yaml") {
            Err(LensError::ConfigError(msg)) => {
                assert!(msg.contains("Failed to read config file"));
                assert!(msg.contains("non_existent_config.yaml"));
            }
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_log_level() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LensError::ConfigValidationError(_))
        ));
    }
}
