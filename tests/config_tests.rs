#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;
    use PaperLens::config::*;
    use PaperLens::data_model::Topic;
    use PaperLens::error::LensError;

    // Helper to create a temporary config file with given content
    fn create_temp_config_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "{}", content).expect("Failed to write to temp file");
        temp_file
    }

    #[test]
    fn test_load_full_config() {
        let yaml_content = r#"
dataset_path: final_combined_answers.csv
default_category: Machine learning
default_title: A Limit Theorem in Singular Regression Problem
min_quality_per_question: [50, 40, 30, 20]
log_level: debug
log_format: text
log_file: logs/browser.log
show_progress: true
        "#;
        let temp_file = create_temp_config_file(yaml_content);
        let config_result = load_app_config(temp_file.path());

        assert!(
            config_result.is_ok(),
            "Should load valid config: {:?}",
            config_result.err()
        );
        let config = config_result.unwrap();
        assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET_PATH));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("logs/browser.log")));
        assert!(config.show_progress);

        let thresholds = config.thresholds().unwrap().expect("thresholds configured");
        assert_eq!(thresholds.get(Topic::ResearchProblem).value(), 50);
        assert_eq!(thresholds.get(Topic::Methodology).value(), 40);
        assert_eq!(thresholds.get(Topic::KeyFindings).value(), 30);
        assert_eq!(thresholds.get(Topic::Limitations).value(), 20);
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let temp_file = create_temp_config_file("{}");
        let config = load_app_config(temp_file.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_file = create_temp_config_file("min_quality: [unclosed");
        match load_app_config(temp_file.path()) {
            Err(LensError::ConfigError(msg)) => {
                assert!(msg.contains("Failed to parse config YAML"));
            }
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_per_question_threshold_out_of_range() {
        let temp_file = create_temp_config_file("min_quality_per_question: [10, 20, 101, 0]");
        match load_app_config(temp_file.path()) {
            Err(LensError::ConfigValidationError(msg)) => {
                assert!(msg.contains("index 2"));
            }
            other => panic!("Expected ConfigValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_dataset_path_rejected() {
        let temp_file = create_temp_config_file("dataset_path: ''");
        assert!(matches!(
            load_app_config(temp_file.path()),
            Err(LensError::ConfigValidationError(_))
        ));
    }
}
