use nbstrip::{CleanConfig, Error, Pipeline, ProcessingConfig, RemoveOptions};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

use crate::fixtures::{assert_fully_stripped, cells, TestFixtures, FIBONACCI, FIZZBUZZ};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline_execution() {
        let dir = TempDir::new().unwrap();
        let fizzbuzz = TestFixtures::copy_sample(&dir, FIZZBUZZ);
        let fibonacci = TestFixtures::copy_sample(&dir, FIBONACCI);

        let pipeline = Pipeline::new(ProcessingConfig {
            paths: vec![fizzbuzz.clone(), fibonacci.clone()],
            ..ProcessingConfig::default()
        });

        let mut stdout = Vec::new();
        let summary = pipeline.run_with(std::io::empty(), &mut stdout).unwrap();

        assert!(summary.is_success());
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.changed, 2);
        assert!(stdout.is_empty());
        assert_fully_stripped(&TestFixtures::read_json(&fizzbuzz));
        assert_fully_stripped(&TestFixtures::read_json(&fibonacci));
    }

    #[test]
    fn test_rerun_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let path = TestFixtures::copy_sample(&dir, FIBONACCI);
        let config = ProcessingConfig {
            paths: vec![path.clone()],
            clean: CleanConfig::from_requested(RemoveOptions::OUTPUTS | RemoveOptions::COLAB),
            ..ProcessingConfig::default()
        };

        let mut stdout = Vec::new();
        Pipeline::new(config.clone())
            .run_with(std::io::empty(), &mut stdout)
            .unwrap();
        let first = fs::read(&path).unwrap();

        let summary = Pipeline::new(config)
            .run_with(std::io::empty(), &mut stdout)
            .unwrap();
        assert_eq!(summary.changed, 0);
        assert_eq!(fs::read(&path).unwrap(), first);

        let notebook = TestFixtures::read_json(&path);
        assert_eq!(cells(&notebook)[1]["execution_count"], json!(3));
        assert_eq!(cells(&notebook)[1]["outputs"], json!([]));
    }

    #[test]
    fn test_write_failure_aborts_batch() {
        let dir = TempDir::new().unwrap();
        let first = TestFixtures::copy_sample(&dir, FIZZBUZZ);
        let second = TestFixtures::copy_sample(&dir, FIBONACCI);
        let original = fs::read(&second).unwrap();

        // The backup target is a directory, so the backup copy fails.
        fs::create_dir(dir.path().join("fizzbuzz_colab.ipynb.backup")).unwrap();

        let pipeline = Pipeline::new(ProcessingConfig {
            paths: vec![first, second.clone()],
            backup: true,
            ..ProcessingConfig::default()
        });

        let mut stdout = Vec::new();
        let err = pipeline
            .run_with(std::io::empty(), &mut stdout)
            .unwrap_err();

        assert!(matches!(err, Error::WriteFailure { .. }));
        assert_eq!(fs::read(&second).unwrap(), original);
    }

    #[test]
    fn test_stdin_mode_ignores_text_convert() {
        let pipeline = Pipeline::new(ProcessingConfig::default());
        assert!(pipeline.config().reads_stdin());

        let mut stdout = Vec::new();
        pipeline
            .run_with(TestFixtures::get_minimal_notebook().as_bytes(), &mut stdout)
            .unwrap();
        let notebook: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
        assert_eq!(cells(&notebook)[0]["execution_count"], serde_json::Value::Null);
    }
}
