use nbstrip::{CleanConfig, Error, NotebookCleaner, ParseError, RemoveOptions};
use serde_json::{json, Value};

use crate::fixtures::{cells, TestFixtures, FIBONACCI, FIZZBUZZ};

fn all_configs() -> Vec<CleanConfig> {
    (0..=RemoveOptions::all().bits())
        .filter_map(RemoveOptions::from_bits)
        .map(CleanConfig::from_requested)
        .collect()
}

fn clean_value(cleaner: &NotebookCleaner, bytes: &[u8]) -> Value {
    serde_json::from_slice(&cleaner.process(bytes).unwrap()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_notebooks_keep_cell_count_and_order() {
        for name in [FIZZBUZZ, FIBONACCI] {
            let bytes = TestFixtures::get_sample_bytes(name);
            let original: Value = serde_json::from_slice(&bytes).unwrap();

            for config in all_configs() {
                let cleaned = clean_value(&NotebookCleaner::new(config), &bytes);
                let before = cells(&original);
                let after = cells(&cleaned);
                assert_eq!(before.len(), after.len());

                for (old, new) in before.iter().zip(after) {
                    assert_eq!(old["source"], new["source"]);
                    assert_eq!(old["cell_type"], new["cell_type"]);
                    let old_keys: Vec<_> = old.as_object().unwrap().keys().collect();
                    let new_keys: Vec<_> = new.as_object().unwrap().keys().collect();
                    assert_eq!(old_keys, new_keys);
                }
            }
        }
    }

    #[test]
    fn test_colab_keys_follow_colab_flag_only() {
        let bytes = TestFixtures::get_sample_bytes(FIZZBUZZ);

        for config in all_configs() {
            let cleaned = clean_value(&NotebookCleaner::new(config), &bytes);
            let metadata = cleaned["metadata"].as_object().unwrap();
            assert_eq!(metadata["kernelspec"]["name"], json!("python3"));
            assert!(metadata.get("language_info").is_none());

            if config.remove_colab_metadata() {
                assert_eq!(metadata.len(), 1);
            } else {
                assert_eq!(metadata["accelerator"], json!("GPU"));
                assert_eq!(metadata["colab"]["version"], json!("0.3.2"));
            }
        }
    }

    #[test]
    fn test_idempotent_for_every_config() {
        for name in [FIZZBUZZ, FIBONACCI] {
            let bytes = TestFixtures::get_sample_bytes(name);
            for config in all_configs() {
                let cleaner = NotebookCleaner::new(config);
                let once = cleaner.process(&bytes).unwrap();
                assert_eq!(cleaner.process(&once).unwrap(), once);
            }
        }
    }

    #[test]
    fn test_top_level_keys_untouched() {
        let bytes = TestFixtures::get_sample_bytes(FIBONACCI);
        let cleaner = NotebookCleaner::default();
        let mut notebook = cleaner.parse(&bytes).unwrap();
        cleaner.clean(&mut notebook);

        let keys: Vec<_> = notebook.keys().collect();
        assert_eq!(keys, ["nbformat", "nbformat_minor", "metadata", "cells"]);
        assert_eq!(notebook.get("nbformat"), Some(&json!(4)));
        assert_eq!(notebook.get("nbformat_minor"), Some(&json!(0)));
    }

    #[test]
    fn test_metadata_only_then_cells() {
        let cleaner = NotebookCleaner::new(CleanConfig::from_requested(RemoveOptions::COLAB));
        let mut notebook = cleaner
            .parse(TestFixtures::get_minimal_notebook().as_bytes())
            .unwrap();

        cleaner.clean_metadata(&mut notebook);
        assert_eq!(notebook.metadata().unwrap().len(), 1);
        assert_eq!(notebook.cells()[0]["metadata"], json!({"a": 1}));

        cleaner.clean_cells(&mut notebook);
        assert_eq!(notebook.cells()[0]["metadata"], json!({}));
        assert_eq!(notebook.cells()[0]["execution_count"], json!(5));
    }

    #[test]
    fn test_malformed_notebook() {
        let cleaner = NotebookCleaner::default();
        let err = cleaner
            .parse(TestFixtures::get_malformed_notebook().as_bytes())
            .unwrap_err();
        assert!(matches!(err, Error::ParseFailure(ParseError::InvalidJson(_))));
    }
}
