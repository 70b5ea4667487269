//! Notebook-level metadata cleaner
//!
//! Rebuilds the top-level `metadata` mapping from an allow-list. `kernelspec`
//! always survives; `accelerator` and `colab` survive unless colab metadata is
//! being stripped. Every other key is dropped regardless of flags.

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::CleanConfig;
use crate::types::keys;

const ALWAYS_KEPT: &[&str] = &[keys::KERNELSPEC];
const COLAB_KEYS: &[&str] = &[keys::ACCELERATOR, keys::COLAB];

/// Allow-list transform for top-level notebook metadata
#[derive(Debug, Clone)]
pub struct MetadataCleaner {
    retained: Vec<&'static str>,
}

impl MetadataCleaner {
    pub fn new(config: &CleanConfig) -> Self {
        let mut retained = ALWAYS_KEPT.to_vec();
        if !config.remove_colab_metadata() {
            retained.extend_from_slice(COLAB_KEYS);
        }

        Self { retained }
    }

    /// Keys copied over, in output order
    pub fn retained_keys(&self) -> &[&'static str] {
        &self.retained
    }

    /// Builds the cleaned mapping. A missing or non-object input yields `{}`.
    pub fn clean(&self, metadata: Option<&Value>) -> Value {
        let source = metadata.and_then(Value::as_object);
        let mut cleaned = Map::new();

        if let Some(source) = source {
            for key in &self.retained {
                if let Some(value) = source.get(*key) {
                    cleaned.insert((*key).to_string(), value.clone());
                }
            }

            let dropped = source.len() - cleaned.len();
            if dropped > 0 {
                debug!("Dropped {} notebook metadata entries", dropped);
            }
        }

        Value::Object(cleaned)
    }
}
