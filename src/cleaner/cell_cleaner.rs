//! Per-cell field cleaner

use serde_json::{Map, Value};

use crate::config::CleanConfig;
use crate::types::keys;

/// Rewrites one cell, keeping key order and passing unknown keys through.
#[derive(Debug, Clone, Copy)]
pub struct CellCleaner {
    remove_outputs: bool,
    remove_execution_count: bool,
}

impl CellCleaner {
    pub fn new(config: &CleanConfig) -> Self {
        Self {
            remove_outputs: config.remove_outputs(),
            remove_execution_count: config.remove_execution_count(),
        }
    }

    /// Cell metadata is always emptied. Outputs and execution counts follow the config.
    /// Keys are only rewritten where present. A non-object cell becomes `{}`.
    pub fn clean(&self, cell: &Value) -> Value {
        let Some(fields) = cell.as_object() else {
            return Value::Object(Map::new());
        };

        let cleaned = fields
            .iter()
            .map(|(key, value)| {
                let value = match key.as_str() {
                    keys::METADATA => Value::Object(Map::new()),
                    keys::OUTPUTS if self.remove_outputs => Value::Array(Vec::new()),
                    keys::EXECUTION_COUNT if self.remove_execution_count => Value::Null,
                    _ => value.clone(),
                };
                (key.clone(), value)
            })
            .collect();

        Value::Object(cleaned)
    }
}
