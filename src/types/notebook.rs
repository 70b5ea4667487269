//! In-memory notebook document
//!
//! A notebook is kept as an untyped JSON tree. Objects use the order-preserving
//! map from `serde_json`, so keys come back out in the order they went in.
//! Numbers keep their source text, so values of any size or precision are
//! written back exactly as read.

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};

use crate::error::ParseError;

/// Well-known notebook keys
pub mod keys {
    pub const METADATA: &str = "metadata";
    pub const CELLS: &str = "cells";
    pub const KERNELSPEC: &str = "kernelspec";
    pub const ACCELERATOR: &str = "accelerator";
    pub const COLAB: &str = "colab";
    pub const OUTPUTS: &str = "outputs";
    pub const EXECUTION_COUNT: &str = "execution_count";
}

const BOM: char = '\u{feff}';

/// Top-level notebook mapping
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Notebook {
    root: Map<String, Value>,
}

impl Notebook {
    /// Parses one JSON object from UTF-8 bytes. A leading byte order mark is skipped.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let text = std::str::from_utf8(bytes)?;
        let text = text.strip_prefix(BOM).unwrap_or(text);

        match serde_json::from_str::<Value>(text)? {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ParseError::NotAnObject(kind_of(&other))),
        }
    }

    /// Serializes with a one-space indent and a trailing newline.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b" "));
        self.root.serialize(&mut serializer)?;
        buffer.push(b'\n');
        Ok(buffer)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Replaces `key` in place, or appends it when absent.
    pub fn set(&mut self, key: &str, value: Value) {
        self.root.insert(key.to_string(), value);
    }

    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        self.root.get(keys::METADATA).and_then(Value::as_object)
    }

    pub fn cells(&self) -> &[Value] {
        self.root
            .get(keys::CELLS)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
