//! Configuration types for notebook stripping
//!
//! The removal flags are collected once per invocation into an immutable
//! [`CleanConfig`] that every cleaner receives explicitly.

use std::{
    fs,
    path::{Path, PathBuf},
};

use bitflags::bitflags;
use serde::Deserialize;

use crate::error::{Error, Result};

bitflags! {
    /// Fields the caller explicitly asked to strip
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RemoveOptions: u8 {
        const OUTPUTS = 1 << 0;
        const EXECUTION_COUNT = 1 << 1;
        const COLAB = 1 << 2;
    }
}

/// Effective removal policy for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanConfig {
    remove_outputs: bool,
    remove_execution_count: bool,
    remove_colab_metadata: bool,
}

impl CleanConfig {
    /// Builds the policy from what was requested. Nothing requested means strip everything.
    pub fn from_requested(requested: RemoveOptions) -> Self {
        let effective = if requested.is_empty() {
            RemoveOptions::all()
        } else {
            requested
        };

        Self {
            remove_outputs: effective.contains(RemoveOptions::OUTPUTS),
            remove_execution_count: effective.contains(RemoveOptions::EXECUTION_COUNT),
            remove_colab_metadata: effective.contains(RemoveOptions::COLAB),
        }
    }

    pub fn remove_outputs(&self) -> bool {
        self.remove_outputs
    }

    pub fn remove_execution_count(&self) -> bool {
        self.remove_execution_count
    }

    pub fn remove_colab_metadata(&self) -> bool {
        self.remove_colab_metadata
    }

    /// The effective flags as a set
    pub fn options(&self) -> RemoveOptions {
        let mut options = RemoveOptions::empty();
        options.set(RemoveOptions::OUTPUTS, self.remove_outputs);
        options.set(RemoveOptions::EXECUTION_COUNT, self.remove_execution_count);
        options.set(RemoveOptions::COLAB, self.remove_colab_metadata);
        options
    }
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self::from_requested(RemoveOptions::empty())
    }
}

/// Per-invocation execution config
#[derive(Debug, Clone, Default)]
pub struct ProcessingConfig {
    /// Notebooks to process in order. Empty means read standard input.
    pub paths: Vec<PathBuf>,
    /// Print results to standard output instead of overwriting
    pub text_convert: bool,
    /// Copy each file to `<file>.backup` before overwriting it
    pub backup: bool,
    /// Clean and report, never write
    pub dry_run: bool,
    pub clean: CleanConfig,
}

impl ProcessingConfig {
    pub fn reads_stdin(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Optional on-disk configuration, JSON or YAML
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub outputs: bool,
    pub execution_count: bool,
    pub colab: bool,
    pub textconv: bool,
    pub backup: bool,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(&content)
    }

    /// Try JSON first, then YAML
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| Error::ConfigError(format!("Config parsing error: {}", e)))
    }

    /// Removal flags this file asks for
    pub fn requested(&self) -> RemoveOptions {
        let mut options = RemoveOptions::empty();
        options.set(RemoveOptions::OUTPUTS, self.outputs);
        options.set(RemoveOptions::EXECUTION_COUNT, self.execution_count);
        options.set(RemoveOptions::COLAB, self.colab);
        options
    }
}
