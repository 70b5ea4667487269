//! Logger setup for the notebook stripper
//!
//! Diagnostics always go to stderr; stdout is reserved for notebook JSON.

use std::io;

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Tracing subscriber configuration
#[derive(Debug, Clone)]
pub struct Logger {
    level: String,
    initialized: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_level("warn")
    }

    pub fn with_level(level: &str) -> Self {
        Self {
            level: level.to_string(),
            initialized: false,
        }
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    /// Filter directive: `RUST_LOG` wins over the configured level.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Installs the global subscriber. A second call, or one after another
    /// subscriber was installed, is a no-op.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }

        let installed = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_writer(io::stderr)
            .with_target(false)
            .without_time()
            .compact()
            .try_init()
            .is_ok();

        self.initialized = true;
        if installed {
            debug!("Logger initialized with level: {}", self.level);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
