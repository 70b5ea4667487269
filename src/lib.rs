//! Main library file for the notebook stripper
//! Removes outputs, execution counts and platform metadata from Jupyter
//! notebooks so they can be committed without volatile diff noise.

// Configuration and core pipeline
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Cell cleaning
pub mod cleaner {
    pub mod cell_cleaner;
    pub mod notebook_cleaner;
}

// Notebook metadata handling
pub mod metadata {
    pub mod metadata_cleaner;
}

// Shared utilities
pub mod utils;

// Re-exports for crate consumers
pub use cleaner::{cell_cleaner::CellCleaner, notebook_cleaner::NotebookCleaner};
pub use config::{CleanConfig, ConfigFile, ProcessingConfig, RemoveOptions};
pub use error::{Error, ParseError, Result};
pub use metadata::metadata_cleaner::MetadataCleaner;
pub use pipeline::{FileOutcome, Pipeline, ProcessingSummary};
pub use types::Notebook;
pub use utils::Logger;
