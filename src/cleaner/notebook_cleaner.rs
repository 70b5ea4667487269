//! Notebook cleaning engine
//!
//! `bytes -> parse -> clean_metadata -> clean_cells -> serialize -> bytes`.
//! Only the `metadata` and `cells` subtrees are rewritten; every other
//! top-level key keeps its value and position.

use serde_json::Value;
use tracing::debug;

use crate::{
    cleaner::cell_cleaner::CellCleaner,
    config::CleanConfig,
    error::{Error, Result},
    metadata::metadata_cleaner::MetadataCleaner,
    types::{keys, Notebook},
};

/// Applies the metadata and cell rules for one configuration
#[derive(Debug, Clone)]
pub struct NotebookCleaner {
    metadata_cleaner: MetadataCleaner,
    cell_cleaner: CellCleaner,
}

impl NotebookCleaner {
    pub fn new(config: CleanConfig) -> Self {
        Self {
            metadata_cleaner: MetadataCleaner::new(&config),
            cell_cleaner: CellCleaner::new(&config),
        }
    }

    pub fn parse(&self, bytes: &[u8]) -> Result<Notebook> {
        Ok(Notebook::from_bytes(bytes)?)
    }

    pub fn clean_metadata(&self, notebook: &mut Notebook) {
        let cleaned = self.metadata_cleaner.clean(notebook.get(keys::METADATA));
        debug!(
            "Kept notebook metadata keys: {:?}",
            cleaned.as_object().map(|m| m.keys().collect::<Vec<_>>())
        );
        notebook.set(keys::METADATA, cleaned);
    }

    pub fn clean_cells(&self, notebook: &mut Notebook) {
        let cells: Vec<Value> = notebook
            .cells()
            .iter()
            .map(|cell| self.cell_cleaner.clean(cell))
            .collect();

        debug!("Cleaned {} cells", cells.len());
        notebook.set(keys::CELLS, Value::Array(cells));
    }

    /// Metadata first, then cells.
    pub fn clean(&self, notebook: &mut Notebook) {
        self.clean_metadata(notebook);
        self.clean_cells(notebook);
    }

    pub fn serialize(&self, notebook: &Notebook) -> Result<Vec<u8>> {
        notebook.to_bytes().map_err(Error::SerializeFailure)
    }

    /// Parses, cleans and serializes one buffer.
    pub fn process(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let mut notebook = self.parse(bytes)?;
        self.clean(&mut notebook);
        self.serialize(&notebook)
    }
}

impl Default for NotebookCleaner {
    fn default() -> Self {
        Self::new(CleanConfig::default())
    }
}
