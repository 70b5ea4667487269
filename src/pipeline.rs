//! Notebook stripping pipeline
//!
//! Dispatches one invocation: either a single notebook from standard input to
//! standard output, or a batch of files processed one after another. Files
//! that cannot be read are reported and skipped. Parse and serialize failures
//! skip the file too but fail the run. A failed write ends the whole batch.

use std::{
    io::{Read, Write},
    path::Path,
};

use tracing::{debug, error, info, instrument, warn};

use crate::{
    cleaner::notebook_cleaner::NotebookCleaner,
    config::ProcessingConfig,
    error::{Error, Result},
    utils::io,
};

/// What happened to one successfully processed file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Cleaned result was written back over the file
    Overwritten { changed: bool },
    /// Cleaned result went to standard output
    Printed { changed: bool },
    /// Dry run, nothing written
    Checked { changed: bool },
}

impl FileOutcome {
    pub fn changed(&self) -> bool {
        match *self {
            FileOutcome::Overwritten { changed }
            | FileOutcome::Printed { changed }
            | FileOutcome::Checked { changed } => changed,
        }
    }
}

/// Counters for one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
    pub processed: usize,
    pub changed: usize,
    /// Files that could not be read. These do not fail the run.
    pub skipped: usize,
    pub failed: usize,
}

impl ProcessingSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    fn record(&mut self, outcome: FileOutcome) {
        self.processed += 1;
        if outcome.changed() {
            self.changed += 1;
        }
    }
}

/// Runs the cleaner over the inputs named by a [`ProcessingConfig`]
#[derive(Debug)]
pub struct Pipeline {
    config: ProcessingConfig,
    cleaner: NotebookCleaner,
}

impl Pipeline {
    pub fn new(config: ProcessingConfig) -> Self {
        let cleaner = NotebookCleaner::new(config.clean);
        Self { config, cleaner }
    }

    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    /// Runs against the process's standard input and output.
    pub fn run(&self) -> Result<ProcessingSummary> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout().lock();
        self.run_with(stdin.lock(), &mut stdout)
    }

    /// Runs with explicit streams. `input` is only read when no paths were given.
    #[instrument(skip_all, fields(files = self.config.paths.len()))]
    pub fn run_with<R: Read, W: Write>(
        &self,
        input: R,
        output: &mut W,
    ) -> Result<ProcessingSummary> {
        if self.config.reads_stdin() {
            return self.run_stdin(input, output);
        }

        let mut summary = ProcessingSummary::default();
        for path in &self.config.paths {
            match self.process_file(path, output) {
                Ok(outcome) => {
                    debug!("{}: {:?}", path.display(), outcome);
                    summary.record(outcome);
                }
                Err(e) if e.aborts_batch() => return Err(e),
                Err(e @ Error::ReadFailure { .. }) => {
                    warn!("{}", e);
                    summary.skipped += 1;
                }
                Err(e) => {
                    error!("{}", e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Processed {} notebook(s), {} changed, {} skipped, {} failed",
            summary.processed, summary.changed, summary.skipped, summary.failed
        );
        Ok(summary)
    }

    fn run_stdin<R: Read, W: Write>(&self, input: R, output: &mut W) -> Result<ProcessingSummary> {
        let bytes = io::read_all(input)?;
        let cleaned = self.cleaner.process(&bytes)?;
        output.write_all(&cleaned)?;
        output.flush()?;

        let mut summary = ProcessingSummary::default();
        summary.record(FileOutcome::Printed {
            changed: cleaned != bytes,
        });
        Ok(summary)
    }

    /// Cleans one file and writes the result where the config says.
    #[instrument(skip(self, output))]
    pub fn process_file<W: Write>(&self, path: &Path, output: &mut W) -> Result<FileOutcome> {
        let original = io::read_file(path)?;
        let cleaned = self.cleaner.process(&original)?;
        let changed = cleaned != original;

        if self.config.dry_run {
            if changed {
                info!("Would clean {}", path.display());
            } else {
                info!("{} is already clean", path.display());
            }
            return Ok(FileOutcome::Checked { changed });
        }

        if self.config.text_convert {
            output.write_all(&cleaned)?;
            output.flush()?;
            return Ok(FileOutcome::Printed { changed });
        }

        if self.config.backup {
            let backup = io::create_backup(path)?;
            debug!("Backed up to {}", backup.display());
        }

        io::write_file(path, &cleaned)?;
        Ok(FileOutcome::Overwritten { changed })
    }
}
