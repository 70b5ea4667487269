//! IO utilities for notebook files

use std::{
    fs::{self, File},
    io::{Read, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// Reads the entire contents of a file into a byte vector.
#[instrument]
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut buffer))
        .map_err(|e| Error::read(path, e))?;
    debug!("Read {} bytes", buffer.len());
    Ok(buffer)
}

/// Replaces the whole file with `data`. Not atomic.
#[instrument(skip(data))]
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    File::create(path)
        .and_then(|mut file| {
            file.write_all(data)?;
            file.flush()
        })
        .map_err(|e| Error::write(path, e))
}

/// Path used by [`create_backup`] for `path`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".backup");
    PathBuf::from(name)
}

/// Copies `path` next to itself with a `.backup` suffix.
#[instrument]
pub fn create_backup(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup).map_err(|e| Error::write(&backup, e))?;
    Ok(backup)
}

/// Drains a reader to the end.
pub fn read_all<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}
