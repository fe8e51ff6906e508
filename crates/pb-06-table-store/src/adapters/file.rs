//! File-backed table store
//!
//! One file per name under a root directory. Writes go to a temporary file
//! which is then renamed over the target, so a crash mid-write leaves the
//! previous contents intact.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::StoreError;
use crate::ports::TableStore;

const FILE_EXTENSION: &str = "bin";

#[derive(Debug, Clone)]
pub struct FileTableStore {
    root: PathBuf,
}

impl FileTableStore {
    /// Open (and create if missing) the store directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| StoreError::Io {
            name: root.display().to_string(),
            message: e.to_string(),
        })?;
        info!(root = %root.display(), "Opened table store");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, FILE_EXTENSION))
    }
}

fn io_error(name: &str, err: std::io::Error) -> StoreError {
    StoreError::Io {
        name: name.to_string(),
        message: err.to_string(),
    }
}

impl TableStore for FileTableStore {
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(name)) {
            Ok(bytes) => {
                debug!(name, bytes = bytes.len(), "Read stored entry");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(name, e)),
        }
    }

    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(name);
        let temp_path = path.with_extension("tmp");

        let mut file = fs::File::create(&temp_path).map_err(|e| io_error(name, e))?;
        file.write_all(bytes).map_err(|e| io_error(name, e))?;
        file.sync_all().map_err(|e| io_error(name, e))?;
        drop(file);

        fs::rename(&temp_path, &path).map_err(|e| io_error(name, e))?;
        debug!(name, bytes = bytes.len(), path = %path.display(), "Wrote stored entry");
        Ok(())
    }

    fn exists(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.path_for(name).is_file())
    }
}
