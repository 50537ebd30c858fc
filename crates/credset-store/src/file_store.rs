use credset_common::{CredentialSet, Error, Result, validate_name};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::CredentialSetStore;

const EXTENSION: &str = "json";

/// Filesystem-backed store: one pretty-printed JSON document per credential set.
///
/// The directory is created on first write; reading or listing a missing
/// directory behaves like an empty store. Only valid set names map to a file,
/// so a record path never leaves the store directory.
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{EXTENSION}"))
    }

    /// Path of an existing record; names that cannot be stored are not found.
    fn lookup(&self, name: &str) -> Result<PathBuf> {
        match validate_name(name) {
            Ok(()) => Ok(self.path_for(name)),
            Err(_) => {
                debug!("rejecting lookup of unstorable name {name:?}");
                Err(Self::not_found(name))
            }
        }
    }

    fn not_found(name: &str) -> Error {
        Error::NotFound(format!("credential set {name:?} not found"))
    }

    fn decode(path: &Path, bytes: &[u8]) -> Result<CredentialSet> {
        serde_json::from_slice(bytes)
            .map_err(|e| Error::Storage(format!("invalid record {}: {e}", path.display())))
    }
}

impl CredentialSetStore for FileSystemStore {
    fn read(&self, name: &str) -> Result<CredentialSet> {
        let path = self.lookup(name)?;
        match fs::read(&path) {
            Ok(bytes) => {
                debug!("read credential set from {}", path.display());
                Self::decode(&path, &bytes)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Self::not_found(name)),
            Err(e) => Err(Error::Storage(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn write(&self, set: &CredentialSet) -> Result<()> {
        validate_name(&set.name)?;
        if !self.dir.is_dir() {
            debug!("creating credentials directory {}", self.dir.display());
        }
        fs::create_dir_all(&self.dir).map_err(|e| {
            Error::Storage(format!(
                "failed to create directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let data = serde_json::to_vec_pretty(set)
            .map_err(|e| Error::Storage(format!("failed to serialize {}: {e}", set.name)))?;

        // Write a sibling temp file, then rename over the record.
        let path = self.path_for(&set.name);
        let tmp = self.dir.join(format!(".{}.{EXTENSION}.tmp", set.name));
        let mut file = fs::File::create(&tmp)
            .map_err(|e| Error::Storage(format!("failed to create {}: {e}", tmp.display())))?;
        file.write_all(&data)
            .and_then(|_| file.sync_all())
            .map_err(|e| Error::Storage(format!("failed to write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path)
            .map_err(|e| Error::Storage(format!("failed to replace {}: {e}", path.display())))?;

        info!("saved credential set '{}'", set.name);
        Ok(())
    }

    fn list(&self) -> Result<Vec<CredentialSet>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::Storage(format!(
                    "failed to list {}: {e}",
                    self.dir.display()
                )));
            }
        };

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| Error::Storage(format!("failed to list {}: {e}", self.dir.display())))?
                .path();
            let is_record = path.is_file()
                && path.extension().is_some_and(|ext| ext == EXTENSION)
                && !path
                    .file_name()
                    .is_some_and(|n| n.to_string_lossy().starts_with('.'));
            if is_record {
                paths.push(path);
            } else {
                debug!("skipping {} in credentials directory", path.display());
            }
        }
        paths.sort();

        let mut sets = Vec::with_capacity(paths.len());
        for path in paths {
            let bytes = fs::read(&path)
                .map_err(|e| Error::Storage(format!("failed to read {}: {e}", path.display())))?;
            sets.push(Self::decode(&path, &bytes)?);
        }
        Ok(sets)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.lookup(name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("deleted credential set '{name}'");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Self::not_found(name)),
            Err(e) => Err(Error::Storage(format!(
                "failed to delete {}: {e}",
                path.display()
            ))),
        }
    }
}
