use std::{
    fs::{self, Metadata, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::{
    error::StoreError,
    record::{FileRecord, extension_of},
};

pub type Result<T> = std::result::Result<T, StoreError>;

/// All file operations, confined to the direct children of one base directory.
///
/// The store holds no state besides the directory path, so a single instance
/// can be shared (behind an `Arc`) by every front end. No locking is done:
/// concurrent calls on the same name race at the filesystem level.
#[derive(Debug)]
pub struct FileStore {
    base_dir: PathBuf,
    created: bool,
}

impl FileStore {
    /// Open `base_dir`, creating it (and any missing parents) first.
    pub fn open(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();

        let created = !base_dir.is_dir();
        if created {
            fs::create_dir_all(base_dir)?;
            info!("Created base directory: {}", base_dir.display());
        }

        let base_dir = fs::canonicalize(base_dir)?;
        debug!("[store] base directory {}", base_dir.display());

        Ok(Self { base_dir, created })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Whether `open` had to create the base directory.
    pub fn created_base_dir(&self) -> bool {
        self.created
    }

    /// Create `name` holding `content`. Fails if anything already exists there.
    pub fn create(&self, name: &str, content: &str) -> Result<()> {
        let path = self.resolve(name)?;

        // create_new is an atomic exists-check-and-create at the OS level.
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| StoreError::from_io(e, name))?;

        fill_or_discard(&path, file, content.as_bytes())?;
        debug!("[store] created {} ({} bytes)", name, content.len());
        Ok(())
    }

    /// Content of `name` as text. Invalid UTF-8 is replaced, not rejected.
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.resolve(name)?;
        let bytes = fs::read(&path).map_err(|e| StoreError::from_io(e, name))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.resolve(name)?;
        fs::remove_file(&path).map_err(|e| StoreError::from_io(e, name))?;
        debug!("[store] deleted {}", name);
        Ok(())
    }

    /// Regular files in the base directory, sorted by name.
    pub fn list(&self) -> Result<Vec<FileRecord>> {
        let mut records = Vec::new();

        for entry_res in fs::read_dir(&self.base_dir)? {
            let entry = match entry_res {
                Ok(e) => e,
                Err(e) => {
                    warn!("[store] error reading entry in {:?}: {e}", self.base_dir);
                    continue;
                }
            };

            let name = match entry.file_name().into_string() {
                Ok(s) => s,
                Err(raw) => {
                    debug!("[store] skipping non UTF-8 name {:?}", raw);
                    continue;
                }
            };

            // fs::metadata follows symlinks, so a link to a regular file is listed.
            let path = entry.path();
            match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => records.push(to_record(name, path, &meta)),
                Ok(_) => {}
                // Removed between read_dir and stat, or a dangling symlink.
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => warn!("[store] stat({:?}) failed: {e}", path),
            }
        }

        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }

    /// Metadata for `name`, whatever kind of entry it is.
    pub fn info(&self, name: &str) -> Result<FileRecord> {
        let path = self.resolve(name)?;
        let meta = fs::metadata(&path).map_err(|e| StoreError::from_io(e, name))?;
        Ok(to_record(name.to_owned(), path, &meta))
    }

    fn resolve(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.base_dir.join(name))
    }
}

/// Only plain names are accepted: the store is flat and must not be escaped
/// with `..` or absolute paths.
fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name == "." || name == ".." {
        "name refers to a directory"
    } else if name.contains(['/', '\\']) {
        "name contains a path separator"
    } else if name.contains('\0') {
        "name contains a NUL byte"
    } else {
        return Ok(());
    };

    Err(StoreError::InvalidName {
        name: name.to_owned(),
        reason,
    })
}

/// Write `content` into a freshly created `file`, removing `path` on failure
/// so the name is free again.
fn fill_or_discard(path: &Path, mut file: impl Write, content: &[u8]) -> io::Result<()> {
    let res = file.write_all(content).and_then(|()| file.flush());
    if res.is_err() {
        drop(file);
        if let Err(e) = fs::remove_file(path) {
            warn!("[store] could not remove partial file {:?}: {e}", path);
        }
    }
    res
}

fn to_record(name: String, path: PathBuf, meta: &Metadata) -> FileRecord {
    let extension = extension_of(&name).to_owned();

    FileRecord {
        size: meta.len(),
        created_at: to_utc(meta.created()),
        modified_at: to_utc(meta.modified()),
        accessed_at: to_utc(meta.accessed()),
        is_regular_file: meta.is_file(),
        extension,
        name,
        path,
    }
}

fn to_utc(t: io::Result<SystemTime>) -> Option<DateTime<Utc>> {
    t.ok().map(DateTime::<Utc>::from)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
