// src/store/mod.rs

//! Key/value persistence for the completed set.

use std::fmt::Debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

pub mod memory;
pub mod session;

pub use memory::MemoryStore;
pub use session::Session;

/// Abstract string store, one value per key.
pub trait Store: Send + Sync + Debug {
    /// `Ok(None)` when nothing was stored under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as a file inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(['/', '\\'])
        {
            bail!("invalid store key {:?}", key);
        }
        Ok(self.dir.join(key))
    }
}

impl Store for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading store file {:?}", path)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating store dir {:?}", self.dir))?;
        fs::write(&path, value).with_context(|| format!("writing store file {:?}", path))?;
        Ok(())
    }
}
