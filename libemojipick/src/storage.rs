//! Recents persistence
//!
//! The picker never touches the filesystem itself. It is handed a
//! [`RecentsStore`] that supplies the initial recents snapshot and is told
//! about every change. The file-backed store keeps a small JSON document:
//!
//! ```json
//! { "version": 1, "recent": ["🎉", "👍", "😂"] }
//! ```
//!
//! Glyphs are resolved against the catalog on load; entries the catalog no
//! longer knows are skipped.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{Result, StorageError};
use crate::types::Emoji;

const FORMAT_VERSION: u32 = 1;

/// Source and sink for the recents list
pub trait RecentsStore {
    /// Load the stored list, most recent first
    fn load(&self, catalog: &Catalog) -> Result<Vec<Emoji>>;

    /// Replace the stored list
    fn save(&self, recents: &[Emoji]) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct RecentsFile {
    version: u32,
    recent: Vec<String>,
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileRecentsStore {
    path: PathBuf,
}

impl FileRecentsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecentsStore for FileRecentsStore {
    fn load(&self, catalog: &Catalog) -> Result<Vec<Emoji>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No recents file yet");
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(StorageError::Io)?;
        let file: RecentsFile = serde_json::from_str(&content).map_err(StorageError::Serialization)?;
        if file.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(file.version).into());
        }

        let mut recents = Vec::with_capacity(file.recent.len());
        for glyph in &file.recent {
            match catalog.find(glyph) {
                Some(emoji) => recents.push(emoji.clone()),
                None => tracing::warn!(glyph = glyph.as_str(), "Skipping unknown emoji in recents file"),
            }
        }
        tracing::debug!(count = recents.len(), "Loaded recents");
        Ok(recents)
    }

    fn save(&self, recents: &[Emoji]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
            }
        }
        let file = RecentsFile {
            version: FORMAT_VERSION,
            recent: recents.iter().map(|e| e.glyph().to_string()).collect(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(StorageError::Serialization)?;
        std::fs::write(&self.path, json).map_err(StorageError::Io)?;
        Ok(())
    }
}

/// In-memory store, for tests and for hosts that persist elsewhere
#[derive(Debug, Default)]
pub struct MemoryRecentsStore {
    saved: RefCell<Vec<String>>,
    saves: RefCell<usize>,
}

impl MemoryRecentsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store with glyphs, most recent first
    pub fn with_glyphs<I, S>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            saved: RefCell::new(glyphs.into_iter().map(Into::into).collect()),
            saves: RefCell::new(0),
        }
    }

    /// Glyphs from the last save
    pub fn glyphs(&self) -> Vec<String> {
        self.saved.borrow().clone()
    }

    /// How many times `save` was called
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl RecentsStore for MemoryRecentsStore {
    fn load(&self, catalog: &Catalog) -> Result<Vec<Emoji>> {
        Ok(self
            .saved
            .borrow()
            .iter()
            .filter_map(|glyph| catalog.find(glyph).cloned())
            .collect())
    }

    fn save(&self, recents: &[Emoji]) -> Result<()> {
        *self.saved.borrow_mut() = recents.iter().map(|e| e.glyph().to_string()).collect();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

impl<T: RecentsStore + ?Sized> RecentsStore for std::rc::Rc<T> {
    fn load(&self, catalog: &Catalog) -> Result<Vec<Emoji>> {
        (**self).load(catalog)
    }

    fn save(&self, recents: &[Emoji]) -> Result<()> {
        (**self).save(recents)
    }
}
