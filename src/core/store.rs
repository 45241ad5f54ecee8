//! # List Persistence
//!
//! Save/load the checklist to `<data_dir>/items.json` (default `~/.jot/`).
//!
//! The stored document is a flat JSON array of items. There is no partial
//! update: every save replaces the whole document, every load replaces the
//! whole in-memory list.
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash
//! safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;

use crate::core::state::Item;

const ITEMS_FILE: &str = "items.json";

/// Returns the default data directory, `~/.jot/`.
pub fn default_data_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    Ok(home.join(".jot"))
}

fn items_path(dir: &Path) -> PathBuf {
    dir.join(ITEMS_FILE)
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Load the item list from disk.
///
/// A missing file is not an error: it means nothing was ever saved, and an
/// empty list is returned. A file that exists but fails to parse returns
/// `InvalidData` so the caller can decide what to do with it.
pub fn load_items(dir: &Path) -> io::Result<Vec<Item>> {
    let path = items_path(dir);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let json = fs::read_to_string(&path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Save the item list to disk, replacing the previous document wholesale.
/// Creates the data directory on first save. An empty list is a valid
/// document (deleting the last item must stick across restarts).
pub fn save_items(dir: &Path, items: &[Item]) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    atomic_write_json(&items_path(dir), &items)
}

/// Persist the list, logging instead of failing. This is the single entry
/// point used by the event loop on every `Effect::Save`; a full disk or
/// permission problem shouldn't take the UI down mid-edit.
///
/// Returns `false` if the save failed so the shell can surface it.
pub fn persist(items: &[Item], dir: &Path) -> bool {
    match save_items(dir, items) {
        Ok(()) => {
            debug!("Saved {} item(s) to {}", items.len(), dir.display());
            true
        }
        Err(e) => {
            warn!("Failed to save list to {}: {}", dir.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::item;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_returns_empty_list() {
        let dir = tempdir().unwrap();
        let items = load_items(dir.path()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order_and_flags() {
        let dir = tempdir().unwrap();
        let items = vec![item("first", false), item("second", true), item("third", false)];
        save_items(dir.path(), &items).unwrap();
        assert_eq!(load_items(dir.path()).unwrap(), items);
    }

    #[test]
    fn test_save_replaces_document_wholesale() {
        let dir = tempdir().unwrap();
        save_items(dir.path(), &[item("stale", false), item("old", true)]).unwrap();
        save_items(dir.path(), &[item("fresh", false)]).unwrap();
        assert_eq!(load_items(dir.path()).unwrap(), vec![item("fresh", false)]);
    }

    #[test]
    fn test_empty_list_is_a_valid_document() {
        let dir = tempdir().unwrap();
        save_items(dir.path(), &[item("gone soon", false)]).unwrap();
        save_items(dir.path(), &[]).unwrap();
        assert!(load_items(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_data_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep").join("data");
        save_items(&nested, &[item("a", false)]).unwrap();
        assert_eq!(load_items(&nested).unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_document_is_invalid_data() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(items_path(dir.path()), "{not json").unwrap();
        let err = load_items(dir.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_no_tmp_file_left_behind() {
        let dir = tempdir().unwrap();
        save_items(dir.path(), &[item("a", false)]).unwrap();
        assert!(!items_path(dir.path()).with_extension("tmp").exists());
    }

    #[test]
    fn test_persist_reports_failure_without_panicking() {
        // A file where the directory should be makes create_dir_all fail.
        let dir = tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        fs::write(&blocked, "not a directory").unwrap();
        assert!(!persist(&[item("a", false)], &blocked));
    }
}
