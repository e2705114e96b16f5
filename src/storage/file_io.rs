//! JSON file helpers for the store
//!
//! A missing file reads as the empty collection. Writes land in a sibling
//! `.tmp` file first and are renamed over the target.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FinanceError;

fn storage_error(action: &str, path: &Path, e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Storage(format!("Failed to {} {}: {}", action, path.display(), e))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read a collection file, or `T::default()` when it does not exist yet
pub fn read_json<T, P>(path: P) -> Result<T, FinanceError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::trace!(path = %path.display(), "no data file yet");
            return Ok(T::default());
        }
        Err(e) => return Err(storage_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Replace a collection file with `data`, pretty-printed
///
/// Readers see either the old file or the new one, never a partial write.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FinanceError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create directory", dir, e))?;
    }

    let temp_path = temp_path_for(path);
    let result = write_then_sync(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| storage_error("replace", path, e))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_then_sync<T: Serialize>(path: &Path, data: &T) -> Result<(), FinanceError> {
    let file = File::create(path).map_err(|e| storage_error("create", path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| storage_error("write", path, e))?;
    writer.flush().map_err(|e| storage_error("flush", path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_error("sync", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize, Default)]
    struct Rows {
        rows: Vec<u32>,
    }

    #[test]
    fn test_missing_file_reads_as_default() {
        let temp_dir = TempDir::new().unwrap();
        let rows: Rows = read_json(temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(rows, Rows::default());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json::<Rows, _>(&path).unwrap_err();
        assert!(matches!(err, FinanceError::Storage(ref msg) if msg.contains("parse")));
    }

    #[test]
    fn test_write_replaces_and_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("rows.json");

        write_json_atomic(&path, &Rows { rows: vec![1, 2] }).unwrap();
        write_json_atomic(&path, &Rows { rows: vec![3] }).unwrap();

        let rows: Rows = read_json(&path).unwrap();
        assert_eq!(rows.rows, vec![3]);
        assert!(!temp_dir.path().join("data").join("rows.json.tmp").exists());
    }

    #[test]
    fn test_temp_path_is_a_sibling() {
        let temp = temp_path_for(Path::new("/data/budgets.json"));
        assert_eq!(temp, PathBuf::from("/data/budgets.json.tmp"));
    }
}
