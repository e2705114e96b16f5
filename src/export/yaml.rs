//! YAML export

use std::io::Write;

use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Write any serializable value as YAML
pub fn write_yaml<T: Serialize, W: Write>(value: &T, writer: W) -> FinanceResult<()> {
    serde_yaml::to_writer(writer, value).map_err(|e| FinanceError::Export(e.to_string()))
}

/// Export the full database to YAML, with a comment header
pub fn export_full_yaml<W: Write>(storage: &Storage, mut writer: W) -> FinanceResult<()> {
    let export = FullExport::from_storage(storage)?;
    let export_err = |e: std::io::Error| FinanceError::Export(e.to_string());

    writeln!(writer, "# finance-visualizer export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    write_yaml(&export, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FinvizPaths;
    use crate::storage::bootstrap;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::open(FinvizPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        bootstrap(&storage).unwrap();

        let mut buf = Vec::new();
        export_full_yaml(&storage, &mut buf).unwrap();
        let yaml = String::from_utf8(buf).unwrap();

        assert!(yaml.starts_with("# finance-visualizer export"));
        assert!(yaml.contains("schema_version"));
        assert!(yaml.contains("name: Other"));
    }
}
