//! JSON file reading helpers

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::QuotebookError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, QuotebookError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "data file missing, using empty collection");
        return Ok(T::default());
    }

    parse_file(path)
}

/// Read JSON from a file, returning an error if file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, QuotebookError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(QuotebookError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    parse_file(path)
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T, QuotebookError> {
    let file = File::open(path).map_err(|e| {
        QuotebookError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        QuotebookError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Deserialize, Default)]
    struct Row {
        code: String,
        amount: f64,
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let rows: Vec<Row> = read_json(temp_dir.path().join("missing.json")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_keeps_file_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.json");
        fs::write(
            &path,
            r#"[{"code": "B", "amount": 2}, {"code": "A", "amount": 1.5}]"#,
        )
        .unwrap();

        let rows: Vec<Row> = read_json(&path).unwrap();
        let codes: Vec<_> = rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["B", "A"]);
        assert_eq!(rows[1].amount, 1.5);
    }

    #[test]
    fn test_invalid_json_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<Vec<Row>, _>(&path).unwrap_err();
        assert!(matches!(err, QuotebookError::Storage(_)));
    }

    #[test]
    fn test_read_json_required() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.json");

        assert!(read_json_required::<Vec<Row>, _>(&path).is_err());

        fs::write(&path, "[]").unwrap();
        let rows: Vec<Row> = read_json_required(&path).unwrap();
        assert!(rows.is_empty());
    }
}
