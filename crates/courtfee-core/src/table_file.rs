//! # Table Files
//!
//! Tariff schedules and exemption catalogs can be supplied as YAML or JSON
//! documents. The format is chosen by file extension. Parsing only produces
//! the raw document; each table type validates itself afterwards.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;

/// Supported on-disk table formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl TableFormat {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse a table document from text.
pub fn parse_table<T: DeserializeOwned>(text: &str, format: TableFormat) -> Result<T, LoadError> {
    match format {
        TableFormat::Json => Ok(serde_json::from_str(text)?),
        TableFormat::Yaml => Ok(serde_yaml::from_str(text)?),
    }
}

/// Read and parse a table document from disk.
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let format = TableFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_table(&text, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn format_from_extension() {
        assert_eq!(TableFormat::from_path(Path::new("t.json")).unwrap(), TableFormat::Json);
        assert_eq!(TableFormat::from_path(Path::new("t.yaml")).unwrap(), TableFormat::Yaml);
        assert_eq!(TableFormat::from_path(Path::new("t.YML")).unwrap(), TableFormat::Yaml);
        assert!(matches!(
            TableFormat::from_path(Path::new("t.toml")),
            Err(LoadError::UnsupportedFormat(_))
        ));
        assert!(TableFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn parse_yaml_and_json_agree() {
        let yaml: BTreeMap<String, f64> = parse_table("a: 1.5\nb: 2\n", TableFormat::Yaml).unwrap();
        let json: BTreeMap<String, f64> =
            parse_table(r#"{"a": 1.5, "b": 2}"#, TableFormat::Json).unwrap();
        assert_eq!(yaml, json);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_table::<Vec<u8>>(Path::new("/nonexistent/dir/table.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
