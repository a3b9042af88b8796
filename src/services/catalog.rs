use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{FootScan, ShoeRecord};

/// Errors that can occur while reading catalog data
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Rows that parsed from a catalog file, plus a count of those that did not
#[derive(Debug, Clone)]
pub struct CatalogBatch<T> {
    pub records: Vec<T>,
    pub rejected: usize,
}

/// File-backed source for the shoe catalog and foot-scan history.
///
/// Both files hold a JSON array of records. Rows are decoded one at a time,
/// so a malformed row is logged and dropped without losing the rest.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    shoes_path: PathBuf,
    scans_path: PathBuf,
}

impl CatalogSource {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(shoes_path: P, scans_path: Q) -> Self {
        Self {
            shoes_path: shoes_path.into(),
            scans_path: scans_path.into(),
        }
    }

    /// Load every shoe record, active or not
    pub fn load_shoes(&self) -> Result<CatalogBatch<ShoeRecord>, CatalogError> {
        let shoes: CatalogBatch<ShoeRecord> = read_rows(&self.shoes_path)?;
        tracing::info!(
            "Loaded {} shoes from {} ({} rejected)",
            shoes.records.len(),
            self.shoes_path.display(),
            shoes.rejected
        );
        Ok(shoes)
    }

    /// Load the foot-scan history
    pub fn load_scans(&self) -> Result<CatalogBatch<FootScan>, CatalogError> {
        let scans: CatalogBatch<FootScan> = read_rows(&self.scans_path)?;
        tracing::info!(
            "Loaded {} foot scans from {} ({} rejected)",
            scans.records.len(),
            self.scans_path.display(),
            scans.rejected
        );
        Ok(scans)
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<CatalogBatch<T>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_rows(&raw, path).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Only a document that is not a JSON array fails as a whole
fn parse_rows<T: DeserializeOwned>(
    json: &str,
    origin: &Path,
) -> Result<CatalogBatch<T>, serde_json::Error> {
    let rows: Vec<Value> = serde_json::from_str(json)?;

    let mut records = Vec::with_capacity(rows.len());
    let mut rejected = 0;

    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<T>(row) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("Skipping malformed row {} in {}: {}", index, origin.display(), e);
                rejected += 1;
            }
        }
    }

    Ok(CatalogBatch { records, rejected })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {
            "id": 1,
            "company": "Trailco",
            "model": "Ridge",
            "us_size": 10.5,
            "width_category": "W",
            "function": "hiking",
            "price_usd": 149.99,
            "insole_length": 10.9,
            "insole_width": 4.1
        },
        {
            "id": 2,
            "company": "Citywalk",
            "model": "Loafer",
            "us_size": 9.0,
            "width_category": "D",
            "price_usd": 79.0,
            "is_active": false
        }
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let shoes: CatalogBatch<ShoeRecord> = parse_rows(CATALOG, Path::new("inline")).unwrap();
        assert_eq!(shoes.records.len(), 2);
        assert_eq!(shoes.rejected, 0);
        assert!(shoes.records[0].is_active);
        assert_eq!(shoes.records[0].insole_area, None);
        assert!(!shoes.records[1].is_active);
        assert_eq!(shoes.records[1].function, None);
    }

    #[test]
    fn test_malformed_rows_are_dropped() {
        let json = r#"[
            {"id": 1, "company": "A", "model": "One", "us_size": 10.5, "price_usd": 90.0},
            {"id": 2, "company": "B", "model": "Two", "us_size": 9.0},
            {"id": "three", "company": "C", "model": "Three", "us_size": 9.0, "price_usd": 50.0},
            {"id": 4, "company": "D", "model": "Four", "us_size": 11.0, "price_usd": 120.0}
        ]"#;

        let shoes: CatalogBatch<ShoeRecord> = parse_rows(json, Path::new("inline")).unwrap();
        assert_eq!(shoes.rejected, 2);
        let ids: Vec<u64> = shoes.records.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_non_array_document_fails() {
        let result: Result<CatalogBatch<ShoeRecord>, _> = parse_rows("{}", Path::new("inline"));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let source = CatalogSource::new("/nonexistent/shoes.json", "/nonexistent/scans.json");
        match source.load_shoes() {
            Err(CatalogError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/shoes.json"))
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("shoe-fit-catalog-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let shoes_path = dir.join("shoes.json");
        let scans_path = dir.join("scans.json");
        fs::write(&shoes_path, CATALOG).unwrap();
        fs::write(
            &scans_path,
            r#"[
                {"id": 7, "status": "complete", "length_inches": 10.4, "width_inches": 3.9,
                 "uploaded_at": "2024-05-01T10:00:00Z"},
                {"id": 8, "status": "complete", "uploaded_at": "yesterday"}
            ]"#,
        )
        .unwrap();

        let source = CatalogSource::new(&shoes_path, &scans_path);
        assert_eq!(source.load_shoes().unwrap().records.len(), 2);
        let scans = source.load_scans().unwrap();
        assert_eq!(scans.rejected, 1);
        assert_eq!(scans.records[0].id, 7);
        assert_eq!(scans.records[0].measurement().length, Some(10.4));

        fs::write(&scans_path, "not json").unwrap();
        assert!(matches!(source.load_scans(), Err(CatalogError::Parse { .. })));

        fs::remove_dir_all(&dir).ok();
    }
}
