//! CSV catalog loader
//!
//! Expected format:
//!
//! ```csv
//! product,recommendation
//! Milk,Bread
//! Milk,Butter
//! Bread,Milk
//! ```
//!
//! Products keep the order in which they first appear; each product's
//! recommendations keep row order. Repeated pairs are ignored.

use std::path::Path;

use super::{Catalog, CatalogError};

pub(super) fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

    let headers = reader.headers().map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    if headers.get(0) != Some("product") || headers.get(1) != Some("recommendation") {
        return Err(CatalogError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let mut catalog = Catalog::new();
    let mut duplicates = 0;

    for (row, result) in reader.records().enumerate() {
        // Header is line 1
        let line = row + 2;

        let record = result.map_err(|e| CatalogError::InvalidRow {
            path: path.to_path_buf(),
            line,
            message: e.to_string(),
        })?;

        let product = record.get(0).unwrap_or_default();
        let recommended = record.get(1).unwrap_or_default();

        if product.is_empty() || recommended.is_empty() {
            return Err(CatalogError::InvalidRow {
                path: path.to_path_buf(),
                line,
                message: "product and recommendation must both be non-empty".to_string(),
            });
        }

        if !catalog.insert(product, recommended) {
            duplicates += 1;
        }
    }

    if duplicates > 0 {
        tracing::debug!(path = %path.display(), duplicates, "Skipped duplicate catalog rows");
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_keeps_order() {
        let file = write_csv(
            "product,recommendation\n\
             Milk,Bread\n\
             Coffee,Sugar\n\
             Milk,Butter\n\
             Milk,Bread\n",
        );

        let catalog = load(file.path()).unwrap();
        assert_eq!(catalog.products(), &["Milk", "Coffee"]);
        assert_eq!(catalog.recommend("Milk").labels(), &["Bread", "Butter"]);
        assert_eq!(catalog.recommend("Coffee").labels(), &["Sugar"]);
    }

    #[test]
    fn test_load_trims_fields() {
        let file = write_csv("product,recommendation\n  Milk , Bread \n");
        let catalog = load(file.path()).unwrap();
        assert_eq!(catalog.recommend("Milk").labels(), &["Bread"]);
    }

    #[test]
    fn test_blank_field_reports_line() {
        let file = write_csv("product,recommendation\nMilk,Bread\nCoffee,\n");
        let err = load(file.path()).unwrap_err();
        match err {
            CatalogError::InvalidRow { line, .. } => assert_eq!(line, 3),
            other => panic!("Expected InvalidRow, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_header() {
        let file = write_csv("Milk,Bread\n");
        assert!(matches!(
            load(file.path()),
            Err(CatalogError::MissingHeader { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::from_csv(Path::new("/nonexistent/catalog.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
