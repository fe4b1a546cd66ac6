//! Product Catalog
//!
//! The products offered in the selection control and the recommendation
//! table the service answers from.
//!
//! - [`Catalog::demo`]: built-in five-product dataset
//! - [`Catalog::from_csv`]: `product,recommendation` rows loaded from disk

mod csv_loader;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::feed::Recommendations;

/// Products and their recommendations
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Products in display order
    products: Vec<String>,
    /// Product → recommended products, in order
    recommendations: HashMap<String, Vec<String>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in demo dataset
    pub fn demo() -> Self {
        let mut catalog = Self::new();
        for (product, recommended) in [
            ("Product A", ["Product B", "Product C"]),
            ("Product B", ["Product A", "Product D"]),
            ("Product C", ["Product A", "Product E"]),
            ("Product D", ["Product B", "Product E"]),
            ("Product E", ["Product C", "Product D"]),
        ] {
            for r in recommended {
                catalog.insert(product, r);
            }
        }
        catalog
    }

    /// Load a catalog from a CSV file with a `product,recommendation` header
    pub fn from_csv(path: &Path) -> Result<Self, CatalogError> {
        csv_loader::load(path)
    }

    /// Load from `path` when given, otherwise fall back to the demo dataset
    pub fn load_or_demo(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                let catalog = Self::from_csv(path)?;
                tracing::info!(
                    path = %path.display(),
                    products = catalog.len(),
                    "Loaded catalog"
                );
                Ok(catalog)
            }
            None => {
                tracing::info!("No catalog file configured, using demo dataset");
                Ok(Self::demo())
            }
        }
    }

    /// Record that `product` recommends `recommended`
    ///
    /// Returns false when the pair was already present.
    pub fn insert(&mut self, product: &str, recommended: &str) -> bool {
        if !self.recommendations.contains_key(product) {
            self.products.push(product.to_string());
        }
        let list = self.recommendations.entry(product.to_string()).or_default();
        if list.iter().any(|r| r == recommended) {
            return false;
        }
        list.push(recommended.to_string());
        true
    }

    /// Recommendations for a product; empty for unknown products
    pub fn recommend(&self, product: &str) -> Recommendations {
        self.recommendations
            .get(product)
            .cloned()
            .map(Recommendations::new)
            .unwrap_or_default()
    }

    /// Products in display order
    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn contains(&self, product: &str) -> bool {
        self.recommendations.contains_key(product)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Catalog {path:?} line {line}: {message}")]
    InvalidRow {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Catalog {path:?} must start with a `product,recommendation` header")]
    MissingHeader { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.products(),
            &["Product A", "Product B", "Product C", "Product D", "Product E"]
        );
        assert_eq!(
            catalog.recommend("Product A").labels(),
            &["Product B", "Product C"]
        );
        assert_eq!(
            catalog.recommend("Product E").labels(),
            &["Product C", "Product D"]
        );
    }

    #[test]
    fn test_unknown_product_has_no_recommendations() {
        let catalog = Catalog::demo();
        assert!(catalog.recommend("Product Z").is_empty());
        assert!(catalog.recommend("").is_empty());
        // Lookup is exact
        assert!(catalog.recommend("product a").is_empty());
        assert!(!catalog.contains("Product Z"));
    }

    #[test]
    fn test_insert_drops_duplicate_pairs() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert("Milk", "Bread"));
        assert!(!catalog.insert("Milk", "Bread"));
        assert!(catalog.insert("Milk", "Butter"));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.recommend("Milk").labels(), &["Bread", "Butter"]);
    }

    #[test]
    fn test_load_or_demo_without_path() {
        let catalog = Catalog::load_or_demo(None).unwrap();
        assert_eq!(catalog.len(), 5);
    }
}
