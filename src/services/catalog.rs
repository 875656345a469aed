use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::Product,
};

/// The read-only product catalog
///
/// Loaded from a JSON file at startup and held in memory for the process
/// lifetime. Products keep their file order; every listing and lookup in the
/// recommendation pipeline relies on that order being stable.
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Loads the catalog from a JSON file containing an array of products
    pub fn load(path: &Path) -> AppResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            AppError::Catalog(format!("failed to read {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_json(&data)
            .map_err(|e| AppError::Catalog(format!("failed to parse {}: {}", path.display(), e)))?;

        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    /// Parses a catalog from a JSON array of product records
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        let products: Vec<Product> = serde_json::from_str(data)?;
        Ok(Self::new(products))
    }

    /// All products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by exact id, first match in catalog order
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
