use super::FixtureSource;
use crate::error::{CatalogError, Result};
use crate::model::{Category, Product, User};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

/// Reads fixtures from JSON files in a single directory.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn load<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let path = self.root.join(file_name);
        if !path.exists() {
            return Err(CatalogError::FixtureMissing(path));
        }
        let content = fs::read_to_string(&path).map_err(CatalogError::Io)?;
        let items: Vec<T> = serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        tracing::debug!(path = %path.display(), count = items.len(), "loaded fixture file");
        Ok(items)
    }
}

impl FixtureSource for DirSource {
    fn users(&self) -> Result<Vec<User>> {
        self.load(USERS_FILE)
    }

    fn categories(&self) -> Result<Vec<Category>> {
        self.load(CATEGORIES_FILE)
    }

    fn products(&self) -> Result<Vec<Product>> {
        self.load(PRODUCTS_FILE)
    }
}
