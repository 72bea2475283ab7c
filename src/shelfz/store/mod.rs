//! # Fixture Sources
//!
//! The catalog never writes anything. It needs three read-only collections at
//! startup, and [`FixtureSource`] is the seam that supplies them.
//!
//! ## Implementations
//!
//! - [`memory::InMemorySource`]: collections held in memory. `InMemorySource::builtin()`
//!   carries the catalog shipped with the binary; tests build their own.
//! - [`fs::DirSource`]: a directory holding `users.json`, `categories.json` and
//!   `products.json`, each a JSON array using the camelCase field names
//!   (`ownerId`, `categoryId`).
//!
//! Sources are read exactly once, when [`crate::api::CatalogApi`] is built.

use crate::error::Result;
use crate::model::{Category, Product, User};

pub mod fs;
pub mod memory;

pub trait FixtureSource {
    fn users(&self) -> Result<Vec<User>>;

    fn categories(&self) -> Result<Vec<Category>>;

    fn products(&self) -> Result<Vec<Product>>;
}
