use super::FixtureSource;
use crate::error::Result;
use crate::model::{Category, Product, Sex, User};

#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl InMemorySource {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        let users = vec![
            User::new(1, "Roma", Sex::M),
            User::new(2, "Anna", Sex::F),
            User::new(3, "Max", Sex::M),
            User::new(4, "John", Sex::M),
        ];

        let categories = vec![
            Category::new(1, "Grocery", "🍞", 2),
            Category::new(2, "Drinks", "🍺", 1),
            Category::new(3, "Fruits", "🍏", 2),
            Category::new(4, "Electronics", "💻", 1),
            Category::new(5, "Clothes", "👚", 3),
        ];

        let products = vec![
            Product::new(1, "Milk", 2),
            Product::new(2, "Bread", 1),
            Product::new(3, "Eggs", 1),
            Product::new(4, "Jacket", 5),
            Product::new(5, "Sugar", 1),
            Product::new(6, "Banana", 3),
            Product::new(7, "Beer", 2),
            Product::new(8, "Socks", 5),
            Product::new(9, "Apple", 3),
        ];

        Self::new(users, categories, products)
    }
}

impl FixtureSource for InMemorySource {
    fn users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_references_resolve() {
        let source = InMemorySource::builtin();
        let users = source.users().unwrap();
        let categories = source.categories().unwrap();

        for category in &categories {
            assert!(users.iter().any(|u| u.id == category.owner_id));
        }
        for product in source.products().unwrap() {
            assert!(categories.iter().any(|c| c.id == product.category_id));
        }
    }

    #[test]
    fn default_is_empty() {
        let source = InMemorySource::default();
        assert!(source.users().unwrap().is_empty());
        assert!(source.categories().unwrap().is_empty());
        assert!(source.products().unwrap().is_empty());
    }
}
