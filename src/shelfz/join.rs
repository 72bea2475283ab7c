//! # Data Joiner
//!
//! Builds the enriched product list once, at load time. Each product is matched to
//! the first category with its `category_id`, and that category to the first user
//! with its `owner_id`. Lookups are tolerant: a dangling reference leaves the field
//! as `None` and the product still makes it into the list, in its original position.

use crate::model::{Category, EnrichedProduct, Product, User};

pub fn join_products(
    users: &[User],
    categories: &[Category],
    products: &[Product],
) -> Vec<EnrichedProduct> {
    products
        .iter()
        .map(|product| {
            let category = categories.iter().find(|c| c.id == product.category_id);
            if category.is_none() {
                tracing::debug!(
                    product_id = product.id,
                    category_id = product.category_id,
                    "product references an unknown category"
                );
            }

            let user = category.and_then(|c| {
                let owner = find_owner(users, c);
                if owner.is_none() {
                    tracing::debug!(
                        category_id = c.id,
                        owner_id = c.owner_id,
                        "category references an unknown owner"
                    );
                }
                owner
            });

            EnrichedProduct {
                product: product.clone(),
                category: category.cloned(),
                user: user.cloned(),
            }
        })
        .collect()
}

/// The first user whose id is the category's `owner_id`.
pub fn find_owner<'a>(users: &'a [User], category: &Category) -> Option<&'a User> {
    users.iter().find(|u| u.id == category.owner_id)
}
