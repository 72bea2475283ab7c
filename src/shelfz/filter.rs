//! # Filter Engine
//!
//! The browsing session is modelled as an immutable [`FilterState`] snapshot that
//! moves forward through named [`FilterAction`] transitions. A transition never
//! mutates the snapshot it starts from; it returns the next one.
//!
//! ## Visible list
//!
//! The visible list is stored as positions into the full enriched list, never as
//! copies. That makes the subset guarantee structural: every visible row *is* a row
//! of the full list, and positions are kept in ascending order so relative order is
//! preserved.
//!
//! ## Modes
//!
//! - [`FilterMode::Single`]: each transition recomputes the visible list from the
//!   full list using only its own criterion. Selecting a user discards a category
//!   narrowing and vice versa, while the other labels stay as they were.
//! - [`FilterMode::Combined`]: after every transition the visible list is the AND of
//!   all active criteria (selected user, selected category, non-empty query).
//!
//! In both modes a reset restores everything it names: `ResetUser` the user label,
//! `ResetCategory` the category label, `ClearSearch` the query, and `ResetAll` all
//! three.
//!
//! ## Search text
//!
//! The query is kept exactly as typed, so the panel echoes what was entered. Only
//! matching is case-insensitive: the needle and the three searched fields are
//! lowercased when compared.

use crate::error::CatalogError;
use crate::model::EnrichedProduct;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label used for an inactive selection.
pub const ALL_LABEL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Named(String),
}

impl Selection {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn is(&self, label: &str) -> bool {
        matches!(self, Selection::Named(name) if name == label)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL_LABEL,
            Selection::Named(name) => name,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    Single,
    Combined,
}

impl FromStr for FilterMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(FilterMode::Single),
            "combined" => Ok(FilterMode::Combined),
            other => Err(CatalogError::Config(format!(
                "Unknown filter mode '{}' (expected 'single' or 'combined')",
                other
            ))),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::Single => f.write_str("single"),
            FilterMode::Combined => f.write_str("combined"),
        }
    }
}

/// A discrete user action on the filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    FilterByUser(String),
    FilterByCategory(String),
    Search(String),
    ResetUser,
    ResetCategory,
    ClearSearch,
    ResetAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    mode: FilterMode,
    visible: Vec<usize>,
    search_query: String,
    selected_user: Selection,
    selected_category: Selection,
}

impl FilterState {
    /// Initial snapshot: everything visible, no selection, empty query.
    pub fn new(products: &[EnrichedProduct], mode: FilterMode) -> Self {
        Self {
            mode,
            visible: (0..products.len()).collect(),
            search_query: String::new(),
            selected_user: Selection::All,
            selected_category: Selection::All,
        }
    }

    pub fn apply(&self, products: &[EnrichedProduct], action: &FilterAction) -> Self {
        let mut next = self.clone();

        match action {
            FilterAction::FilterByUser(name) => {
                next.selected_user = Selection::Named(name.clone());
                next.visible = positions(products, |p| matches_user(p, name));
            }
            FilterAction::FilterByCategory(title) => {
                next.selected_category = Selection::Named(title.clone());
                next.visible = positions(products, |p| matches_category(p, title));
            }
            FilterAction::Search(query) => {
                next.search_query = query.clone();
                let needle = query.to_lowercase();
                next.visible = positions(products, |p| matches_search(p, &needle));
            }
            FilterAction::ResetUser => {
                next.selected_user = Selection::All;
                next.visible = all_positions(products);
            }
            FilterAction::ResetCategory => {
                next.selected_category = Selection::All;
                next.visible = all_positions(products);
            }
            FilterAction::ClearSearch => {
                next.search_query.clear();
                next.visible = all_positions(products);
            }
            FilterAction::ResetAll => {
                next = FilterState::new(products, self.mode);
            }
        }

        if self.mode == FilterMode::Combined {
            next.visible = positions(products, |p| next.matches_all(p));
        }

        tracing::debug!(
            ?action,
            mode = %self.mode,
            visible = next.visible.len(),
            total = products.len(),
            "applied filter action"
        );

        next
    }

    /// Rows to display, borrowed from the full list in its order.
    pub fn visible<'a>(&self, products: &'a [EnrichedProduct]) -> Vec<&'a EnrichedProduct> {
        self.visible
            .iter()
            .filter_map(|&idx| products.get(idx))
            .collect()
    }

    pub fn visible_positions(&self) -> &[usize] {
        &self.visible
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_user(&self) -> &Selection {
        &self.selected_user
    }

    pub fn selected_category(&self) -> &Selection {
        &self.selected_category
    }

    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    /// The clear control is only offered while there is a query to clear.
    pub fn can_clear_search(&self) -> bool {
        !self.search_query.is_empty()
    }

    pub fn is_all_users(&self) -> bool {
        self.selected_user.is_all()
    }

    pub fn is_all_categories(&self) -> bool {
        self.selected_category.is_all()
    }

    pub fn is_user_active(&self, name: &str) -> bool {
        self.selected_user.is(name)
    }

    pub fn is_category_active(&self, title: &str) -> bool {
        self.selected_category.is(title)
    }

    fn matches_all(&self, product: &EnrichedProduct) -> bool {
        let user_ok = match &self.selected_user {
            Selection::All => true,
            Selection::Named(name) => matches_user(product, name),
        };
        let category_ok = match &self.selected_category {
            Selection::All => true,
            Selection::Named(title) => matches_category(product, title),
        };
        user_ok && category_ok && matches_search(product, &self.search_query.to_lowercase())
    }
}

pub fn matches_user(product: &EnrichedProduct, name: &str) -> bool {
    product.user_name() == Some(name)
}

pub fn matches_category(product: &EnrichedProduct, title: &str) -> bool {
    product.category_title() == Some(title)
}

/// `needle` must already be lowercased.
pub fn matches_search(product: &EnrichedProduct, needle: &str) -> bool {
    product.name().to_lowercase().contains(needle)
        || product
            .category_title()
            .is_some_and(|t| t.to_lowercase().contains(needle))
        || product
            .user_name()
            .is_some_and(|n| n.to_lowercase().contains(needle))
}

fn positions<F>(products: &[EnrichedProduct], pred: F) -> Vec<usize>
where
    F: Fn(&EnrichedProduct) -> bool,
{
    products
        .iter()
        .enumerate()
        .filter(|(_, p)| pred(p))
        .map(|(idx, _)| idx)
        .collect()
}

fn all_positions(products: &[EnrichedProduct]) -> Vec<usize> {
    (0..products.len()).collect()
}
