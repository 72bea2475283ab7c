//! # API Facade
//!
//! [`CatalogApi`] is the single entry point for every UI. It reads a
//! [`FixtureSource`] once, joins it, and then owns the browsing session: the full
//! enriched list plus the current [`FilterState`] snapshot.
//!
//! Each filter control maps to one method here. A method dispatches to the
//! command layer, stores the next snapshot, and hands back a [`CmdResult`] with the
//! rows to display and any user-facing messages. The facade never prints.
//!
//! ## Testing Strategy
//!
//! Tests here check that each method reaches the right transition and that the
//! session advances. The filtering rules themselves are covered in `filter.rs`.

use crate::commands;
use crate::error::Result;
use crate::filter::{FilterAction, FilterMode, FilterState};
use crate::join::join_products;
use crate::model::{Category, EnrichedProduct, User};
use crate::store::FixtureSource;

pub struct CatalogApi {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<EnrichedProduct>,
    state: FilterState,
    paths: commands::CatalogPaths,
}

impl CatalogApi {
    pub fn new<S: FixtureSource>(
        source: &S,
        mode: FilterMode,
        paths: commands::CatalogPaths,
    ) -> Result<Self> {
        let users = source.users()?;
        let categories = source.categories()?;
        let products = join_products(&users, &categories, &source.products()?);
        tracing::debug!(
            users = users.len(),
            categories = categories.len(),
            products = products.len(),
            "catalog loaded"
        );
        let state = FilterState::new(&products, mode);

        Ok(Self {
            users,
            categories,
            products,
            state,
            paths,
        })
    }

    pub fn dispatch(&mut self, action: FilterAction) -> commands::CmdResult {
        let (next, result) = commands::filter::run(&self.products, &self.state, &action);
        self.state = next;
        result
    }

    pub fn filter_by_user(&mut self, name: impl Into<String>) -> commands::CmdResult {
        self.dispatch(FilterAction::FilterByUser(name.into()))
    }

    pub fn filter_by_category(&mut self, title: impl Into<String>) -> commands::CmdResult {
        self.dispatch(FilterAction::FilterByCategory(title.into()))
    }

    pub fn search(&mut self, query: impl Into<String>) -> commands::CmdResult {
        self.dispatch(FilterAction::Search(query.into()))
    }

    pub fn reset_users(&mut self) -> commands::CmdResult {
        self.dispatch(FilterAction::ResetUser)
    }

    pub fn reset_categories(&mut self) -> commands::CmdResult {
        self.dispatch(FilterAction::ResetCategory)
    }

    pub fn clear_search(&mut self) -> commands::CmdResult {
        self.dispatch(FilterAction::ClearSearch)
    }

    pub fn reset_all(&mut self) -> commands::CmdResult {
        self.dispatch(FilterAction::ResetAll)
    }

    /// The current view, without changing the session.
    pub fn view(&self) -> commands::CmdResult {
        commands::filter::view(&self.products, &self.state)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::filter::{NOTHING_TO_CLEAR_MESSAGE, NO_MATCH_MESSAGE};
pub use crate::commands::{CatalogPaths, CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemorySource;
    use std::path::PathBuf;

    fn api(mode: FilterMode) -> CatalogApi {
        let paths = CatalogPaths {
            config_dir: PathBuf::from("/nonexistent/shelfz"),
        };
        CatalogApi::new(&InMemorySource::builtin(), mode, paths).unwrap()
    }

    fn listed_names(result: &CmdResult) -> Vec<&str> {
        result.listed_products.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn loads_and_joins_once() {
        let api = api(FilterMode::Single);
        assert_eq!(api.users().len(), 4);
        assert_eq!(api.categories().len(), 5);
        assert_eq!(api.products().len(), 9);
        assert_eq!(api.view().listed_products.len(), 9);
    }

    #[test]
    fn filter_methods_advance_the_session() {
        let mut api = api(FilterMode::Single);

        let result = api.filter_by_user("Max");
        assert_eq!(listed_names(&result), vec!["Jacket", "Socks"]);
        assert!(api.state().is_user_active("Max"));

        let result = api.filter_by_category("Fruits");
        assert_eq!(listed_names(&result), vec!["Banana", "Apple"]);
        assert!(api.state().is_category_active("Fruits"));

        let result = api.search("MIL");
        assert_eq!(listed_names(&result), vec!["Milk"]);
        assert_eq!(api.state().search_query(), "MIL");
    }

    #[test]
    fn reset_methods_restore_everything_they_name() {
        let mut api = api(FilterMode::Single);
        api.filter_by_user("Anna");
        api.filter_by_category("Drinks");
        api.search("be");

        assert_eq!(api.reset_users().listed_products.len(), 9);
        assert!(api.state().is_all_users());

        assert_eq!(api.reset_categories().listed_products.len(), 9);
        assert!(api.state().is_all_categories());

        api.search("be");
        assert_eq!(api.clear_search().listed_products.len(), 9);
        assert_eq!(api.state().search_query(), "");

        api.filter_by_user("Anna");
        api.search("x");
        let result = api.reset_all();
        assert_eq!(result.listed_products.len(), 9);
        assert_eq!(
            api.state(),
            &FilterState::new(api.products(), FilterMode::Single)
        );
    }

    #[test]
    fn combined_mode_is_threaded_through() {
        let mut api = api(FilterMode::Combined);
        api.filter_by_user("Anna");
        let result = api.filter_by_category("Grocery");
        assert_eq!(listed_names(&result), vec!["Bread", "Eggs", "Sugar"]);

        let result = api.search("gg");
        assert_eq!(listed_names(&result), vec!["Eggs"]);
    }

    #[test]
    fn view_does_not_change_state() {
        let mut api = api(FilterMode::Single);
        api.filter_by_user("John");
        let before = api.state().clone();
        let result = api.view();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages[0].content, NO_MATCH_MESSAGE);
        assert_eq!(api.state(), &before);
    }

    #[test]
    fn source_errors_propagate() {
        use crate::store::fs::DirSource;
        let dir = tempfile::tempdir().unwrap();
        let paths = CatalogPaths {
            config_dir: dir.path().to_path_buf(),
        };
        assert!(CatalogApi::new(&DirSource::new(dir.path()), FilterMode::Single, paths).is_err());
    }
}
