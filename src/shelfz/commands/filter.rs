use crate::commands::{CmdMessage, CmdResult};
use crate::filter::{FilterAction, FilterState};
use crate::model::EnrichedProduct;

pub const NO_MATCH_MESSAGE: &str = "No products matching selected criteria";
pub const NOTHING_TO_CLEAR_MESSAGE: &str = "Search is already empty, nothing to clear";

/// Applies one action and reports the resulting view.
///
/// Returns the next snapshot alongside the result; the caller decides whether to keep it.
pub fn run(
    products: &[EnrichedProduct],
    state: &FilterState,
    action: &FilterAction,
) -> (FilterState, CmdResult) {
    if *action == FilterAction::ClearSearch && !state.can_clear_search() {
        let mut result = view(products, state);
        result.add_message(CmdMessage::warning(NOTHING_TO_CLEAR_MESSAGE));
        return (state.clone(), result);
    }

    let next = state.apply(products, action);
    let result = view(products, &next);
    (next, result)
}

/// The current view of a snapshot, without changing it.
pub fn view(products: &[EnrichedProduct], state: &FilterState) -> CmdResult {
    let listed: Vec<EnrichedProduct> = state.visible(products).into_iter().cloned().collect();
    let mut result = CmdResult::default()
        .with_listed_products(listed)
        .with_state(state.clone());
    if state.is_empty_result() {
        result.add_message(CmdMessage::info(NO_MATCH_MESSAGE));
    }
    result
}
