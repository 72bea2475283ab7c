//! Styles for the shelfz terminal client.
//!
//! Templates only use the semantic names in [`names`]; the colors behind them live
//! in [`SHELFZ_THEME`]. The user column mirrors the catalog's convention of
//! coloring female owners red and male owners in a light link color.
use super::theme::{rgb_to_ansi256, Theme};
use console::Style;
use once_cell::sync::Lazy;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const HEADING: &str = "heading";
    pub const LABEL: &str = "label";
    pub const CONTROL: &str = "control";
    pub const ACTIVE: &str = "active";
    pub const QUERY: &str = "query";
    pub const MUTED: &str = "muted";
    pub const HEADER: &str = "header";
    pub const ID: &str = "id";
    pub const USER_FEMALE: &str = "user-female";
    pub const USER_MALE: &str = "user-male";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

pub static SHELFZ_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((138, 138, 138)));

    Theme::new()
        .add(names::HEADING, Style::new().bold().underlined())
        .add(names::LABEL, Style::new().bold())
        .add(names::CONTROL, Style::new())
        .add(
            names::ACTIVE,
            Style::new()
                .black()
                .on_color256(rgb_to_ansi256((62, 142, 208))),
        )
        .add(names::QUERY, Style::new().cyan())
        .add(names::MUTED, muted.clone())
        .add(names::HEADER, Style::new().bold())
        .add(names::ID, Style::new().bold())
        .add(
            names::USER_FEMALE,
            Style::new().color256(rgb_to_ansi256((241, 70, 104))),
        )
        .add(
            names::USER_MALE,
            Style::new().color256(rgb_to_ansi256((72, 95, 199))).dim(),
        )
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
});
