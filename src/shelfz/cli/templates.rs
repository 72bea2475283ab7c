//! Template sources, kept in `templates/` and embedded at compile time.
//!
//! Templates require explicit line breaks: each output line ends with a literal
//! newline inside the template, and the single trailing newline of the file is
//! dropped by minijinja.
pub const PANEL_TEMPLATE: &str = include_str!("templates/panel.tmp");
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
