//! # Rendering Module
//!
//! Turns API results into terminal text through the templates in `templates/`.
//!
//! Layout math (column widths, truncation, padding) stays in Rust because cells
//! hold emoji and other wide characters that need `unicode-width`. Templates only
//! choose styles and line structure.

use super::styles::{names, SHELFZ_THEME};
use super::templates::{MESSAGES_TEMPLATE, PANEL_TEMPLATE, TABLE_TEMPLATE, TEXT_LIST_TEMPLATE};
use super::theme::render_with_color;
use serde::Serialize;
use shelfz::api::{CmdMessage, MessageLevel};
use shelfz::filter::FilterState;
use shelfz::model::{Category, EnrichedProduct, Sex, User};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a text cell may get before it is cut with an ellipsis.
pub const MAX_CELL_WIDTH: usize = 32;
/// Decorative sort affordance shown in column headers. Sorting is not implemented.
pub const SORT_MARKER: &str = "↕";
pub const ALL_CONTROL: &str = "All";

#[derive(Serialize)]
struct ControlData {
    label: String,
    style: &'static str,
}

#[derive(Serialize)]
struct PanelData {
    users: Vec<ControlData>,
    categories: Vec<ControlData>,
    query: String,
    mode: String,
}

#[derive(Serialize)]
struct RowData {
    id: String,
    name: String,
    category: String,
    user: String,
    user_style: &'static str,
}

#[derive(Serialize)]
struct TableData {
    header: String,
    rows: Vec<RowData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Active controls are bracketed so the selection is visible without color.
fn control(label: &str, active: bool) -> ControlData {
    if active {
        ControlData {
            label: format!("[{}]", label),
            style: names::ACTIVE,
        }
    } else {
        ControlData {
            label: label.to_string(),
            style: names::CONTROL,
        }
    }
}

/// Renders the filter panel: one control per user and per category, plus the
/// search box. Which control is highlighted comes from the snapshot labels.
pub fn render_panel(
    state: &FilterState,
    users: &[User],
    categories: &[Category],
    use_color: bool,
) -> String {
    let mut user_controls = vec![control(ALL_CONTROL, state.is_all_users())];
    user_controls.extend(
        users
            .iter()
            .map(|u| control(&u.name, state.is_user_active(&u.name))),
    );

    let mut category_controls = vec![control(ALL_CONTROL, state.is_all_categories())];
    category_controls.extend(
        categories
            .iter()
            .map(|c| control(&c.title, state.is_category_active(&c.title))),
    );

    let data = PanelData {
        users: user_controls,
        categories: category_controls,
        query: state.search_query().to_string(),
        mode: state.mode().to_string(),
    };

    render_with_color(PANEL_TEMPLATE, &data, &SHELFZ_THEME, use_color)
        .map(|s| format!("{}\n", s))
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the product table. An empty slice renders nothing; the no-match
/// message travels with the command messages.
pub fn render_table(products: &[EnrichedProduct], use_color: bool) -> String {
    let headers = ["ID", "Product", "Category", "User"].map(|h| format!("{} {}", h, SORT_MARKER));

    let cells: Vec<[String; 4]> = products
        .iter()
        .map(|p| {
            [
                p.id().to_string(),
                truncate_to_width(p.name(), MAX_CELL_WIDTH),
                truncate_to_width(&category_cell(p.category.as_ref()), MAX_CELL_WIDTH),
                truncate_to_width(p.user_name().unwrap_or_default(), MAX_CELL_WIDTH),
            ]
        })
        .collect();

    let mut widths = headers.clone().map(|h| h.width());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let header = format!(
        "{}  {}  {}  {}",
        pad_left(&headers[0], widths[0]),
        pad_right(&headers[1], widths[1]),
        pad_right(&headers[2], widths[2]),
        headers[3]
    );

    let rows = products
        .iter()
        .zip(cells)
        .map(|(p, [id, name, category, user])| RowData {
            id: pad_left(&id, widths[0]),
            name: pad_right(&name, widths[1]),
            category: pad_right(&category, widths[2]),
            user,
            user_style: user_style(p.user.as_ref()),
        })
        .collect();

    let data = TableData { header, rows };
    render_with_color(TABLE_TEMPLATE, &data, &SHELFZ_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_with_color(TEXT_LIST_TEMPLATE, &data, &SHELFZ_THEME, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render_with_color(MESSAGES_TEMPLATE, &data, &SHELFZ_THEME, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    let output = render_messages(messages, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn category_cell(category: Option<&Category>) -> String {
    match category {
        Some(c) => format!("{} - {}", c.icon, c.title),
        None => String::new(),
    }
}

fn user_style(user: Option<&User>) -> &'static str {
    match user.map(|u| u.sex) {
        Some(Sex::F) => names::USER_FEMALE,
        Some(Sex::M) => names::USER_MALE,
        None => names::MUTED,
    }
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfz::filter::{FilterAction, FilterMode};
    use shelfz::join::join_products;
    use shelfz::model::Product;

    fn fixtures() -> (Vec<User>, Vec<Category>, Vec<EnrichedProduct>) {
        let users = vec![User::new(1, "Max", Sex::M), User::new(2, "Anna", Sex::F)];
        let categories = vec![
            Category::new(1, "Snacks", "🍫", 1),
            Category::new(2, "Drinks", "🍺", 2),
        ];
        let products = join_products(
            &users,
            &categories,
            &[
                Product::new(1, "Chocolate", 1),
                Product::new(12, "Beer", 2),
                Product::new(3, "Ghost", 99),
            ],
        );
        (users, categories, products)
    }

    #[test]
    fn table_has_header_and_one_line_per_product() {
        let (_, _, products) = fixtures();
        let output = render_table(&products, false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID ↕"));
        assert!(lines[0].contains("Category ↕"));
        assert!(lines[1].contains("Chocolate"));
        assert!(lines[1].contains("🍫 - Snacks"));
        assert!(lines[1].trim_end().ends_with("Max"));
        assert!(lines[2].contains("🍺 - Drinks"));
        assert!(lines[3].contains("Ghost"));
        assert!(!output.contains("(!?)"));
    }

    #[test]
    fn table_columns_line_up_with_wide_icons() {
        let (_, _, products) = fixtures();
        let output = render_table(&products, false);
        let lines: Vec<&str> = output.lines().collect();

        let user_col = |line: &str, name: &str| line[..line.find(name).unwrap()].width();
        assert_eq!(user_col(lines[1], "Max"), user_col(lines[2], "Anna"));
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert_eq!(render_table(&[], false), "");
    }

    #[test]
    fn panel_marks_all_controls_by_default() {
        let (users, categories, products) = fixtures();
        let state = FilterState::new(&products, FilterMode::Single);
        let output = render_panel(&state, &users, &categories, false);

        assert!(output.contains("Users:      [All]  Max  Anna"));
        assert!(output.contains("Categories: [All]  Snacks  Drinks"));
        assert!(output.contains("(empty)"));
        assert!(output.contains("single"));
    }

    #[test]
    fn panel_marks_active_selection_and_query() {
        let (users, categories, products) = fixtures();
        let state = FilterState::new(&products, FilterMode::Single)
            .apply(&products, &FilterAction::FilterByUser("Anna".into()))
            .apply(&products, &FilterAction::FilterByCategory("Snacks".into()))
            .apply(&products, &FilterAction::Search("choc".into()));
        let output = render_panel(&state, &users, &categories, false);

        assert!(output.contains("All  Max  [Anna]"));
        assert!(output.contains("All  [Snacks]  Drinks"));
        assert!(output.contains("choc  (clear)"));
    }

    #[test]
    fn truncates_long_names() {
        let long = "x".repeat(40);
        let cut = truncate_to_width(&long, 10);
        assert_eq!(cut.width(), 10);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("short", 10), "short");
    }

    #[test]
    fn test_render_text_list_empty() {
        let output = render_text_list(&[], "Nothing here.", false);
        assert!(output.contains("Nothing here."));
    }

    #[test]
    fn test_render_text_list_lines() {
        let lines = vec!["first".to_string(), "second".to_string()];
        let output = render_text_list(&lines, "", false);
        assert_eq!(output, "first\nsecond\n");
    }

    #[test]
    fn test_render_messages() {
        assert!(render_messages(&[], false).is_empty());

        let messages = vec![
            CmdMessage::info("No products matching selected criteria"),
            CmdMessage::warning("Warning message"),
        ];
        let output = render_messages(&messages, false);
        assert_eq!(
            output,
            "No products matching selected criteria\nWarning message\n"
        );
    }
}
