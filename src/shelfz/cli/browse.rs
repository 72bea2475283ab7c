//! The interactive `browse` session.
//!
//! Each input line is one discrete UI event. It is parsed into a
//! [`BrowseInput`], dispatched to the API, and the panel and table are rendered
//! again. Lines are processed strictly one after the other.

use super::render::{render_messages, render_panel, render_table, render_text_list};
use shelfz::api::{CatalogApi, CmdMessage, CmdResult};
use shelfz::error::Result;
use shelfz::filter::FilterAction;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Action(FilterAction),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn help_lines() -> Vec<String> {
    [
        "user <name>         show products owned by <name>",
        "users               show all users' products",
        "category <title>    show products in <title>",
        "categories          show all categories' products",
        "search <text>       match name, category or owner",
        "clear               clear the search text",
        "reset               reset all filters",
        "help                show this help",
        "quit                leave the session",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Parses one input line. Arguments are trimmed, except the `search` text, which
/// is everything after the first separator, passed on as typed.
pub fn parse_line(line: &str) -> BrowseInput {
    let line = line
        .trim_start()
        .trim_end_matches(|c: char| c == '\r' || c == '\n');
    if line.trim().is_empty() {
        return BrowseInput::Empty;
    }

    let (cmd, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let arg = raw.trim();

    match cmd.to_lowercase().as_str() {
        "search" | "s" => BrowseInput::Action(FilterAction::Search(raw.to_string())),
        "user" | "u" if !arg.is_empty() => {
            BrowseInput::Action(FilterAction::FilterByUser(arg.to_string()))
        }
        "users" if matches!(arg, "" | "all") => BrowseInput::Action(FilterAction::ResetUser),
        "category" | "c" if !arg.is_empty() => {
            BrowseInput::Action(FilterAction::FilterByCategory(arg.to_string()))
        }
        "categories" if matches!(arg, "" | "all") => {
            BrowseInput::Action(FilterAction::ResetCategory)
        }
        "clear" if arg.is_empty() => BrowseInput::Action(FilterAction::ClearSearch),
        "reset" if arg.is_empty() => BrowseInput::Action(FilterAction::ResetAll),
        "help" | "?" => BrowseInput::Help,
        "quit" | "exit" | "q" => BrowseInput::Quit,
        _ => BrowseInput::Unknown(line.trim().to_string()),
    }
}

/// Runs the session until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    api: &mut CatalogApi,
    input: R,
    out: &mut W,
    use_color: bool,
    show_prompt: bool,
) -> Result<()> {
    write_view(api, &api.view(), out, use_color)?;
    if show_prompt {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            BrowseInput::Action(action) => {
                let result = api.dispatch(action);
                write_view(api, &result, out, use_color)?;
            }
            BrowseInput::Help => {
                write!(out, "{}", render_text_list(&help_lines(), "", use_color))?;
            }
            BrowseInput::Quit => break,
            BrowseInput::Empty => {}
            BrowseInput::Unknown(text) => {
                tracing::debug!(input = %text, "unrecognized browse input");
                let message = CmdMessage::warning(format!(
                    "Unknown command: {} (type 'help' for commands)",
                    text
                ));
                write!(out, "{}", render_messages(&[message], use_color))?;
            }
        }
        if show_prompt {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }
    }

    Ok(())
}

fn write_view<W: Write>(
    api: &CatalogApi,
    result: &CmdResult,
    out: &mut W,
    use_color: bool,
) -> Result<()> {
    writeln!(
        out,
        "{}",
        render_panel(api.state(), api.users(), api.categories(), use_color)
    )?;
    write!(out, "{}", render_table(&result.listed_products, use_color))?;
    write!(out, "{}", render_messages(&result.messages, use_color))?;
    Ok(())
}
