//! # CLI Behavior
//!
//! This is **one possible UI client** for shelfz. It is the only place that knows
//! about terminal I/O, exit codes, and output formatting.
//!
//! ### Naked Execution (`shelfz`)
//!
//! Running `shelfz` with no arguments defaults to `shelfz list`: the panel with
//! every control unselected, followed by the full product table.
//!
//! ### One-shot filtering (`shelfz list`)
//!
//! `--user`, `--category` and `--search` are applied in that order, as if the
//! controls were clicked one after another. In the default single mode the last
//! one decides the rows; with `--combine` they narrow each other.
//!
//! ### Browsing (`shelfz browse`)
//!
//! Reads one event per line from stdin and redraws after each. A prompt is shown
//! only when stdin is a terminal, so scripted input produces clean output.
//!
//! ### Colors
//!
//! Styled output is used when stdout supports it and `--no-color` is absent.
//! Diagnostics go to stderr through `tracing`; `-v` raises the level to debug.

mod browse;
mod commands;
mod render;
mod setup;
mod styles;
mod templates;
mod theme;

pub use commands::run;
