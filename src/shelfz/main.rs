//! # Shelfz CLI
//!
//! The binary is thin: the client lives in `src/shelfz/cli/`, and this file only
//! invokes `cli::run()` and turns errors into an exit status.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/shelfz/cli/)                                │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Command selection + context wiring (commands.rs)         │
//! │  - The line-driven browse session (browse.rs)               │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (src/shelfz/api.rs)                              │
//! │  - Owns the joined catalog and the current filter snapshot  │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (src/shelfz/commands/*)                      │
//! │  - Filter transitions, views and config                     │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Development flows inside-out: the filter engine is tested on its own, exposed
//! through the API facade, and only then wired to parsing and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
