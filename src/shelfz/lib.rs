//! # Shelfz Architecture
//!
//! Shelfz is a **UI-agnostic product catalog library**. It joins three fixture
//! collections (users, categories, products) into enriched product rows and lets a
//! browsing session narrow the visible rows by owner, by category, or by free text.
//! The terminal client in `cli/` is one UI over it; nothing from `api.rs` inward
//! prints, exits, or assumes a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap parsing, templated rendering, the browse loop       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads + joins once, owns the session snapshot            │
//! │  - One method per filter control                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Filter Engine (filter.rs)  │
//! │  - Pure transitions over immutable snapshots                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Fixture Layer (store/) + Data Joiner (join.rs)             │
//! │  - FixtureSource trait: built-in or JSON directory          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tolerant data
//!
//! A product whose category is unknown, or a category whose owner is unknown, is
//! kept with the missing reference set to `None`. An empty result after filtering
//! is a normal state, reported as a message. The only errors are the ambient ones:
//! unreadable fixture files or config.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Result/message types and the command functions
//! - [`filter`]: Filter snapshot, transitions, predicates
//! - [`join`]: The enriched-list join
//! - [`store`]: Fixture sources
//! - [`model`]: `User`, `Category`, `Product`, `EnrichedProduct`
//! - [`config`]: Configuration file handling
//! - [`init`]: Startup wiring from options + config
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod join;
pub mod model;
pub mod store;
