use crate::config::ShelfzConfig;
use crate::filter::FilterState;
use crate::model::EnrichedProduct;
use std::path::PathBuf;

pub mod config;
pub mod filter;

#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_products: Vec<EnrichedProduct>,
    pub state: Option<FilterState>,
    pub config: Option<ShelfzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, products: Vec<EnrichedProduct>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_state(mut self, state: FilterState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_config(mut self, config: ShelfzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
