use crate::api::{CatalogApi, CatalogPaths};
use crate::config::ShelfzConfig;
use crate::error::{CatalogError, Result};
use crate::filter::FilterMode;
use crate::store::fs::DirSource;
use crate::store::memory::InMemorySource;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Startup overrides coming from the UI (command-line flags for the CLI).
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub config_dir: Option<PathBuf>,
    pub fixtures_dir: Option<PathBuf>,
    pub combine: bool,
}

pub fn default_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "shelfz", "shelfz")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Config("Could not determine config dir".to_string()))
}

/// Resolves configuration and fixtures, then builds the API.
///
/// Flags win over the config file: `fixtures_dir` over `fixtures-dir`, and
/// `combine` forces [`FilterMode::Combined`]. Without any fixtures directory the
/// built-in catalog is used.
pub fn initialize(options: &InitOptions) -> Result<CatalogApi> {
    let config_dir = match &options.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let config = ShelfzConfig::load(&config_dir)?;

    let mode = if options.combine {
        FilterMode::Combined
    } else {
        config.filter_mode
    };
    let paths = CatalogPaths { config_dir };

    let fixtures_dir = options.fixtures_dir.clone().or(config.fixtures_dir);

    let api = match fixtures_dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "loading fixtures from directory");
            CatalogApi::new(&DirSource::new(dir), mode, paths)?
        }
        None => {
            tracing::debug!("using built-in catalog");
            CatalogApi::new(&InMemorySource::builtin(), mode, paths)?
        }
    };

    Ok(api)
}
