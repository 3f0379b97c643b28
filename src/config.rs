//! Runtime settings resolved from CLI flags, the environment and defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::fetch::BasicClient;
use crate::infra::{CityCatalog, HttpSource, LocalDirSource};
use crate::services::trip_source::TripSource;

pub const DATA_DIR_VAR: &str = "BIKESHARE_DATA_DIR";
pub const DATA_URL_VAR: &str = "BIKESHARE_DATA_URL";
pub const CATALOG_VAR: &str = "BIKESHARE_CATALOG";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Where trip logs come from and which cities exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    /// When set, trip logs are downloaded instead of read from `data_dir`.
    pub data_url: Option<String>,
    /// JSON city catalog; the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Settings {
    /// Flag value first, then the process environment, then the default.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        data_url: Option<String>,
        catalog_path: Option<PathBuf>,
    ) -> Self {
        Self::resolve_with(data_dir, data_url, catalog_path, |key| {
            std::env::var(key).ok()
        })
    }

    /// Like [`Settings::resolve`], reading variables through `env`.
    pub fn resolve_with(
        data_dir: Option<PathBuf>,
        data_url: Option<String>,
        catalog_path: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let settings = Self {
            data_dir: data_dir
                .or_else(|| env(DATA_DIR_VAR).map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            data_url: data_url.or_else(|| env(DATA_URL_VAR)),
            catalog_path: catalog_path.or_else(|| env(CATALOG_VAR).map(PathBuf::from)),
        };
        debug!(?settings, "Settings resolved");
        settings
    }

    pub fn catalog(&self) -> Result<CityCatalog> {
        match &self.catalog_path {
            Some(path) => CityCatalog::load(path),
            None => Ok(CityCatalog::builtin()),
        }
    }

    pub fn source(&self) -> Result<Box<dyn TripSource>> {
        match &self.data_url {
            Some(url) => {
                let client = BasicClient::new().context("building HTTP client")?;
                let source = HttpSource::new(client, url)?;
                Ok(Box::new(source))
            }
            None => Ok(Box::new(LocalDirSource::new(&self.data_dir))),
        }
    }
}
