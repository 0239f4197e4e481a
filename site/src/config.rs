use std::path::PathBuf;

use anyhow::{Context, Result};

/// Where the host listens and what it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Trunk output; must contain `index.html`.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("SITE_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let port = match lookup("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT is not a valid port: {raw:?}"))?,
            None => 3000,
        };
        let dist_dir = lookup("SITE_DIST").unwrap_or_else(|| "ui/dist".to_owned()).into();
        let assets_dir = lookup("SITE_ASSETS").unwrap_or_else(|| "assets".to_owned()).into();

        Ok(Self {
            host,
            port,
            dist_dir,
            assets_dir,
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}
