//! Server configuration loaded from TOML.
//!
//! Lookup order:
//! 1. the file named by `NETWORK_MCP_CONFIG` (must exist and parse)
//! 2. `<config dir>/network-mcp/config.toml` when present
//! 3. built-in defaults

use crate::avatar::{AvatarResolver, DEFAULT_AVATAR_BUCKET};
use crate::error::ConfigError;
use crate::network::DEFAULT_MIN_MATCH_SCORE;
use crate::taxonomy::{CanonicalTable, Normalizer};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "NETWORK_MCP_CONFIG";

const DEFAULT_DATA_PATH: &str = "network.json";

/// Extra alias appended after a built-in table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AliasEntry {
    pub alias: String,
    pub canonical: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON snapshot served by the store
    pub data_path: String,
    /// Public base URL of the blob store holding avatars
    pub storage_base_url: Option<String>,
    pub avatar_bucket: String,
    /// Candidates must score above this to be shown
    pub min_match_score: f64,
    pub interest_aliases: Vec<AliasEntry>,
    pub school_aliases: Vec<AliasEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            storage_base_url: None,
            avatar_bucket: DEFAULT_AVATAR_BUCKET.to_string(),
            min_match_score: DEFAULT_MIN_MATCH_SCORE,
            interest_aliases: vec![],
            school_aliases: vec![],
        }
    }
}

impl Config {
    /// Load configuration following the lookup order above.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_path(Path::new(expand_tilde(&path).as_ref()));
        }

        match default_config_path() {
            Some(path) if path.is_file() => Ok(Self::from_path(&path).unwrap_or_else(|e| {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            })),
            _ => {
                tracing::info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            "Loaded config from {} ({} interest aliases, {} school aliases)",
            path.display(),
            config.interest_aliases.len(),
            config.school_aliases.len()
        );
        Ok(config)
    }

    /// Snapshot path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(expand_tilde(&self.data_path).as_ref())
    }

    /// Interest normalizer: built-in table followed by configured aliases.
    pub fn interest_normalizer(&self) -> Normalizer {
        Normalizer::new(with_aliases(CanonicalTable::interests(), &self.interest_aliases))
    }

    /// School normalizer: built-in table followed by configured aliases.
    pub fn school_normalizer(&self) -> Normalizer {
        Normalizer::new(with_aliases(CanonicalTable::schools(), &self.school_aliases))
    }

    pub fn avatar_resolver(&self) -> AvatarResolver {
        AvatarResolver::new(self.storage_base_url.as_deref(), &self.avatar_bucket)
    }
}

fn with_aliases(mut table: CanonicalTable, aliases: &[AliasEntry]) -> CanonicalTable {
    table.extend(
        aliases
            .iter()
            .map(|entry| (entry.alias.as_str(), entry.canonical.clone())),
    );
    table
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("network-mcp").join("config.toml"))
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
