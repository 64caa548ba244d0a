use super::super::{
    MAX_HISTORY_LIMIT, ObservabilityConfig, PacketConfig, PlaygroundConfig, StoreConfig,
};
use crate::core::packet::{MAX_MAX_CHARS, MIN_MAX_CHARS};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub packet: PacketConfig,

    #[serde(default)]
    pub playground: PlaygroundConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Store path with `~` expanded.
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.store.path).to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if self.store.path.trim().is_empty() {
            anyhow::bail!("store.path must not be empty");
        }
        if !(1..=MAX_HISTORY_LIMIT).contains(&self.store.history_limit) {
            anyhow::bail!("store.history_limit must be between 1 and {MAX_HISTORY_LIMIT}");
        }
        if !(MIN_MAX_CHARS..=MAX_MAX_CHARS).contains(&self.packet.max_chars) {
            anyhow::bail!("packet.max_chars must be between {MIN_MAX_CHARS} and {MAX_MAX_CHARS}");
        }
        Ok(())
    }
}
