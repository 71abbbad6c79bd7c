use crate::config::{AssetsConfig, TasksConfig};
use figment::{providers, providers::Format, Figment};
use serde::{Deserialize, Serialize};

/// Raw configuration structure that is used to read the configuration from the file.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RawConfig {
    /// Defines a TCP port to listen on.
    pub port: u16,
    /// Indicates whether the store should be seeded with demo tasks, metrics, and alerts on start.
    pub demo_data: bool,
    /// Configuration for the automation tasks.
    pub tasks: TasksConfig,
    /// Configuration for the assets inventory.
    pub assets: AssetsConfig,
}

impl RawConfig {
    /// Reads the configuration from the file (TOML) and merges it with the default values.
    pub fn read_from_file(path: &str) -> anyhow::Result<Self> {
        Ok(
            Figment::from(providers::Serialized::defaults(Self::default()))
                .merge(providers::Toml::file(path))
                .merge(providers::Env::prefixed("OPSDESK_").split("__"))
                .extract()?,
        )
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            port: 7575,
            demo_data: true,
            tasks: Default::default(),
            assets: Default::default(),
        }
    }
}
