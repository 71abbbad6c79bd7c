mod assets_config;
mod raw_config;
mod tasks_config;

pub use self::{
    assets_config::AssetsConfig,
    raw_config::RawConfig,
    tasks_config::{NextRunStrategy, TasksConfig},
};

/// Main server config.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Configuration for the automation tasks.
    pub tasks: TasksConfig,
    /// Configuration for the assets inventory.
    pub assets: AssetsConfig,
}

impl AsRef<Config> for Config {
    fn as_ref(&self) -> &Config {
        self
    }
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            tasks: raw_config.tasks,
            assets: raw_config.assets,
        }
    }
}
