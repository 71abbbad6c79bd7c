use serde::{Deserialize, Serialize};

/// Configuration for the assets inventory.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct AssetsConfig {
    /// The number of assets returned per page if the page size isn't specified explicitly.
    pub default_page_size: usize,
    /// The maximum number of assets that can be requested per page.
    pub max_page_size: usize,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}
