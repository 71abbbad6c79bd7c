use serde::{Deserialize, Serialize};

mod next_run_strategy;

pub use self::next_run_strategy::NextRunStrategy;

/// Configuration for the automation tasks.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct TasksConfig {
    /// Defines how the next run is calculated from the task schedule.
    pub next_run: NextRunStrategy,
}
