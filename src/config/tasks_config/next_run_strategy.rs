use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use std::time::Duration;

/// Defines how the next run of the automation task is calculated from its schedule.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NextRunStrategy {
    /// The next run is the earliest cron occurrence strictly after the reference time. Schedules
    /// that cannot be parsed as cron expressions fall back to the reference time shifted by the
    /// `fallback_delay`.
    Cron {
        #[serde_as(as = "DurationMilliSeconds<u64>")]
        fallback_delay: Duration,
    },
    /// The next run is always the reference time shifted by the `delay`, the schedule is ignored.
    FixedDelay {
        #[serde_as(as = "DurationMilliSeconds<u64>")]
        delay: Duration,
    },
}

impl Default for NextRunStrategy {
    fn default() -> Self {
        Self::Cron {
            fallback_delay: Duration::from_secs(3600),
        }
    }
}
