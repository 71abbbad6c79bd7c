use crate::{config::Config, database::Database};
use std::time::{Duration, Instant};

pub struct Api {
    pub db: Database,
    pub config: Config,
    /// Moment the API was instantiated, used to report uptime.
    started_at: Instant,
}

impl Api {
    /// Instantiates APIs collection with the specified config and datastore.
    pub fn new(config: Config, database: Database) -> Self {
        Self {
            config,
            db: database,
            started_at: Instant::now(),
        }
    }

    /// Returns for how long the API has been running.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl AsRef<Api> for Api {
    fn as_ref(&self) -> &Self {
        self
    }
}
