//! Season generation settings.
//!
//! Every field has a default, so a partial JSON document is enough:
//!
//! ```
//! use league_schedule::config::SeasonConfig;
//!
//! let config: SeasonConfig = serde_json::from_str(r#"{ "holiday": 56, "workers": 8 }"#).unwrap();
//! assert_eq!(config.days_in_season, 174);
//! assert_eq!(config.holiday, Some(56));
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{LeagueCalendar, DAYS_IN_REGULAR_SEASON, DEFAULT_ALL_STAR_BREAK};
use crate::planner::DEFAULT_MAX_PLAN_ATTEMPTS;

/// Settings for one season generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonConfig {
    /// Day slots in the season, reserved days included.
    pub days_in_season: usize,
    /// Reserved all-star break slots.
    pub all_star_break: Vec<usize>,
    /// Optional reserved holiday slot.
    pub holiday: Option<usize>,
    /// Concurrent attempts raced against each other.
    pub workers: usize,
    /// Planner restarts allowed per attempt before giving up.
    pub max_plan_attempts: usize,
    /// Base seed. `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            days_in_season: DAYS_IN_REGULAR_SEASON,
            all_star_break: DEFAULT_ALL_STAR_BREAK.to_vec(),
            holiday: None,
            workers: 4,
            max_plan_attempts: DEFAULT_MAX_PLAN_ATTEMPTS,
            seed: None,
        }
    }
}

impl SeasonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_days(mut self, days_in_season: usize) -> Self {
        self.days_in_season = days_in_season;
        self
    }

    pub fn with_all_star_break(mut self, days: impl IntoIterator<Item = usize>) -> Self {
        self.all_star_break = days.into_iter().collect();
        self
    }

    pub fn with_holiday(mut self, day: usize) -> Self {
        self.holiday = Some(day);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_max_plan_attempts(mut self, attempts: usize) -> Self {
        self.max_plan_attempts = attempts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the validated season calendar.
    pub fn calendar(&self) -> Result<LeagueCalendar, ConfigError> {
        LeagueCalendar::new(self.days_in_season, &self.all_star_break, self.holiday)
    }

    /// Checks every setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if self.max_plan_attempts == 0 {
            return Err(ConfigError::NoPlanAttempts);
        }
        self.calendar().map(|_| ())
    }
}
