//! Season schedule generation for a 30-team, two-conference league.
//!
//! Builds a full regular season: who plays whom and how often, then on
//! which day, under hard rest constraints. Feasible schedules are found by
//! randomized construction with whole-attempt restart; several attempts
//! race in parallel and the first success wins.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Team`, `MatchupOption`, `Game`,
//!   `LeagueCalendar`, `Schedule`
//! - **`planner`**: Matchup quotas per team and series expansion into games
//! - **`scheduler`**: Greedy day assignment and season KPIs
//! - **`racer`**: Speculative parallel attempts with cooperative cancellation
//! - **`season`**: The end-to-end pipeline
//! - **`config`**: Season settings
//! - **`validation`**: Integrity checks for plans and schedules
//!
//! # Pipeline
//!
//! Topology → Planner → Expander → Day Scheduler → Schedule, with the racer
//! wrapping the whole chain.
//!
//! # Example
//!
//! ```
//! use league_schedule::config::SeasonConfig;
//! use league_schedule::models::Team;
//! use league_schedule::season::SeasonGenerator;
//!
//! let generator = SeasonGenerator::new(SeasonConfig::new().with_seed(1)).unwrap();
//! let schedule = generator.generate().unwrap();
//! assert_eq!(schedule.game_count_for(Team::Bos), 82);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod racer;
pub mod scheduler;
pub mod season;
pub mod validation;
