//! Matchup planning and series expansion.
//!
//! The first pipeline stage decides how many games every pair of teams
//! plays; expansion turns that plan into individual [`Game`](crate::models::Game)s.
//!
//! # Quotas
//!
//! Every team ends with 15 two-game opposite-conference opponents,
//! 4 four-game division rivals, 6 four-game and 4 three-game
//! same-conference opponents: 29 opponents, 82 games.

mod expand;
mod generator;
mod plan;

pub use expand::expand_to_games;
pub use generator::{MatchupPlanner, DEFAULT_MAX_PLAN_ATTEMPTS};
pub use plan::MatchupPlan;
