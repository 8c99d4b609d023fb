//! Error types.
//!
//! Planner dead-ends are internal and never appear here: they are retried
//! inside [`MatchupPlanner`](crate::planner::MatchupPlanner) until the
//! attempt budget runs out, which surfaces as [`PlanError::Exhausted`].

use thiserror::Error;

use crate::models::{GameId, Team};

/// Unknown team abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown team abbreviation '{input}'")]
pub struct ParseTeamError {
    /// The rejected input.
    pub input: String,
}

/// Invalid season configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("season must have at least one day")]
    EmptySeason,
    #[error("reserved day {day} is outside the season (0..{days})")]
    ReservedDayOutOfRange { day: usize, days: usize },
    #[error("holiday {day} falls inside the all-star break")]
    HolidayInBreak { day: usize },
    #[error("worker count must be at least 1")]
    NoWorkers,
    #[error("max_plan_attempts must be at least 1")]
    NoPlanAttempts,
}

/// Matchup planning failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("no valid matchup plan found after {attempts} attempts")]
    Exhausted { attempts: usize },
    #[error("matchup planning cancelled")]
    Cancelled,
}

/// Day assignment failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("game {game:?} ({team_a} vs {team_b}) has no day on which both teams are free")]
    Unplaceable {
        game: GameId,
        team_a: Team,
        team_b: Team,
    },
    #[error("capacity plan covers {actual} days, calendar has {expected}")]
    CapacityLength { expected: usize, actual: usize },
}

/// Attempt racing failure.
#[derive(Debug, Error)]
pub enum RaceError {
    #[error("at least one worker is required")]
    NoWorkers,
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("all {workers} attempts failed")]
    AllAttemptsFailed { workers: usize },
}

/// Any failure of the season pipeline.
#[derive(Debug, Error)]
pub enum SeasonError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Race(#[from] RaceError),
}
