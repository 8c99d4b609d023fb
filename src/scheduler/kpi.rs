//! Season quality metrics (KPIs).
//!
//! Computes rest and load indicators from a completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Back-to-backs | Consecutive-day pairs on which a team plays both days |
//! | Max back-to-backs | Largest per-team back-to-back count |
//! | Games per day | Min and max games over playable days |
//! | Relaxed placements | Games placed without rest-day guarantees |

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Schedule, Team};

/// Season performance indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonKpi {
    /// Back-to-back count per team.
    pub back_to_backs_by_team: HashMap<Team, usize>,
    /// Sum of back-to-backs across all teams.
    pub total_back_to_backs: usize,
    /// Highest back-to-back count of any single team.
    pub max_back_to_backs: usize,
    /// Fewest games on any playable day (0 if there are none).
    pub min_games_per_day: usize,
    /// Most games on any playable day.
    pub max_games_per_day: usize,
    /// Number of games placed by the last-resort fallback.
    pub relaxed_placements: usize,
    /// Games scheduled per team.
    pub games_by_team: HashMap<Team, usize>,
}

impl SeasonKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let back_to_backs_by_team: HashMap<Team, usize> = Team::ALL
            .into_iter()
            .map(|team| (team, schedule.back_to_backs(team)))
            .collect();
        let total_back_to_backs = back_to_backs_by_team.values().sum();
        let max_back_to_backs = back_to_backs_by_team.values().copied().max().unwrap_or(0);

        let per_day: Vec<usize> = schedule
            .iter()
            .filter(|(day, _)| !day.is_reserved())
            .map(|(_, games)| games.len())
            .collect();

        let games_by_team = Team::ALL
            .into_iter()
            .map(|team| (team, schedule.game_count_for(team)))
            .collect();

        Self {
            back_to_backs_by_team,
            total_back_to_backs,
            max_back_to_backs,
            min_games_per_day: per_day.iter().copied().min().unwrap_or(0),
            max_games_per_day: per_day.iter().copied().max().unwrap_or(0),
            relaxed_placements: schedule.relaxed_placements().len(),
            games_by_team,
        }
    }

    /// Whether the season stays within the given rest limits.
    pub fn meets_thresholds(&self, max_back_to_backs: usize, max_relaxed: usize) -> bool {
        self.max_back_to_backs <= max_back_to_backs && self.relaxed_placements <= max_relaxed
    }
}
