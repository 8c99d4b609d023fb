//! Season schedule (solution) model.
//!
//! A schedule maps every day slot of a [`LeagueCalendar`] to the games
//! played that day. Storage is a dense vector indexed by day, so neighbour
//! lookups are plain index arithmetic.

use serde::{Deserialize, Serialize};

use super::{Game, GameId, LeagueCalendar, LeagueDay, Team};

/// A complete season schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    calendar: LeagueCalendar,
    /// Games per day, indexed by day.
    games_by_day: Vec<Vec<Game>>,
    /// Games placed by the fallback path in breach of the back-to-back rules.
    relaxed_placements: Vec<GameId>,
}

impl Schedule {
    /// Creates an empty schedule over `calendar`.
    pub fn new(calendar: LeagueCalendar) -> Self {
        let games_by_day = vec![Vec::new(); calendar.len()];
        Self {
            calendar,
            games_by_day,
            relaxed_placements: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        calendar: LeagueCalendar,
        games_by_day: Vec<Vec<Game>>,
        relaxed_placements: Vec<GameId>,
    ) -> Self {
        Self {
            calendar,
            games_by_day,
            relaxed_placements,
        }
    }

    pub fn calendar(&self) -> &LeagueCalendar {
        &self.calendar
    }

    /// Games on day `index`. Empty outside the season.
    pub fn games_on(&self, index: usize) -> &[Game] {
        self.games_by_day
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates `(day, games)` in day order.
    pub fn iter(&self) -> impl Iterator<Item = (LeagueDay, &[Game])> + '_ {
        self.calendar
            .days()
            .zip(self.games_by_day.iter())
            .map(|(day, games)| (day, games.as_slice()))
    }

    /// Total number of scheduled games.
    pub fn game_count(&self) -> usize {
        self.games_by_day.iter().map(Vec::len).sum()
    }

    /// Number of games involving `team`.
    pub fn game_count_for(&self, team: Team) -> usize {
        self.games_by_day
            .iter()
            .flatten()
            .filter(|g| g.involves(team))
            .count()
    }

    /// Whether `team` plays on day `index`.
    pub fn team_plays_on(&self, team: Team, index: usize) -> bool {
        self.games_on(index).iter().any(|g| g.involves(team))
    }

    /// The team's game on day `index`, if any.
    pub fn game_for(&self, team: Team, index: usize) -> Option<&Game> {
        self.games_on(index).iter().find(|g| g.involves(team))
    }

    /// Day-by-day view of one team's season.
    pub fn team_schedule(&self, team: Team) -> Vec<(LeagueDay, Option<Game>)> {
        self.calendar
            .days()
            .map(|day| (day, self.game_for(team, day.index).copied()))
            .collect()
    }

    /// Number of consecutive-day pairs on which `team` plays both days.
    pub fn back_to_backs(&self, team: Team) -> usize {
        (1..self.games_by_day.len())
            .filter(|&i| self.team_plays_on(team, i - 1) && self.team_plays_on(team, i))
            .count()
    }

    /// Games the fallback path placed without honouring the back-to-back rules.
    pub fn relaxed_placements(&self) -> &[GameId] {
        &self.relaxed_placements
    }

    /// Day index on which game `id` is scheduled.
    pub fn day_of(&self, id: GameId) -> Option<usize> {
        self.games_by_day
            .iter()
            .position(|games| games.iter().any(|g| g.id == id))
    }
}
