//! Greedy two-pass day scheduler.
//!
//! # Algorithm
//!
//! 1. Build a per-day capacity plan and shuffle it across playable days.
//! 2. Strict pass: sweep playable days in order; on each day walk the
//!    remaining games in order and place every game that fits without a
//!    back-to-back, until the day's capacity is reached.
//! 3. Relaxed pass: same sweep over what is left, allowing back-to-backs
//!    but never three game days in a row.
//! 4. Orphans: each game still left goes on the first playable day the
//!    relaxed rule allows, ignoring capacity. Failing that, on the first
//!    playable day where both teams are idle; such placements are recorded
//!    in [`Schedule::relaxed_placements`].
//!
//! # Complexity
//! O(d * g) per pass where d = days, g = games.

use log::{debug, info, warn};
use rand::Rng;

use super::{Adjacency, DayBoard, DayCapacity};
use crate::error::ScheduleError;
use crate::models::{Game, GameId, LeagueCalendar, Schedule};

/// Assigns games to days of a fixed calendar.
///
/// # Example
///
/// ```
/// use league_schedule::models::{Game, GameId, LeagueCalendar, Team};
/// use league_schedule::scheduler::{DayCapacity, DayScheduler};
///
/// let calendar = LeagueCalendar::new(5, &[], None).unwrap();
/// let games = vec![
///     Game::new(GameId(0), Team::Bos, Team::Nyk),
///     Game::new(GameId(1), Team::Bos, Team::Phi),
/// ];
/// let capacity = DayCapacity::from_counts(vec![1, 0, 1, 0, 0], &calendar).unwrap();
///
/// let schedule = DayScheduler::new(calendar)
///     .schedule_with_capacity(&games, &capacity)
///     .unwrap();
/// assert_eq!(schedule.game_count(), 2);
/// assert_eq!(schedule.back_to_backs(Team::Bos), 0);
/// ```
#[derive(Debug, Clone)]
pub struct DayScheduler {
    calendar: LeagueCalendar,
}

impl DayScheduler {
    pub fn new(calendar: LeagueCalendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &LeagueCalendar {
        &self.calendar
    }

    /// Schedules `games` with an even capacity plan shuffled by `rng`.
    ///
    /// The order of `games` matters: callers shuffle it for variety.
    pub fn schedule_season<R: Rng + ?Sized>(
        &self,
        games: &[Game],
        rng: &mut R,
    ) -> Result<Schedule, ScheduleError> {
        let mut capacity = DayCapacity::even(games.len(), &self.calendar);
        capacity.shuffle(&self.calendar, rng);
        self.schedule_with_capacity(games, &capacity)
    }

    /// Schedules `games` against an explicit capacity plan.
    ///
    /// Deterministic for a given game order and capacity.
    ///
    /// # Errors
    /// - `CapacityLength` if `capacity` does not match the calendar.
    /// - `Unplaceable` if a game has no playable day with both teams idle.
    pub fn schedule_with_capacity(
        &self,
        games: &[Game],
        capacity: &DayCapacity,
    ) -> Result<Schedule, ScheduleError> {
        if capacity.len() != self.calendar.len() {
            return Err(ScheduleError::CapacityLength {
                expected: self.calendar.len(),
                actual: capacity.len(),
            });
        }

        let mut board = DayBoard::new(&self.calendar);
        let mut remaining = games.to_vec();

        for mode in [Adjacency::Strict, Adjacency::Relaxed] {
            for day in self.calendar.playable_days() {
                let limit = capacity.get(day.index);
                if remaining.is_empty() {
                    break;
                }
                if board.games_on(day.index).len() >= limit {
                    continue;
                }
                remaining.retain(|game| {
                    if board.games_on(day.index).len() >= limit
                        || !board.can_place(game, day, mode)
                    {
                        return true;
                    }
                    board.place(*game, day);
                    false
                });
            }
            debug!(
                "{mode:?} pass: {} placed, {} remaining",
                board.placed(),
                remaining.len()
            );
        }

        let relaxed = self.place_orphans(&mut board, remaining)?;
        Ok(board.into_schedule(relaxed))
    }

    /// Places games left over by both passes. Returns ids placed in breach
    /// of the back-to-back rules.
    fn place_orphans(
        &self,
        board: &mut DayBoard<'_>,
        orphans: Vec<Game>,
    ) -> Result<Vec<GameId>, ScheduleError> {
        let mut over_capacity = 0usize;
        let mut relaxed = Vec::new();

        for game in orphans {
            let day = self
                .calendar
                .playable_days()
                .find(|&d| board.can_place(&game, d, Adjacency::Relaxed));
            if let Some(day) = day {
                board.place(game, day);
                over_capacity += 1;
                continue;
            }

            let day = self
                .calendar
                .playable_days()
                .find(|&d| board.is_free(&game, d))
                .ok_or(ScheduleError::Unplaceable {
                    game: game.id,
                    team_a: game.team_a,
                    team_b: game.team_b,
                })?;
            warn!(
                "game {} ({} vs {}) placed on day {} without rest-day guarantees",
                game.id.0, game.team_a, game.team_b, day.index
            );
            board.place(game, day);
            relaxed.push(game.id);
        }

        if over_capacity > 0 {
            info!("{over_capacity} game(s) placed beyond day capacity");
        }
        Ok(relaxed)
    }
}
