//! Working state of a day assignment: which teams play on which day.

use crate::models::{Game, GameId, LeagueCalendar, LeagueDay, Schedule};

/// How strictly consecutive game days are limited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    /// No back-to-backs at all.
    Strict,
    /// Back-to-backs allowed, three in a row not.
    Relaxed,
}

/// Games placed so far, with a per-day team occupancy mask.
#[derive(Debug, Clone)]
pub struct DayBoard<'a> {
    calendar: &'a LeagueCalendar,
    occupancy: Vec<u32>,
    games: Vec<Vec<Game>>,
}

impl<'a> DayBoard<'a> {
    /// An empty board over `calendar`.
    pub fn new(calendar: &'a LeagueCalendar) -> Self {
        Self {
            calendar,
            occupancy: vec![0; calendar.len()],
            games: vec![Vec::new(); calendar.len()],
        }
    }

    /// Whether any team in `mask` plays on day `index`. Days outside the
    /// season are empty.
    #[inline]
    fn busy(&self, mask: u32, index: Option<usize>) -> bool {
        index
            .and_then(|i| self.occupancy.get(i))
            .is_some_and(|&o| o & mask != 0)
    }

    /// Whether neither team of `game` plays on `day`.
    pub fn is_free(&self, game: &Game, day: LeagueDay) -> bool {
        !day.is_reserved() && !self.busy(game.mask(), Some(day.index))
    }

    /// Whether `game` may go on `day` under `mode`.
    ///
    /// - Never on a reserved day or a day either team already plays.
    /// - `Strict`: not if either team plays the day before or after.
    /// - `Relaxed`: if either team plays the day before, not if either
    ///   plays two days before; the same forward; and never between two
    ///   game days.
    ///
    /// While days are filled in increasing order the following days are
    /// still empty, so only the backward rules bite.
    pub fn can_place(&self, game: &Game, day: LeagueDay, mode: Adjacency) -> bool {
        if !self.is_free(game, day) {
            return false;
        }

        let mask = game.mask();
        let i = day.index;
        let prev = self.busy(mask, i.checked_sub(1));
        let next = self.busy(mask, i.checked_add(1));

        match mode {
            Adjacency::Strict => !prev && !next,
            Adjacency::Relaxed => {
                let prev2 = prev && self.busy(mask, i.checked_sub(2));
                let next2 = next && self.busy(mask, i.checked_add(2));
                !prev2 && !next2 && !(prev && next)
            }
        }
    }

    /// Puts `game` on `day`. Callers check feasibility first.
    pub fn place(&mut self, game: Game, day: LeagueDay) {
        self.occupancy[day.index] |= game.mask();
        self.games[day.index].push(game);
    }

    /// Games placed on day `index`.
    pub fn games_on(&self, index: usize) -> &[Game] {
        self.games.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total games placed.
    pub fn placed(&self) -> usize {
        self.games.iter().map(Vec::len).sum()
    }

    /// Freezes the board into a [`Schedule`].
    pub fn into_schedule(self, relaxed_placements: Vec<GameId>) -> Schedule {
        Schedule::from_parts(self.calendar.clone(), self.games, relaxed_placements)
    }
}
