//! Concrete games and the series that produce them.

use serde::{Deserialize, Serialize};

use super::Team;

/// Unique identity of one scheduled occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub u32);

/// One game between two teams.
///
/// Two games between the same pair are distinct values with distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub team_a: Team,
    pub team_b: Team,
}

impl Game {
    /// Creates a game.
    pub fn new(id: GameId, team_a: Team, team_b: Team) -> Self {
        Self { id, team_a, team_b }
    }

    /// Whether `team` takes part in this game.
    #[inline]
    pub fn involves(&self, team: Team) -> bool {
        self.team_a == team || self.team_b == team
    }

    /// Both participants.
    #[inline]
    pub fn teams(&self) -> [Team; 2] {
        [self.team_a, self.team_b]
    }

    /// Occupancy mask of both participants.
    #[inline]
    pub fn mask(&self) -> u32 {
        self.team_a.bit() | self.team_b.bit()
    }
}

/// A run of games between one pair, used only during expansion.
#[derive(Debug, Clone, Copy)]
pub struct Series {
    team_a: Team,
    team_b: Team,
    games: usize,
}

impl Series {
    pub fn new(team_a: Team, team_b: Team, games: usize) -> Self {
        Self {
            team_a,
            team_b,
            games,
        }
    }

    /// Emits the series' games, drawing ids from `next_id`.
    pub fn into_games(self, next_id: &mut u32) -> Vec<Game> {
        (0..self.games)
            .map(|_| {
                let id = GameId(*next_id);
                *next_id += 1;
                Game::new(id, self.team_a, self.team_b)
            })
            .collect()
    }
}
