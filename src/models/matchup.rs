//! Matchup options: quota-bounded game-count agreements between two teams.
//!
//! Per team and season:
//!
//! | Kind | Opponents | Games each | Total |
//! |------|-----------|------------|-------|
//! | Two-game, opposite conference | 15 | 2 | 30 |
//! | Four-game, in division | 4 | 4 | 16 |
//! | Four-game, in conference, out of division | 6 | 4 | 24 |
//! | Three-game, in conference, out of division | 4 | 3 | 12 |
//!
//! 29 opponents, 82 games.

use serde::{Deserialize, Serialize};

use super::Team;

/// Games per team per season.
pub const GAMES_PER_TEAM: usize = 82;

/// Distinct opponents per team.
pub const OPPONENTS_PER_TEAM: usize = 29;

/// Identity of one matchup agreement, shared by both mirrored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchupId(pub u32);

/// Category of a matchup, without the participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchupKind {
    TwoGameOppositeConference,
    ThreeGameInConferenceOutOfDivision,
    FourGameInDivision,
    FourGameInConferenceOutOfDivision,
}

impl MatchupKind {
    /// All kinds.
    pub const ALL: [MatchupKind; 4] = [
        MatchupKind::TwoGameOppositeConference,
        MatchupKind::ThreeGameInConferenceOutOfDivision,
        MatchupKind::FourGameInDivision,
        MatchupKind::FourGameInConferenceOutOfDivision,
    ];

    /// Number of options of this kind every team must end up with.
    pub fn quota(self) -> usize {
        match self {
            MatchupKind::TwoGameOppositeConference => 15,
            MatchupKind::ThreeGameInConferenceOutOfDivision => 4,
            MatchupKind::FourGameInDivision => 4,
            MatchupKind::FourGameInConferenceOutOfDivision => 6,
        }
    }

    /// Games played between the two teams.
    pub fn game_count(self) -> usize {
        match self {
            MatchupKind::TwoGameOppositeConference => 2,
            MatchupKind::ThreeGameInConferenceOutOfDivision => 3,
            MatchupKind::FourGameInDivision | MatchupKind::FourGameInConferenceOutOfDivision => 4,
        }
    }

    /// Position in [`MatchupKind::ALL`], used for per-kind counters.
    #[inline]
    pub(crate) fn slot(self) -> usize {
        self as usize
    }

    /// Whether `a` and `b` stand in the relationship this kind requires.
    pub fn admits(self, a: Team, b: Team) -> bool {
        if a == b {
            return false;
        }
        match self {
            MatchupKind::TwoGameOppositeConference => a.conference() != b.conference(),
            MatchupKind::FourGameInDivision => a.division() == b.division(),
            MatchupKind::ThreeGameInConferenceOutOfDivision
            | MatchupKind::FourGameInConferenceOutOfDivision => {
                a.conference() == b.conference() && a.division() != b.division()
            }
        }
    }
}

/// Participants of a matchup, seen from `team_a`'s side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchupInfo {
    pub id: MatchupId,
    pub team_a: Team,
    pub team_b: Team,
}

impl MatchupInfo {
    /// The same matchup seen from the other side.
    pub fn mirrored(self) -> Self {
        Self {
            id: self.id,
            team_a: self.team_b,
            team_b: self.team_a,
        }
    }
}

/// A classified matchup between two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchupOption {
    TwoGameOppositeConference(MatchupInfo),
    ThreeGameInConferenceOutOfDivision(MatchupInfo),
    FourGameInDivision(MatchupInfo),
    FourGameInConferenceOutOfDivision(MatchupInfo),
}

impl MatchupOption {
    /// Builds the variant for `kind`.
    pub fn new(kind: MatchupKind, info: MatchupInfo) -> Self {
        match kind {
            MatchupKind::TwoGameOppositeConference => Self::TwoGameOppositeConference(info),
            MatchupKind::ThreeGameInConferenceOutOfDivision => {
                Self::ThreeGameInConferenceOutOfDivision(info)
            }
            MatchupKind::FourGameInDivision => Self::FourGameInDivision(info),
            MatchupKind::FourGameInConferenceOutOfDivision => {
                Self::FourGameInConferenceOutOfDivision(info)
            }
        }
    }

    pub fn kind(&self) -> MatchupKind {
        match self {
            Self::TwoGameOppositeConference(_) => MatchupKind::TwoGameOppositeConference,
            Self::ThreeGameInConferenceOutOfDivision(_) => {
                MatchupKind::ThreeGameInConferenceOutOfDivision
            }
            Self::FourGameInDivision(_) => MatchupKind::FourGameInDivision,
            Self::FourGameInConferenceOutOfDivision(_) => {
                MatchupKind::FourGameInConferenceOutOfDivision
            }
        }
    }

    pub fn info(&self) -> &MatchupInfo {
        match self {
            Self::TwoGameOppositeConference(info)
            | Self::ThreeGameInConferenceOutOfDivision(info)
            | Self::FourGameInDivision(info)
            | Self::FourGameInConferenceOutOfDivision(info) => info,
        }
    }

    #[inline]
    pub fn game_count(&self) -> usize {
        self.kind().game_count()
    }

    /// The team on the other side of this option.
    #[inline]
    pub fn opponent(&self) -> Team {
        self.info().team_b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotas_sum_to_season() {
        let opponents: usize = MatchupKind::ALL.iter().map(|k| k.quota()).sum();
        let games: usize = MatchupKind::ALL
            .iter()
            .map(|k| k.quota() * k.game_count())
            .sum();
        assert_eq!(opponents, OPPONENTS_PER_TEAM);
        assert_eq!(games, GAMES_PER_TEAM);
    }

    #[test]
    fn test_option_round_trips_kind() {
        let info = MatchupInfo {
            id: MatchupId(7),
            team_a: Team::Bos,
            team_b: Team::Lal,
        };
        for kind in MatchupKind::ALL {
            let option = MatchupOption::new(kind, info);
            assert_eq!(option.kind(), kind);
            assert_eq!(option.info(), &info);
            assert_eq!(option.opponent(), Team::Lal);
        }
    }

    #[test]
    fn test_mirrored_keeps_id() {
        let info = MatchupInfo {
            id: MatchupId(3),
            team_a: Team::Mia,
            team_b: Team::Orl,
        };
        let m = info.mirrored();
        assert_eq!(m.id, info.id);
        assert_eq!(m.team_a, Team::Orl);
        assert_eq!(m.team_b, Team::Mia);
    }

    #[test]
    fn test_admits_relationships() {
        assert!(MatchupKind::TwoGameOppositeConference.admits(Team::Bos, Team::Lal));
        assert!(!MatchupKind::TwoGameOppositeConference.admits(Team::Bos, Team::Nyk));
        assert!(MatchupKind::FourGameInDivision.admits(Team::Bos, Team::Nyk));
        assert!(!MatchupKind::FourGameInDivision.admits(Team::Bos, Team::Chi));
        assert!(MatchupKind::ThreeGameInConferenceOutOfDivision.admits(Team::Bos, Team::Chi));
        assert!(!MatchupKind::FourGameInConferenceOutOfDivision.admits(Team::Bos, Team::Bos));
    }
}
