//! League topology: teams, divisions, conferences.
//!
//! The topology is static lookup data. Every team belongs to exactly one
//! division and every division to exactly one conference.
//!
//! | Conference | Divisions |
//! |------------|-----------|
//! | Eastern | Atlantic, Central, Southeast |
//! | Western | Pacific, Southwest, Northwest |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseTeamError;

/// Number of teams in the league.
pub const TEAM_COUNT: usize = 30;

/// Teams per division.
pub const TEAMS_PER_DIVISION: usize = 5;

/// A league team, identified by its three-letter abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Atl,
    Bos,
    Brk,
    Chi,
    Cho,
    Cle,
    Dal,
    Den,
    Det,
    Gsw,
    Hou,
    Ind,
    Lac,
    Lal,
    Mem,
    Mia,
    Mil,
    Min,
    Nop,
    Nyk,
    Okc,
    Orl,
    Phi,
    Pho,
    Por,
    Sac,
    Sas,
    Tor,
    Uta,
    Was,
}

/// A division of five teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    Atlantic,
    Central,
    Southeast,
    Pacific,
    Southwest,
    Northwest,
}

/// One of the two conferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conference {
    Eastern,
    Western,
}

impl Team {
    /// All teams, in index order.
    pub const ALL: [Team; TEAM_COUNT] = [
        Team::Atl,
        Team::Bos,
        Team::Brk,
        Team::Chi,
        Team::Cho,
        Team::Cle,
        Team::Dal,
        Team::Den,
        Team::Det,
        Team::Gsw,
        Team::Hou,
        Team::Ind,
        Team::Lac,
        Team::Lal,
        Team::Mem,
        Team::Mia,
        Team::Mil,
        Team::Min,
        Team::Nop,
        Team::Nyk,
        Team::Okc,
        Team::Orl,
        Team::Phi,
        Team::Pho,
        Team::Por,
        Team::Sac,
        Team::Sas,
        Team::Tor,
        Team::Uta,
        Team::Was,
    ];

    /// Dense index in `0..TEAM_COUNT`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Team::index`].
    pub fn from_index(index: usize) -> Option<Team> {
        Self::ALL.get(index).copied()
    }

    /// Single-bit mask for occupancy sets (`TEAM_COUNT` fits in a `u32`).
    #[inline]
    pub fn bit(self) -> u32 {
        1 << self.index()
    }

    /// Lowercase three-letter abbreviation.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Team::Atl => "atl",
            Team::Bos => "bos",
            Team::Brk => "brk",
            Team::Chi => "chi",
            Team::Cho => "cho",
            Team::Cle => "cle",
            Team::Dal => "dal",
            Team::Den => "den",
            Team::Det => "det",
            Team::Gsw => "gsw",
            Team::Hou => "hou",
            Team::Ind => "ind",
            Team::Lac => "lac",
            Team::Lal => "lal",
            Team::Mem => "mem",
            Team::Mia => "mia",
            Team::Mil => "mil",
            Team::Min => "min",
            Team::Nop => "nop",
            Team::Nyk => "nyk",
            Team::Okc => "okc",
            Team::Orl => "orl",
            Team::Phi => "phi",
            Team::Pho => "pho",
            Team::Por => "por",
            Team::Sac => "sac",
            Team::Sas => "sas",
            Team::Tor => "tor",
            Team::Uta => "uta",
            Team::Was => "was",
        }
    }

    /// The team's division.
    pub fn division(self) -> Division {
        match self {
            Team::Bos | Team::Brk | Team::Nyk | Team::Phi | Team::Tor => Division::Atlantic,
            Team::Chi | Team::Cle | Team::Det | Team::Ind | Team::Mil => Division::Central,
            Team::Atl | Team::Cho | Team::Mia | Team::Orl | Team::Was => Division::Southeast,
            Team::Gsw | Team::Lac | Team::Lal | Team::Pho | Team::Sac => Division::Pacific,
            Team::Dal | Team::Hou | Team::Mem | Team::Nop | Team::Sas => Division::Southwest,
            Team::Den | Team::Min | Team::Okc | Team::Por | Team::Uta => Division::Northwest,
        }
    }

    /// The team's conference.
    #[inline]
    pub fn conference(self) -> Conference {
        self.division().conference()
    }

    /// All 15 teams of the other conference.
    pub fn opposite_conference_teams(self) -> Vec<Team> {
        let other = self.conference().opposite();
        Self::ALL
            .iter()
            .copied()
            .filter(|t| t.conference() == other)
            .collect()
    }

    /// The other 4 teams of this team's division.
    pub fn division_rivals(self) -> Vec<Team> {
        Self::ALL
            .iter()
            .copied()
            .filter(|&t| t != self && t.division() == self.division())
            .collect()
    }

    /// The 10 teams in the same conference but a different division.
    pub fn conference_non_division_teams(self) -> Vec<Team> {
        Self::ALL
            .iter()
            .copied()
            .filter(|t| t.conference() == self.conference() && t.division() != self.division())
            .collect()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.abbreviation().to_uppercase())
    }
}

impl FromStr for Team {
    type Err = ParseTeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.abbreviation() == wanted)
            .ok_or_else(|| ParseTeamError {
                input: s.to_string(),
            })
    }
}

impl Division {
    /// All divisions, eastern first.
    pub const ALL: [Division; 6] = [
        Division::Atlantic,
        Division::Central,
        Division::Southeast,
        Division::Pacific,
        Division::Southwest,
        Division::Northwest,
    ];

    /// Conference this division belongs to.
    pub fn conference(self) -> Conference {
        match self {
            Division::Atlantic | Division::Central | Division::Southeast => Conference::Eastern,
            Division::Pacific | Division::Southwest | Division::Northwest => Conference::Western,
        }
    }

    /// Teams in this division.
    pub fn teams(self) -> Vec<Team> {
        Team::ALL
            .iter()
            .copied()
            .filter(|t| t.division() == self)
            .collect()
    }
}

impl Conference {
    /// Both conferences.
    pub const ALL: [Conference; 2] = [Conference::Eastern, Conference::Western];

    /// The other conference.
    pub fn opposite(self) -> Conference {
        match self {
            Conference::Eastern => Conference::Western,
            Conference::Western => Conference::Eastern,
        }
    }
}
