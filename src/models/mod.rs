//! League scheduling domain models.
//!
//! Static topology (teams, divisions, conferences), the per-attempt
//! entities produced by planning and expansion, and the season calendar
//! and schedule.
//!
//! | Type | Lifetime |
//! |------|----------|
//! | `Team`, `Division`, `Conference` | process-wide constants |
//! | `MatchupOption`, `Game`, `Series` | one generation attempt |
//! | `LeagueCalendar` | one season configuration |
//! | `Schedule` | result of a successful attempt, owned by the caller |

mod calendar;
mod game;
mod matchup;
mod schedule;
mod team;

pub use calendar::{
    DayType, LeagueCalendar, LeagueDay, DAYS_IN_REGULAR_SEASON, DEFAULT_ALL_STAR_BREAK,
};
pub use game::{Game, GameId, Series};
pub use matchup::{
    MatchupId, MatchupInfo, MatchupKind, MatchupOption, GAMES_PER_TEAM, OPPONENTS_PER_TEAM,
};
pub use schedule::Schedule;
pub use team::{Conference, Division, Team, TEAMS_PER_DIVISION, TEAM_COUNT};
