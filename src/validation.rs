//! Integrity checks for matchup plans and finished schedules.
//!
//! Detects:
//! - Quota, opponent and game-count mismatches in a plan
//! - Options without a mirrored record on the opponent's side
//! - Missing or duplicated games in a schedule
//! - Teams playing twice on one day
//! - Games on reserved days
//! - Three consecutive game days not accounted for by a fallback placement
//!
//! All problems are collected; nothing stops at the first error.

use std::collections::HashSet;

use crate::models::{GameId, MatchupKind, Schedule, Team, GAMES_PER_TEAM, OPPONENTS_PER_TEAM};
use crate::planner::MatchupPlan;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A team holds the wrong number of options of some kind.
    QuotaMismatch,
    /// A team does not face every other team exactly once.
    OpponentCount,
    /// Games for a team, or in total, differ from the expected count.
    GameCountMismatch,
    /// An option has no matching record on the opponent's side.
    NonReciprocal,
    /// The same game id appears more than once.
    DuplicateGame,
    /// A team has more than one game on a day.
    DoubleBooked,
    /// A game sits on an all-star break day or holiday.
    ReservedDayOccupied,
    /// A team plays three consecutive days.
    ThreeInARow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a matchup plan.
///
/// Checks, per team:
/// 1. Option count of every [`MatchupKind`] equals its quota
/// 2. 29 distinct opponents
/// 3. 82 games
/// 4. Every option is mirrored on the opponent's side with the same id and kind
pub fn validate_plan(plan: &MatchupPlan) -> ValidationResult {
    let mut errors = Vec::new();

    for (team, options) in plan.iter() {
        for kind in MatchupKind::ALL {
            let count = plan.count(team, kind);
            if count != kind.quota() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::QuotaMismatch,
                    format!("{team}: {count} {kind:?} options, expected {}", kind.quota()),
                ));
            }
        }

        let opponents: HashSet<Team> = options.iter().map(|o| o.opponent()).collect();
        if opponents.len() != OPPONENTS_PER_TEAM || opponents.len() != options.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::OpponentCount,
                format!(
                    "{team}: {} options over {} distinct opponents, expected {OPPONENTS_PER_TEAM}",
                    options.len(),
                    opponents.len()
                ),
            ));
        }

        let games = plan.game_count(team);
        if games != GAMES_PER_TEAM {
            errors.push(ValidationError::new(
                ValidationErrorKind::GameCountMismatch,
                format!("{team}: {games} games, expected {GAMES_PER_TEAM}"),
            ));
        }

        for option in options {
            let info = option.info();
            let mirrored = plan.options(option.opponent()).iter().any(|m| {
                m.kind() == option.kind() && *m.info() == info.mirrored()
            });
            if !mirrored {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonReciprocal,
                    format!(
                        "{team}: matchup {:?} against {} has no mirror",
                        info.id,
                        option.opponent()
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a finished schedule.
///
/// Checks:
/// 1. `expected_games` games in total, no game id twice
/// 2. No team plays twice on one day
/// 3. Reserved days are empty
/// 4. No team plays three consecutive days, unless one of those games is
///    listed in [`Schedule::relaxed_placements`]
pub fn validate_schedule(schedule: &Schedule, expected_games: usize) -> ValidationResult {
    let mut errors = Vec::new();

    let total = schedule.game_count();
    if total != expected_games {
        errors.push(ValidationError::new(
            ValidationErrorKind::GameCountMismatch,
            format!("{total} games scheduled, expected {expected_games}"),
        ));
    }

    let mut ids = HashSet::new();
    for (day, games) in schedule.iter() {
        if day.is_reserved() && !games.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedDayOccupied,
                format!("{} game(s) on reserved day {}", games.len(), day.index),
            ));
        }

        let mut seen = 0u32;
        for game in games {
            if !ids.insert(game.id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateGame,
                    format!("game {:?} scheduled more than once", game.id),
                ));
            }
            if seen & game.mask() != 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DoubleBooked,
                    format!(
                        "day {}: {} vs {} overlaps another game",
                        day.index, game.team_a, game.team_b
                    ),
                ));
            }
            seen |= game.mask();
        }
    }

    let relaxed: HashSet<GameId> = schedule.relaxed_placements().iter().copied().collect();
    let days = schedule.calendar().len();
    for team in Team::ALL {
        for end in 2..days {
            let run: Vec<GameId> = (end - 2..=end)
                .filter_map(|d| schedule.game_for(team, d).map(|g| g.id))
                .collect();
            if run.len() == 3 && !run.iter().any(|id| relaxed.contains(id)) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ThreeInARow,
                    format!("{team} plays days {}..={end}", end - 2),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Game, LeagueCalendar};
    use crate::planner::MatchupPlanner;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    fn game(id: u32, a: Team, b: Team) -> Game {
        Game::new(GameId(id), a, b)
    }

    #[test]
    fn test_generated_plan_is_valid() {
        let plan = MatchupPlanner::new()
            .generate(&mut StdRng::seed_from_u64(12))
            .unwrap();
        assert!(validate_plan(&plan).is_ok());
    }

    #[test]
    fn test_empty_plan() {
        let errors = validate_plan(&MatchupPlan::new()).unwrap_err();
        // Four quotas, opponents and games for each of 30 teams.
        assert_eq!(errors.len(), 30 * 6);
        assert!(errors.iter().all(|e| e.kind != ValidationErrorKind::NonReciprocal));
    }

    #[test]
    fn test_partial_plan_reports_affected_teams() {
        let mut plan = MatchupPlan::new();
        plan.insert(Team::Bos, Team::Nyk, MatchupKind::FourGameInDivision);

        let errors = validate_plan(&plan).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.message == "BOS: 4 games, expected 82"));
        assert!(errors
            .iter()
            .any(|e| e.message == "NYK: 1 options over 1 distinct opponents, expected 29"));
        assert!(errors.iter().all(|e| e.kind != ValidationErrorKind::NonReciprocal));
    }

    #[test]
    fn test_valid_schedule() {
        let calendar = LeagueCalendar::new(5, &[3], None).unwrap();
        let schedule = Schedule::from_parts(
            calendar,
            vec![
                vec![game(0, Team::Bos, Team::Nyk), game(1, Team::Chi, Team::Mil)],
                vec![],
                vec![game(2, Team::Bos, Team::Chi)],
                vec![],
                vec![],
            ],
            vec![],
        );
        assert!(validate_schedule(&schedule, 3).is_ok());
    }

    #[test]
    fn test_game_count_and_duplicates() {
        let calendar = LeagueCalendar::new(3, &[], None).unwrap();
        let g = game(0, Team::Bos, Team::Nyk);
        let schedule = Schedule::from_parts(calendar, vec![vec![g], vec![], vec![g]], vec![]);

        let kinds = kinds(validate_schedule(&schedule, 3));
        assert!(kinds.contains(&ValidationErrorKind::GameCountMismatch));
        assert!(kinds.contains(&ValidationErrorKind::DuplicateGame));
    }

    #[test]
    fn test_double_booked() {
        let calendar = LeagueCalendar::new(2, &[], None).unwrap();
        let schedule = Schedule::from_parts(
            calendar,
            vec![
                vec![game(0, Team::Bos, Team::Nyk), game(1, Team::Nyk, Team::Phi)],
                vec![],
            ],
            vec![],
        );
        assert_eq!(
            kinds(validate_schedule(&schedule, 2)),
            vec![ValidationErrorKind::DoubleBooked]
        );
    }

    #[test]
    fn test_reserved_day_occupied() {
        let calendar = LeagueCalendar::new(3, &[1], None).unwrap();
        let schedule = Schedule::from_parts(
            calendar,
            vec![vec![], vec![game(0, Team::Bos, Team::Nyk)], vec![]],
            vec![],
        );
        assert_eq!(
            kinds(validate_schedule(&schedule, 1)),
            vec![ValidationErrorKind::ReservedDayOccupied]
        );
    }

    #[test]
    fn test_three_in_a_row() {
        let calendar = LeagueCalendar::new(3, &[], None).unwrap();
        let days = vec![
            vec![game(0, Team::Bos, Team::Nyk)],
            vec![game(1, Team::Bos, Team::Phi)],
            vec![game(2, Team::Bos, Team::Tor)],
        ];

        let strict = Schedule::from_parts(calendar.clone(), days.clone(), vec![]);
        assert_eq!(
            kinds(validate_schedule(&strict, 3)),
            vec![ValidationErrorKind::ThreeInARow]
        );

        let excused = Schedule::from_parts(calendar, days, vec![GameId(1)]);
        assert!(validate_schedule(&excused, 3).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let calendar = LeagueCalendar::new(3, &[2], None).unwrap();
        let schedule = Schedule::from_parts(
            calendar,
            vec![
                vec![game(0, Team::Bos, Team::Nyk), game(1, Team::Bos, Team::Phi)],
                vec![],
                vec![game(2, Team::Chi, Team::Mil)],
            ],
            vec![],
        );
        let errors = validate_schedule(&schedule, 5).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
