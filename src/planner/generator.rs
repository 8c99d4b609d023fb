//! Randomized matchup plan generation.
//!
//! # Algorithm
//!
//! Teams are processed in random order. For team `t`:
//!
//! 1. Pair `t` with every opposite-conference team (two-game).
//! 2. Pair `t` with every division rival (four-game).
//! 3. Split the same-conference, other-division teams not yet linked to
//!    `t` into four-game and three-game opponents, subject to each
//!    candidate's remaining quota.
//!
//! Step 3 can run into a dead-end: a quota of `t` that no remaining
//! candidate can absorb. The partial plan is then thrown away and a fresh
//! attempt starts with a new order. Every completed attempt is valid; the
//! number of attempts is random, so it is capped.
//!
//! # Complexity
//! O(n²) per attempt for n teams.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use super::MatchupPlan;
use crate::error::PlanError;
use crate::models::{MatchupKind, Team};
use crate::racer::StopSignal;

/// Default cap on planner restarts.
pub const DEFAULT_MAX_PLAN_ATTEMPTS: usize = 10_000;

/// A quota of `team` cannot be met from the candidates left to it.
#[derive(Debug, Clone, Copy)]
struct DeadEnd {
    team: Team,
}

/// Generates complete [`MatchupPlan`]s by randomized construction with
/// whole-plan restart.
///
/// # Example
///
/// ```
/// use league_schedule::planner::MatchupPlanner;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let plan = MatchupPlanner::new().generate(&mut rng).unwrap();
/// assert!(plan.is_complete());
/// assert_eq!(plan.total_games(), 1230);
/// ```
#[derive(Debug, Clone)]
pub struct MatchupPlanner {
    max_attempts: usize,
}

impl MatchupPlanner {
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_PLAN_ATTEMPTS,
        }
    }

    /// Sets the restart cap.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generates a complete plan.
    ///
    /// # Errors
    /// `PlanError::Exhausted` once every attempt hit a dead-end.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MatchupPlan, PlanError> {
        self.generate_until(rng, &StopSignal::new())
    }

    /// Like [`generate`](Self::generate), but gives up with
    /// `PlanError::Cancelled` when `stop` is raised. The signal is checked
    /// before every attempt.
    pub fn generate_until<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        stop: &StopSignal,
    ) -> Result<MatchupPlan, PlanError> {
        for attempt in 1..=self.max_attempts {
            if stop.is_raised() {
                debug!("matchup planning cancelled before attempt {attempt}");
                return Err(PlanError::Cancelled);
            }

            match try_plan(rng) {
                Ok(plan) => {
                    info!("matchup plan found after {attempt} attempt(s)");
                    return Ok(plan);
                }
                Err(DeadEnd { team }) => {
                    debug!("attempt {attempt}: dead-end while splitting {team}");
                }
            }
        }

        Err(PlanError::Exhausted {
            attempts: self.max_attempts,
        })
    }
}

impl Default for MatchupPlanner {
    fn default() -> Self {
        Self::new()
    }
}

/// One attempt from an empty plan.
fn try_plan<R: Rng + ?Sized>(rng: &mut R) -> Result<MatchupPlan, DeadEnd> {
    let mut plan = MatchupPlan::new();
    let mut order = Team::ALL;
    order.shuffle(rng);

    for team in order {
        let mut opposite = team.opposite_conference_teams();
        opposite.shuffle(rng);
        for other in opposite {
            plan.insert(team, other, MatchupKind::TwoGameOppositeConference);
        }

        let mut rivals = team.division_rivals();
        rivals.shuffle(rng);
        for other in rivals {
            plan.insert(team, other, MatchupKind::FourGameInDivision);
        }

        let mut candidates = team.conference_non_division_teams();
        candidates.shuffle(rng);
        let (four_game, three_game) = split_conference_opponents(&plan, team, &candidates)?;

        for other in four_game {
            plan.insert(team, other, MatchupKind::FourGameInConferenceOutOfDivision)
                .ok_or(DeadEnd { team })?;
        }
        for other in three_game {
            plan.insert(team, other, MatchupKind::ThreeGameInConferenceOutOfDivision)
                .ok_or(DeadEnd { team })?;
        }

        if !plan.is_complete_for(team) {
            return Err(DeadEnd { team });
        }
    }

    Ok(plan)
}

/// Chooses `team`'s remaining four-game and three-game conference opponents.
///
/// Candidates already linked to `team` are skipped. The rest are pooled by
/// which of the two kinds they can still accept; single-kind pools are
/// drained before the shared pool.
fn split_conference_opponents(
    plan: &MatchupPlan,
    team: Team,
    candidates: &[Team],
) -> Result<(Vec<Team>, Vec<Team>), DeadEnd> {
    let four = MatchupKind::FourGameInConferenceOutOfDivision;
    let three = MatchupKind::ThreeGameInConferenceOutOfDivision;
    let four_needed = four.quota().saturating_sub(plan.count(team, four));
    let three_needed = three.quota().saturating_sub(plan.count(team, three));

    let mut four_only = Vec::new();
    let mut three_only = Vec::new();
    let mut either = Vec::new();

    for &other in candidates {
        if plan.is_linked(team, other) {
            continue;
        }
        match (plan.has_capacity(other, four), plan.has_capacity(other, three)) {
            (true, true) => either.push(other),
            (true, false) => four_only.push(other),
            (false, true) => three_only.push(other),
            (false, false) => {}
        }
    }

    let four_game = drain(&mut four_only, &mut either, four_needed).ok_or(DeadEnd { team })?;
    let three_game = drain(&mut three_only, &mut either, three_needed).ok_or(DeadEnd { team })?;

    Ok((four_game, three_game))
}

/// Takes `needed` teams, from `preferred` first, then `shared`.
fn drain(preferred: &mut Vec<Team>, shared: &mut Vec<Team>, needed: usize) -> Option<Vec<Team>> {
    let mut picked = Vec::with_capacity(needed);
    while picked.len() < needed {
        picked.push(preferred.pop().or_else(|| shared.pop())?);
    }
    Some(picked)
}
