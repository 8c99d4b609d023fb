//! End-to-end season generation.
//!
//! One attempt runs the whole pipeline from an empty plan:
//!
//! 1. Matchup planning (restarts on dead-ends)
//! 2. Series expansion into 1230 games
//! 3. Shuffle of the game order
//! 4. Day assignment
//!
//! [`SeasonGenerator::generate`] races several such attempts and keeps the
//! first schedule produced.

use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::SeasonConfig;
use crate::error::{PlanError, SeasonError};
use crate::models::{LeagueCalendar, Schedule};
use crate::planner::{expand_to_games, MatchupPlanner};
use crate::racer::{race_attempts, StopSignal};
use crate::scheduler::DayScheduler;

/// Season generator for a validated configuration.
///
/// # Example
///
/// ```
/// use league_schedule::config::SeasonConfig;
/// use league_schedule::season::SeasonGenerator;
///
/// let config = SeasonConfig::new().with_holiday(56).with_workers(2).with_seed(7);
/// let schedule = SeasonGenerator::new(config).unwrap().generate().unwrap();
/// assert_eq!(schedule.game_count(), 1230);
/// assert!(schedule.games_on(56).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SeasonGenerator {
    config: SeasonConfig,
    planner: MatchupPlanner,
    scheduler: DayScheduler,
}

impl SeasonGenerator {
    /// Validates `config` and prepares the pipeline.
    pub fn new(config: SeasonConfig) -> Result<Self, SeasonError> {
        config.validate()?;
        let calendar = config.calendar()?;
        Ok(Self {
            planner: MatchupPlanner::new().with_max_attempts(config.max_plan_attempts),
            scheduler: DayScheduler::new(calendar),
            config,
        })
    }

    pub fn config(&self) -> &SeasonConfig {
        &self.config
    }

    pub fn calendar(&self) -> &LeagueCalendar {
        self.scheduler.calendar()
    }

    /// Runs one full attempt with `rng`.
    ///
    /// `stop` is checked between planner restarts and before day
    /// assignment; once raised the attempt ends with `PlanError::Cancelled`.
    pub fn run_attempt<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        stop: &StopSignal,
    ) -> Result<Schedule, SeasonError> {
        let plan = self.planner.generate_until(rng, stop)?;
        let mut games = expand_to_games(&plan);
        games.shuffle(rng);

        if stop.is_raised() {
            return Err(PlanError::Cancelled.into());
        }
        Ok(self.scheduler.schedule_season(&games, rng)?)
    }

    /// Races `workers` attempts seeded from the configured seed, or a
    /// random one, and returns the first schedule.
    pub fn generate(&self) -> Result<Schedule, SeasonError> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        self.generate_with_seed(seed)
    }

    /// Like [`generate`](Self::generate) with an explicit base seed.
    ///
    /// With a single worker the result is a pure function of `seed`.
    pub fn generate_with_seed(&self, seed: u64) -> Result<Schedule, SeasonError> {
        info!(
            "generating season: {} day(s), {} worker(s), seed {seed}",
            self.calendar().len(),
            self.config.workers
        );
        let schedule = race_attempts(self.config.workers, seed, |_, rng, stop| {
            self.run_attempt(rng, stop)
        })?;
        info!(
            "season generated with {} relaxed placement(s)",
            schedule.relaxed_placements().len()
        );
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::models::{Team, GAMES_PER_TEAM};
    use crate::scheduler::SeasonKpi;
    use crate::validation::validate_schedule;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn config() -> SeasonConfig {
        SeasonConfig::new().with_holiday(56).with_workers(2)
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = SeasonGenerator::new(SeasonConfig::new().with_workers(0)).unwrap_err();
        assert!(matches!(err, SeasonError::Config(ConfigError::NoWorkers)));

        let err = SeasonGenerator::new(SeasonConfig::new().with_holiday(118)).unwrap_err();
        assert!(matches!(
            err,
            SeasonError::Config(ConfigError::HolidayInBreak { day: 118 })
        ));
    }

    #[test]
    fn test_run_attempt() {
        init_logger();
        let generator = SeasonGenerator::new(config()).unwrap();
        let schedule = generator
            .run_attempt(&mut StdRng::seed_from_u64(30), &StopSignal::new())
            .unwrap();

        assert!(validate_schedule(&schedule, 1230).is_ok());
        for team in Team::ALL {
            assert_eq!(schedule.game_count_for(team), GAMES_PER_TEAM);
        }
    }

    #[test]
    fn test_run_attempt_cancelled() {
        let generator = SeasonGenerator::new(config()).unwrap();
        let stop = StopSignal::new();
        stop.raise();
        let err = generator
            .run_attempt(&mut StdRng::seed_from_u64(1), &stop)
            .unwrap_err();
        assert!(matches!(err, SeasonError::Plan(PlanError::Cancelled)));
    }

    #[test]
    fn test_generate() {
        init_logger();
        let generator = SeasonGenerator::new(config().with_seed(99)).unwrap();
        let schedule = generator.generate().unwrap();

        assert!(validate_schedule(&schedule, 1230).is_ok());
        let kpi = SeasonKpi::calculate(&schedule);
        assert_eq!(kpi.relaxed_placements, schedule.relaxed_placements().len());
        assert!(kpi.games_by_team.values().all(|&g| g == GAMES_PER_TEAM));
        for day in generator.config().all_star_break.iter().copied().chain([56]) {
            assert!(schedule.games_on(day).is_empty());
        }
    }

    #[test]
    fn test_single_worker_is_deterministic() {
        let generator = SeasonGenerator::new(config().with_workers(1)).unwrap();
        let first = generator.generate_with_seed(2024).unwrap();
        let second = generator.generate_with_seed(2024).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shorter_season() {
        let config = SeasonConfig::new()
            .with_days(162)
            .with_all_star_break([100, 101, 102])
            .with_workers(2)
            .with_seed(3);
        let generator = SeasonGenerator::new(config).unwrap();
        let schedule = generator.generate().unwrap();
        assert_eq!(generator.calendar().len(), 162);
        assert!(validate_schedule(&schedule, 1230).is_ok());
    }
}
