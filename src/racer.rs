//! Speculative parallel attempts.
//!
//! Season generation has no useful notion of partial progress: an attempt
//! either produces a full schedule or fails. Running several independent
//! attempts and keeping the first success cuts tail latency.
//!
//! # Algorithm
//!
//! 1. Build a dedicated pool of `workers` threads.
//! 2. Start one attempt per worker, each with its own [`StdRng`] seeded
//!    from the base seed and the worker index.
//! 3. The first attempt to succeed claims the [`StopSignal`]; its result is
//!    the only one delivered. Other attempts see the raised signal at their
//!    next checkpoint and wind down.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::RaceError;

/// Cooperative cancellation flag shared by racing attempts.
#[derive(Debug, Default)]
pub struct StopSignal {
    raised: AtomicBool,
}

impl StopSignal {
    pub fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Raises the signal. Idempotent.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Raises the signal and reports whether this call was the one that did.
    pub fn claim(&self) -> bool {
        self.raised
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

/// Seed for worker `worker` derived from the base `seed`.
pub fn worker_seed(seed: u64, worker: usize) -> u64 {
    seed ^ (worker as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Runs `workers` attempts in parallel and returns the first success.
///
/// `attempt` receives the worker index, that worker's RNG and the shared
/// stop signal, which it should poll between expensive steps.
///
/// At most one result is ever delivered, even when several attempts
/// succeed at nearly the same time.
///
/// # Errors
/// - `NoWorkers` if `workers` is zero.
/// - `ThreadPool` if the pool cannot be built.
/// - `AllAttemptsFailed` if no attempt succeeded.
///
/// # Example
///
/// ```
/// use league_schedule::racer::race_attempts;
///
/// let winner = race_attempts(4, 7, |worker, _rng, _stop| {
///     if worker == 3 { Ok(worker) } else { Err("unlucky") }
/// })
/// .unwrap();
/// assert_eq!(winner, 3);
/// ```
pub fn race_attempts<T, E, F>(workers: usize, seed: u64, attempt: F) -> Result<T, RaceError>
where
    T: Send,
    E: Display,
    F: Fn(usize, &mut StdRng, &StopSignal) -> Result<T, E> + Sync,
{
    if workers == 0 {
        return Err(RaceError::NoWorkers);
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("season-worker-{i}"))
        .build()?;
    let stop = StopSignal::new();

    let winner = pool.install(|| {
        (0..workers)
            .into_par_iter()
            .with_max_len(1)
            .find_map_any(|worker| {
                if stop.is_raised() {
                    return None;
                }
                let mut rng = StdRng::seed_from_u64(worker_seed(seed, worker));
                match attempt(worker, &mut rng, &stop) {
                    Ok(value) if stop.claim() => {
                        info!("worker {worker} won the race");
                        Some(value)
                    }
                    Ok(_) => {
                        debug!("worker {worker} succeeded after the race was decided");
                        None
                    }
                    Err(err) if stop.is_raised() => {
                        debug!("worker {worker} stopped: {err}");
                        None
                    }
                    Err(err) => {
                        warn!("worker {worker} failed: {err}");
                        None
                    }
                }
            })
    });

    winner.ok_or(RaceError::AllAttemptsFailed { workers })
}
