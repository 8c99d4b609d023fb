//! Day assignment and KPI evaluation.
//!
//! Places expanded games onto the days of a [`LeagueCalendar`](crate::models::LeagueCalendar)
//! and measures the resulting season.
//!
//! # Algorithm
//!
//! `DayScheduler` is a greedy, capacity-driven sweep: a strict pass that
//! forbids back-to-backs, a relaxed pass that forbids three game days in a
//! row, then a fallback for whatever is left. It is not optimal, but it is
//! fast enough to run inside every parallel attempt.
//!
//! # KPI
//!
//! `SeasonKpi` reports back-to-backs, daily load and fallback placements.

mod board;
mod capacity;
mod day;
mod kpi;

pub use board::{Adjacency, DayBoard};
pub use capacity::DayCapacity;
pub use day::DayScheduler;
pub use kpi::SeasonKpi;
