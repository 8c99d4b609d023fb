//! Per-day game capacity.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ScheduleError;
use crate::models::LeagueCalendar;

/// Target number of games for each day slot.
///
/// Reserved days always have capacity 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCapacity {
    per_day: Vec<usize>,
}

impl DayCapacity {
    /// Spreads `total_games` as evenly as possible over the playable days.
    ///
    /// Every playable day gets `total / playable` games; the first
    /// `total % playable` playable days get one more.
    pub fn even(total_games: usize, calendar: &LeagueCalendar) -> Self {
        let mut per_day = vec![0; calendar.len()];
        let playable = calendar.playable_count();
        if playable == 0 {
            return Self { per_day };
        }

        let base = total_games / playable;
        let extra = total_games % playable;
        for (n, day) in calendar.playable_days().enumerate() {
            per_day[day.index] = if n < extra { base + 1 } else { base };
        }
        Self { per_day }
    }

    /// Uses explicit counts, one per day slot. Reserved slots are forced to 0.
    ///
    /// # Errors
    /// `CapacityLength` if `counts` does not cover the calendar exactly.
    pub fn from_counts(counts: Vec<usize>, calendar: &LeagueCalendar) -> Result<Self, ScheduleError> {
        if counts.len() != calendar.len() {
            return Err(ScheduleError::CapacityLength {
                expected: calendar.len(),
                actual: counts.len(),
            });
        }
        let per_day = counts
            .into_iter()
            .enumerate()
            .map(|(i, c)| if calendar.is_reserved(i) { 0 } else { c })
            .collect();
        Ok(Self { per_day })
    }

    /// Permutes the counts among playable days.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, calendar: &LeagueCalendar, rng: &mut R) {
        let slots: Vec<usize> = calendar
            .playable_days()
            .map(|d| d.index)
            .filter(|&i| i < self.per_day.len())
            .collect();
        let mut counts: Vec<usize> = slots.iter().map(|&i| self.per_day[i]).collect();
        counts.shuffle(rng);
        for (i, c) in slots.into_iter().zip(counts) {
            self.per_day[i] = c;
        }
    }

    /// Capacity of day `index` (0 outside the calendar).
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.per_day.get(index).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.per_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.per_day.is_empty()
    }

    pub fn total(&self) -> usize {
        self.per_day.iter().sum()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.per_day
    }
}
