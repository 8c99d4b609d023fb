//! League days and the season calendar.
//!
//! The season is a dense sequence of day slots indexed from 0. Some slots
//! are reserved (all-star break, an optional holiday) and never host games.
//!
//! # Adjacency
//! `previous` and `next` are plain index arithmetic. Reserved days are
//! still neighbours; they simply never contain games, so they break any
//! run of consecutive game days. Past either end of the season there is
//! no day, which is `None` rather than an error.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Day slots in a regular season.
pub const DAYS_IN_REGULAR_SEASON: usize = 174;

/// Default all-star break slots.
pub const DEFAULT_ALL_STAR_BREAK: [usize; 5] = [116, 117, 118, 119, 120];

/// What a day slot is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    /// Regular playable day.
    Normal,
    /// Reserved for the all-star break.
    AllStarBreak,
    /// Reserved fixed holiday.
    Holiday,
}

impl DayType {
    #[inline]
    pub fn is_reserved(self) -> bool {
        !matches!(self, DayType::Normal)
    }
}

/// One slot of the season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueDay {
    /// 0-based position in the season.
    pub index: usize,
    pub day_type: DayType,
}

impl LeagueDay {
    #[inline]
    pub fn is_reserved(&self) -> bool {
        self.day_type.is_reserved()
    }
}

/// The fixed day sequence of one season.
///
/// Built once and validated at construction, so every index handed out
/// by the calendar is in range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueCalendar {
    days: Vec<DayType>,
}

impl LeagueCalendar {
    /// Builds a calendar of `days` slots.
    ///
    /// # Errors
    /// - `EmptySeason` if `days` is zero.
    /// - `ReservedDayOutOfRange` if a break day or the holiday is `>= days`.
    /// - `HolidayInBreak` if the holiday collides with a break day.
    pub fn new(
        days: usize,
        all_star_break: &[usize],
        holiday: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if days == 0 {
            return Err(ConfigError::EmptySeason);
        }

        let mut types = vec![DayType::Normal; days];
        for &day in all_star_break {
            let slot = types
                .get_mut(day)
                .ok_or(ConfigError::ReservedDayOutOfRange { day, days })?;
            *slot = DayType::AllStarBreak;
        }

        if let Some(day) = holiday {
            let slot = types
                .get_mut(day)
                .ok_or(ConfigError::ReservedDayOutOfRange { day, days })?;
            if *slot == DayType::AllStarBreak {
                return Err(ConfigError::HolidayInBreak { day });
            }
            *slot = DayType::Holiday;
        }

        Ok(Self { days: types })
    }

    /// 174-day regular season with the default all-star break and no holiday.
    pub fn regular_season() -> Self {
        let mut days = vec![DayType::Normal; DAYS_IN_REGULAR_SEASON];
        for day in DEFAULT_ALL_STAR_BREAK {
            days[day] = DayType::AllStarBreak;
        }
        Self { days }
    }

    /// Number of day slots, reserved ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The day at `index`, or `None` outside the season.
    pub fn day(&self, index: usize) -> Option<LeagueDay> {
        self.days
            .get(index)
            .map(|&day_type| LeagueDay { index, day_type })
    }

    /// All days in order.
    pub fn days(&self) -> impl Iterator<Item = LeagueDay> + '_ {
        self.days
            .iter()
            .enumerate()
            .map(|(index, &day_type)| LeagueDay { index, day_type })
    }

    /// Non-reserved days in order.
    pub fn playable_days(&self) -> impl Iterator<Item = LeagueDay> + '_ {
        self.days().filter(|d| !d.is_reserved())
    }

    pub fn playable_count(&self) -> usize {
        self.days.iter().filter(|t| !t.is_reserved()).count()
    }

    /// Whether the slot at `index` is reserved. Out-of-range is not reserved.
    pub fn is_reserved(&self, index: usize) -> bool {
        self.days.get(index).is_some_and(|t| t.is_reserved())
    }

    /// Day before `day`, if any.
    pub fn previous(&self, day: LeagueDay) -> Option<LeagueDay> {
        day.index.checked_sub(1).and_then(|i| self.day(i))
    }

    /// Day after `day`, if any.
    pub fn next(&self, day: LeagueDay) -> Option<LeagueDay> {
        self.day(day.index + 1)
    }
}

impl Default for LeagueCalendar {
    fn default() -> Self {
        Self::regular_season()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_season_layout() {
        let cal = LeagueCalendar::regular_season();
        assert_eq!(cal.len(), DAYS_IN_REGULAR_SEASON);
        assert_eq!(cal.playable_count(), 169);
        for day in DEFAULT_ALL_STAR_BREAK {
            assert_eq!(cal.day(day).unwrap().day_type, DayType::AllStarBreak);
        }
        assert!(!cal.is_reserved(115));
        assert!(!cal.is_reserved(121));
    }

    #[test]
    fn test_holiday_reserved() {
        let cal = LeagueCalendar::new(174, &DEFAULT_ALL_STAR_BREAK, Some(56)).unwrap();
        assert_eq!(cal.day(56).unwrap().day_type, DayType::Holiday);
        assert_eq!(cal.playable_count(), 168);
        assert!(cal.playable_days().all(|d| d.index != 56));
    }

    #[test]
    fn test_boundaries_are_absent() {
        let cal = LeagueCalendar::regular_season();
        let first = cal.day(0).unwrap();
        let last = cal.day(DAYS_IN_REGULAR_SEASON - 1).unwrap();
        assert_eq!(cal.previous(first), None);
        assert_eq!(cal.next(last), None);
        assert_eq!(cal.next(first).map(|d| d.index), Some(1));
        assert_eq!(cal.previous(last).map(|d| d.index), Some(172));
        assert_eq!(cal.day(DAYS_IN_REGULAR_SEASON), None);
    }

    #[test]
    fn test_invalid_calendars() {
        assert_eq!(LeagueCalendar::new(0, &[], None), Err(ConfigError::EmptySeason));
        assert_eq!(
            LeagueCalendar::new(10, &[10], None),
            Err(ConfigError::ReservedDayOutOfRange { day: 10, days: 10 })
        );
        assert_eq!(
            LeagueCalendar::new(10, &[], Some(12)),
            Err(ConfigError::ReservedDayOutOfRange { day: 12, days: 10 })
        );
        assert_eq!(
            LeagueCalendar::new(10, &[3, 4], Some(4)),
            Err(ConfigError::HolidayInBreak { day: 4 })
        );
    }

    #[test]
    fn test_default_matches_new() {
        let built = LeagueCalendar::new(DAYS_IN_REGULAR_SEASON, &DEFAULT_ALL_STAR_BREAK, None).unwrap();
        assert_eq!(built, LeagueCalendar::default());
    }
}
