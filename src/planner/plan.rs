//! Per-team matchup option sets.

use serde::Serialize;

use crate::models::{MatchupId, MatchupInfo, MatchupKind, MatchupOption, Team, TEAM_COUNT};

/// Matchup options of every team.
///
/// Each option is stored twice, once per side, under the same
/// [`MatchupId`]. [`MatchupPlan::insert`] is the only mutator and keeps
/// both sides within quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchupPlan {
    options: Vec<Vec<MatchupOption>>,
    counts: Vec<[usize; 4]>,
    next_id: u32,
}

impl MatchupPlan {
    /// Creates a plan with no options.
    pub fn new() -> Self {
        Self {
            options: vec![Vec::new(); TEAM_COUNT],
            counts: vec![[0; 4]; TEAM_COUNT],
            next_id: 0,
        }
    }

    /// Options recorded for `team`, each seen from `team`'s side.
    pub fn options(&self, team: Team) -> &[MatchupOption] {
        &self.options[team.index()]
    }

    /// Iterates all teams with their options.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &[MatchupOption])> + '_ {
        Team::ALL
            .iter()
            .map(move |&team| (team, self.options(team)))
    }

    /// Options of `kind` held by `team`.
    #[inline]
    pub fn count(&self, team: Team, kind: MatchupKind) -> usize {
        self.counts[team.index()][kind.slot()]
    }

    /// Whether `team` can take one more option of `kind`.
    #[inline]
    pub fn has_capacity(&self, team: Team, kind: MatchupKind) -> bool {
        self.count(team, kind) < kind.quota()
    }

    /// Whether `a` and `b` already share an option.
    pub fn is_linked(&self, a: Team, b: Team) -> bool {
        self.options(a).iter().any(|o| o.opponent() == b)
    }

    /// Records a matchup between `a` and `b` on both sides.
    ///
    /// Both sides are validated before either is touched: the teams must
    /// differ, fit the relationship `kind` describes, not already share an
    /// option, and both have remaining quota for `kind`. A rejected insert
    /// changes nothing and returns `None`.
    pub fn insert(&mut self, a: Team, b: Team, kind: MatchupKind) -> Option<MatchupId> {
        if !kind.admits(a, b)
            || !self.has_capacity(a, kind)
            || !self.has_capacity(b, kind)
            || self.is_linked(a, b)
        {
            return None;
        }

        let id = MatchupId(self.next_id);
        self.next_id += 1;

        let info = MatchupInfo {
            id,
            team_a: a,
            team_b: b,
        };
        self.options[a.index()].push(MatchupOption::new(kind, info));
        self.options[b.index()].push(MatchupOption::new(kind, info.mirrored()));
        self.counts[a.index()][kind.slot()] += 1;
        self.counts[b.index()][kind.slot()] += 1;

        Some(id)
    }

    /// Whether `team` holds exactly its quota of every kind.
    pub fn is_complete_for(&self, team: Team) -> bool {
        MatchupKind::ALL
            .iter()
            .all(|&kind| self.count(team, kind) == kind.quota())
    }

    /// Whether every team is complete.
    pub fn is_complete(&self) -> bool {
        Team::ALL.iter().all(|&t| self.is_complete_for(t))
    }

    /// Games implied for `team` by its options.
    pub fn game_count(&self, team: Team) -> usize {
        self.options(team).iter().map(MatchupOption::game_count).sum()
    }

    /// Number of distinct matchups (each counted once).
    pub fn matchup_count(&self) -> usize {
        self.next_id as usize
    }

    /// Games in the whole league, each counted once.
    pub fn total_games(&self) -> usize {
        Team::ALL.iter().map(|&t| self.game_count(t)).sum::<usize>() / 2
    }
}

impl Default for MatchupPlan {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GAMES_PER_TEAM;

    /// Fills `team`'s quotas by hand, in team index order.
    fn fill(plan: &mut MatchupPlan, team: Team) {
        for b in team.opposite_conference_teams() {
            plan.insert(team, b, MatchupKind::TwoGameOppositeConference);
        }
        for b in team.division_rivals() {
            plan.insert(team, b, MatchupKind::FourGameInDivision);
        }
        let others = team.conference_non_division_teams();
        for &b in &others[..6] {
            plan.insert(team, b, MatchupKind::FourGameInConferenceOutOfDivision);
        }
        for &b in &others[6..] {
            plan.insert(team, b, MatchupKind::ThreeGameInConferenceOutOfDivision);
        }
    }

    #[test]
    fn test_insert_is_reciprocal() {
        let mut plan = MatchupPlan::new();
        let id = plan
            .insert(Team::Bos, Team::Nyk, MatchupKind::FourGameInDivision)
            .unwrap();

        let bos = plan.options(Team::Bos);
        let nyk = plan.options(Team::Nyk);
        assert_eq!(bos.len(), 1);
        assert_eq!(nyk.len(), 1);
        assert_eq!(bos[0].info().id, id);
        assert_eq!(nyk[0].info().id, id);
        assert_eq!(bos[0].opponent(), Team::Nyk);
        assert_eq!(nyk[0].opponent(), Team::Bos);
        assert_eq!(plan.count(Team::Nyk, MatchupKind::FourGameInDivision), 1);
    }

    #[test]
    fn test_insert_rejects_linked_pair() {
        let mut plan = MatchupPlan::new();
        assert!(plan
            .insert(Team::Bos, Team::Chi, MatchupKind::FourGameInConferenceOutOfDivision)
            .is_some());
        assert!(plan
            .insert(Team::Chi, Team::Bos, MatchupKind::ThreeGameInConferenceOutOfDivision)
            .is_none());
        assert_eq!(plan.options(Team::Bos).len(), 1);
    }

    #[test]
    fn test_insert_rejects_wrong_relationship() {
        let mut plan = MatchupPlan::new();
        assert!(plan
            .insert(Team::Bos, Team::Nyk, MatchupKind::TwoGameOppositeConference)
            .is_none());
        assert!(plan
            .insert(Team::Bos, Team::Bos, MatchupKind::FourGameInDivision)
            .is_none());
        assert_eq!(plan.matchup_count(), 0);
    }

    #[test]
    fn test_insert_rejected_when_quota_full() {
        let mut plan = MatchupPlan::new();
        fill(&mut plan, Team::Bos);
        assert!(plan.is_complete_for(Team::Bos));
        assert_eq!(plan.game_count(Team::Bos), GAMES_PER_TEAM);

        let before = plan.clone();
        for kind in MatchupKind::ALL {
            for other in Team::ALL {
                assert!(plan.insert(Team::Bos, other, kind).is_none());
                assert!(plan.insert(other, Team::Bos, kind).is_none());
            }
        }
        assert_eq!(plan, before);
    }

    #[test]
    fn test_insert_rejected_when_other_side_full() {
        let mut plan = MatchupPlan::new();
        let kind = MatchupKind::FourGameInConferenceOutOfDivision;
        let candidates = Team::Lal.conference_non_division_teams();
        for &b in &candidates[..6] {
            assert!(plan.insert(Team::Lal, b, kind).is_some());
        }
        assert!(!plan.has_capacity(Team::Lal, kind));

        // The seventh candidate has room and no link, LAL does not.
        let seventh = candidates[6];
        assert!(plan.has_capacity(seventh, kind));
        assert!(!plan.is_linked(seventh, Team::Lal));
        assert!(plan.insert(seventh, Team::Lal, kind).is_none());
        assert!(plan.options(seventh).is_empty());
    }

    #[test]
    fn test_totals() {
        let mut plan = MatchupPlan::new();
        plan.insert(Team::Bos, Team::Lal, MatchupKind::TwoGameOppositeConference);
        plan.insert(Team::Bos, Team::Nyk, MatchupKind::FourGameInDivision);
        assert_eq!(plan.matchup_count(), 2);
        assert_eq!(plan.game_count(Team::Bos), 6);
        assert_eq!(plan.game_count(Team::Lal), 2);
        assert_eq!(plan.total_games(), 6);
        assert!(!plan.is_complete());
    }
}
