//! Series expansion: matchup options to concrete games.

use std::collections::BTreeMap;

use super::MatchupPlan;
use crate::models::{Game, MatchupId, Series};

/// Expands every distinct matchup of `plan` into its games.
///
/// Both mirrored records of a matchup share one [`MatchupId`], so each
/// matchup yields exactly one [`Series`]. Games are returned in matchup id
/// order with sequential ids; callers treat the order as meaningless.
pub fn expand_to_games(plan: &MatchupPlan) -> Vec<Game> {
    let mut series: BTreeMap<MatchupId, Series> = BTreeMap::new();
    for (_, options) in plan.iter() {
        for option in options {
            let info = option.info();
            series
                .entry(info.id)
                .or_insert_with(|| Series::new(info.team_a, info.team_b, option.game_count()));
        }
    }

    let mut next_id = 0;
    series
        .into_values()
        .flat_map(|s| s.into_games(&mut next_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameId, MatchupKind, Team, GAMES_PER_TEAM};
    use crate::planner::MatchupPlanner;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_expand_counts_mirrors_once() {
        let mut plan = MatchupPlan::new();
        plan.insert(Team::Bos, Team::Nyk, MatchupKind::FourGameInDivision);
        plan.insert(Team::Bos, Team::Lal, MatchupKind::TwoGameOppositeConference);
        plan.insert(Team::Bos, Team::Chi, MatchupKind::ThreeGameInConferenceOutOfDivision);

        let games = expand_to_games(&plan);
        assert_eq!(games.len(), 9);
        assert_eq!(games.iter().filter(|g| g.involves(Team::Nyk)).count(), 4);
        assert_eq!(games.iter().filter(|g| g.involves(Team::Lal)).count(), 2);
        assert_eq!(games.iter().filter(|g| g.involves(Team::Chi)).count(), 3);
    }

    #[test]
    fn test_full_league_expansion() {
        let plan = MatchupPlanner::new()
            .generate(&mut StdRng::seed_from_u64(5))
            .unwrap();
        let games = expand_to_games(&plan);
        assert_eq!(games.len(), 1230);
        for team in Team::ALL {
            assert_eq!(
                games.iter().filter(|g| g.involves(team)).count(),
                GAMES_PER_TEAM,
                "{team}"
            );
        }

        let ids: HashSet<GameId> = games.iter().map(|g| g.id).collect();
        assert_eq!(ids.len(), games.len());
    }

    #[test]
    fn test_empty_plan() {
        assert!(expand_to_games(&MatchupPlan::new()).is_empty());
    }
}
