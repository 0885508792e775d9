//! League table: rank teams by a deterministic multi-key comparator.

use crate::models::Team;
use std::cmp::Ordering;

/// Rank teams: points desc, goal difference desc, goals scored desc, goals
/// conceded asc. The sort is stable, so teams still tied after all four keys
/// keep their input order. Usable at any point for a live table.
pub fn rank(teams: &[Team]) -> Vec<Team> {
    let mut table: Vec<Team> = teams.to_vec();
    table.sort_by(compare_teams);
    table
}

fn compare_teams(a: &Team, b: &Team) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_scored.cmp(&a.goals_scored))
        .then_with(|| a.goals_conceded.cmp(&b.goals_conceded))
}
