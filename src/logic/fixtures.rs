//! Fixture generation for each phase. All functions are pure: they produce
//! fresh unplayed fixtures and never touch tournament state.

use crate::models::{
    Fixture, Leg, PhaseContext, SemifinalSlot, Team, TeamId, TournamentError,
};

/// Round-robin group stage: every unordered pair of teams plays once
/// (C(4,2) = 6 fixtures for the standard draw).
pub fn generate_group_fixtures(teams: &[Team]) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for (i, home) in teams.iter().enumerate() {
        for away in &teams[i + 1..] {
            fixtures.push(Fixture::new(home.id, away.id, PhaseContext::Group));
        }
    }
    fixtures
}

/// Two-legged semifinals seeded from a ranked table: seed 1 vs seed 4 in
/// slot one, seed 2 vs seed 3 in slot two. The higher seed is at home in the
/// first leg; home and away swap for the second.
pub fn generate_semifinal_fixtures(
    standings: &[Team],
) -> Result<Vec<Fixture>, TournamentError> {
    if standings.len() < 4 {
        return Err(TournamentError::InvalidStandings);
    }

    let pairings = [
        (SemifinalSlot::One, standings[0].id, standings[3].id),
        (SemifinalSlot::Two, standings[1].id, standings[2].id),
    ];

    let mut fixtures = Vec::with_capacity(4);
    for (slot, higher, lower) in pairings {
        fixtures.push(Fixture::new(
            higher,
            lower,
            PhaseContext::SemifinalLeg { slot, leg: Leg::First },
        ));
        fixtures.push(Fixture::new(
            lower,
            higher,
            PhaseContext::SemifinalLeg { slot, leg: Leg::Second },
        ));
    }
    Ok(fixtures)
}

/// Two-legged final between the semifinal winners. Both finalists must be
/// distinct teams known to the given team set.
pub fn generate_final_fixtures(
    team_a: TeamId,
    team_b: TeamId,
    teams: &[Team],
) -> Result<Vec<Fixture>, TournamentError> {
    let known = |id: TeamId| teams.iter().any(|t| t.id == id);
    if team_a == team_b || !known(team_a) || !known(team_b) {
        return Err(TournamentError::InvalidStandings);
    }

    Ok(vec![
        Fixture::new(team_a, team_b, PhaseContext::FinalLeg { leg: Leg::First }),
        Fixture::new(team_b, team_a, PhaseContext::FinalLeg { leg: Leg::Second }),
    ])
}
