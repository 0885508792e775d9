//! Operator actions on a running fixture and on player statistics.

use crate::models::{
    Adjustment, FixtureId, Player, PlayerId, Side, Tournament, TournamentError,
};

/// Finalize a fixture and apply its result to both teams, exactly once.
///
/// The winning team gets 3 points, both get 1 on a draw; goals scored and
/// conceded come from this fixture's own score. The same 3/1/0 accounting is
/// applied per leg in the knockout phases too; phase advancement only looks
/// at aggregates, so knockout points only influence the league table.
pub fn finalize_fixture(
    tournament: &mut Tournament,
    fixture_id: FixtureId,
) -> Result<(), TournamentError> {
    let fixture = tournament
        .fixture(fixture_id)
        .ok_or(TournamentError::FixtureNotFound(fixture_id))?;
    if fixture.finalized {
        return Err(TournamentError::AlreadyFinalized);
    }
    let (home, away) = (fixture.home, fixture.away);
    let (home_goals, away_goals) = (fixture.home_goals, fixture.away_goals);

    if let Some(fixture) = tournament.fixture_mut(fixture_id) {
        fixture.finalized = true;
    }

    let (home_points, away_points) = if home_goals > away_goals {
        (3, 0)
    } else if home_goals < away_goals {
        (0, 3)
    } else {
        (1, 1)
    };

    if let Some(team) = tournament.team_mut(home) {
        team.points += home_points;
        team.goals_scored += home_goals;
        team.goals_conceded += away_goals;
    }
    if let Some(team) = tournament.team_mut(away) {
        team.points += away_points;
        team.goals_scored += away_goals;
        team.goals_conceded += home_goals;
    }

    Ok(())
}

/// Adjust one side's goal count by one while the fixture is still running.
/// Decrementing past zero is a no-op, not an error.
pub fn adjust_score(
    tournament: &mut Tournament,
    fixture_id: FixtureId,
    side: Side,
    adjustment: Adjustment,
) -> Result<(), TournamentError> {
    let fixture = tournament
        .fixture_mut(fixture_id)
        .ok_or(TournamentError::FixtureNotFound(fixture_id))?;
    if fixture.finalized {
        return Err(TournamentError::FixtureFinalized);
    }

    let goals = match side {
        Side::Home => &mut fixture.home_goals,
        Side::Away => &mut fixture.away_goals,
    };
    match adjustment {
        Adjustment::Increment => *goals += 1,
        Adjustment::Decrement => *goals = goals.saturating_sub(1),
    }
    Ok(())
}

/// Adjust a roster player's goal counters (see `Player::record_goal` for the
/// floor rules on the per-tournament and lifetime counters).
pub fn record_player_goal(
    players: &mut [Player],
    player_id: PlayerId,
    adjustment: Adjustment,
) -> Result<(), TournamentError> {
    let player = players
        .iter_mut()
        .find(|p| p.id == player_id)
        .ok_or(TournamentError::PlayerNotFound(player_id))?;
    player.record_goal(adjustment);
    Ok(())
}

/// Adjust a roster player's assist counters.
pub fn record_player_assist(
    players: &mut [Player],
    player_id: PlayerId,
    adjustment: Adjustment,
) -> Result<(), TournamentError> {
    let player = players
        .iter_mut()
        .find(|p| p.id == player_id)
        .ok_or(TournamentError::PlayerNotFound(player_id))?;
    player.record_assist(adjustment);
    Ok(())
}
