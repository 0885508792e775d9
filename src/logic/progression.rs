//! Phase state machine: start, advance, and the advance gate.

use crate::logic::aggregate::{aggregate, AggregateScore};
use crate::logic::fixtures::{
    generate_final_fixtures, generate_group_fixtures, generate_semifinal_fixtures,
};
use crate::logic::standings::rank;
use crate::models::{
    Fixture, Player, SemifinalSlot, TeamId, Tournament, TournamentError, TournamentPhase,
};

/// Start the tournament: reset every roster player's per-tournament counters
/// and every team's counters, generate the group fixtures, and enter the
/// group phase. A tournament starts at most once.
pub fn start_tournament(
    tournament: &mut Tournament,
    players: &mut [Player],
) -> Result<(), TournamentError> {
    if tournament.started {
        return Err(TournamentError::AlreadyStarted);
    }

    for player in players.iter_mut() {
        player.reset_tournament_stats();
    }
    for team in &mut tournament.teams {
        team.reset_counters();
    }

    tournament.fixtures = generate_group_fixtures(&tournament.teams);
    tournament.phase = TournamentPhase::Group;
    tournament.started = true;
    Ok(())
}

/// True when the current phase has at least one fixture and all of them are
/// finalized. Always false once the tournament is complete.
pub fn can_advance(tournament: &Tournament) -> bool {
    let mut fixtures = tournament.fixtures_in_phase(tournament.phase).peekable();
    fixtures.peek().is_some() && fixtures.all(|m| m.finalized)
}

/// Advance to the next phase. Group standings seed the semifinals; aggregate
/// winners decide the finalists and the champion. Checks run before any
/// mutation, so a failed advance leaves the tournament untouched.
pub fn advance(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.phase == TournamentPhase::Complete || !can_advance(tournament) {
        return Err(TournamentError::CannotAdvance);
    }

    match tournament.phase {
        TournamentPhase::Group => {
            let table = rank(&tournament.teams);
            let semifinals = generate_semifinal_fixtures(&table)?;
            tournament.fixtures.extend(semifinals);
            tournament.phase = TournamentPhase::Semifinal;
        }
        TournamentPhase::Semifinal => {
            let finalist_one = slot_winner(tournament, SemifinalSlot::One)?;
            let finalist_two = slot_winner(tournament, SemifinalSlot::Two)?;
            let finals = generate_final_fixtures(finalist_one, finalist_two, &tournament.teams)?;
            tournament.fixtures.extend(finals);
            tournament.phase = TournamentPhase::Final;
        }
        TournamentPhase::Final => {
            let champion = final_winner(tournament)?;
            tournament.champion = Some(champion);
            tournament.phase = TournamentPhase::Complete;
        }
        TournamentPhase::Complete => return Err(TournamentError::CannotAdvance),
    }
    Ok(())
}

/// Winner of one semifinal slot by aggregate. Missing legs, unresolved legs,
/// and tied aggregates all leave the semifinal incomplete.
fn slot_winner(
    tournament: &Tournament,
    slot: SemifinalSlot,
) -> Result<TeamId, TournamentError> {
    let (first, second) = tournament.semifinal_legs(slot);
    let score = resolve_legs(first, second).map_err(|_| TournamentError::IncompleteSemifinal)?;
    score.winner().ok_or(TournamentError::IncompleteSemifinal)
}

/// Champion by aggregate over the two final legs. A tie yields no champion.
fn final_winner(tournament: &Tournament) -> Result<TeamId, TournamentError> {
    let (first, second) = tournament.final_legs();
    let score = resolve_legs(first, second).map_err(|_| TournamentError::NoChampion)?;
    score.winner().ok_or(TournamentError::NoChampion)
}

fn resolve_legs(
    first: Option<&Fixture>,
    second: Option<&Fixture>,
) -> Result<AggregateScore, TournamentError> {
    match (first, second) {
        (Some(leg1), Some(leg2)) => aggregate(leg1, leg2),
        _ => Err(TournamentError::LegsNotReady),
    }
}
