//! Data structures for the racha organizer: players, teams, fixtures, tournament state.

mod game;
mod player;
mod team;
mod tournament;

pub use game::{
    Adjustment, Fixture, FixtureId, Leg, PhaseContext, SemifinalSlot, Side,
    GROUP_FIXTURE_SECS, KNOCKOUT_FIXTURE_SECS,
};
pub use player::{Player, PlayerId, PlayerStats, SKILL_MAX, SKILL_MIN};
pub use team::{round_one_decimal, Team, TeamId, DEFAULT_TEAM_LABELS};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentPhase};
