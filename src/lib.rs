//! Racha organizer: library with models, tournament engine, and storage.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    adjust_score, advance, aggregate, can_advance, finalize_fixture, generate_final_fixtures,
    generate_group_fixtures, generate_semifinal_fixtures, is_balanced, rank,
    record_player_assist, record_player_goal, start_tournament, AggregateScore, TeamDraw,
};
pub use models::{
    Adjustment, Fixture, FixtureId, Leg, PhaseContext, Player, PlayerId, PlayerStats,
    SemifinalSlot, Side, Team, TeamId, Tournament, TournamentError, TournamentId,
    TournamentPhase, DEFAULT_TEAM_LABELS,
};
pub use storage::{KeyValueStore, MemoryStore, Repository, SELECTION_CAP};
