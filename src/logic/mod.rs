//! Tournament engine: draw, standings, fixture generation, aggregates, progression.

mod aggregate;
mod draw;
mod fixtures;
mod progression;
mod scoring;
mod standings;

pub use aggregate::{aggregate, AggregateScore};
pub use draw::{is_balanced, TeamDraw};
pub use fixtures::{generate_final_fixtures, generate_group_fixtures, generate_semifinal_fixtures};
pub use progression::{advance, can_advance, start_tournament};
pub use scoring::{
    adjust_score, finalize_fixture, record_player_assist, record_player_goal,
};
pub use standings::rank;
