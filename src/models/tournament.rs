//! Tournament, TournamentPhase, and TournamentError.

use crate::models::game::{Fixture, FixtureId, Leg, PhaseContext, SemifinalSlot};
use crate::models::player::PlayerId;
use crate::models::team::{Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations. All are recoverable
/// validation failures; a failed operation leaves the aggregate unmodified.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer players supplied to the draw than teams to fill.
    InsufficientPlayers,
    /// The standings handed to a knockout generator do not identify enough
    /// teams (or name a team the generator does not know).
    InvalidStandings,
    /// Two legs do not form a finalized home-and-away pair.
    LegsNotReady,
    /// The tournament was already started.
    AlreadyStarted,
    /// Not every fixture of the current phase is finalized, or the
    /// tournament is already complete.
    CannotAdvance,
    /// A semifinal slot has missing legs or a tied aggregate.
    IncompleteSemifinal,
    /// The final aggregate is tied; no champion can be declared.
    NoChampion,
    /// No fixture with this id exists in the tournament.
    FixtureNotFound(FixtureId),
    /// The fixture result was already applied.
    AlreadyFinalized,
    /// The fixture is finalized; its score can no longer be adjusted.
    FixtureFinalized,
    /// No player with this id exists on the roster.
    PlayerNotFound(PlayerId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InsufficientPlayers => {
                write!(f, "Not enough players to draw teams (need at least 4)")
            }
            TournamentError::InvalidStandings => {
                write!(f, "Standings do not identify the teams for this phase")
            }
            TournamentError::LegsNotReady => {
                write!(f, "Both legs must be finalized and form a home-and-away pair")
            }
            TournamentError::AlreadyStarted => write!(f, "Tournament already started"),
            TournamentError::CannotAdvance => {
                write!(f, "All fixtures of the current phase must be finalized first")
            }
            TournamentError::IncompleteSemifinal => {
                write!(f, "A semifinal is unresolved (missing legs or tied aggregate)")
            }
            TournamentError::NoChampion => {
                write!(f, "The final aggregate is tied; no champion can be declared")
            }
            TournamentError::FixtureNotFound(_) => write!(f, "Fixture not found"),
            TournamentError::AlreadyFinalized => write!(f, "Fixture already finalized"),
            TournamentError::FixtureFinalized => {
                write!(f, "Fixture is finalized; score can no longer change")
            }
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament. Strictly forward; `Complete` is terminal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentPhase {
    /// Round-robin: every team plays every other team once.
    #[default]
    Group,
    /// Two two-legged ties: seed 1 vs 4 and seed 2 vs 3.
    Semifinal,
    /// Two-legged final between the semifinal winners.
    Final,
    /// Finished; a champion is set.
    Complete,
}

/// Full tournament state: teams, the append-only fixture list, and the phase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub created_at: DateTime<Utc>,
    pub teams: Vec<Team>,
    /// Grows as phases are generated; fixtures from earlier phases are kept.
    pub fixtures: Vec<Fixture>,
    pub phase: TournamentPhase,
    /// Set only once the tournament completes.
    pub champion: Option<TeamId>,
    pub started: bool,
}

impl Tournament {
    /// Create a new, not-yet-started tournament from a drawn team set.
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            teams,
            fixtures: Vec::new(),
            phase: TournamentPhase::Group,
            champion: None,
            started: false,
        }
    }

    /// Look up a team by id.
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Mutable team lookup by id.
    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    /// Look up a fixture by id.
    pub fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        self.fixtures.iter().find(|m| m.id == id)
    }

    /// Mutable fixture lookup by id.
    pub fn fixture_mut(&mut self, id: FixtureId) -> Option<&mut Fixture> {
        self.fixtures.iter_mut().find(|m| m.id == id)
    }

    /// Fixtures belonging to the given phase. `Complete` has none.
    pub fn fixtures_in_phase(
        &self,
        phase: TournamentPhase,
    ) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(move |m| match m.context {
            PhaseContext::Group => phase == TournamentPhase::Group,
            PhaseContext::SemifinalLeg { .. } => phase == TournamentPhase::Semifinal,
            PhaseContext::FinalLeg { .. } => phase == TournamentPhase::Final,
        })
    }

    /// The two legs of a semifinal slot, in (first, second) order.
    pub fn semifinal_legs(
        &self,
        slot: SemifinalSlot,
    ) -> (Option<&Fixture>, Option<&Fixture>) {
        (
            self.fixtures.iter().find(|m| m.is_semifinal_leg(slot, Leg::First)),
            self.fixtures.iter().find(|m| m.is_semifinal_leg(slot, Leg::Second)),
        )
    }

    /// The two legs of the final, in (first, second) order.
    pub fn final_legs(&self) -> (Option<&Fixture>, Option<&Fixture>) {
        (
            self.fixtures.iter().find(|m| m.is_final_leg(Leg::First)),
            self.fixtures.iter().find(|m| m.is_final_leg(Leg::Second)),
        )
    }
}
