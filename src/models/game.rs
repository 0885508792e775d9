//! Fixture (a single match between two teams), phase context, and score actions.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a fixture.
pub type FixtureId = Uuid;

/// Default clock for a group-stage fixture, in seconds (7 minutes).
/// Informational only; the engine does not enforce it.
pub const GROUP_FIXTURE_SECS: u32 = 420;
/// Default clock for a knockout leg, in seconds (8 minutes).
pub const KNOCKOUT_FIXTURE_SECS: u32 = 480;

/// Which leg of a two-legged tie a fixture is.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leg {
    First,
    Second,
}

/// Which semifinal pairing a leg belongs to (1st vs 4th seed, or 2nd vs 3rd).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemifinalSlot {
    One,
    Two,
}

/// Phase a fixture belongs to, carrying the leg/slot data only where it exists.
/// A group fixture cannot have a leg, and a semifinal leg cannot lack a slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PhaseContext {
    Group,
    SemifinalLeg { slot: SemifinalSlot, leg: Leg },
    FinalLeg { leg: Leg },
}

/// Which side of a fixture an operator action targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

/// Direction of an operator counter action (score or player stat).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    Increment,
    Decrement,
}

/// A single match between two teams. Teams are referenced by id; the
/// tournament owns the teams themselves.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub home: TeamId,
    pub away: TeamId,
    pub home_goals: u32,
    pub away_goals: u32,
    /// Suggested playing time in seconds; shown by the UI, never enforced.
    pub duration_secs: u32,
    pub context: PhaseContext,
    /// One-way flag: set exactly once when the result is applied.
    pub finalized: bool,
}

impl Fixture {
    /// New unplayed fixture (0-0, not finalized). The clock defaults by phase:
    /// 420s for group fixtures, 480s for knockout legs.
    pub fn new(home: TeamId, away: TeamId, context: PhaseContext) -> Self {
        let duration_secs = match context {
            PhaseContext::Group => GROUP_FIXTURE_SECS,
            PhaseContext::SemifinalLeg { .. } | PhaseContext::FinalLeg { .. } => {
                KNOCKOUT_FIXTURE_SECS
            }
        };
        Self {
            id: Uuid::new_v4(),
            home,
            away,
            home_goals: 0,
            away_goals: 0,
            duration_secs,
            context,
            finalized: false,
        }
    }

    /// True if this fixture is the given leg of the given semifinal slot.
    pub fn is_semifinal_leg(&self, slot: SemifinalSlot, leg: Leg) -> bool {
        matches!(self.context, PhaseContext::SemifinalLeg { slot: s, leg: l } if s == slot && l == leg)
    }

    /// True if this fixture is the given leg of the final.
    pub fn is_final_leg(&self, leg: Leg) -> bool {
        matches!(self.context, PhaseContext::FinalLeg { leg: l } if l == leg)
    }
}
