//! Team data structure and the default draw palette.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// Default ordered palette of team labels for a standard 4-team draw.
pub const DEFAULT_TEAM_LABELS: [&str; 4] = ["Verde", "Amarelo", "Branco", "Azul"];

/// A drawn team. Membership is fixed for the tournament's lifetime; the
/// counters accumulate as fixtures are finalized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Member player ids; the roster holds the players themselves.
    pub players: Vec<PlayerId>,
    pub points: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    /// Mean member skill, rounded to one decimal. Set when membership is fixed.
    pub avg_skill: f64,
}

impl Team {
    /// New empty team with the given label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            players: Vec::new(),
            points: 0,
            goals_scored: 0,
            goals_conceded: 0,
            avg_skill: 0.0,
        }
    }

    /// Goals scored minus goals conceded (may be negative).
    pub fn goal_difference(&self) -> i64 {
        self.goals_scored as i64 - self.goals_conceded as i64
    }

    /// Recompute the one-decimal average skill from the given members.
    pub fn recompute_avg_skill(&mut self, members: &[&Player]) {
        if members.is_empty() {
            self.avg_skill = 0.0;
            return;
        }
        let sum: u32 = members.iter().map(|p| u32::from(p.skill)).sum();
        self.avg_skill = round_one_decimal(f64::from(sum) / members.len() as f64);
    }

    /// Zero points and goals (called when a tournament starts).
    pub fn reset_counters(&mut self) {
        self.points = 0;
        self.goals_scored = 0;
        self.goals_conceded = 0;
    }
}

/// Round to one decimal place (average skill is displayed like "3.5").
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
