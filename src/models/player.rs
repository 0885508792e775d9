//! Player and PlayerStats data structures.

use crate::models::game::Adjustment;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in teams, selection, and lookups).
pub type PlayerId = Uuid;

/// Lowest and highest skill level a player can have.
pub const SKILL_MIN: u8 = 1;
pub const SKILL_MAX: u8 = 5;

/// Statistics view of a player (for API / display).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub goals: u32,
    pub assists: u32,
    pub goals_total: u32,
    pub assists_total: u32,
}

impl PlayerStats {
    pub fn from_player(p: &Player) -> Self {
        Self {
            goals: p.goals,
            assists: p.assists,
            goals_total: p.goals_total,
            assists_total: p.assists_total,
        }
    }
}

/// A player on the roster. Per-tournament counters (`goals`, `assists`) are
/// reset when a tournament starts; lifetime counters survive across tournaments.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    /// Contact number, kept as entered; no validation or formatting here.
    pub whatsapp: String,
    /// Skill level, 1 (weakest) to 5 (strongest). Clamped at construction.
    pub skill: u8,
    pub goals: u32,
    pub assists: u32,
    pub goals_total: u32,
    pub assists_total: u32,
}

impl Player {
    /// Create a new player. Skill is clamped to the 1..=5 range.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, skill: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            nickname: None,
            whatsapp: String::new(),
            skill: skill.clamp(SKILL_MIN, SKILL_MAX),
            goals: 0,
            assists: 0,
            goals_total: 0,
            assists_total: 0,
        }
    }

    /// Set a nickname (builder style, used when registering from the API).
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Full display name: `First Last "Nickname"`.
    pub fn display_name(&self) -> String {
        match &self.nickname {
            Some(nick) => format!("{} {} \"{}\"", self.first_name, self.last_name, nick),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Current stats as a separate struct (for API responses).
    pub fn stats(&self) -> PlayerStats {
        PlayerStats::from_player(self)
    }

    /// Adjust the goal counters. The per-tournament counter is floored at 0;
    /// the lifetime counter only moves down when it is above 0 (it does not
    /// mirror the per-tournament counter exactly).
    pub fn record_goal(&mut self, adjustment: Adjustment) {
        match adjustment {
            Adjustment::Increment => {
                self.goals += 1;
                self.goals_total += 1;
            }
            Adjustment::Decrement => {
                self.goals = self.goals.saturating_sub(1);
                if self.goals_total > 0 {
                    self.goals_total -= 1;
                }
            }
        }
    }

    /// Adjust the assist counters, same floor rules as [`Player::record_goal`].
    pub fn record_assist(&mut self, adjustment: Adjustment) {
        match adjustment {
            Adjustment::Increment => {
                self.assists += 1;
                self.assists_total += 1;
            }
            Adjustment::Decrement => {
                self.assists = self.assists.saturating_sub(1);
                if self.assists_total > 0 {
                    self.assists_total -= 1;
                }
            }
        }
    }

    /// Zero the per-tournament counters (called when a tournament starts).
    pub fn reset_tournament_stats(&mut self) {
        self.goals = 0;
        self.assists = 0;
    }
}
