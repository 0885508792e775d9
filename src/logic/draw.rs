//! Team draw: partition a roster into teams with minimal skill disparity.

use crate::models::{Player, Team, TournamentError, DEFAULT_TEAM_LABELS};

/// Builder for a team draw. Defaults to the standard four-label palette;
/// a custom ordered label list changes both the names and the team count.
#[derive(Clone, Debug)]
pub struct TeamDraw {
    labels: Vec<String>,
}

impl Default for TeamDraw {
    fn default() -> Self {
        Self {
            labels: DEFAULT_TEAM_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TeamDraw {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the ordered team labels (one team per label).
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Draw the roster into teams.
    ///
    /// Players are sorted by skill descending (stable: roster order preserved
    /// on ties) and dealt round-robin, so the strongest players spread evenly
    /// across the teams. Each team's one-decimal average skill is computed
    /// once membership is fixed. Input players are not mutated.
    pub fn draw(&self, players: &[Player]) -> Result<Vec<Team>, TournamentError> {
        let team_count = self.labels.len();
        if team_count == 0 || players.len() < team_count {
            return Err(TournamentError::InsufficientPlayers);
        }

        let mut ordered: Vec<&Player> = players.iter().collect();
        ordered.sort_by(|a, b| b.skill.cmp(&a.skill));

        let mut teams: Vec<Team> = self.labels.iter().map(|name| Team::new(name.as_str())).collect();
        let mut members: Vec<Vec<&Player>> = vec![Vec::new(); team_count];
        for (i, player) in ordered.into_iter().enumerate() {
            teams[i % team_count].players.push(player.id);
            members[i % team_count].push(player);
        }

        for (team, team_members) in teams.iter_mut().zip(&members) {
            team.recompute_avg_skill(team_members);
        }

        Ok(teams)
    }
}

/// True if the spread between the strongest and weakest team average is at
/// most 1.0 skill points.
pub fn is_balanced(teams: &[Team]) -> bool {
    let mut averages = teams.iter().map(|t| t.avg_skill);
    let Some(first) = averages.next() else {
        return true;
    };
    let (min, max) = averages.fold((first, first), |(lo, hi), avg| {
        (lo.min(avg), hi.max(avg))
    });
    max - min <= 1.0
}
