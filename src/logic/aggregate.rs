//! Aggregate resolution for two-legged ties.

use crate::models::{Fixture, TeamId, TournamentError};

/// Combined score of a two-legged tie, expressed from the perspective of the
/// first leg: `home` is the team that hosted leg one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AggregateScore {
    pub home: TeamId,
    pub away: TeamId,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl AggregateScore {
    /// The team with the strictly higher aggregate, or `None` on a tie.
    /// Ties are surfaced to the caller, never auto-resolved.
    pub fn winner(&self) -> Option<TeamId> {
        if self.home_goals > self.away_goals {
            Some(self.home)
        } else if self.away_goals > self.home_goals {
            Some(self.away)
        } else {
            None
        }
    }
}

/// Combine two legs into one aggregate result.
///
/// The legs must form a home-and-away pair (leg two reverses leg one's
/// pairing) and both must be finalized; otherwise `LegsNotReady`. The first
/// leg's home team scores `leg1.home_goals + leg2.away_goals` in aggregate,
/// since it plays away in the second leg.
pub fn aggregate(leg1: &Fixture, leg2: &Fixture) -> Result<AggregateScore, TournamentError> {
    if leg2.home != leg1.away || leg2.away != leg1.home {
        return Err(TournamentError::LegsNotReady);
    }
    if !leg1.finalized || !leg2.finalized {
        return Err(TournamentError::LegsNotReady);
    }

    Ok(AggregateScore {
        home: leg1.home,
        away: leg1.away,
        home_goals: leg1.home_goals + leg2.away_goals,
        away_goals: leg1.away_goals + leg2.home_goals,
    })
}
