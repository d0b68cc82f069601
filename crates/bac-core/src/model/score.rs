use crate::model::player::Team;
use serde::{Deserialize, Serialize};

/// Points needed to win the match.
pub const WIN_THRESHOLD: u32 = 24;
/// Width of each display phase ("malas" then "buenas").
pub const PHASE_SPAN: u32 = 12;

/// Team point totals plus the latched winner. Totals only ever grow within
/// a match; the winner is set once and never cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TeamScores {
    totals: [u32; 2],
    winner: Option<Team>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScorePhase {
    Malas,
    Buenas,
    Winner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDisplay {
    pub phase: ScorePhase,
    pub shown: u32,
}

impl TeamScores {
    pub const fn new() -> Self {
        Self {
            totals: [0; 2],
            winner: None,
        }
    }

    /// Adds points and checks for victory. Returns true exactly when this
    /// award crosses the threshold and latches the winner.
    pub fn award(&mut self, team: Team, points: u32) -> bool {
        self.totals[team.index()] += points;
        if self.winner.is_none() && self.totals[team.index()] >= WIN_THRESHOLD {
            self.winner = Some(team);
            return true;
        }
        false
    }

    pub fn total(&self, team: Team) -> u32 {
        self.totals[team.index()]
    }

    pub fn totals(&self) -> &[u32; 2] {
        &self.totals
    }

    pub fn set_totals(&mut self, totals: [u32; 2]) {
        self.totals = totals;
        for team in Team::BOTH.iter().copied() {
            if self.winner.is_none() && self.totals[team.index()] >= WIN_THRESHOLD {
                self.winner = Some(team);
            }
        }
    }

    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    pub fn display(&self, team: Team) -> ScoreDisplay {
        let total = self.total(team);
        if total >= WIN_THRESHOLD {
            ScoreDisplay {
                phase: ScorePhase::Winner,
                shown: PHASE_SPAN,
            }
        } else if total < PHASE_SPAN {
            ScoreDisplay {
                phase: ScorePhase::Malas,
                shown: total,
            }
        } else {
            ScoreDisplay {
                phase: ScorePhase::Buenas,
                shown: total - PHASE_SPAN,
            }
        }
    }
}
