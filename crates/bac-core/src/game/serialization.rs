use super::match_state::MatchState;
use crate::model::player::{Seat, Team};
use serde::{Deserialize, Serialize};
use std::array;

/// Persistable match summary. A restore rebuilds the match at a new-deck
/// boundary: seed, dealer and scores carry over, in-flight hands and table
/// do not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchSnapshot {
    pub seed: u64,
    pub dealer: Seat,
    pub totals: [u32; 2],
    pub winner: Option<Team>,
    pub player_names: [String; 4],
}

impl MatchSnapshot {
    pub fn capture(state: &MatchState) -> Self {
        MatchSnapshot {
            seed: state.seed(),
            dealer: state.dealer(),
            totals: *state.scores().totals(),
            winner: state.winner(),
            player_names: array::from_fn(|i| {
                let seat = Seat::from_index(i).expect("seat index in range");
                state.player_name(seat).to_string()
            }),
        }
    }

    pub fn restore(self) -> MatchState {
        let names = array::from_fn(|i| self.player_names[i].as_str());
        let mut state = MatchState::with_seed(names, self.seed);
        state.dealer = self.dealer;
        state.turn = self.dealer.next();
        state.scores.set_totals(self.totals);
        state
    }

    pub fn to_json(state: &MatchState) -> serde_json::Result<String> {
        let snapshot = Self::capture(state);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
