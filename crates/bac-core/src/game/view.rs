use super::match_state::MatchState;
use crate::model::card::Card;
use crate::model::player::{Seat, Team};
use crate::model::score::ScoreDisplay;
use serde::Serialize;
use std::array;

/// Everything every client may see. Hands appear only as sizes; a seat's
/// own cards come from `MatchState::hand`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PublicView {
    pub table: Vec<Card>,
    pub turn: Seat,
    pub dealer: Seat,
    pub teams: [TeamView; 2],
    pub players: [PlayerView; 4],
    pub deck_remaining: usize,
    pub winner: Option<Team>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TeamView {
    pub name: String,
    pub total: u32,
    pub display: ScoreDisplay,
    pub captured_cards: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlayerView {
    pub seat: Seat,
    pub name: String,
    pub hand_size: usize,
    pub pile_size: usize,
}

impl PublicView {
    pub fn capture(state: &MatchState) -> Self {
        let hand_sizes = state.hand_sizes();
        let pile_sizes = state.pile_sizes();

        let teams = array::from_fn(|i| {
            let team = Team::BOTH[i];
            let [a, b] = team.seats();
            TeamView {
                name: format!(
                    "{team} ({} & {})",
                    state.player_name(a),
                    state.player_name(b)
                ),
                total: state.scores().total(team),
                display: state.scores().display(team),
                captured_cards: state.team_card_count(team),
            }
        });

        let players = array::from_fn(|i| {
            let seat = Seat::from_index(i).expect("seat index in range");
            PlayerView {
                seat,
                name: state.player_name(seat).to_string(),
                hand_size: hand_sizes[i],
                pile_size: pile_sizes[i],
            }
        });

        Self {
            table: state.table().to_vec(),
            turn: state.turn(),
            dealer: state.dealer(),
            teams,
            players,
            deck_remaining: state.deck_remaining(),
            winner: state.winner(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::PublicView;
    use crate::game::match_state::MatchState;
    use crate::model::player::Seat;

    #[test]
    fn view_reflects_match_state() {
        let mut state = MatchState::fixture(21);
        state.deal_new_deck().unwrap();
        state.deal_hands().unwrap();

        let view = PublicView::capture(&state);
        assert_eq!(view.table.len(), 4);
        assert_eq!(view.turn, state.turn());
        assert_eq!(view.players[0].hand_size, 3);
        assert_eq!(view.teams[0].name, "Team 1 (Ana & Carla)");
        assert_eq!(view.deck_remaining, 24);
        assert_eq!(view.winner, None);
    }

    #[test]
    fn view_never_exposes_hand_cards() {
        let mut state = MatchState::fixture(21);
        state.deal_new_deck().unwrap();
        state.deal_hands().unwrap();

        let json = PublicView::capture(&state).to_json().unwrap();
        assert!(!json.contains("\"hand\":"));
        assert!(json.contains("\"hand_size\": 3"));
        assert_eq!(state.hand(Seat::South).len(), 3);
    }
}
