use crate::model::card::Card;
use crate::model::player::Seat;

/// What the previous successful move was. Streak and steal legality both
/// hinge on this, so it is a single tagged value instead of loose fields
/// that each call site must remember to reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastMove {
    #[default]
    None,
    /// A card was laid and is still on the table.
    Lay { card: Card, by: Seat },
    /// Cards were collected; `highest_value` is the top run-value among
    /// everything captured, the anchor for a run-continuation steal.
    Collect { highest_value: u8 },
}

/// Cross-move state for one deck of play.
#[derive(Debug, Clone, Default)]
pub struct RoundMemory {
    last_move: LastMove,
    streak: u8,
    last_collector: Option<Seat>,
}

impl RoundMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh-deck reset. The dealer is pre-seeded as last collector so the
    /// end-of-deck sweep always has somewhere to send leftovers.
    pub fn reset_for_deal(&mut self, dealer: Seat) {
        self.last_move = LastMove::None;
        self.streak = 0;
        self.last_collector = Some(dealer);
    }

    /// Records a lay. The streak counter survives: a streak is a chain of
    /// lay/collect exchanges, so the interleaved lays must not break it.
    /// Only a collect that fails the match condition resets it.
    pub fn record_lay(&mut self, card: Card, by: Seat) {
        self.last_move = LastMove::Lay { card, by };
    }

    pub fn record_collect(&mut self, by: Seat, highest_value: u8, extends_streak: bool) -> u8 {
        self.last_move = LastMove::Collect { highest_value };
        self.last_collector = Some(by);
        if extends_streak {
            self.streak = self.streak.saturating_add(1);
        } else {
            self.streak = 0;
        }
        self.streak
    }

    pub fn last_move(&self) -> LastMove {
        self.last_move
    }

    pub fn last_laid(&self) -> Option<Card> {
        match self.last_move {
            LastMove::Lay { card, .. } => Some(card),
            _ => None,
        }
    }

    /// Run-value a continuation steal must start from, when one is open.
    pub fn steal_run_anchor(&self) -> Option<u8> {
        match self.last_move {
            LastMove::Collect { highest_value } if highest_value > 0 => Some(highest_value),
            _ => None,
        }
    }

    pub fn streak(&self) -> u8 {
        self.streak
    }

    pub fn last_collector(&self) -> Option<Seat> {
        self.last_collector
    }
}
