use super::match_state::MatchState;
use crate::model::card::Card;
use crate::model::player::Seat;
use crate::model::table::TableError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    NotYourTurn { expected: Seat, actual: Seat },
    HandIndexOutOfRange { index: usize, len: usize },
    Table(TableError),
    IllegalCollect,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotYourTurn { expected, actual } => {
                write!(f, "expected {expected} to move but got {actual}")
            }
            MoveError::HandIndexOutOfRange { index, len } => {
                write!(f, "hand index {index} out of range (hand has {len} cards)")
            }
            MoveError::Table(err) => write!(f, "{err}"),
            MoveError::IllegalCollect => {
                write!(f, "selection is not a run anchored at the played card")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Consecutive collect-after-lay rewards, in their traditional names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Streak {
    Bac,
    Rebac,
    SanVicent,
}

impl Streak {
    /// Maps the running streak counter (>= 1) to its reward level. Three in
    /// a row is the cap; longer runs keep paying three.
    pub const fn from_count(count: u8) -> Streak {
        match count {
            1 => Streak::Bac,
            2 => Streak::Rebac,
            _ => Streak::SanVicent,
        }
    }

    pub const fn points(self) -> u32 {
        match self {
            Streak::Bac => 1,
            Streak::Rebac => 2,
            Streak::SanVicent => 3,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Streak::Bac => "streak-1",
            Streak::Rebac => "streak-2",
            Streak::SanVicent => "streak-3",
        }
    }
}

impl fmt::Display for Streak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Streak::Bac => "Bac",
            Streak::Rebac => "Rebac",
            Streak::SanVicent => "San Vicent",
        };
        f.write_str(label)
    }
}

/// Broadcastable side effects of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveEvent {
    pub streak: Option<Streak>,
    pub cleared_table: bool,
}

impl MoveEvent {
    pub fn is_empty(&self) -> bool {
        self.streak.is_none() && !self.cleared_table
    }

    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::with_capacity(2);
        if let Some(streak) = self.streak {
            tags.push(streak.tag());
        }
        if self.cleared_table {
            tags.push("clear");
        }
        tags
    }

    pub fn label(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.tags().join("+"))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Lay,
    Collect { captured: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub kind: MoveKind,
    pub event: MoveEvent,
}

/// Ascending-run-value legality: the lowest selected card must match the
/// hand card's rank and the whole selection must be a contiguous run.
fn collect_is_legal(hand_card: Card, selection: &[Card]) -> bool {
    let mut sorted = selection.to_vec();
    sorted.sort_by_key(|card| card.run_value());
    if sorted[0].rank != hand_card.rank {
        return false;
    }
    sorted
        .windows(2)
        .all(|pair| pair[1].run_value() == pair[0].run_value() + 1)
}

impl MatchState {
    /// One player turn: lay a hand card (empty selection) or collect table
    /// cards with it. Rejections leave the match untouched and do not
    /// advance the turn.
    pub fn submit_move(
        &mut self,
        seat: Seat,
        hand_index: usize,
        table_indices: &[usize],
    ) -> Result<MoveOutcome, MoveError> {
        if seat != self.turn {
            return Err(MoveError::NotYourTurn {
                expected: self.turn,
                actual: seat,
            });
        }

        let hand_len = self.players[seat.index()].hand.len();
        let card = self.players[seat.index()]
            .hand
            .card_at(hand_index)
            .ok_or(MoveError::HandIndexOutOfRange {
                index: hand_index,
                len: hand_len,
            })?;

        if table_indices.is_empty() {
            let _ = self.players[seat.index()].hand.remove_at(hand_index);
            self.table.place(card);
            self.memory.record_lay(card, seat);
            self.turn = self.turn.next();
            return Ok(MoveOutcome {
                kind: MoveKind::Lay,
                event: MoveEvent::default(),
            });
        }

        let selection = self.table.select(table_indices).map_err(MoveError::Table)?;
        if !collect_is_legal(card, &selection) {
            return Err(MoveError::IllegalCollect);
        }

        // Streak condition reads the pre-collect memory: the previous move
        // was a lay, and both the hand card and a captured card match it.
        let extends_streak = self.memory.last_laid().is_some_and(|laid| {
            card.rank == laid.rank && selection.iter().any(|c| c.rank == laid.rank)
        });

        let taken = self
            .table
            .take_at_indices(table_indices)
            .map_err(MoveError::Table)?;
        let _ = self.players[seat.index()].hand.remove_at(hand_index);

        let highest_value = taken
            .iter()
            .map(|c| c.run_value())
            .chain([card.run_value()])
            .max()
            .unwrap_or(0);
        let streak_count = self.memory.record_collect(seat, highest_value, extends_streak);

        let mut event = MoveEvent::default();
        if extends_streak {
            let streak = Streak::from_count(streak_count);
            self.scores.award(seat.team(), streak.points());
            event.streak = Some(streak);
        }

        let captured = 1 + taken.len();
        let pile = &mut self.players[seat.index()].pile;
        pile.push(card);
        pile.extend(taken);

        if self.table.is_empty() {
            self.scores.award(seat.team(), 1);
            event.cleared_table = true;
        }

        self.turn = self.turn.next();
        Ok(MoveOutcome {
            kind: MoveKind::Collect { captured },
            event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{MoveError, MoveEvent, MoveKind, Streak};
    use crate::game::match_state::MatchState;
    use crate::model::card::Card;
    use crate::model::player::{Seat, Team};
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;
    use crate::model::table::TableError;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    /// Match with chosen hands and table, turn at `first`.
    fn arrange(first: Seat, hands: [Vec<Card>; 4], table: Vec<Card>) -> MatchState {
        let mut state = MatchState::fixture(0);
        state.turn = first;
        for (i, cards) in hands.into_iter().enumerate() {
            state.players[i].hand.deal(cards);
        }
        for c in table {
            state.table.place(c);
        }
        state
    }

    #[test]
    fn out_of_turn_move_is_rejected_without_mutation() {
        let mut state = arrange(
            Seat::West,
            [
                vec![card(Rank::As, Suit::Oros)],
                vec![card(Rank::Dos, Suit::Oros)],
                vec![],
                vec![],
            ],
            vec![],
        );
        let err = state.submit_move(Seat::South, 0, &[]).unwrap_err();
        assert_eq!(
            err,
            MoveError::NotYourTurn {
                expected: Seat::West,
                actual: Seat::South
            }
        );
        assert_eq!(state.hand_sizes()[Seat::South.index()], 1);
        assert_eq!(state.turn(), Seat::West);
    }

    #[test]
    fn lay_moves_card_to_table_and_advances_turn() {
        let laid = card(Rank::Cinco, Suit::Copas);
        let mut state = arrange(
            Seat::South,
            [vec![laid], vec![], vec![], vec![]],
            vec![card(Rank::Rey, Suit::Oros)],
        );
        let outcome = state.submit_move(Seat::South, 0, &[]).unwrap();
        assert_eq!(outcome.kind, MoveKind::Lay);
        assert!(outcome.event.is_empty());
        assert_eq!(state.table().last(), Some(&laid));
        assert_eq!(state.turn(), Seat::West);
        assert_eq!(state.memory.last_laid(), Some(laid));
    }

    #[test]
    fn collect_requires_anchor_rank_match() {
        // Hand 5 against table {4, 7}: mismatched anchor, rejected.
        let mut state = arrange(
            Seat::South,
            [vec![card(Rank::Cinco, Suit::Oros)], vec![], vec![], vec![]],
            vec![card(Rank::Cuatro, Suit::Copas), card(Rank::Siete, Suit::Bastos)],
        );
        assert_eq!(
            state.submit_move(Seat::South, 0, &[0, 1]),
            Err(MoveError::IllegalCollect)
        );
        assert_eq!(state.table().len(), 2);
        assert_eq!(state.turn(), Seat::South);
    }

    #[test]
    fn collect_captures_a_full_run() {
        // Hand 3 against table {3, 4, 5} selected fully: all four cards go
        // to the pile.
        let mut state = arrange(
            Seat::South,
            [vec![card(Rank::Tres, Suit::Oros)], vec![], vec![], vec![]],
            vec![
                card(Rank::Tres, Suit::Copas),
                card(Rank::Cuatro, Suit::Espadas),
                card(Rank::Cinco, Suit::Bastos),
            ],
        );
        let outcome = state.submit_move(Seat::South, 0, &[0, 1, 2]).unwrap();
        assert_eq!(outcome.kind, MoveKind::Collect { captured: 4 });
        assert_eq!(state.pile_sizes()[Seat::South.index()], 4);
        // Clearing the table pays one point on top.
        assert!(outcome.event.cleared_table);
        assert_eq!(state.scores().total(Team::One), 1);
    }

    #[test]
    fn run_crosses_the_face_gap() {
        // 7 -> Sota is consecutive in run-value space.
        let mut state = arrange(
            Seat::South,
            [vec![card(Rank::Siete, Suit::Oros)], vec![], vec![], vec![]],
            vec![
                card(Rank::Siete, Suit::Copas),
                card(Rank::Sota, Suit::Espadas),
                card(Rank::As, Suit::Bastos),
            ],
        );
        let outcome = state.submit_move(Seat::South, 0, &[0, 1]).unwrap();
        assert_eq!(outcome.kind, MoveKind::Collect { captured: 3 });
        assert_eq!(state.table().len(), 1);
    }

    #[test]
    fn broken_run_is_rejected_whole() {
        let mut state = arrange(
            Seat::South,
            [vec![card(Rank::Tres, Suit::Oros)], vec![], vec![], vec![]],
            vec![
                card(Rank::Tres, Suit::Copas),
                card(Rank::Cinco, Suit::Bastos),
            ],
        );
        assert_eq!(
            state.submit_move(Seat::South, 0, &[0, 1]),
            Err(MoveError::IllegalCollect)
        );
    }

    #[test]
    fn bad_references_are_rejected_before_mutation() {
        let mut state = arrange(
            Seat::South,
            [vec![card(Rank::As, Suit::Oros)], vec![], vec![], vec![]],
            vec![card(Rank::As, Suit::Copas)],
        );
        assert_eq!(
            state.submit_move(Seat::South, 3, &[]),
            Err(MoveError::HandIndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(
            state.submit_move(Seat::South, 0, &[5]),
            Err(MoveError::Table(TableError::IndexOutOfRange {
                index: 5,
                len: 1
            }))
        );
        assert_eq!(state.cards_in_play(), 40 + 2);
    }

    #[test]
    fn streak_escalates_and_caps() {
        // Three lay-6/collect-6 exchanges in a row: Bac, Rebac, San Vicent.
        let sixes: Vec<Card> = Suit::ALL
            .iter()
            .map(|&s| card(Rank::Seis, s))
            .collect();
        let mut state = arrange(
            Seat::South,
            [
                vec![sixes[0], card(Rank::As, Suit::Oros)],
                vec![sixes[1], card(Rank::Dos, Suit::Oros)],
                vec![sixes[2], card(Rank::Tres, Suit::Oros)],
                vec![sixes[3], card(Rank::Cuatro, Suit::Oros)],
            ],
            vec![card(Rank::Rey, Suit::Oros)],
        );

        state.submit_move(Seat::South, 0, &[]).unwrap();
        let first = state.submit_move(Seat::West, 0, &[1]).unwrap();
        assert_eq!(first.event.streak, Some(Streak::Bac));
        assert_eq!(state.scores().total(Team::Two), 1);

        state.submit_move(Seat::North, 0, &[]).unwrap();
        let second = state.submit_move(Seat::East, 0, &[1]).unwrap();
        assert_eq!(second.event.streak, Some(Streak::Rebac));
        // +2 this time, cumulative 3 for team two.
        assert_eq!(state.scores().total(Team::Two), 3);

        // Third exchange. Fixture shortcut: re-arm both hands with sixes.
        state.players[Seat::South.index()]
            .hand
            .deal(vec![card(Rank::Seis, Suit::Oros)]);
        state.players[Seat::West.index()]
            .hand
            .deal(vec![card(Rank::Seis, Suit::Copas)]);
        state.submit_move(Seat::South, 0, &[]).unwrap();
        let third = state.submit_move(Seat::West, 0, &[1]).unwrap();
        assert_eq!(third.event.streak, Some(Streak::SanVicent));
        assert_eq!(state.scores().total(Team::Two), 6);
    }

    #[test]
    fn third_consecutive_match_pays_three_capped() {
        // Drive the memory directly to the cap boundary, then verify the
        // fourth match still pays three.
        let mut state = arrange(
            Seat::South,
            [
                vec![card(Rank::Seis, Suit::Oros)],
                vec![card(Rank::Seis, Suit::Copas)],
                vec![],
                vec![],
            ],
            vec![],
        );
        state.memory.record_collect(Seat::East, 6, true);
        state.memory.record_collect(Seat::East, 6, true);
        state.memory.record_collect(Seat::East, 6, true);
        assert_eq!(state.memory.streak(), 3);

        state.submit_move(Seat::South, 0, &[]).unwrap();
        let outcome = state.submit_move(Seat::West, 0, &[0]).unwrap();
        assert_eq!(outcome.event.streak, Some(Streak::SanVicent));
        assert_eq!(state.scores().total(Team::Two), 3 + 1, "capped at 3, plus the clear");
    }

    #[test]
    fn collect_without_prior_lay_resets_streak() {
        let mut state = arrange(
            Seat::South,
            [vec![card(Rank::As, Suit::Oros)], vec![], vec![], vec![]],
            vec![card(Rank::As, Suit::Copas), card(Rank::Rey, Suit::Oros)],
        );
        state.memory.record_collect(Seat::East, 4, true);
        assert_eq!(state.memory.streak(), 1);

        let outcome = state.submit_move(Seat::South, 0, &[0]).unwrap();
        assert_eq!(outcome.event.streak, None);
        assert_eq!(state.memory.streak(), 0);
    }

    #[test]
    fn event_labels_combine_streak_and_clear() {
        let event = MoveEvent {
            streak: Some(Streak::Rebac),
            cleared_table: true,
        };
        assert_eq!(event.tags(), vec!["streak-2", "clear"]);
        assert_eq!(event.label().unwrap(), "streak-2+clear");
        assert_eq!(MoveEvent::default().label(), None);
    }

    #[test]
    fn collect_records_highest_captured_value() {
        let mut state = arrange(
            Seat::South,
            [vec![card(Rank::Siete, Suit::Oros)], vec![], vec![], vec![]],
            vec![
                card(Rank::Siete, Suit::Copas),
                card(Rank::Sota, Suit::Espadas),
                card(Rank::Dos, Suit::Oros),
            ],
        );
        state.submit_move(Seat::South, 0, &[0, 1]).unwrap();
        assert_eq!(state.memory.steal_run_anchor(), Some(8));
    }
}
