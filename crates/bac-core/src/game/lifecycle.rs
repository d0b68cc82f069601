use super::match_state::MatchState;
use crate::model::card::Card;
use crate::model::deck::{Deck, DeckError};
use crate::model::hand::Hand;
use crate::model::player::{Seat, Team};
use crate::model::table::Table;

/// What happened during a fresh-deck deal, for the caller to broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealReport {
    pub wash_occurred: bool,
    /// Team that took the single deal point: the dealer's opponents on a
    /// wash, the dealer's own team on a clean table.
    pub awarded_team: Team,
    pub table_before: Vec<Card>,
    pub table_after: Vec<Card>,
}

/// Per-player bonus for a freshly dealt hand holding a rank pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundBonus {
    pub seat: Seat,
    pub team: Team,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReport {
    /// Seat whose pile took the leftover table cards, when one is recorded.
    pub leftover_to: Option<Seat>,
    pub leftover_count: usize,
    pub team_card_counts: [usize; 2],
    pub bonus_points: [u32; 2],
    pub next_dealer: Seat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandDeal {
    Dealt { round_bonuses: Vec<RoundBonus> },
    DeckExhausted(SettlementReport),
}

impl MatchState {
    /// Starts a fresh 40-card deck: clears piles and table, rotates the
    /// turn to the dealer's left, seeds the dealer as last collector and
    /// draws the opening table of four, correcting washes ("meada") until
    /// no rank repeats. Exactly one deal point is awarded either way.
    pub fn deal_new_deck(&mut self) -> Result<DealReport, DeckError> {
        self.deck = Deck::standard();
        self.deck.shuffle_in_place(&mut self.rng);
        self.table = Table::new();
        for player in &mut self.players {
            player.hand = Hand::new();
            player.pile.clear();
        }
        self.turn = self.dealer.next();
        self.memory.reset_for_deal(self.dealer);

        for card in self.deck.draw(4)? {
            self.table.place(card);
        }
        let table_before = self.table.cards().to_vec();

        let dealer_team = self.dealer.team();
        let (wash_occurred, awarded_team) = if self.table.has_duplicate_rank() {
            self.scores.award(dealer_team.opponent(), 1);
            while self.table.has_duplicate_rank() {
                let returned = self.table.drain_all();
                self.deck.return_cards(returned);
                self.deck.shuffle_in_place(&mut self.rng);
                for card in self.deck.draw(4)? {
                    self.table.place(card);
                }
            }
            (true, dealer_team.opponent())
        } else {
            self.scores.award(dealer_team, 1);
            (false, dealer_team)
        };

        Ok(DealReport {
            wash_occurred,
            awarded_team,
            table_before,
            table_after: self.table.cards().to_vec(),
        })
    }

    /// Deals the next three cards to every seat, or settles the deck when
    /// none remain. The "round" bonus is judged against the freshly dealt
    /// hand only, independently per seat.
    pub fn deal_hands(&mut self) -> Result<HandDeal, DeckError> {
        if self.deck.is_empty() {
            return Ok(HandDeal::DeckExhausted(self.settle_deck()));
        }

        let mut round_bonuses = Vec::new();
        for seat in Seat::LOOP.iter().copied() {
            let cards = self.deck.draw(3)?;
            let player = &mut self.players[seat.index()];
            player.hand.deal(cards);
            if player.hand.has_rank_pair() {
                self.scores.award(seat.team(), 1);
                round_bonuses.push(RoundBonus {
                    seat,
                    team: seat.team(),
                });
            }
        }
        Ok(HandDeal::Dealt { round_bonuses })
    }

    /// End-of-deck settlement: table remainder to the last collector, card
    /// majority pays one point per card over twenty, dealer rotates.
    fn settle_deck(&mut self) -> SettlementReport {
        let leftovers = self.table.drain_all();
        let leftover_count = leftovers.len();
        let leftover_to = self.memory.last_collector();
        if let Some(seat) = leftover_to {
            self.players[seat.index()].pile.extend(leftovers);
        }

        let mut team_card_counts = [0usize; 2];
        let mut bonus_points = [0u32; 2];
        for team in Team::BOTH.iter().copied() {
            let count = self.team_card_count(team);
            team_card_counts[team.index()] = count;
            if count > 20 {
                let bonus = (count - 20) as u32;
                bonus_points[team.index()] = bonus;
                self.scores.award(team, bonus);
            }
        }

        self.dealer = self.dealer.next();
        SettlementReport {
            leftover_to,
            leftover_count,
            team_card_counts,
            bonus_points,
            next_dealer: self.dealer,
        }
    }
}
