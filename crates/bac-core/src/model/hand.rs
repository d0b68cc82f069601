use crate::model::card::Card;
use crate::model::rank::Rank;

/// A player's hand. Unlike captured piles this is index-addressed by moves
/// coming over the wire, so insertion order is kept stable and nothing here
/// ever sorts.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn deal(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// True when two or more cards share a rank (the "round" bonus trigger).
    pub fn has_rank_pair(&self) -> bool {
        self.cards.iter().enumerate().any(|(i, a)| {
            self.cards[i + 1..].iter().any(|b| b.rank == a.rank)
        })
    }

    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank == rank).count()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
