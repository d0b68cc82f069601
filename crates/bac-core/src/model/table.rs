use crate::model::card::Card;
use std::collections::HashSet;
use std::fmt;

/// The shared table. Moves reference cards by their current index, so all
/// multi-card removals run highest index first to keep the remaining
/// references valid within the same call.
#[derive(Debug, Clone, Default)]
pub struct Table {
    cards: Vec<Card>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    IndexOutOfRange { index: usize, len: usize },
    DuplicateIndex(usize),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::IndexOutOfRange { index, len } => {
                write!(f, "table index {index} out of range (table has {len} cards)")
            }
            TableError::DuplicateIndex(index) => {
                write!(f, "table index {index} referenced twice")
            }
        }
    }
}

impl std::error::Error for TableError {}

impl Table {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn place(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Resolves a selection of indices to cards without mutating anything.
    pub fn select(&self, indices: &[usize]) -> Result<Vec<Card>, TableError> {
        let mut seen = HashSet::new();
        let mut selected = Vec::with_capacity(indices.len());
        for &index in indices {
            if index >= self.cards.len() {
                return Err(TableError::IndexOutOfRange {
                    index,
                    len: self.cards.len(),
                });
            }
            if !seen.insert(index) {
                return Err(TableError::DuplicateIndex(index));
            }
            selected.push(self.cards[index]);
        }
        Ok(selected)
    }

    /// Removes the referenced cards, highest index first. Callers validate
    /// with `select` beforehand; a bad index here is still an error, with the
    /// table untouched.
    pub fn take_at_indices(&mut self, indices: &[usize]) -> Result<Vec<Card>, TableError> {
        self.select(indices)?;
        let mut ordered: Vec<usize> = indices.to_vec();
        ordered.sort_unstable_by(|a, b| b.cmp(a));
        let mut taken = Vec::with_capacity(ordered.len());
        for index in ordered {
            taken.push(self.cards.remove(index));
        }
        Ok(taken)
    }

    pub fn has_duplicate_rank(&self) -> bool {
        let mut ranks = HashSet::new();
        self.cards.iter().any(|card| !ranks.insert(card.rank))
    }

    pub fn drain_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
