use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::memory::RoundMemory;
use crate::model::player::{Player, Seat, Team};
use crate::model::score::TeamScores;
use crate::model::table::Table;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::array;

/// Complete state of one match. The engine owns nothing global: callers hold
/// one of these per match and serialize access to it.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub(crate) players: [Player; 4],
    pub(crate) deck: Deck,
    pub(crate) table: Table,
    pub(crate) memory: RoundMemory,
    pub(crate) scores: TeamScores,
    pub(crate) dealer: Seat,
    pub(crate) turn: Seat,
    pub(crate) rng: StdRng,
    seed: u64,
}

impl MatchState {
    pub fn new(names: [&str; 4]) -> Self {
        Self::with_seed(names, rand::random())
    }

    pub fn with_seed(names: [&str; 4], seed: u64) -> Self {
        let players = array::from_fn(|i| {
            let seat = Seat::from_index(i).expect("player index in range");
            Player::new(seat, names[i])
        });
        let dealer = Seat::South;
        Self {
            players,
            deck: Deck::standard(),
            table: Table::new(),
            memory: RoundMemory::new(),
            scores: TeamScores::new(),
            dealer,
            turn: dealer.next(),
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn table(&self) -> &[Card] {
        self.table.cards()
    }

    pub fn scores(&self) -> &TeamScores {
        &self.scores
    }

    pub fn winner(&self) -> Option<Team> {
        self.scores.winner()
    }

    pub fn player_name(&self, seat: Seat) -> &str {
        &self.players[seat.index()].name
    }

    /// The one private accessor: a seat's own hand. Everything else about a
    /// match is table-public.
    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.players[seat.index()].hand.cards()
    }

    pub fn hand_sizes(&self) -> [usize; 4] {
        array::from_fn(|i| self.players[i].hand.len())
    }

    pub fn pile_sizes(&self) -> [usize; 4] {
        array::from_fn(|i| self.players[i].pile.len())
    }

    pub fn team_card_count(&self, team: Team) -> usize {
        team.seats()
            .iter()
            .map(|seat| self.players[seat.index()].pile.len())
            .sum()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// True when every hand is empty and the caller should redeal.
    pub fn hands_exhausted(&self) -> bool {
        self.players.iter().all(|player| player.hand.is_empty())
    }

    #[cfg(test)]
    pub(crate) fn fixture(seed: u64) -> Self {
        Self::with_seed(["Ana", "Bruno", "Carla", "Dario"], seed)
    }

    /// Total cards across deck, hands, table and piles. Invariant: 40.
    #[cfg(test)]
    pub(crate) fn cards_in_play(&self) -> usize {
        self.deck.remaining()
            + self.table.len()
            + self
                .players
                .iter()
                .map(|p| p.hand.len() + p.pile.len())
                .sum::<usize>()
    }
}
