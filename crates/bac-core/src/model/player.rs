use crate::model::card::Card;
use crate::model::hand::Hand;
use core::fmt;
use serde::{Deserialize, Serialize};

/// The four seats around the table, indexed 0-3 in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Seat {
    South = 0,
    West = 1,
    North = 2,
    East = 3,
}

impl Seat {
    pub const LOOP: [Seat; 4] = [Seat::South, Seat::West, Seat::North, Seat::East];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::South),
            1 => Some(Seat::West),
            2 => Some(Seat::North),
            3 => Some(Seat::East),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> Seat {
        match self {
            Seat::South => Seat::West,
            Seat::West => Seat::North,
            Seat::North => Seat::East,
            Seat::East => Seat::South,
        }
    }

    pub const fn partner(self) -> Seat {
        match self {
            Seat::South => Seat::North,
            Seat::West => Seat::East,
            Seat::North => Seat::South,
            Seat::East => Seat::West,
        }
    }

    /// Seats 0 and 2 form one team, seats 1 and 3 the other. Fixed by rule.
    pub const fn team(self) -> Team {
        match self {
            Seat::South | Seat::North => Team::One,
            Seat::West | Seat::East => Team::Two,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seat::South => "South",
            Seat::West => "West",
            Seat::North => "North",
            Seat::East => "East",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Team {
    One = 0,
    Two = 1,
}

impl Team {
    pub const BOTH: [Team; 2] = [Team::One, Team::Two];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn opponent(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    pub const fn seats(self) -> [Seat; 2] {
        match self {
            Team::One => [Seat::South, Seat::North],
            Team::Two => [Seat::West, Seat::East],
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Team::One => "Team 1",
            Team::Two => "Team 2",
        };
        f.write_str(label)
    }
}

/// One seated player: a stable identity plus the per-round hand and the
/// captured pile.
#[derive(Debug, Clone)]
pub struct Player {
    pub seat: Seat,
    pub name: String,
    pub hand: Hand,
    pub pile: Vec<Card>,
}

impl Player {
    pub fn new(seat: Seat, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
            hand: Hand::new(),
            pile: Vec::new(),
        }
    }

    pub fn team(&self) -> Team {
        self.seat.team()
    }
}
