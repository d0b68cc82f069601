use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Oros = 0,
    Copas = 1,
    Espadas = 2,
    Bastos = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Oros, Suit::Copas, Suit::Espadas, Suit::Bastos];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Oros),
            1 => Some(Suit::Copas),
            2 => Some(Suit::Espadas),
            3 => Some(Suit::Bastos),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Oros => "O",
            Suit::Copas => "C",
            Suit::Espadas => "E",
            Suit::Bastos => "B",
        };
        f.write_str(symbol)
    }
}
