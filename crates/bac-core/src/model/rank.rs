use core::fmt;
use serde::{Deserialize, Serialize};

/// Spanish-deck ranks. Pip values skip 8 and 9: the face cards keep their
/// traditional numbers (Sota 10, Caballo 11, Rey 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    As = 1,
    Dos = 2,
    Tres = 3,
    Cuatro = 4,
    Cinco = 5,
    Seis = 6,
    Siete = 7,
    Sota = 10,
    Caballo = 11,
    Rey = 12,
}

impl Rank {
    pub const ORDERED: [Rank; 10] = [
        Rank::As,
        Rank::Dos,
        Rank::Tres,
        Rank::Cuatro,
        Rank::Cinco,
        Rank::Seis,
        Rank::Siete,
        Rank::Sota,
        Rank::Caballo,
        Rank::Rey,
    ];

    pub const fn from_pips(value: u8) -> Option<Self> {
        match value {
            1 => Some(Rank::As),
            2 => Some(Rank::Dos),
            3 => Some(Rank::Tres),
            4 => Some(Rank::Cuatro),
            5 => Some(Rank::Cinco),
            6 => Some(Rank::Seis),
            7 => Some(Rank::Siete),
            10 => Some(Rank::Sota),
            11 => Some(Rank::Caballo),
            12 => Some(Rank::Rey),
            _ => None,
        }
    }

    pub const fn pips(self) -> u8 {
        self as u8
    }

    /// Position in the run order used for consecutive checks. The 7 -> Sota
    /// gap closes here: Sota is 8, Caballo 9, Rey 10.
    pub const fn run_value(self) -> u8 {
        match self {
            Rank::Sota => 8,
            Rank::Caballo => 9,
            Rank::Rey => 10,
            other => other as u8,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rank::As => "1",
            Rank::Dos => "2",
            Rank::Tres => "3",
            Rank::Cuatro => "4",
            Rank::Cinco => "5",
            Rank::Seis => "6",
            Rank::Siete => "7",
            Rank::Sota => "S",
            Rank::Caballo => "C",
            Rank::Rey => "R",
        };
        f.write_str(text)
    }
}
