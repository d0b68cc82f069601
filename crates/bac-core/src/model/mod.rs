pub mod card;
pub mod deck;
pub mod hand;
pub mod memory;
pub mod player;
pub mod rank;
pub mod score;
pub mod suit;
pub mod table;
