pub mod lifecycle;
pub mod match_state;
pub mod moves;
pub mod serialization;
pub mod steal;
pub mod view;
