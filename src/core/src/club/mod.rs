mod club;
pub mod player;

pub use club::*;
pub use player::*;
