mod manager;
mod performance;
mod player;
mod team;

pub use manager::*;
pub use performance::*;
pub use player::*;
pub use team::*;
