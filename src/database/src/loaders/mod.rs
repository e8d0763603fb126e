mod club;
mod roster;

pub use club::*;
pub use roster::*;
