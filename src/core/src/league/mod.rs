pub mod dynamics;
pub mod schedule;
pub mod season;
pub mod table;

pub use dynamics::*;
pub use schedule::*;
pub use season::*;
pub use table::*;
