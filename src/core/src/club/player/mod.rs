mod attributes;
mod builder;
mod player;
mod positions;
mod skills;

pub use attributes::*;
pub use builder::*;
pub use player::*;
pub use positions::*;
pub use skills::*;
