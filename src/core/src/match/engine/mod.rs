mod context;
mod engine;
mod league;
mod settings;
mod strength;

pub use context::*;
pub use engine::*;
pub use league::*;
pub use settings::*;
pub use strength::*;
