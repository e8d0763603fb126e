mod context;
mod error;
mod result;
mod settings;
mod simulator;
mod statistics;

pub use context::*;
pub use error::*;
pub use result::*;
pub use settings::*;
pub use simulator::*;
pub use statistics::*;
