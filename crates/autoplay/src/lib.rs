//! Seeded computer-only rounds of Switch, for comparing strategies.

mod config;
mod error;
mod recorder;
mod simulator;
mod trace;

pub use config::*;
pub use error::*;
pub use recorder::*;
pub use simulator::*;
pub use trace::*;
