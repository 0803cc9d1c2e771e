//! Round engine and computer players for Switch. Keep this crate free of IO;
//! everything user-facing goes through [`Frontend`].

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod frontend;
pub mod player;
pub mod rng;
pub mod round;
pub mod session;
pub mod state;
pub mod strategy;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use frontend::*;
pub use player::*;
pub use rng::*;
pub use round::*;
pub use session::*;
pub use state::*;
pub use strategy::*;
