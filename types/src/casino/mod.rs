//! Casino game model tables.
//!
//! Static, read-only data describing each game: roulette wheels and their bets, blackjack
//! strategy profiles, slot machine classes and craps wagers. Every table is keyed by a closed
//! enum whose `ALL` constant enumerates the full key set.

mod blackjack;
mod constants;
mod craps;
mod game;
mod roulette;
mod slots;

pub use blackjack::*;
pub use constants::*;
pub use craps::*;
pub use game::{GameCategory, GameInfo, GameType, UnknownKey};
pub use roulette::*;
pub use slots::*;
