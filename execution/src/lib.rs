//! Houseedge probability engine.
//!
//! This crate turns the static tables in `houseedge-types` into numbers: expected value, return
//! to player and house edge per bet, session projections, a bankruptcy risk heuristic, and a
//! random bankroll walk.
//!
//! ## Determinism
//! - Every function except the bankroll walk and the slot trajectory is pure: the same inputs
//!   produce bit-identical outputs.
//! - Stochastic functions take their randomness from a caller-supplied `Rng`. [`simulate`] uses
//!   the thread-local generator; [`simulate_seeded`] derives a ChaCha stream from a `u64` seed.
//!
//! ## Validation
//! Inputs are checked on entry and rejected with [`ParameterError`] rather than propagating
//! NaN. Round, spin and hand counts are unsigned.
//!
//! ## Example
//! ```rust
//! use houseedge_execution::{bankruptcy_risk, expected_value, simulate_seeded};
//!
//! let ev = expected_value(10.0, 1.0 / 37.0, 35.0).unwrap();
//! assert!(ev < 0.0);
//!
//! let run = simulate_seeded(1000.0, 25.0, 2.7, 200, 42).unwrap();
//! assert_eq!(run.first().map(|point| point.bankroll), Some(1000.0));
//!
//! let risk = bankruptcy_risk(1000.0, 25.0, 2.7, 200).unwrap();
//! assert!((0.0..=100.0).contains(&risk));
//! ```

pub mod bankroll;
pub mod expected_value;
pub mod format;
mod params;
pub mod projection;
pub mod risk;

pub use bankroll::{
    simulate, simulate_seeded, simulate_with_rng, BankrollWalk, FlatEdge, RoundModel, RunSummary,
};
pub use expected_value::{
    analyse_wheel, bet_house_edge, expected_value, return_to_player, wheel_house_edge,
    BetAnalysis,
};
pub use format::{
    format_currency, format_percent, format_signed_currency, format_signed_percent,
    DEFAULT_PERCENT_DECIMALS,
};
pub use params::ParameterError;
pub use projection::{
    playing_time_hours, project_session, rank_craps_bets, roulette_bet_table, slot_session,
    slot_trajectory, strategy_comparison, strategy_projection, EdgeTier, RankedCrapsBet,
    SessionProjection, StrategyOutcome,
};
pub use risk::bankruptcy_risk;
