//! Common types used throughout houseedge.
//!
//! [`casino`] holds the static per-game tables; [`simulation`] holds the value types the
//! probability engine produces.

pub mod casino;
pub mod simulation;

pub use simulation::{SimulationPoint, SimulationRun, SlotPoint};
