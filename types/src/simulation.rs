//! Value types produced by the probability engine.

use serde::Serialize;

/// Bankroll after a given round.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SimulationPoint {
    /// Round index; 0 is the state before any bet.
    pub round: u64,
    /// Never negative.
    pub bankroll: f64,
}

/// A finished bankroll walk.
///
/// The first point is always `{ round: 0, bankroll: starting_bankroll }`. Rounds are
/// strictly increasing and the run ends at the first point whose bankroll is exactly zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SimulationRun {
    points: Vec<SimulationPoint>,
}

impl SimulationRun {
    /// Wrap points produced by a walk. Callers are responsible for the ordering invariants.
    pub fn from_points(points: Vec<SimulationPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SimulationPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimulationPoint> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&SimulationPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&SimulationPoint> {
        self.points.last()
    }

    /// Number of rounds actually played (excludes the initial state).
    pub fn rounds_played(&self) -> u64 {
        self.last().map(|point| point.round).unwrap_or(0)
    }

    /// Whether the walk ended in ruin.
    pub fn is_ruined(&self) -> bool {
        self.points.len() > 1 && self.last().is_some_and(|point| point.bankroll == 0.0)
    }

    pub fn into_points(self) -> Vec<SimulationPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a SimulationRun {
    type Item = &'a SimulationPoint;
    type IntoIter = std::slice::Iter<'a, SimulationPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// One sample of a slot session trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SlotPoint {
    pub spin: u64,
    /// Sampled balance (expected value plus noise), floored at zero.
    pub bankroll: f64,
    /// Mathematical expectation, floored at zero.
    pub expected: f64,
}
