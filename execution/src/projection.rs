//! Closed-form session projections for each visualizer.
//!
//! Everything here is an expectation over many trials except [`slot_trajectory`], which adds
//! a random perturbation around the expected balance for display.

use crate::{
    expected_value::{analyse_wheel, BetAnalysis},
    params::{ensure_finite, ensure_positive, ParameterError},
};
use houseedge_types::{
    casino::{
        BlackjackStrategy, CrapsBet, RouletteVariant, SlotType, BAD_EDGE_FROM, CRAPS_BETS,
        GOOD_EDGE_BELOW, HANDS_PER_HOUR, SLOT_TRAJECTORY_SAMPLES,
    },
    SlotPoint,
};
use rand::Rng;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Expected totals of a session at a flat house edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SessionProjection {
    pub total_wagered: f64,
    /// Negative when the player holds the edge.
    pub expected_loss: f64,
    pub expected_return: f64,
    /// Present when the session starts from a known bankroll.
    pub expected_ending_bankroll: Option<f64>,
}

impl SessionProjection {
    fn at_edge(total_wagered: f64, house_edge_percent: f64, starting_bankroll: Option<f64>) -> Self {
        let expected_loss = total_wagered * (house_edge_percent / 100.0);
        Self {
            total_wagered,
            expected_loss,
            expected_return: total_wagered - expected_loss,
            expected_ending_bankroll: starting_bankroll.map(|bankroll| bankroll - expected_loss),
        }
    }
}

/// Project a generic session of `rounds` equal bets.
pub fn project_session(
    starting_bankroll: f64,
    bet_amount: f64,
    house_edge_percent: f64,
    rounds: u64,
) -> Result<SessionProjection, ParameterError> {
    let starting_bankroll = ensure_positive("starting_bankroll", starting_bankroll)?;
    let bet_amount = ensure_positive("bet_amount", bet_amount)?;
    let edge = ensure_finite("house_edge_percent", house_edge_percent)?;
    Ok(SessionProjection::at_edge(
        bet_amount * rounds as f64,
        edge,
        Some(starting_bankroll),
    ))
}

/// Expected outcome of one blackjack strategy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrategyOutcome {
    pub strategy: BlackjackStrategy,
    pub house_edge_percent: f64,
    /// Whole hours at the table, rounded half up.
    pub playing_time_hours: f64,
    pub projection: SessionProjection,
}

/// Hours needed to play `hands` at [`HANDS_PER_HOUR`], rounded to the nearest hour (halves up).
pub fn playing_time_hours(hands: u64) -> f64 {
    (hands as f64 / HANDS_PER_HOUR as f64 + 0.5).floor()
}

/// Project `hands` blackjack hands at `bet_amount` under one strategy.
pub fn strategy_projection(
    strategy: BlackjackStrategy,
    hands: u64,
    bet_amount: f64,
) -> Result<StrategyOutcome, ParameterError> {
    let bet_amount = ensure_positive("bet_amount", bet_amount)?;
    let house_edge_percent = strategy.profile().house_edge_percent;
    Ok(StrategyOutcome {
        strategy,
        house_edge_percent,
        playing_time_hours: playing_time_hours(hands),
        projection: SessionProjection::at_edge(bet_amount * hands as f64, house_edge_percent, None),
    })
}

/// Project every blackjack strategy, in table order.
pub fn strategy_comparison(
    hands: u64,
    bet_amount: f64,
) -> Result<Vec<StrategyOutcome>, ParameterError> {
    BlackjackStrategy::ALL
        .iter()
        .map(|strategy| strategy_projection(*strategy, hands, bet_amount))
        .collect()
}

/// Project a slot session. The starting bankroll is taken to be the total wagered.
pub fn slot_session(
    slot: SlotType,
    spins: u64,
    bet_per_spin: f64,
) -> Result<SessionProjection, ParameterError> {
    let bet_per_spin = ensure_positive("bet_per_spin", bet_per_spin)?;
    let profile = slot.profile();
    let total_wagered = bet_per_spin * spins as f64;
    let expected_return = total_wagered * (profile.return_to_player_percent / 100.0);
    Ok(SessionProjection {
        total_wagered,
        expected_loss: total_wagered - expected_return,
        expected_return,
        expected_ending_bankroll: Some(expected_return),
    })
}

/// Sample a slot session's balance roughly every fiftieth of the session.
///
/// The balance starts at the total wagered and drifts down at the house edge; each sample adds
/// uniform noise of width `2 * bet * sqrt(spin)`. Both series are floored at zero.
pub fn slot_trajectory<R: Rng + ?Sized>(
    slot: SlotType,
    spins: u64,
    bet_per_spin: f64,
    rng: &mut R,
) -> Result<Vec<SlotPoint>, ParameterError> {
    let bet_per_spin = ensure_positive("bet_per_spin", bet_per_spin)?;
    let edge = slot.profile().house_edge_percent;
    let total_wagered = bet_per_spin * spins as f64;
    let step = (spins / SLOT_TRAJECTORY_SAMPLES).max(1);

    let mut points = Vec::with_capacity((spins / step + 1) as usize);
    let mut spin = 0u64;
    loop {
        let expected = total_wagered - spin as f64 * bet_per_spin * (edge / 100.0);
        let spread = (spin as f64).sqrt() * bet_per_spin * 2.0;
        let noise = (rng.gen::<f64>() - 0.5) * spread;
        points.push(SlotPoint {
            spin,
            bankroll: (expected + noise).max(0.0),
            expected: expected.max(0.0),
        });

        match spin.checked_add(step) {
            Some(next) if next <= spins => spin = next,
            _ => break,
        }
    }
    debug!(?slot, spins, samples = points.len(), "slot trajectory sampled");
    Ok(points)
}

/// Coarse rating of a house edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeTier {
    /// Below 2%.
    Good,
    /// From 2% up to 10%.
    Fair,
    /// 10% and above.
    Bad,
}

impl EdgeTier {
    pub fn classify(house_edge_percent: f64) -> Self {
        if house_edge_percent < GOOD_EDGE_BELOW {
            Self::Good
        } else if house_edge_percent < BAD_EDGE_FROM {
            Self::Fair
        } else {
            Self::Bad
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Bad => "bad",
        }
    }
}

impl fmt::Display for EdgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RankedCrapsBet {
    pub bet: &'static CrapsBet,
    pub tier: EdgeTier,
}

/// Craps bets from lowest to highest house edge.
pub fn rank_craps_bets() -> Vec<RankedCrapsBet> {
    let mut ranked: Vec<RankedCrapsBet> = CRAPS_BETS
        .iter()
        .map(|bet| RankedCrapsBet {
            bet,
            tier: EdgeTier::classify(bet.house_edge_percent),
        })
        .collect();
    ranked.sort_by(|a, b| a.bet.house_edge_percent.total_cmp(&b.bet.house_edge_percent));
    ranked
}

/// Per-bet analysis of a roulette variant at the given stake.
pub fn roulette_bet_table(
    variant: RouletteVariant,
    bet_amount: f64,
) -> Result<Vec<BetAnalysis>, ParameterError> {
    analyse_wheel(variant.wheel(), bet_amount)
}
