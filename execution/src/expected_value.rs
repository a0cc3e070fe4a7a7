//! Closed-form expected value, return to player and house edge.

use crate::params::{ensure_non_negative, ensure_positive, ensure_probability, ParameterError};
use houseedge_types::casino::{Bet, RouletteWheel};

/// Expected monetary outcome of a single wager.
///
/// `EV = bet * payout * p - bet * (1 - p)`, with `payout` quoted "X:1".
pub fn expected_value(
    bet_amount: f64,
    win_probability: f64,
    payout_multiple: f64,
) -> Result<f64, ParameterError> {
    let bet_amount = ensure_positive("bet_amount", bet_amount)?;
    let p = ensure_probability("win_probability", win_probability)?;
    let payout = ensure_non_negative("payout_multiple", payout_multiple)?;

    let win = bet_amount * payout;
    let loss = -bet_amount;
    Ok(win * p + loss * (1.0 - p))
}

/// Percentage of wagered money returned over many trials: `p * (payout + 1) * 100`.
pub fn return_to_player(win_probability: f64, payout_multiple: f64) -> Result<f64, ParameterError> {
    let p = ensure_probability("win_probability", win_probability)?;
    let payout = ensure_non_negative("payout_multiple", payout_multiple)?;
    Ok(p * (payout + 1.0) * 100.0)
}

/// House edge of a single wager, as a percentage: `-((payout + 1) * p - 1) * 100`.
pub fn bet_house_edge(win_probability: f64, payout_multiple: f64) -> Result<f64, ParameterError> {
    let p = ensure_probability("win_probability", win_probability)?;
    let payout = ensure_non_negative("payout_multiple", payout_multiple)?;
    Ok(((payout + 1.0) * p - 1.0) * -100.0)
}

/// House edge of a wheel whose zeros pay nothing: `zero_pockets / total_pockets * 100`.
pub fn wheel_house_edge(zero_pockets: u32, total_pockets: u32) -> Result<f64, ParameterError> {
    ensure_positive("total_pockets", total_pockets as f64)?;
    let share = ensure_probability(
        "zero_pockets / total_pockets",
        zero_pockets as f64 / total_pockets as f64,
    )?;
    Ok(share * 100.0)
}

/// Expected value, RTP and edge of one roulette bet at a given stake.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BetAnalysis {
    pub bet: &'static Bet,
    pub expected_value: f64,
    pub return_to_player_percent: f64,
    pub house_edge_percent: f64,
}

/// Analyse every bet on a wheel at the given stake, in table order.
pub fn analyse_wheel(
    wheel: &'static RouletteWheel,
    bet_amount: f64,
) -> Result<Vec<BetAnalysis>, ParameterError> {
    wheel
        .bets
        .iter()
        .map(|bet| {
            Ok(BetAnalysis {
                bet,
                expected_value: expected_value(bet_amount, bet.probability, bet.payout)?,
                return_to_player_percent: return_to_player(bet.probability, bet.payout)?,
                house_edge_percent: bet_house_edge(bet.probability, bet.payout)?,
            })
        })
        .collect()
}
