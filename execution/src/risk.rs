//! Bankruptcy risk heuristic.
//!
//! This is not a ruin probability. It compares the expected ending bankroll against a crude
//! spread proxy (`bet * sqrt(rounds)`) and maps the ratio linearly onto `[0, 100]`, saturating
//! at 100 once the expected ending bankroll is gone and at 0 once it sits three "spreads" clear.

use crate::params::{ensure_finite, ensure_positive, ParameterError};
use houseedge_types::casino::RISK_FACTOR_CEILING;
use tracing::warn;

/// Heuristic risk of losing the whole bankroll, as a percentage in `[0, 100]`.
pub fn bankruptcy_risk(
    starting_bankroll: f64,
    bet_amount: f64,
    house_edge_percent: f64,
    rounds: u64,
) -> Result<f64, ParameterError> {
    let starting_bankroll = ensure_positive("starting_bankroll", starting_bankroll)?;
    let bet_amount = ensure_positive("bet_amount", bet_amount)?;
    let edge = ensure_finite("house_edge_percent", house_edge_percent)?;
    if edge < 0.0 {
        warn!(edge, "negative house edge passed to bankruptcy risk");
    }

    let rounds = rounds as f64;
    let expected_loss = bet_amount * (edge / 100.0) * rounds;
    let expected_end = starting_bankroll - expected_loss;
    if expected_end <= 0.0 {
        return Ok(100.0);
    }

    // Zero rounds gives an infinite factor and falls through to 0
    let spread = bet_amount * rounds.sqrt();
    let risk_factor = expected_end / spread;
    Ok(if risk_factor <= 0.0 {
        100.0
    } else if risk_factor >= RISK_FACTOR_CEILING {
        0.0
    } else {
        100.0 * (1.0 - risk_factor / RISK_FACTOR_CEILING)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_expected_ruin_is_certain() {
        // 25 * 0.2 * 200 = 1000 expected loss against a 1000 bankroll
        assert_eq!(bankruptcy_risk(1000.0, 25.0, 20.0, 200), Ok(100.0));
        assert_eq!(bankruptcy_risk(100.0, 200.0, 20.0, 1000), Ok(100.0));
    }

    #[test]
    fn test_comfortable_bankroll_is_safe() {
        // expected end 865, spread 25 * sqrt(200) ~ 353.6, factor ~ 2.45
        let risk = bankruptcy_risk(1000.0, 25.0, 2.7, 200).unwrap();
        let factor = 865.0 / (25.0 * 200f64.sqrt());
        assert!((risk - 100.0 * (1.0 - factor / 3.0)).abs() < 1e-9);

        assert_eq!(bankruptcy_risk(10_000.0, 1.0, 0.5, 100), Ok(0.0));
    }

    #[test]
    fn test_breakpoint_at_three() {
        // expected end 300, spread 10 * sqrt(100) = 100
        assert_eq!(bankruptcy_risk(300.0, 10.0, 0.0, 100), Ok(0.0));
        let just_below = bankruptcy_risk(299.0, 10.0, 0.0, 100).unwrap();
        assert!(just_below > 0.0 && just_below < 1.0);
    }

    #[test]
    fn test_zero_rounds() {
        assert_eq!(bankruptcy_risk(100.0, 50.0, 20.0, 0), Ok(0.0));
    }

    #[test]
    fn test_negative_edge_is_accepted() {
        assert_eq!(bankruptcy_risk(1000.0, 25.0, -0.5, 100), Ok(0.0));
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(matches!(
            bankruptcy_risk(1000.0, 0.0, 2.7, 100),
            Err(ParameterError::NotPositive { field: "bet_amount", .. })
        ));
        assert!(matches!(
            bankruptcy_risk(-1.0, 25.0, 2.7, 100),
            Err(ParameterError::NotPositive { field: "starting_bankroll", .. })
        ));
        assert!(matches!(
            bankruptcy_risk(1000.0, 25.0, f64::INFINITY, 100),
            Err(ParameterError::NonFinite { .. })
        ));
    }

    proptest! {
        #[test]
        fn risk_is_bounded(
            bankroll in 100.0f64..10_000.0,
            bet in 1.0f64..200.0,
            edge in 0.5f64..20.0,
            rounds in 0u64..1_000,
        ) {
            let risk = bankruptcy_risk(bankroll, bet, edge, rounds).unwrap();
            prop_assert!((0.0..=100.0).contains(&risk));
        }

        #[test]
        fn risk_falls_as_bankroll_grows(
            bankroll in 100.0f64..10_000.0,
            extra in 0.0f64..5_000.0,
            bet in 1.0f64..200.0,
            edge in 0.5f64..20.0,
            rounds in 10u64..1_000,
        ) {
            let small = bankruptcy_risk(bankroll, bet, edge, rounds).unwrap();
            let large = bankruptcy_risk(bankroll + extra, bet, edge, rounds).unwrap();
            prop_assert!(large <= small);
        }

        #[test]
        fn risk_rises_with_edge(
            bankroll in 100.0f64..10_000.0,
            bet in 1.0f64..200.0,
            edge in 0.5f64..20.0,
            extra in 0.0f64..10.0,
            rounds in 10u64..1_000,
        ) {
            let low = bankruptcy_risk(bankroll, bet, edge, rounds).unwrap();
            let high = bankruptcy_risk(bankroll, bet, edge + extra, rounds).unwrap();
            prop_assert!(high >= low);
        }
    }
}
