//! Round-by-round bankroll simulation.
//!
//! A walk starts at round 0 with the starting bankroll and settles one wager per round until
//! either the requested number of rounds has been played or the bankroll is exhausted. On
//! ruin the balance is clamped to exactly zero, that point is emitted, and the walk ends.
//!
//! How a single round settles is delegated to a [`RoundModel`]. The only model shipped is
//! [`FlatEdge`], which collapses a game into one aggregate win probability
//! (`1 - house_edge / 100`) paying even money. That is an approximation of any real game's
//! payout structure; callers that need per-game accuracy can supply their own model.

use crate::params::{ensure_finite, ensure_positive, ensure_probability, ParameterError};
use houseedge_types::{SimulationPoint, SimulationRun};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::iter::FusedIterator;
use tracing::debug;

/// Settles one round of play.
pub trait RoundModel {
    /// Net change to the bankroll for one round at the given stake.
    fn settle<R: Rng + ?Sized>(&self, rng: &mut R, bet_amount: f64) -> f64;
}

/// Even-money wager won with a fixed probability derived from a house edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatEdge {
    win_probability: f64,
}

impl FlatEdge {
    /// Model a game whose player wins each round with `1 - house_edge_percent / 100`.
    ///
    /// The edge must lie within `[0, 100]` so that the derived probability is valid.
    pub fn from_house_edge(house_edge_percent: f64) -> Result<Self, ParameterError> {
        let edge = ensure_finite("house_edge_percent", house_edge_percent)?;
        let win_probability = ensure_probability("win_probability", 1.0 - edge / 100.0)?;
        Ok(Self { win_probability })
    }

    pub fn win_probability(&self) -> f64 {
        self.win_probability
    }
}

impl RoundModel for FlatEdge {
    fn settle<R: Rng + ?Sized>(&self, rng: &mut R, bet_amount: f64) -> f64 {
        // One uniform draw in [0, 1) per round
        if rng.gen::<f64>() < self.win_probability {
            bet_amount
        } else {
            -bet_amount
        }
    }
}

/// Lazy bankroll walk. Yields at most `rounds + 1` points and cannot be restarted.
#[derive(Debug)]
pub struct BankrollWalk<M, R> {
    model: M,
    rng: R,
    bet_amount: f64,
    bankroll: f64,
    next_round: u64,
    rounds: u64,
    done: bool,
}

impl<M: RoundModel, R: Rng> BankrollWalk<M, R> {
    pub fn new(
        starting_bankroll: f64,
        bet_amount: f64,
        rounds: u64,
        model: M,
        rng: R,
    ) -> Result<Self, ParameterError> {
        let bankroll = ensure_positive("starting_bankroll", starting_bankroll)?;
        let bet_amount = ensure_positive("bet_amount", bet_amount)?;
        Ok(Self {
            model,
            rng,
            bet_amount,
            bankroll,
            next_round: 0,
            rounds,
            done: false,
        })
    }

    /// Current balance (the bankroll of the last emitted point).
    pub fn bankroll(&self) -> f64 {
        self.bankroll
    }
}

impl<M: RoundModel, R: Rng> Iterator for BankrollWalk<M, R> {
    type Item = SimulationPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let round = self.next_round;
        if round > 0 {
            self.bankroll += self.model.settle(&mut self.rng, self.bet_amount);
            if self.bankroll <= 0.0 {
                self.bankroll = 0.0;
                self.done = true;
            }
        }

        if round == self.rounds {
            self.done = true;
        } else {
            self.next_round = round + 1;
        }

        Some(SimulationPoint {
            round,
            bankroll: self.bankroll,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (self.rounds - self.next_round)
            .checked_add(1)
            .and_then(|remaining| usize::try_from(remaining).ok());
        (1, remaining)
    }
}

impl<M: RoundModel, R: Rng> FusedIterator for BankrollWalk<M, R> {}

/// Simulate a bankroll using the thread-local generator; every call samples a new path.
pub fn simulate(
    starting_bankroll: f64,
    bet_amount: f64,
    house_edge_percent: f64,
    rounds: u64,
) -> Result<SimulationRun, ParameterError> {
    simulate_with_rng(
        starting_bankroll,
        bet_amount,
        house_edge_percent,
        rounds,
        &mut rand::thread_rng(),
    )
}

/// Simulate a bankroll with a reproducible ChaCha stream derived from `seed`.
pub fn simulate_seeded(
    starting_bankroll: f64,
    bet_amount: f64,
    house_edge_percent: f64,
    rounds: u64,
    seed: u64,
) -> Result<SimulationRun, ParameterError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    simulate_with_rng(
        starting_bankroll,
        bet_amount,
        house_edge_percent,
        rounds,
        &mut rng,
    )
}

/// Simulate a bankroll with a caller-supplied generator.
pub fn simulate_with_rng<R: Rng + ?Sized>(
    starting_bankroll: f64,
    bet_amount: f64,
    house_edge_percent: f64,
    rounds: u64,
    rng: &mut R,
) -> Result<SimulationRun, ParameterError> {
    let model = FlatEdge::from_house_edge(house_edge_percent)?;
    let walk = BankrollWalk::new(starting_bankroll, bet_amount, rounds, model, rng)?;
    let run = SimulationRun::from_points(walk.collect());
    debug!(
        rounds,
        rounds_played = run.rounds_played(),
        final_bankroll = run.last().map(|point| point.bankroll),
        ruined = run.is_ruined(),
        "bankroll walk finished"
    );
    Ok(run)
}

/// Headline numbers of a finished walk.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    pub starting_bankroll: f64,
    pub final_bankroll: f64,
    pub net_result: f64,
    pub rounds_played: u64,
    pub peak: f64,
    pub trough: f64,
    pub ruined: bool,
}

impl RunSummary {
    /// Summarise a run; `None` for an empty run.
    pub fn of(run: &SimulationRun) -> Option<Self> {
        let first = run.first()?;
        let last = run.last()?;
        let (peak, trough) = run.iter().fold((f64::MIN, f64::MAX), |(hi, lo), point| {
            (hi.max(point.bankroll), lo.min(point.bankroll))
        });
        Some(Self {
            starting_bankroll: first.bankroll,
            final_bankroll: last.bankroll,
            net_result: last.bankroll - first.bankroll,
            rounds_played: run.rounds_played(),
            peak,
            trough,
            ruined: run.is_ruined(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng};

    fn assert_walk_invariants(run: &SimulationRun, starting_bankroll: f64, rounds: u64) {
        let points = run.points();
        assert_eq!(
            points.first(),
            Some(&SimulationPoint {
                round: 0,
                bankroll: starting_bankroll
            })
        );
        assert!(points.len() as u64 <= rounds + 1);
        for pair in points.windows(2) {
            assert_eq!(pair[1].round, pair[0].round + 1);
        }
        for (idx, point) in points.iter().enumerate() {
            assert!(point.bankroll >= 0.0);
            if point.bankroll == 0.0 {
                assert_eq!(idx, points.len() - 1, "points emitted after ruin");
            }
        }
        if (points.len() as u64) < rounds + 1 {
            assert!(run.is_ruined(), "walk stopped early without ruin");
        }
    }

    #[test]
    fn test_simulate_invariants() {
        for _ in 0..100 {
            let run = simulate(1000.0, 25.0, 2.7, 200).unwrap();
            assert_walk_invariants(&run, 1000.0, 200);
        }
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let a = simulate_seeded(1000.0, 25.0, 2.7, 200, 7).unwrap();
        let b = simulate_seeded(1000.0, 25.0, 2.7, 200, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_certain_loss_runs_to_ruin() {
        let mut rng = StdRng::seed_from_u64(1);
        let run = simulate_with_rng(1000.0, 25.0, 100.0, 200, &mut rng).unwrap();
        assert_eq!(run.len(), 41);
        assert_eq!(
            run.last(),
            Some(&SimulationPoint {
                round: 40,
                bankroll: 0.0
            })
        );
        assert!(run.is_ruined());
    }

    #[test]
    fn test_ruin_clamps_partial_bet() {
        let mut rng = StdRng::seed_from_u64(1);
        let run = simulate_with_rng(30.0, 25.0, 100.0, 10, &mut rng).unwrap();
        let bankrolls: Vec<f64> = run.iter().map(|point| point.bankroll).collect();
        assert_eq!(bankrolls, vec![30.0, 5.0, 0.0]);
    }

    #[test]
    fn test_zero_edge_always_wins() {
        let mut rng = StdRng::seed_from_u64(3);
        let run = simulate_with_rng(1000.0, 25.0, 0.0, 200, &mut rng).unwrap();
        assert_eq!(run.len(), 201);
        assert_eq!(run.last().map(|point| point.bankroll), Some(6000.0));
        assert!(!run.is_ruined());
    }

    #[test]
    fn test_zero_rounds_emits_initial_state() {
        let run = simulate(500.0, 10.0, 5.0, 0).unwrap();
        assert_eq!(
            run.points(),
            &[SimulationPoint {
                round: 0,
                bankroll: 500.0
            }]
        );
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(matches!(
            simulate(0.0, 25.0, 2.7, 10),
            Err(ParameterError::NotPositive { field: "starting_bankroll", .. })
        ));
        assert!(matches!(
            simulate(1000.0, -5.0, 2.7, 10),
            Err(ParameterError::NotPositive { field: "bet_amount", .. })
        ));
        assert!(matches!(
            simulate(1000.0, 25.0, 150.0, 10),
            Err(ParameterError::ProbabilityOutOfRange { .. })
        ));
        assert!(matches!(
            simulate(1000.0, 25.0, -0.5, 10),
            Err(ParameterError::ProbabilityOutOfRange { .. })
        ));
        assert!(matches!(
            simulate(1000.0, 25.0, f64::NAN, 10),
            Err(ParameterError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_walk_is_lazy_and_fused() {
        let model = FlatEdge::from_house_edge(2.7).unwrap();
        let mut walk =
            BankrollWalk::new(100.0, 10.0, 3, model, StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(walk.size_hint(), (1, Some(4)));
        assert_eq!(walk.next().map(|point| point.round), Some(0));
        assert_eq!(walk.by_ref().count(), 3);
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
    }

    struct Alternating;

    impl RoundModel for Alternating {
        fn settle<R: Rng + ?Sized>(&self, rng: &mut R, bet_amount: f64) -> f64 {
            if rng.gen::<bool>() {
                2.0 * bet_amount
            } else {
                -bet_amount
            }
        }
    }

    #[test]
    fn test_custom_round_model() {
        let walk = BankrollWalk::new(50.0, 10.0, 100, Alternating, StdRng::seed_from_u64(5))
            .unwrap();
        let run = SimulationRun::from_points(walk.collect());
        assert_walk_invariants(&run, 50.0, 100);
        for pair in run.points().windows(2) {
            let delta = pair[1].bankroll - pair[0].bankroll;
            assert!(delta == 20.0 || delta == -10.0 || pair[1].bankroll == 0.0);
        }
    }

    #[test]
    fn test_run_summary() {
        let run = SimulationRun::from_points(vec![
            SimulationPoint {
                round: 0,
                bankroll: 100.0,
            },
            SimulationPoint {
                round: 1,
                bankroll: 125.0,
            },
            SimulationPoint {
                round: 2,
                bankroll: 75.0,
            },
        ]);
        let summary = RunSummary::of(&run).unwrap();
        assert_eq!(summary.final_bankroll, 75.0);
        assert_eq!(summary.net_result, -25.0);
        assert_eq!(summary.rounds_played, 2);
        assert_eq!(summary.peak, 125.0);
        assert_eq!(summary.trough, 75.0);
        assert!(!summary.ruined);
        assert!(RunSummary::of(&SimulationRun::default()).is_none());
    }

    proptest! {
        #[test]
        fn walk_invariants_hold(
            seed in any::<u64>(),
            starting_bankroll in 1.0f64..2_000.0,
            bet_amount in 1.0f64..200.0,
            house_edge in 0.0f64..=100.0,
            rounds in 0u64..500,
        ) {
            let run = simulate_seeded(starting_bankroll, bet_amount, house_edge, rounds, seed).unwrap();
            assert_walk_invariants(&run, starting_bankroll, rounds);
        }
    }
}
