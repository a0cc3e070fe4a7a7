use serde::Serialize;

/// Inclusive bounds (and slider step) a presentation layer exposes for one numeric input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ParameterRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    pub const fn new(name: &'static str, min: f64, max: f64, step: f64) -> Self {
        Self {
            name,
            min,
            max,
            step,
        }
    }

    /// Whether `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Number of pockets on a single-zero wheel (0-36).
pub const EUROPEAN_POCKETS: u32 = 37;
pub const EUROPEAN_ZERO_POCKETS: u32 = 1;

/// Number of pockets on a double-zero wheel (0, 00, 1-36).
pub const AMERICAN_POCKETS: u32 = 38;
pub const AMERICAN_ZERO_POCKETS: u32 = 2;

/// Bankroll simulator inputs.
pub const STARTING_BANKROLL_RANGE: ParameterRange =
    ParameterRange::new("starting_bankroll", 100.0, 10_000.0, 100.0);
pub const BET_AMOUNT_RANGE: ParameterRange = ParameterRange::new("bet_amount", 1.0, 200.0, 1.0);
pub const HOUSE_EDGE_RANGE: ParameterRange =
    ParameterRange::new("house_edge_percent", 0.5, 20.0, 0.1);
pub const ROUNDS_RANGE: ParameterRange = ParameterRange::new("rounds", 10.0, 1_000.0, 10.0);

/// Slot session inputs.
pub const SLOT_SPINS_RANGE: ParameterRange =
    ParameterRange::new("slot_spins", 100.0, 10_000.0, 100.0);
pub const SLOT_BET_RANGE: ParameterRange = ParameterRange::new("slot_bet", 0.25, 5.0, 0.25);

/// Blackjack session inputs.
pub const BLACKJACK_HANDS_RANGE: ParameterRange =
    ParameterRange::new("blackjack_hands", 10.0, 1_000.0, 10.0);
pub const BLACKJACK_BET_RANGE: ParameterRange =
    ParameterRange::new("blackjack_bet", 5.0, 100.0, 5.0);

/// Roulette inputs.
pub const ROULETTE_BET_RANGE: ParameterRange = ParameterRange::new("roulette_bet", 1.0, 100.0, 1.0);

/// Every documented input range, in display order.
pub const PARAMETER_RANGES: [ParameterRange; 9] = [
    STARTING_BANKROLL_RANGE,
    BET_AMOUNT_RANGE,
    HOUSE_EDGE_RANGE,
    ROUNDS_RANGE,
    SLOT_SPINS_RANGE,
    SLOT_BET_RANGE,
    BLACKJACK_HANDS_RANGE,
    BLACKJACK_BET_RANGE,
    ROULETTE_BET_RANGE,
];

/// Default inputs (match the initial slider positions).
pub const DEFAULT_STARTING_BANKROLL: f64 = 1_000.0;
pub const DEFAULT_BET_AMOUNT: f64 = 25.0;
pub const DEFAULT_HOUSE_EDGE_PERCENT: f64 = 2.7;
pub const DEFAULT_ROUNDS: u64 = 200;
pub const DEFAULT_SLOT_SPINS: u64 = 1_000;
pub const DEFAULT_SLOT_BET: f64 = 1.0;
pub const DEFAULT_BLACKJACK_HANDS: u64 = 100;
pub const DEFAULT_BLACKJACK_BET: f64 = 25.0;
pub const DEFAULT_ROULETTE_BET: f64 = 10.0;

/// Typical pace of a blackjack table.
pub const HANDS_PER_HOUR: u64 = 60;

/// Slot trajectories are sampled at roughly this many evenly spaced spins.
pub const SLOT_TRAJECTORY_SAMPLES: u64 = 50;

/// Edge tier thresholds (percent).
pub const GOOD_EDGE_BELOW: f64 = 2.0;
pub const BAD_EDGE_FROM: f64 = 10.0;

/// Bankruptcy risk reaches zero once the expected ending bankroll is this many
/// scale units (`bet * sqrt(rounds)`) above zero.
pub const RISK_FACTOR_CEILING: f64 = 3.0;
