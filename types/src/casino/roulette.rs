//! Roulette wheels and their bet tables.
//!
//! Payouts are quoted "X:1" (winnings exclude the returned stake). Probabilities are the
//! number of covered pockets over the total pockets on the wheel.

use super::{
    game::table_key, AMERICAN_POCKETS, AMERICAN_ZERO_POCKETS, EUROPEAN_POCKETS,
    EUROPEAN_ZERO_POCKETS,
};
use serde::{Deserialize, Serialize};

/// A single roulette wager.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bet {
    pub name: &'static str,
    /// Payout multiple ("X:1").
    pub payout: f64,
    /// Chance the wager wins on one spin.
    pub probability: f64,
    /// Count of winning pockets.
    pub numbers: u32,
}

macro_rules! wheel_bet {
    ($name:literal, $payout:literal, $numbers:literal, $pockets:expr) => {
        Bet {
            name: $name,
            payout: $payout as f64,
            probability: $numbers as f64 / $pockets as f64,
            numbers: $numbers,
        }
    };
}

static EUROPEAN_BETS: [Bet; 10] = [
    wheel_bet!("Straight Up", 35, 1, EUROPEAN_POCKETS),
    wheel_bet!("Split", 17, 2, EUROPEAN_POCKETS),
    wheel_bet!("Street", 11, 3, EUROPEAN_POCKETS),
    wheel_bet!("Corner", 8, 4, EUROPEAN_POCKETS),
    wheel_bet!("Six Line", 5, 6, EUROPEAN_POCKETS),
    wheel_bet!("Dozen", 2, 12, EUROPEAN_POCKETS),
    wheel_bet!("Column", 2, 12, EUROPEAN_POCKETS),
    wheel_bet!("Red/Black", 1, 18, EUROPEAN_POCKETS),
    wheel_bet!("Even/Odd", 1, 18, EUROPEAN_POCKETS),
    wheel_bet!("Low/High", 1, 18, EUROPEAN_POCKETS),
];

static AMERICAN_BETS: [Bet; 11] = [
    wheel_bet!("Straight Up", 35, 1, AMERICAN_POCKETS),
    wheel_bet!("Split", 17, 2, AMERICAN_POCKETS),
    wheel_bet!("Street", 11, 3, AMERICAN_POCKETS),
    wheel_bet!("Corner", 8, 4, AMERICAN_POCKETS),
    wheel_bet!("Six Line", 5, 6, AMERICAN_POCKETS),
    wheel_bet!("Dozen", 2, 12, AMERICAN_POCKETS),
    wheel_bet!("Column", 2, 12, AMERICAN_POCKETS),
    wheel_bet!("Red/Black", 1, 18, AMERICAN_POCKETS),
    wheel_bet!("Even/Odd", 1, 18, AMERICAN_POCKETS),
    wheel_bet!("Low/High", 1, 18, AMERICAN_POCKETS),
    // 0-00-1-2-3, the worst bet on the layout
    wheel_bet!("Five Number", 6, 5, AMERICAN_POCKETS),
];

/// A wheel layout together with the wagers it offers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RouletteWheel {
    pub name: &'static str,
    pub total_pockets: u32,
    pub zero_pockets: u32,
    pub bets: &'static [Bet],
}

impl RouletteWheel {
    /// House edge implied by the zero pockets, as a percentage.
    pub fn house_edge_percent(&self) -> f64 {
        self.zero_pockets as f64 / self.total_pockets as f64 * 100.0
    }

    /// Find a bet by (case-insensitive) name.
    pub fn bet(&self, name: &str) -> Option<&'static Bet> {
        self.bets
            .iter()
            .find(|bet| bet.name.eq_ignore_ascii_case(name.trim()))
    }
}

static EUROPEAN: RouletteWheel = RouletteWheel {
    name: "European Roulette",
    total_pockets: EUROPEAN_POCKETS,
    zero_pockets: EUROPEAN_ZERO_POCKETS,
    bets: &EUROPEAN_BETS,
};

static AMERICAN: RouletteWheel = RouletteWheel {
    name: "American Roulette",
    total_pockets: AMERICAN_POCKETS,
    zero_pockets: AMERICAN_ZERO_POCKETS,
    bets: &AMERICAN_BETS,
};

/// Roulette wheel variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouletteVariant {
    /// Single-zero wheel (2.70% house edge).
    #[default]
    European,
    /// Double-zero wheel (5.26% house edge).
    American,
}

table_key!(RouletteVariant, "roulette variant", {
    European => "european",
    American => "american",
});

impl RouletteVariant {
    pub fn wheel(self) -> &'static RouletteWheel {
        match self {
            RouletteVariant::European => &EUROPEAN,
            RouletteVariant::American => &AMERICAN,
        }
    }
}
