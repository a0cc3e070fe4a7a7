use super::game::table_key;
use serde::{Deserialize, Serialize};

/// House edge attributed to a style of play.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrategyProfile {
    pub name: &'static str,
    /// Negative values mean the player holds the advantage.
    pub house_edge_percent: f64,
    pub description: &'static str,
}

impl StrategyProfile {
    pub fn is_player_advantage(&self) -> bool {
        self.house_edge_percent < 0.0
    }
}

static PERFECT_STRATEGY: StrategyProfile = StrategyProfile {
    name: "Perfect Basic Strategy",
    house_edge_percent: 0.5,
    description: "Using mathematically optimal decisions",
};

static AVERAGE: StrategyProfile = StrategyProfile {
    name: "Average Player",
    house_edge_percent: 2.0,
    description: "Typical player without strategy",
};

static POOR: StrategyProfile = StrategyProfile {
    name: "Poor Strategy",
    house_edge_percent: 4.0,
    description: "Making sub-optimal decisions",
};

static COUNTING: StrategyProfile = StrategyProfile {
    name: "Card Counting (Skilled)",
    house_edge_percent: -0.5,
    description: "Advanced technique (banned in most casinos)",
};

/// Blackjack playing strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlackjackStrategy {
    #[default]
    PerfectStrategy,
    Average,
    Poor,
    Counting,
}

table_key!(BlackjackStrategy, "blackjack strategy", {
    PerfectStrategy => "perfect_strategy",
    Average => "average",
    Poor => "poor",
    Counting => "counting",
});

impl BlackjackStrategy {
    pub fn profile(self) -> &'static StrategyProfile {
        match self {
            BlackjackStrategy::PerfectStrategy => &PERFECT_STRATEGY,
            BlackjackStrategy::Average => &AVERAGE,
            BlackjackStrategy::Poor => &POOR,
            BlackjackStrategy::Counting => &COUNTING,
        }
    }
}
