use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a table key cannot be parsed from its identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownKey {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl UnknownKey {
    pub(crate) fn new(kind: &'static str, value: &str, ids: &[&'static str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: ids.join(", "),
        }
    }
}

/// Implements `id`, `Display` and `FromStr` for a closed table key.
macro_rules! table_key {
    ($ty:ident, $kind:literal, { $($variant:ident => $id:literal),+ $(,)? }) => {
        impl $ty {
            /// Every key, in display order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Stable identifier (used by the CLI and config files).
            pub fn id(self) -> &'static str {
                match self {
                    $($ty::$variant => $id),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.id())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::casino::UnknownKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_ascii_lowercase().replace('-', "_");
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|key| key.id() == needle)
                    .ok_or_else(|| {
                        let ids: Vec<&'static str> = $ty::ALL.iter().map(|key| key.id()).collect();
                        $crate::casino::UnknownKey::new($kind, s, &ids)
                    })
            }
        }
    };
}

pub(crate) use table_key;

/// Game category for grouping in the selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameCategory {
    /// Wheel and dice games (Roulette, Craps).
    Table,
    /// Card games (Blackjack).
    Cards,
    /// Machines (Slots).
    Machines,
    /// Game-agnostic tools (Bankroll simulator).
    Tools,
}

/// Every view the visualizer offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    Roulette,
    Blackjack,
    Slots,
    Craps,
    Bankroll,
}

table_key!(GameType, "game", {
    Roulette => "roulette",
    Blackjack => "blackjack",
    Slots => "slots",
    Craps => "craps",
    Bankroll => "bankroll",
});

/// Metadata about a game for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameInfo {
    /// Game type identifier.
    pub game_type: GameType,
    /// Display name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Category for grouping.
    pub category: GameCategory,
}

impl GameInfo {
    const fn new(
        game_type: GameType,
        name: &'static str,
        description: &'static str,
        category: GameCategory,
    ) -> Self {
        Self {
            game_type,
            name,
            description,
            category,
        }
    }
}

impl GameType {
    /// Get static metadata for a game type.
    pub fn info(self) -> GameInfo {
        match self {
            GameType::Roulette => GameInfo::new(
                GameType::Roulette,
                "Roulette",
                "European vs American wheels and the cost of the green zeros.",
                GameCategory::Table,
            ),
            GameType::Blackjack => GameInfo::new(
                GameType::Blackjack,
                "Blackjack",
                "How playing strategy moves the house edge.",
                GameCategory::Cards,
            ),
            GameType::Slots => GameInfo::new(
                GameType::Slots,
                "Slot Machines",
                "Return to player and the long-run drain of a slot session.",
                GameCategory::Machines,
            ),
            GameType::Craps => GameInfo::new(
                GameType::Craps,
                "Craps",
                "Good, fair and bad bets ranked by house edge.",
                GameCategory::Table,
            ),
            GameType::Bankroll => GameInfo::new(
                GameType::Bankroll,
                "Bankroll Simulator",
                "Watch a bankroll evolve round by round at any house edge.",
                GameCategory::Tools,
            ),
        }
    }

    /// Get metadata for every game, in display order.
    pub fn catalog() -> Vec<GameInfo> {
        Self::ALL.iter().map(|game| game.info()).collect()
    }

    /// Get games by category.
    pub fn by_category(category: GameCategory) -> Vec<GameType> {
        Self::ALL
            .iter()
            .copied()
            .filter(|game| game.info().category == category)
            .collect()
    }
}

impl fmt::Display for GameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameCategory::Table => "table",
            GameCategory::Cards => "cards",
            GameCategory::Machines => "machines",
            GameCategory::Tools => "tools",
        };
        f.write_str(label)
    }
}

