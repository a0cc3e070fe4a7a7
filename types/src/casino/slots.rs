use super::game::table_key;
use serde::{Deserialize, Serialize};

/// Published payback figures for a class of slot machine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SlotProfile {
    pub name: &'static str,
    pub house_edge_percent: f64,
    /// Always `100 - house_edge_percent`.
    pub return_to_player_percent: f64,
    pub description: &'static str,
}

static LOOSE: SlotProfile = SlotProfile {
    name: "Loose Slots",
    house_edge_percent: 2.0,
    return_to_player_percent: 98.0,
    description: "Best payout slots (rare)",
};

static AVERAGE: SlotProfile = SlotProfile {
    name: "Average Slots",
    house_edge_percent: 5.0,
    return_to_player_percent: 95.0,
    description: "Typical slot machine",
};

static TIGHT: SlotProfile = SlotProfile {
    name: "Tight Slots",
    house_edge_percent: 10.0,
    return_to_player_percent: 90.0,
    description: "Low payout slots",
};

static AIRPORT: SlotProfile = SlotProfile {
    name: "Airport/Grocery Slots",
    house_edge_percent: 15.0,
    return_to_player_percent: 85.0,
    description: "Worst odds (convenience locations)",
};

/// Slot machine class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotType {
    Loose,
    #[default]
    Average,
    Tight,
    Airport,
}

table_key!(SlotType, "slot type", {
    Loose => "loose",
    Average => "average",
    Tight => "tight",
    Airport => "airport",
});

impl SlotType {
    pub fn profile(self) -> &'static SlotProfile {
        match self {
            SlotType::Loose => &LOOSE,
            SlotType::Average => &AVERAGE,
            SlotType::Tight => &TIGHT,
            SlotType::Airport => &AIRPORT,
        }
    }
}
