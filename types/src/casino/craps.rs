use serde::Serialize;

/// A craps wager with its published house edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CrapsBet {
    pub name: &'static str,
    pub house_edge_percent: f64,
    pub description: &'static str,
}

/// Craps wagers in table order (not sorted by edge).
pub static CRAPS_BETS: [CrapsBet; 6] = [
    CrapsBet {
        name: "Pass Line",
        house_edge_percent: 1.41,
        description: "Most common bet",
    },
    CrapsBet {
        name: "Don't Pass",
        house_edge_percent: 1.36,
        description: "Slightly better odds",
    },
    CrapsBet {
        name: "Pass Line + Odds",
        house_edge_percent: 0.85,
        description: "With maximum odds",
    },
    CrapsBet {
        name: "Field",
        house_edge_percent: 5.56,
        description: "One-roll bet",
    },
    CrapsBet {
        name: "Any 7",
        house_edge_percent: 16.67,
        description: "Worst bet in craps",
    },
    CrapsBet {
        name: "Hardways",
        house_edge_percent: 11.11,
        description: "Poor odds",
    },
];

/// Find a craps bet by (case-insensitive) name.
pub fn craps_bet(name: &str) -> Option<&'static CrapsBet> {
    CRAPS_BETS
        .iter()
        .find(|bet| bet.name.eq_ignore_ascii_case(name.trim()))
}
