//! Reports rendered by the CLI, one per game view.
//!
//! A [`Report`] holds only values computed by `houseedge-execution`; rendering adds no math.
//! Text output goes through [`fmt::Display`], JSON through `serde`.

use crate::ValidatedConfig;
use houseedge_execution::{
    bankruptcy_risk, format_currency, format_percent, format_signed_currency,
    format_signed_percent, project_session, rank_craps_bets, roulette_bet_table, simulate,
    simulate_seeded, slot_session, slot_trajectory, strategy_comparison, strategy_projection,
    BetAnalysis, ParameterError, RankedCrapsBet, RunSummary, SessionProjection, StrategyOutcome,
    DEFAULT_PERCENT_DECIMALS,
};
use houseedge_types::{
    casino::{
        BlackjackStrategy, GameInfo, GameType, ParameterRange, RouletteVariant, SlotProfile,
        SlotType, StrategyProfile, HANDS_PER_HOUR, PARAMETER_RANGES,
    },
    SimulationRun, SlotPoint,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Rows printed for a sampled series in text mode.
const TEXT_SERIES_ROWS: usize = 11;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Games(GamesReport),
    Roulette(RouletteReport),
    Blackjack(BlackjackReport),
    Slots(SlotsReport),
    Craps(CrapsReport),
    Bankroll(BankrollReport),
}

impl Report {
    /// Catalog of every game view with the input ranges it accepts.
    pub fn catalog() -> Self {
        Self::Games(GamesReport {
            games: GameType::catalog(),
            ranges: PARAMETER_RANGES.to_vec(),
        })
    }

    /// Build the report for one game view.
    pub fn build(game: GameType, config: &ValidatedConfig) -> Result<Self, ParameterError> {
        let report = match game {
            GameType::Roulette => Self::Roulette(RouletteReport::build(config)?),
            GameType::Blackjack => Self::Blackjack(BlackjackReport::build(config)?),
            GameType::Slots => Self::Slots(SlotsReport::build(config)?),
            GameType::Craps => Self::Craps(CrapsReport::build()),
            GameType::Bankroll => Self::Bankroll(BankrollReport::build(config)?),
        };
        debug!(%game, "report built");
        Ok(report)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Games(report) => report.fmt(f),
            Self::Roulette(report) => report.fmt(f),
            Self::Blackjack(report) => report.fmt(f),
            Self::Slots(report) => report.fmt(f),
            Self::Craps(report) => report.fmt(f),
            Self::Bankroll(report) => report.fmt(f),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GamesReport {
    pub games: Vec<GameInfo>,
    pub ranges: Vec<ParameterRange>,
}

impl fmt::Display for GamesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games")?;
        for game in &self.games {
            writeln!(
                f,
                "  {:<10} {:<20} [{}] {}",
                game.game_type.id(),
                game.name,
                game.category,
                game.description
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Inputs")?;
        for range in &self.ranges {
            writeln!(
                f,
                "  {:<20} {} to {} (step {})",
                range.name, range.min, range.max, range.step
            )?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WheelEdge {
    pub variant: RouletteVariant,
    pub house_edge_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouletteReport {
    pub variant: RouletteVariant,
    pub wheel: &'static str,
    pub house_edge_percent: f64,
    pub bet_amount: f64,
    pub bets: Vec<BetAnalysis>,
    pub wheels: Vec<WheelEdge>,
}

impl RouletteReport {
    fn build(config: &ValidatedConfig) -> Result<Self, ParameterError> {
        let variant = config.roulette_variant;
        let wheel = variant.wheel();
        Ok(Self {
            variant,
            wheel: wheel.name,
            house_edge_percent: wheel.house_edge_percent(),
            bet_amount: config.roulette_bet,
            bets: roulette_bet_table(variant, config.roulette_bet)?,
            wheels: RouletteVariant::ALL
                .iter()
                .map(|variant| WheelEdge {
                    variant: *variant,
                    house_edge_percent: variant.wheel().house_edge_percent(),
                })
                .collect(),
        })
    }
}

impl fmt::Display for RouletteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.wheel)?;
        writeln!(
            f,
            "  House edge: {}",
            format_percent(self.house_edge_percent, DEFAULT_PERCENT_DECIMALS)
        )?;
        writeln!(f, "  Bet amount: {}", format_currency(self.bet_amount))?;
        writeln!(f)?;
        writeln!(
            f,
            "  {:<14} {:>6} {:>12} {:>10} {:>12} {:>10}",
            "Bet", "Payout", "Win chance", "Win", "Expected", "Edge"
        )?;
        for row in &self.bets {
            writeln!(
                f,
                "  {:<14} {:>6} {:>12} {:>10} {:>12} {:>10}",
                row.bet.name,
                format!("{}:1", row.bet.payout),
                format_percent(row.bet.probability * 100.0, DEFAULT_PERCENT_DECIMALS),
                format_currency(self.bet_amount * row.bet.payout),
                format_currency(row.expected_value),
                format_percent(row.house_edge_percent, DEFAULT_PERCENT_DECIMALS),
            )?;
        }
        writeln!(f)?;
        for wheel in &self.wheels {
            writeln!(
                f,
                "  {:<10} {}",
                wheel.variant.id(),
                format_percent(wheel.house_edge_percent, DEFAULT_PERCENT_DECIMALS)
            )?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlackjackReport {
    pub strategy: BlackjackStrategy,
    pub profile: &'static StrategyProfile,
    pub hands: u64,
    pub bet_amount: f64,
    pub outcome: StrategyOutcome,
    pub comparison: Vec<StrategyOutcome>,
}

impl BlackjackReport {
    fn build(config: &ValidatedConfig) -> Result<Self, ParameterError> {
        let strategy = config.blackjack_strategy;
        Ok(Self {
            strategy,
            profile: strategy.profile(),
            hands: config.blackjack_hands,
            bet_amount: config.blackjack_bet,
            outcome: strategy_projection(strategy, config.blackjack_hands, config.blackjack_bet)?,
            comparison: strategy_comparison(config.blackjack_hands, config.blackjack_bet)?,
        })
    }
}

fn loss_or_gain(projection: &SessionProjection) -> (&'static str, String) {
    let label = if projection.expected_loss > 0.0 {
        "loss"
    } else {
        "gain"
    };
    (label, format_currency(projection.expected_loss.abs()))
}

impl fmt::Display for BlackjackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Blackjack: {}", self.profile.name)?;
        writeln!(f, "  {}", self.profile.description)?;
        writeln!(
            f,
            "  House edge: {}",
            format_signed_percent(self.profile.house_edge_percent, DEFAULT_PERCENT_DECIMALS)
        )?;
        let projection = &self.outcome.projection;
        writeln!(
            f,
            "  Total wagered: {} over {} hands",
            format_currency(projection.total_wagered),
            self.hands
        )?;
        let (label, amount) = loss_or_gain(projection);
        writeln!(f, "  Expected {label}: {amount}")?;
        writeln!(
            f,
            "  Playing time: ~{} hours at {HANDS_PER_HOUR} hands/hour",
            self.outcome.playing_time_hours
        )?;
        writeln!(f)?;
        for row in &self.comparison {
            let (label, amount) = loss_or_gain(&row.projection);
            writeln!(
                f,
                "  {:<24} {:>8}   expected {label} {amount}",
                row.strategy.profile().name,
                format_signed_percent(row.house_edge_percent, DEFAULT_PERCENT_DECIMALS),
            )?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SlotComparison {
    pub slot: SlotType,
    pub return_to_player_percent: f64,
    pub house_edge_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlotsReport {
    pub slot: SlotType,
    pub profile: &'static SlotProfile,
    pub spins: u64,
    pub bet_per_spin: f64,
    pub projection: SessionProjection,
    pub trajectory: Vec<SlotPoint>,
    pub comparison: Vec<SlotComparison>,
}

impl SlotsReport {
    fn build(config: &ValidatedConfig) -> Result<Self, ParameterError> {
        let slot = config.slot_type;
        let trajectory = match config.seed {
            Some(seed) => slot_trajectory(
                slot,
                config.slot_spins,
                config.slot_bet,
                &mut ChaCha20Rng::seed_from_u64(seed),
            )?,
            None => slot_trajectory(
                slot,
                config.slot_spins,
                config.slot_bet,
                &mut rand::thread_rng(),
            )?,
        };
        Ok(Self {
            slot,
            profile: slot.profile(),
            spins: config.slot_spins,
            bet_per_spin: config.slot_bet,
            projection: slot_session(slot, config.slot_spins, config.slot_bet)?,
            trajectory,
            comparison: SlotType::ALL
                .iter()
                .map(|slot| SlotComparison {
                    slot: *slot,
                    return_to_player_percent: slot.profile().return_to_player_percent,
                    house_edge_percent: slot.profile().house_edge_percent,
                })
                .collect(),
        })
    }
}

impl fmt::Display for SlotsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.profile.name)?;
        writeln!(f, "  {}", self.profile.description)?;
        writeln!(
            f,
            "  RTP: {}  House edge: {}",
            format_percent(self.profile.return_to_player_percent, DEFAULT_PERCENT_DECIMALS),
            format_percent(self.profile.house_edge_percent, DEFAULT_PERCENT_DECIMALS)
        )?;
        writeln!(
            f,
            "  Expected loss: {} after {} spins",
            format_currency(self.projection.expected_loss),
            self.spins
        )?;
        writeln!(
            f,
            "  Expected return: {} from {} wagered",
            format_currency(self.projection.expected_return),
            format_currency(self.projection.total_wagered)
        )?;
        writeln!(f)?;
        writeln!(f, "  {:>8} {:>14} {:>14}", "Spin", "Simulated", "Expected")?;
        for idx in sample_indices(self.trajectory.len(), TEXT_SERIES_ROWS) {
            let point = &self.trajectory[idx];
            writeln!(
                f,
                "  {:>8} {:>14} {:>14}",
                point.spin,
                format_currency(point.bankroll),
                format_currency(point.expected)
            )?;
        }
        writeln!(f)?;
        for row in &self.comparison {
            writeln!(
                f,
                "  {:<24} {:>8} RTP   per $100 wagered: {} back, {} lost",
                row.slot.profile().name,
                format_percent(row.return_to_player_percent, DEFAULT_PERCENT_DECIMALS),
                format_currency(row.return_to_player_percent),
                format_currency(row.house_edge_percent)
            )?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CrapsReport {
    pub bets: Vec<RankedCrapsBet>,
}

impl CrapsReport {
    fn build() -> Self {
        Self {
            bets: rank_craps_bets(),
        }
    }
}

impl fmt::Display for CrapsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Craps bets by house edge")?;
        for entry in &self.bets {
            writeln!(
                f,
                "  {:<18} {:>8}  {:<5} {}",
                entry.bet.name,
                format_percent(entry.bet.house_edge_percent, DEFAULT_PERCENT_DECIMALS),
                entry.tier,
                entry.bet.description
            )?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BankrollReport {
    pub starting_bankroll: f64,
    pub bet_amount: f64,
    pub house_edge_percent: f64,
    pub rounds: u64,
    pub projection: SessionProjection,
    pub bankruptcy_risk_percent: f64,
    pub summary: Option<RunSummary>,
    pub run: SimulationRun,
}

impl BankrollReport {
    fn build(config: &ValidatedConfig) -> Result<Self, ParameterError> {
        let run = match config.seed {
            Some(seed) => simulate_seeded(
                config.starting_bankroll,
                config.bet_amount,
                config.house_edge_percent,
                config.rounds,
                seed,
            )?,
            None => simulate(
                config.starting_bankroll,
                config.bet_amount,
                config.house_edge_percent,
                config.rounds,
            )?,
        };
        Ok(Self {
            starting_bankroll: config.starting_bankroll,
            bet_amount: config.bet_amount,
            house_edge_percent: config.house_edge_percent,
            rounds: config.rounds,
            projection: project_session(
                config.starting_bankroll,
                config.bet_amount,
                config.house_edge_percent,
                config.rounds,
            )?,
            bankruptcy_risk_percent: bankruptcy_risk(
                config.starting_bankroll,
                config.bet_amount,
                config.house_edge_percent,
                config.rounds,
            )?,
            summary: RunSummary::of(&run),
            run,
        })
    }
}

impl fmt::Display for BankrollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bankroll simulator")?;
        writeln!(
            f,
            "  {} bankroll, {} bets, {} house edge, {} rounds",
            format_currency(self.starting_bankroll),
            format_currency(self.bet_amount),
            format_percent(self.house_edge_percent, DEFAULT_PERCENT_DECIMALS),
            self.rounds
        )?;
        writeln!(
            f,
            "  Total wagered: {}",
            format_currency(self.projection.total_wagered)
        )?;
        writeln!(
            f,
            "  Expected loss: {}",
            format_currency(self.projection.expected_loss)
        )?;
        if let Some(expected) = self.projection.expected_ending_bankroll {
            writeln!(f, "  Expected bankroll: {}", format_currency(expected))?;
        }
        writeln!(
            f,
            "  Bankruptcy risk: {}",
            format_percent(self.bankruptcy_risk_percent, 1)
        )?;
        if let Some(summary) = &self.summary {
            writeln!(f)?;
            writeln!(
                f,
                "  Final bankroll (simulated): {}",
                format_currency(summary.final_bankroll)
            )?;
            writeln!(
                f,
                "  Net result: {}",
                format_signed_currency(summary.net_result)
            )?;
            writeln!(
                f,
                "  Peak {} / trough {}",
                format_currency(summary.peak),
                format_currency(summary.trough)
            )?;
            if summary.ruined {
                writeln!(f, "  Ruined after {} rounds", summary.rounds_played)?;
            }
        }
        writeln!(f)?;
        writeln!(f, "  {:>8} {:>14}", "Round", "Bankroll")?;
        let points = self.run.points();
        for idx in sample_indices(points.len(), TEXT_SERIES_ROWS) {
            writeln!(
                f,
                "  {:>8} {:>14}",
                points[idx].round,
                format_currency(points[idx].bankroll)
            )?;
        }
        Ok(())
    }
}

/// Up to `rows` evenly spaced indices into a series of `len`, always including both ends.
fn sample_indices(len: usize, rows: usize) -> Vec<usize> {
    if len == 0 || rows == 0 {
        return Vec::new();
    }
    if len <= rows {
        return (0..len).collect();
    }
    if rows == 1 {
        return vec![0];
    }
    let last = len - 1;
    let mut indices: Vec<usize> = (0..rows).map(|row| row * last / (rows - 1)).collect();
    indices.dedup();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn config() -> ValidatedConfig {
        Config {
            seed: Some(42),
            ..Config::default()
        }
        .validate()
        .expect("default config is valid")
    }

    #[test]
    fn test_catalog_lists_every_game() {
        let Report::Games(report) = Report::catalog() else {
            panic!("expected games report");
        };
        assert_eq!(report.games.len(), GameType::ALL.len());
        assert_eq!(report.ranges.len(), PARAMETER_RANGES.len());
        assert!(report.to_string().contains("Bankroll Simulator"));
    }

    #[test]
    fn test_roulette_report() {
        let report = Report::build(GameType::Roulette, &config()).unwrap();
        let Report::Roulette(roulette) = &report else {
            panic!("expected roulette report");
        };
        assert_eq!(roulette.bets.len(), 10);
        assert_eq!(roulette.wheels.len(), 2);
        let text = report.to_string();
        assert!(text.contains("European Roulette"));
        assert!(text.contains("2.70%"));
        assert!(text.contains("35:1"));
    }

    #[test]
    fn test_blackjack_report_marks_player_edge() {
        let config = ValidatedConfig {
            blackjack_strategy: BlackjackStrategy::Counting,
            ..config()
        };
        let report = Report::build(GameType::Blackjack, &config).unwrap();
        let text = report.to_string();
        assert!(text.contains("Card Counting (Skilled)"));
        assert!(text.contains("-0.50%"));
        assert!(text.contains("Expected gain: $12.50"));
        assert!(text.contains("+4.00%"));
        assert!(text.contains("Playing time: ~2 hours at 60 hands/hour"));
    }

    #[test]
    fn test_slots_report_is_reproducible() {
        let a = Report::build(GameType::Slots, &config()).unwrap();
        let b = Report::build(GameType::Slots, &config()).unwrap();
        assert_eq!(a, b);
        let Report::Slots(slots) = &a else {
            panic!("expected slots report");
        };
        assert_eq!(slots.trajectory.len(), 51);
        assert!(a.to_string().contains("Expected loss: $50.00 after 1000 spins"));
    }

    #[test]
    fn test_craps_report_is_sorted() {
        let Report::Craps(craps) = Report::build(GameType::Craps, &config()).unwrap() else {
            panic!("expected craps report");
        };
        let edges: Vec<f64> = craps
            .bets
            .iter()
            .map(|entry| entry.bet.house_edge_percent)
            .collect();
        assert!(edges.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_bankroll_report() {
        let report = Report::build(GameType::Bankroll, &config()).unwrap();
        let Report::Bankroll(bankroll) = &report else {
            panic!("expected bankroll report");
        };
        assert_eq!(bankroll.projection.total_wagered, 5000.0);
        assert!(bankroll.run.len() <= 201);
        let summary = bankroll.summary.expect("non-empty run");
        assert_eq!(summary.starting_bankroll, 1000.0);
        assert!(report.to_string().contains("Total wagered: $5,000.00"));
    }

    #[test]
    fn test_bankroll_report_signs_net_result() {
        let report = Report::build(GameType::Bankroll, &config()).unwrap();
        let Report::Bankroll(bankroll) = &report else {
            panic!("expected bankroll report");
        };
        let net = bankroll.summary.expect("non-empty run").net_result;
        let expected = if net >= 0.0 {
            format!("Net result: +{}", format_currency(net))
        } else {
            format!("Net result: {}", format_currency(net))
        };
        assert!(report.to_string().contains(&expected));
    }

    #[test]
    fn test_json_is_tagged() {
        let json = serde_json::to_value(Report::build(GameType::Craps, &config()).unwrap())
            .unwrap();
        assert_eq!(json["report"], "craps");
        assert_eq!(json["bets"][0]["bet"]["name"], "Pass Line + Odds");
        assert_eq!(json["bets"][0]["tier"], "good");
    }

    #[test]
    fn test_sample_indices() {
        assert!(sample_indices(0, 5).is_empty());
        assert_eq!(sample_indices(3, 5), vec![0, 1, 2]);
        assert_eq!(sample_indices(201, 11), vec![0, 20, 40, 60, 80, 100, 120, 140, 160, 180, 200]);
        assert_eq!(sample_indices(10, 1), vec![0]);
    }
}
