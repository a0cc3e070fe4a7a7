use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use houseedge_simulator::{report::Report, Config, ValidatedConfig};
use houseedge_types::casino::{BlackjackStrategy, GameType, RouletteVariant, SlotType};
use std::path::PathBuf;
use tracing::{debug, Level};

fn init_tracing(level: Level) {
    // Reports own stdout
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "House edge, expected value and bankroll visualizer.", long_about = None)]
struct Args {
    /// YAML config file; flags override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible simulated charts.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print the report as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every game view and its input ranges.
    Games,
    /// Expected value and house edge of every roulette bet.
    Roulette {
        #[arg(long)]
        variant: Option<RouletteVariant>,
        #[arg(long)]
        bet: Option<f64>,
    },
    /// Expected loss by blackjack strategy.
    Blackjack {
        #[arg(long)]
        strategy: Option<BlackjackStrategy>,
        #[arg(long)]
        hands: Option<u64>,
        #[arg(long)]
        bet: Option<f64>,
    },
    /// Return to player and a simulated slot session.
    Slots {
        #[arg(long)]
        slot: Option<SlotType>,
        #[arg(long)]
        spins: Option<u64>,
        #[arg(long)]
        bet_per_spin: Option<f64>,
    },
    /// Craps bets ranked by house edge.
    Craps,
    /// Simulate a bankroll round by round.
    Bankroll {
        #[arg(long)]
        bankroll: Option<f64>,
        #[arg(long)]
        bet: Option<f64>,
        #[arg(long)]
        edge: Option<f64>,
        #[arg(long)]
        rounds: Option<u64>,
    },
}

impl Command {
    /// Game view this command renders (`None` for the catalog).
    fn game(&self) -> Option<GameType> {
        match self {
            Command::Games => None,
            Command::Roulette { .. } => Some(GameType::Roulette),
            Command::Blackjack { .. } => Some(GameType::Blackjack),
            Command::Slots { .. } => Some(GameType::Slots),
            Command::Craps => Some(GameType::Craps),
            Command::Bankroll { .. } => Some(GameType::Bankroll),
        }
    }

    fn apply(&self, config: &mut Config) {
        match self {
            Command::Games | Command::Craps => {}
            Command::Roulette { variant, bet } => {
                if let Some(variant) = variant {
                    config.roulette_variant = *variant;
                }
                if let Some(bet) = bet {
                    config.roulette_bet = *bet;
                }
            }
            Command::Blackjack {
                strategy,
                hands,
                bet,
            } => {
                if let Some(strategy) = strategy {
                    config.blackjack_strategy = *strategy;
                }
                if let Some(hands) = hands {
                    config.blackjack_hands = *hands;
                }
                if let Some(bet) = bet {
                    config.blackjack_bet = *bet;
                }
            }
            Command::Slots {
                slot,
                spins,
                bet_per_spin,
            } => {
                if let Some(slot) = slot {
                    config.slot_type = *slot;
                }
                if let Some(spins) = spins {
                    config.slot_spins = *spins;
                }
                if let Some(bet_per_spin) = bet_per_spin {
                    config.slot_bet = *bet_per_spin;
                }
            }
            Command::Bankroll {
                bankroll,
                bet,
                edge,
                rounds,
            } => {
                if let Some(bankroll) = bankroll {
                    config.starting_bankroll = *bankroll;
                }
                if let Some(bet) = bet {
                    config.bet_amount = *bet;
                }
                if let Some(edge) = edge {
                    config.house_edge_percent = *edge;
                }
                if let Some(rounds) = rounds {
                    config.rounds = *rounds;
                }
            }
        }
    }
}

fn build_config(args: &Args) -> Result<ValidatedConfig> {
    let mut config = match &args.config {
        Some(path) => Config::load(path).context("Could not load config file")?,
        None => Config::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(log_level) = &args.log_level {
        config.log_level = log_level.clone();
    }
    args.command.apply(&mut config);
    config.validate().context("Invalid configuration")
}

fn main() {
    if let Err(err) = main_result() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

fn main_result() -> Result<()> {
    let args = Args::parse();
    let config = build_config(&args)?;
    init_tracing(config.log_level);
    debug!(?config, "configuration loaded");

    let report = match args.command.game() {
        Some(game) => Report::build(game, &config).context("Could not build report")?,
        None => Report::catalog(),
    };
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Could not encode report")?;
        println!("{json}");
    } else {
        print!("{report}");
    }
    Ok(())
}
