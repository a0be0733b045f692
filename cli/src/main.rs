use clap::{Parser, Subcommand};
use skirmish::api::play_scenario;
use skirmish::Dice;
use skirmish_cli::resolve_scenario;
use std::path::PathBuf;

#[derive(Subcommand)]
enum Cmd {
    /// Roll NdS several times
    Roll {
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Dice per roll
        #[arg(long, default_value_t = 2)]
        dice: u32,
        /// Faces per die
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(1..))]
        sides: u32,
        /// Number of rolls
        #[arg(long, default_value_t = 5)]
        rolls: u32,
    },
    /// Play one encounter and narrate every round
    Play {
        /// Scenario file (YAML or JSON)
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Builtin scenario id, used when no file is given
        #[arg(long, default_value = "skirmish")]
        builtin: String,
        /// RNG seed (defaults to the scenario's seed)
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the result and round trace as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print a builtin scenario as JSON (stdout)
    ScenarioDump {
        /// Builtin scenario id
        #[arg(long, default_value = "skirmish")]
        builtin: String,
        /// Pretty-print JSON
        #[arg(long, default_value_t = true)]
        pretty: bool,
    },
}

#[derive(Parser)]
#[command(name = "skirmish")]
#[command(about = "Skirmish CLI harness")]
struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Cmd,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    skirmish::logging::init(cli.verbose)?;

    match cli.cmd {
        Cmd::Roll { seed, dice, sides, rolls } => {
            let mut rng = Dice::from_seed(seed);
            for _ in 0..rolls {
                println!("{}", rng.roll(dice, sides));
            }
        }
        Cmd::Play { scenario, builtin, seed, json } => {
            let scenario = resolve_scenario(scenario.as_deref(), &builtin)?;
            let res = play_scenario(&scenario, seed.unwrap_or(scenario.seed))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&res)?);
            } else {
                for round in &res.trace {
                    println!("{}", round);
                }
                println!("--------------------");
                println!("Winner: {} after {} rounds", res.winner, res.rounds);
            }
        }
        Cmd::ScenarioDump { builtin, pretty } => {
            let scenario = resolve_scenario(None, &builtin)?;
            if pretty {
                println!("{}", serde_json::to_string_pretty(&scenario)?);
            } else {
                println!("{}", serde_json::to_string(&scenario)?);
            }
        }
    }
    Ok(())
}
