use clap::Parser;
use skirmish::api::simulate_scenario;
use skirmish_cli::resolve_scenario;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "skirmish-simulate")]
#[command(about = "Monte Carlo sim: many encounters between two rosters")]
struct Args {
    /// Scenario file (YAML or JSON) with both rosters
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Builtin scenario id, used when no file is given
    #[arg(long, default_value = "skirmish")]
    builtin: String,

    /// Number of trials (overrides the scenario)
    #[arg(long, allow_negative_numbers = true)]
    trials: Option<i64>,

    /// RNG base seed, trial i uses seed+i (overrides the scenario)
    #[arg(long)]
    seed: Option<u64>,

    /// Safety cap on rounds per trial (overrides the scenario)
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Worker threads; 0 = all cores (overrides the scenario)
    #[arg(long)]
    workers: Option<usize>,

    /// Also print the winner of every trial
    #[arg(long, default_value_t = false)]
    show_winners: bool,

    /// Emit the full report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn median(sorted: &[u32]) -> u32 {
    if sorted.is_empty() {
        return 0;
    }
    let m = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[m]
    } else {
        (sorted[m - 1] + sorted[m]) / 2
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    skirmish::logging::init(args.verbose)?;

    let mut scenario = resolve_scenario(args.scenario.as_deref(), &args.builtin)?;
    if let Some(trials) = args.trials {
        scenario.trials = trials;
    }
    if let Some(seed) = args.seed {
        scenario.seed = seed;
    }
    if let Some(max_rounds) = args.max_rounds {
        scenario.max_rounds = max_rounds;
    }
    if args.workers.is_some() {
        scenario.workers = args.workers;
    }
    info!(trials = scenario.trials, seed = scenario.seed, "running scenario");

    let report = simulate_scenario(&scenario)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut rounds = report.rounds.clone();
    rounds.sort_unstable();

    println!("skirmish-simulate results");
    println!("-------------------------");
    println!("trials:             {}", report.trials);
    println!("seed:               {}", scenario.seed);
    println!("{:<20}{:.1}%", format!("{} wins:", report.team_1), report.team_1_probability * 100.0);
    println!("{:<20}{:.1}%", format!("{} wins:", report.team_2), report.team_2_probability * 100.0);
    println!("avg rounds:         {:.2}", report.mean_rounds);
    println!("median rounds:      {}", median(&rounds));

    if args.show_winners {
        println!();
        for (i, winner) in report.winners.iter().enumerate() {
            println!("{:>6}  {}", i + 1, winner);
        }
    }

    Ok(())
}
