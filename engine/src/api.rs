use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use indexmap::IndexMap;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};

use crate::combat::encounter::DEFAULT_MAX_ROUNDS;
use crate::content::builtin_scenarios;
use crate::{
    simulate, Dice, Encounter, Outcome, RoundTrace, SimulationOptions, SimulationReport, Team,
    TeamDef, WeaponTable,
};

const DEFAULT_TRIALS: i64 = 1000;

fn default_trials() -> i64 {
    DEFAULT_TRIALS
}

fn default_max_rounds() -> u32 {
    DEFAULT_MAX_ROUNDS
}

/// A matchup plus the knobs for running it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct Scenario {
    pub team_1: TeamDef,
    pub team_2: TeamDef,
    /// Added to (or overriding) the standard weapon table.
    #[serde(default)]
    pub weapons: IndexMap<String, u32>,
    #[serde(default = "default_trials")]
    pub trials: i64,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,
    /// None runs trials sequentially, 0 uses the global rayon pool, n > 0
    /// builds a pool with n threads.
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Scenario {
    pub fn weapon_table(&self) -> WeaponTable {
        let mut table = WeaponTable::standard();
        table.extend(self.weapons.iter().map(|(name, bonus)| (name.clone(), *bonus)));
        table
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Json,
    Yaml,
}

impl ScenarioFormat {
    /// `.yaml`/`.yml` are YAML; anything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ScenarioFormat::Yaml
            }
            _ => ScenarioFormat::Json,
        }
    }
}

pub fn parse_scenario(text: &str, format: ScenarioFormat) -> Result<Scenario> {
    let scenario = match format {
        ScenarioFormat::Json => {
            serde_json::from_str(text).context("failed to parse scenario JSON")?
        }
        ScenarioFormat::Yaml => {
            serde_yaml::from_str(text).context("failed to parse scenario YAML")?
        }
    };
    Ok(scenario)
}

pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario: {}", path.display()))?;
    parse_scenario(&text, ScenarioFormat::from_path(path))
        .with_context(|| format!("invalid scenario: {}", path.display()))
}

pub fn builtin_scenario(id: &str) -> Result<Scenario> {
    let builtins = builtin_scenarios();
    let (file, text) = builtins
        .get(id)
        .ok_or_else(|| anyhow!("unknown builtin scenario '{}'", id))?;
    parse_scenario(text, ScenarioFormat::from_path(Path::new(file)))
        .with_context(|| format!("invalid builtin scenario '{}'", id))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PlayResult {
    pub winner: String,
    pub rounds: u32,
    pub trace: Vec<RoundTrace>,
}

/// A single narrated encounter.
pub fn play_scenario(scenario: &Scenario, seed: u64) -> Result<PlayResult> {
    let weapons = scenario.weapon_table();
    let mut encounter = Encounter::new(
        Team::new(&scenario.team_1)?,
        Team::new(&scenario.team_2)?,
        &weapons,
    )
    .with_max_rounds(scenario.max_rounds);

    let mut dice = Dice::from_seed(seed);
    let mut trace = Vec::new();
    let result = encounter.play(&mut dice, |r| trace.push(r.clone()))?;
    let winner = match result.outcome {
        Outcome::Decided(_) => encounter.winner_name(result.outcome).unwrap_or_default().to_string(),
        Outcome::Fault(fault) => bail!("encounter ended in fault: {:?}", fault),
    };

    Ok(PlayResult { winner, rounds: result.rounds, trace })
}

/// Runs the scenario's trials, honouring its worker setting.
pub fn simulate_scenario(scenario: &Scenario) -> Result<SimulationReport> {
    let weapons = scenario.weapon_table();
    let opts = SimulationOptions {
        seed: scenario.seed,
        max_rounds: scenario.max_rounds,
        parallel: scenario.workers.is_some(),
    };
    let run = || simulate(&scenario.team_1, &scenario.team_2, &weapons, scenario.trials, &opts);

    let report = match scenario.workers {
        Some(n) if n > 0 => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .context("failed to build worker pool")?;
            pool.install(run)?
        }
        _ => run()?,
    };
    Ok(report)
}
