use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::combat::encounter::DEFAULT_MAX_ROUNDS;
use crate::{CombatError, Dice, Encounter, Outcome, Side, Team, TeamDef, WeaponTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Trial `i` rolls with `Dice::from_seed(seed + i)`.
    pub seed: u64,
    pub max_rounds: u32,
    /// Spread trials over the current rayon pool. Results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self { seed: 0, max_rounds: DEFAULT_MAX_ROUNDS, parallel: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    pub winner: Side,
    pub rounds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub team_1: String,
    pub team_2: String,
    pub trials: usize,
    pub team_1_wins: usize,
    pub team_1_probability: f64,
    pub team_2_probability: f64,
    pub mean_rounds: f64,
    /// Winning team name per trial, in trial order.
    pub winners: Vec<String>,
    pub rounds: Vec<u32>,
}

/// One trial from the starting definitions: fresh teams, fresh life.
pub fn run_trial(
    team_1: &TeamDef,
    team_2: &TeamDef,
    weapons: &WeaponTable,
    trial: usize,
    opts: &SimulationOptions,
) -> Result<TrialResult, CombatError> {
    let mut dice = Dice::from_seed(opts.seed.wrapping_add(trial as u64));
    let mut encounter = Encounter::new(Team::new(team_1)?, Team::new(team_2)?, weapons)
        .with_max_rounds(opts.max_rounds);
    let result = encounter.play(&mut dice, |_| {})?;
    match result.outcome {
        Outcome::Decided(winner) => Ok(TrialResult { winner, rounds: result.rounds }),
        Outcome::Fault(_) => Err(CombatError::SimultaneousLoss { trial }),
    }
}

/// Monte Carlo estimate of each team's win probability over `trials`
/// independent encounters.
pub fn simulate(
    team_1: &TeamDef,
    team_2: &TeamDef,
    weapons: &WeaponTable,
    trials: i64,
    opts: &SimulationOptions,
) -> Result<SimulationReport, CombatError> {
    if trials <= 0 {
        return Err(CombatError::InvalidTrialCount(trials));
    }
    if team_1.name == team_2.name {
        return Err(CombatError::DuplicateTeamName(team_1.name.clone()));
    }
    let trials = usize::try_from(trials).map_err(|_| CombatError::InvalidTrialCount(trials))?;

    info!(team_1 = %team_1.name, team_2 = %team_2.name, trials, seed = opts.seed, "simulation started");

    let run = |trial: usize| run_trial(team_1, team_2, weapons, trial, opts);
    let results: Vec<TrialResult> = if opts.parallel {
        (0..trials).into_par_iter().map(run).collect::<Result<_, _>>()?
    } else {
        (0..trials).map(run).collect::<Result<_, _>>()?
    };

    let team_1_wins = results.iter().filter(|r| r.winner == Side::One).count();
    let team_1_probability = team_1_wins as f64 / trials as f64;
    let team_2_probability = 1.0 - team_1_probability;
    let rounds: Vec<u32> = results.iter().map(|r| r.rounds).collect();
    let mean_rounds = rounds.iter().map(|&r| r as u64).sum::<u64>() as f64 / trials as f64;
    let winners = results
        .iter()
        .map(|r| match r.winner {
            Side::One => team_1.name.clone(),
            Side::Two => team_2.name.clone(),
        })
        .collect();

    info!(team_1_probability, team_2_probability, mean_rounds, "simulation finished");

    Ok(SimulationReport {
        team_1: team_1.name.clone(),
        team_2: team_2.name.clone(),
        trials,
        team_1_wins,
        team_1_probability,
        team_2_probability,
        mean_rounds,
        winners,
        rounds,
    })
}
