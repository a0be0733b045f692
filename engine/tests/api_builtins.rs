use skirmish::api::{builtin_scenario, play_scenario, simulate_scenario};
use skirmish::CombatError;

#[test]
fn skirmish_builtin_parses_in_roster_order() {
    let scenario = builtin_scenario("skirmish").unwrap();
    assert_eq!(scenario.team_1.name, "team_A");
    assert_eq!(scenario.team_2.name, "team_B");
    let keys: Vec<_> = scenario.team_2.roster.keys().cloned().collect();
    assert_eq!(keys, vec!["character_1", "character_2"]);
    assert_eq!(scenario.team_2.roster["character_2"].defense_strength, 15);
    assert_eq!(scenario.trials, 1000);
}

#[test]
fn play_with_builtin_runs() {
    let scenario = builtin_scenario("skirmish").unwrap();
    let res = play_scenario(&scenario, 2025).unwrap();
    assert!(res.rounds > 0);
    assert_eq!(res.trace.len() as u32, res.rounds);
    assert!(matches!(res.winner.as_str(), "team_A" | "team_B"));
}

#[test]
fn simulate_with_builtin_makes_sense() {
    let mut scenario = builtin_scenario("skirmish").unwrap();
    scenario.trials = 100;
    let report = simulate_scenario(&scenario).unwrap();
    assert_eq!(report.winners.len(), 100);
    assert_eq!(report.team_1_probability + report.team_2_probability, 1.0);
}

#[test]
fn worker_pools_do_not_change_results() {
    let mut scenario = builtin_scenario("skirmish").unwrap();
    scenario.trials = 64;
    scenario.seed = 9;
    let sequential = simulate_scenario(&scenario).unwrap();
    scenario.workers = Some(2);
    let pooled = simulate_scenario(&scenario).unwrap();
    scenario.workers = Some(0);
    let global = simulate_scenario(&scenario).unwrap();
    assert_eq!(sequential, pooled);
    assert_eq!(sequential, global);
}

#[test]
fn lopsided_builtin_always_goes_to_the_wall() {
    let scenario = builtin_scenario("lopsided").unwrap();
    let report = simulate_scenario(&scenario).unwrap();
    assert_eq!(report.trials, 50);
    assert_eq!(report.team_1_probability, 1.0);
}

#[test]
fn unknown_builtin_is_an_error() {
    assert!(builtin_scenario("nope").is_err());
}

#[test]
fn invalid_trial_count_surfaces_through_the_api() {
    let mut scenario = builtin_scenario("skirmish").unwrap();
    scenario.trials = -1;
    let err = simulate_scenario(&scenario).unwrap_err();
    assert_eq!(
        err.downcast_ref::<CombatError>(),
        Some(&CombatError::InvalidTrialCount(-1))
    );
}
