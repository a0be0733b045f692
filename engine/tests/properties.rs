use proptest::prelude::*;
use skirmish::{
    simulate, Character, CharacterDef, CharacterId, Roster, SimulationOptions, Team, TeamDef,
    WeaponTable,
};

fn def(i: usize, defense: u32, life: u32) -> CharacterDef {
    CharacterDef {
        id: CharacterId::Number(i as i64),
        attack_strength: 2,
        defense_strength: defense,
        life,
        weapon: "spear".into(),
    }
}

fn team_def(name: &str, members: &[(u32, u32)]) -> TeamDef {
    let roster: Roster = members
        .iter()
        .enumerate()
        .map(|(i, &(d, l))| (format!("c{}", i), def(i, d, l)))
        .collect();
    TeamDef::new(name, roster)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn damage_never_goes_below_zero(life in 0u32..500, amount in 0u32..500) {
        let mut c = Character::from(&def(1, 0, life));
        let after = c.apply_damage(amount);
        prop_assert_eq!(after, life.saturating_sub(amount));
        prop_assert!(after <= life);
    }

    #[test]
    fn weakest_defender_is_alive_and_minimal(lives in prop::collection::vec(0u32..20, 1..8)) {
        let members: Vec<(u32, u32)> = lives.iter().map(|&l| (0, l)).collect();
        let team = Team::new(&team_def("t", &members)).unwrap();
        if team.is_losing() {
            prop_assert!(team.weakest_defender().is_err());
        } else {
            let weakest = team.weakest_defender().unwrap();
            prop_assert!(weakest.life > 0);
            let min_alive = lives.iter().copied().filter(|&l| l > 0).min().unwrap();
            prop_assert_eq!(weakest.life, min_alive);
        }
    }

    #[test]
    fn probabilities_sum_to_one(
        a in prop::collection::vec((0u32..=1, 1u32..30), 1..4),
        b in prop::collection::vec((0u32..=1, 1u32..30), 1..4),
        trials in 1i64..25,
        seed in any::<u64>(),
    ) {
        let weapons = WeaponTable::standard();
        let opts = SimulationOptions { seed, ..Default::default() };
        let report = simulate(&team_def("left", &a), &team_def("right", &b), &weapons, trials, &opts).unwrap();
        prop_assert_eq!(report.team_1_probability + report.team_2_probability, 1.0);
        prop_assert_eq!(report.winners.len() as i64, trials);
        prop_assert!(report.winners.iter().all(|w| w == "left" || w == "right"));
    }
}
