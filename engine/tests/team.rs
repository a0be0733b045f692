use skirmish::{CharacterDef, CharacterId, CombatError, Dice, Roster, Team, TeamDef};

fn roster(lives: &[u32]) -> Roster {
    lives
        .iter()
        .enumerate()
        .map(|(i, &life)| {
            (
                format!("character_{}", i + 1),
                CharacterDef {
                    id: CharacterId::Number(i as i64 + 1),
                    attack_strength: 3,
                    defense_strength: 5,
                    life,
                    weapon: "spear".into(),
                },
            )
        })
        .collect()
}

fn team(lives: &[u32]) -> Team {
    Team::new(&TeamDef::new("reds", roster(lives))).unwrap()
}

#[test]
fn weakest_defender_breaks_ties_by_roster_order() {
    let t = team(&[5, 3, 3, 7]);
    assert_eq!(t.weakest_defender_index(), Ok(1));
    assert_eq!(t.weakest_defender().unwrap().id, CharacterId::Number(2));
}

#[test]
fn weakest_defender_skips_the_dead() {
    let t = team(&[0, 4, 2]);
    assert_eq!(t.weakest_defender_index(), Ok(2));
}

#[test]
fn losing_team_has_no_defender() {
    let t = team(&[0, 0]);
    assert!(t.is_losing());
    assert_eq!(
        t.weakest_defender_index(),
        Err(CombatError::NoLivingMembers { team: "reds".into() })
    );
}

#[test]
fn one_living_member_keeps_team_in_play() {
    let t = team(&[0, 1]);
    assert!(!t.is_losing());
}

#[test]
fn random_attacker_may_be_dead() {
    let t = team(&[0, 5]);
    let mut dice = Dice::from_scripted(vec![1]);
    let attacker = t.random_attacker(&mut dice);
    assert_eq!(attacker.life, 0);
}

#[test]
fn empty_roster_is_rejected() {
    let err = Team::new(&TeamDef::new("ghosts", Roster::new())).unwrap_err();
    assert_eq!(err, CombatError::EmptyRoster { team: "ghosts".into() });
}

#[test]
fn members_follow_roster_order() {
    let mut r = Roster::new();
    let mut lives = roster(&[1, 2]).into_values();
    r.insert("zeta".into(), lives.next().unwrap());
    r.insert("alpha".into(), lives.next().unwrap());
    let t = Team::new(&TeamDef::new("reds", r)).unwrap();
    let ids: Vec<_> = t.members().iter().map(|c| c.id.to_string()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn damage_on_a_team_member_is_local_to_that_team() {
    let def = TeamDef::new("reds", roster(&[4, 6]));
    let mut first = Team::new(&def).unwrap();
    first.member_mut(0).unwrap().apply_damage(10);
    let second = Team::new(&def).unwrap();
    assert_eq!(second.member(0).unwrap().life, 4);
    assert_eq!(def.roster["character_1"].life, 4);
}
