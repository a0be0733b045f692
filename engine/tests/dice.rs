use skirmish::Dice;

#[test]
fn roll_sums_each_die() {
    let mut dice = Dice::from_scripted(vec![3, 4]);
    assert_eq!(dice.roll(2, 6), 7);
}

#[test]
fn scripted_faces_clamp_to_the_die() {
    let mut dice = Dice::from_scripted(vec![9, 0]);
    assert_eq!(dice.die(6), 6);
    assert_eq!(dice.die(6), 1);
}

#[test]
fn scripted_faces_wrap_around() {
    let mut dice = Dice::from_scripted(vec![2, 5]);
    let faces: Vec<u32> = (0..3).map(|_| dice.die(6)).collect();
    assert_eq!(faces, vec![2, 5, 2]);
}

#[test]
fn empty_script_rolls_one() {
    let mut dice = Dice::from_scripted(vec![]);
    assert_eq!(dice.roll(3, 10), 3);
}

#[test]
fn pick_is_zero_based() {
    let mut dice = Dice::from_scripted(vec![3, 1]);
    assert_eq!(dice.pick(4), 2);
    assert_eq!(dice.pick(4), 0);
}

#[test]
fn seeded_rolls_are_deterministic_and_in_range() {
    let mut a = Dice::from_seed(123);
    let mut b = Dice::from_seed(123);
    for _ in 0..200 {
        let ra = a.roll(3, 10);
        assert_eq!(ra, b.roll(3, 10));
        assert!((3..=30).contains(&ra));
    }
}

#[test]
fn zero_dice_roll_nothing() {
    let mut dice = Dice::from_seed(1);
    assert_eq!(dice.roll(0, 6), 0);
}

#[test]
fn roll_saturates_instead_of_overflowing() {
    let mut dice = Dice::from_scripted(vec![u32::MAX]);
    assert_eq!(dice.roll(3, u32::MAX), u32::MAX);
}

#[test]
fn zero_sided_die_shows_one() {
    let mut dice = Dice::from_seed(4);
    assert_eq!(dice.roll(3, 0), 3);
}
