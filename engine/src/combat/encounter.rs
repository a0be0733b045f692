use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::combat::character::{Character, CharacterId, WeaponTable};
use crate::combat::team::Team;
use crate::{CombatError, Dice};

pub const DEFAULT_MAX_ROUNDS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Fair coin, independent of either team's state.
    pub fn toss(dice: &mut Dice) -> Self {
        if dice.die(2) == 1 { Side::One } else { Side::Two }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fault {
    /// Both teams reached zero life together. No tie outcome is defined.
    SimultaneousLoss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Decided(Side),
    Fault(Fault),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    InProgress,
    Finished(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncounterResult {
    pub outcome: Outcome,
    pub rounds: u32,
}

/// One resolved round, for narration. Has no bearing on the outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundTrace {
    pub round: u32,
    pub attacking_side: Side,
    pub attacker_team: String,
    pub attacker_id: CharacterId,
    pub defender_team: String,
    pub defender_id: CharacterId,
    pub attack_point: u32,
    pub defense_point: u32,
    pub landed: bool,
    pub scar: u32,
    pub life_before: u32,
    pub life_after: u32,
}

impl fmt::Display for RoundTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ROUND {}] {}#{} → {}#{} | attack {} vs defense {} {} | scar {} | life {} → {}",
            self.round,
            self.attacker_team,
            self.attacker_id,
            self.defender_team,
            self.defender_id,
            self.attack_point,
            self.defense_point,
            if self.landed { "✔" } else { "✖" },
            self.scar,
            self.life_before,
            self.life_after
        )
    }
}

/// Damage lands only when the attack strictly beats the defense.
/// Returns whether it landed.
pub fn resolve_attack(
    attack_point: u32,
    defense_point: u32,
    scar: u32,
    defender: &mut Character,
) -> bool {
    if attack_point > defense_point {
        defender.apply_damage(scar);
        true
    } else {
        false
    }
}

/// A single trial between two freshly built teams.
pub struct Encounter<'w> {
    team_1: Team,
    team_2: Team,
    weapons: &'w WeaponTable,
    max_rounds: u32,
}

impl<'w> Encounter<'w> {
    pub fn new(team_1: Team, team_2: Team, weapons: &'w WeaponTable) -> Self {
        Self { team_1, team_2, weapons, max_rounds: DEFAULT_MAX_ROUNDS }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::One => &self.team_1,
            Side::Two => &self.team_2,
        }
    }

    pub fn state(&self) -> EncounterState {
        match (self.team_1.is_losing(), self.team_2.is_losing()) {
            (false, false) => EncounterState::InProgress,
            (true, false) => EncounterState::Finished(Outcome::Decided(Side::Two)),
            (false, true) => EncounterState::Finished(Outcome::Decided(Side::One)),
            (true, true) => EncounterState::Finished(Outcome::Fault(Fault::SimultaneousLoss)),
        }
    }

    fn sides_mut(&mut self, attacking: Side) -> (&mut Team, &mut Team) {
        match attacking {
            Side::One => (&mut self.team_1, &mut self.team_2),
            Side::Two => (&mut self.team_2, &mut self.team_1),
        }
    }

    /// Plays one round. Attack power, defense power and scar are all computed
    /// even when the attack misses, so the dice stream does not depend on
    /// the resolution.
    pub fn play_round(&mut self, round: u32, dice: &mut Dice) -> Result<RoundTrace, CombatError> {
        let weapons = self.weapons;
        let attacking_side = Side::toss(dice);
        let (attackers, defenders) = self.sides_mut(attacking_side);

        let attacker_index = attackers.random_attacker_index(dice);
        let defender_index = defenders.weakest_defender_index()?;
        let attacker = &attackers.members()[attacker_index];
        let defender_team = defenders.name().to_string();
        let defender = defenders
            .member_mut(defender_index)
            .ok_or_else(|| CombatError::NoLivingMembers { team: defender_team.clone() })?;

        let attack_point = attacker.attack_power(dice);
        let defense_point = defender.defense_power();
        let scar = attacker.scar(dice, weapons)?;

        let life_before = defender.life;
        let landed = resolve_attack(attack_point, defense_point, scar, defender);

        Ok(RoundTrace {
            round,
            attacking_side,
            attacker_team: attackers.name().to_string(),
            attacker_id: attacker.id.clone(),
            defender_team,
            defender_id: defender.id.clone(),
            attack_point,
            defense_point,
            landed,
            scar,
            life_before,
            life_after: defender.life,
        })
    }

    /// Runs rounds until one side is losing. `on_round` sees every round in
    /// order. A simultaneous loss is reported as [`Outcome::Fault`].
    pub fn play(
        &mut self,
        dice: &mut Dice,
        mut on_round: impl FnMut(&RoundTrace),
    ) -> Result<EncounterResult, CombatError> {
        let mut rounds = 0u32;
        loop {
            if let EncounterState::Finished(outcome) = self.state() {
                debug!(?outcome, rounds, "encounter finished");
                return Ok(EncounterResult { outcome, rounds });
            }
            if rounds >= self.max_rounds {
                return Err(CombatError::RoundLimitExceeded { max_rounds: self.max_rounds });
            }
            rounds += 1;
            let record = self.play_round(rounds, dice)?;
            trace!(%record, "round");
            on_round(&record);
        }
    }

    pub fn winner_name(&self, outcome: Outcome) -> Option<&str> {
        match outcome {
            Outcome::Decided(side) => Some(self.team(side).name()),
            Outcome::Fault(_) => None,
        }
    }
}
