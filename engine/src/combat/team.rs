use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::combat::character::{Character, CharacterDef};
use crate::{CombatError, Dice};

/// Roster keys are discarded; only their insertion order matters.
pub type Roster = IndexMap<String, CharacterDef>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamDef {
    pub name: String,
    pub roster: Roster,
}

impl TeamDef {
    pub fn new(name: impl Into<String>, roster: Roster) -> Self {
        Self { name: name.into(), roster }
    }
}

/// Live state of one side during a single trial.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    name: String,
    members: Vec<Character>,
}

impl Team {
    /// Builds fresh characters, in roster order, at their starting life.
    pub fn new(def: &TeamDef) -> Result<Self, CombatError> {
        if def.roster.is_empty() {
            return Err(CombatError::EmptyRoster { team: def.name.clone() });
        }
        let members: Vec<Character> = def.roster.values().map(Character::from).collect();
        for c in members.iter().filter(|c| !c.is_alive()) {
            warn!(team = %def.name, character = %c.id, "character starts with zero life");
        }
        Ok(Self { name: def.name.clone(), members })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Character] {
        &self.members
    }

    pub fn member(&self, index: usize) -> Option<&Character> {
        self.members.get(index)
    }

    pub fn member_mut(&mut self, index: usize) -> Option<&mut Character> {
        self.members.get_mut(index)
    }

    /// True once every member is at zero life.
    pub fn is_losing(&self) -> bool {
        self.members.iter().all(|c| !c.is_alive())
    }

    /// Index of the living member with the least life; ties go to the first
    /// in roster order.
    pub fn weakest_defender_index(&self) -> Result<usize, CombatError> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .min_by_key(|(_, c)| c.life)
            .map(|(i, _)| i)
            .ok_or_else(|| CombatError::NoLivingMembers { team: self.name.clone() })
    }

    pub fn weakest_defender(&self) -> Result<&Character, CombatError> {
        let index = self.weakest_defender_index()?;
        Ok(&self.members[index])
    }

    /// Uniform over all members, dead ones included.
    pub fn random_attacker_index(&self, dice: &mut Dice) -> usize {
        dice.pick(self.members.len())
    }

    pub fn random_attacker(&self, dice: &mut Dice) -> &Character {
        let index = self.random_attacker_index(dice);
        &self.members[index]
    }
}
