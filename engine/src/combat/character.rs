use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{CombatError, Dice};

/// Attack power is `2d6 + attack_strength`.
pub const ATTACK_DICE: (u32, u32) = (2, 6);
/// A landed attack wounds for `3d10 + weapon bonus`.
pub const SCAR_DICE: (u32, u32) = (3, 10);

/// Display-only identifier, unique within its team. Any scalar is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacterId {
    Number(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
    Name(String),
    Null,
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterId::Number(n) => write!(f, "{}", n),
            CharacterId::Unsigned(n) => write!(f, "{}", n),
            CharacterId::Float(x) => write!(f, "{}", x),
            CharacterId::Bool(b) => write!(f, "{}", b),
            CharacterId::Name(s) => f.write_str(s),
            CharacterId::Null => f.write_str("null"),
        }
    }
}

/// Starting attributes of one roster entry. Never mutated; every trial builds
/// fresh [`Character`]s from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharacterDef {
    pub id: CharacterId,
    pub attack_strength: u32,
    pub defense_strength: u32,
    pub life: u32,
    pub weapon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: CharacterId,
    pub attack_strength: u32,
    pub defense_strength: u32,
    pub life: u32,
    pub weapon: String,
}

impl From<&CharacterDef> for Character {
    fn from(def: &CharacterDef) -> Self {
        Self {
            id: def.id.clone(),
            attack_strength: def.attack_strength,
            defense_strength: def.defense_strength,
            life: def.life,
            weapon: def.weapon.clone(),
        }
    }
}

impl Character {
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Rolled fresh on every call. Saturates at `u32::MAX`.
    pub fn attack_power(&self, dice: &mut Dice) -> u32 {
        dice.roll(ATTACK_DICE.0, ATTACK_DICE.1).saturating_add(self.attack_strength)
    }

    pub fn defense_power(&self) -> u32 {
        self.defense_strength
    }

    /// Wound magnitude if this character's attack lands. An unlisted weapon
    /// is an error, never a zero bonus; no dice are consumed in that case.
    pub fn scar(&self, dice: &mut Dice, weapons: &WeaponTable) -> Result<u32, CombatError> {
        let bonus = weapons
            .bonus(&self.weapon)
            .ok_or_else(|| CombatError::UnknownWeapon {
                character: self.id.to_string(),
                weapon: self.weapon.clone(),
            })?;
        Ok(dice.roll(SCAR_DICE.0, SCAR_DICE.1).saturating_add(bonus))
    }

    /// Subtract `amount` from life, flooring at zero. Returns the new life.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.life = self.life.saturating_sub(amount);
        self.life
    }
}

/// Weapon name to scar bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeaponTable {
    bonuses: IndexMap<String, u32>,
}

impl Default for WeaponTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl WeaponTable {
    /// `spear` → 2.
    pub fn standard() -> Self {
        Self::empty().with_weapon("spear", 2)
    }

    pub fn empty() -> Self {
        Self { bonuses: IndexMap::new() }
    }

    pub fn with_weapon(mut self, name: impl Into<String>, bonus: u32) -> Self {
        self.insert(name, bonus);
        self
    }

    /// Adds a weapon or overrides an existing bonus.
    pub fn insert(&mut self, name: impl Into<String>, bonus: u32) {
        self.bonuses.insert(name.into(), bonus);
    }

    pub fn bonus(&self, name: &str) -> Option<u32> {
        self.bonuses.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bonuses.keys().map(String::as_str)
    }
}

impl<S: Into<String>> Extend<(S, u32)> for WeaponTable {
    fn extend<T: IntoIterator<Item = (S, u32)>>(&mut self, iter: T) {
        for (name, bonus) in iter {
            self.insert(name, bonus);
        }
    }
}
