use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod api;
pub mod combat;
pub mod content;
pub mod error;
pub mod logging;
pub mod simulate;

pub use combat::character::{Character, CharacterDef, CharacterId, WeaponTable};
pub use combat::encounter::{
    resolve_attack, Encounter, EncounterResult, EncounterState, Fault, Outcome, RoundTrace, Side,
};
pub use combat::team::{Roster, Team, TeamDef};
pub use error::CombatError;
pub use simulate::{simulate, run_trial, SimulationOptions, SimulationReport, TrialResult};

enum Source {
    Seeded(ChaCha8Rng),
    Scripted { faces: Vec<u32>, next: usize },
}

/// The only source of randomness in a trial. Every random decision is a die.
pub struct Dice {
    source: Source,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { source: Source::Seeded(ChaCha8Rng::seed_from_u64(seed)) }
    }

    /// Replays `faces` in order, wrapping around when exhausted. Each face is
    /// clamped to the die being rolled; an empty script always rolls 1.
    pub fn from_scripted(faces: Vec<u32>) -> Self {
        Self { source: Source::Scripted { faces, next: 0 } }
    }

    /// One die with faces `1..=sides`. A zero-sided die is rolled as a
    /// one-sided die and always shows 1.
    pub fn die(&mut self, sides: u32) -> u32 {
        let sides = sides.max(1);
        match &mut self.source {
            Source::Seeded(rng) => rng.gen_range(1..=sides),
            Source::Scripted { faces, next } => {
                let face = if faces.is_empty() { 1 } else { faces[*next % faces.len()] };
                *next += 1;
                face.clamp(1, sides)
            }
        }
    }

    /// Sum of `num_dice` independent dies with `num_sides` faces each,
    /// saturating at `u32::MAX`.
    pub fn roll(&mut self, num_dice: u32, num_sides: u32) -> u32 {
        (0..num_dice).fold(0u32, |total, _| total.saturating_add(self.die(num_sides)))
    }

    /// Uniform index into a non-empty slice of length `len`.
    pub fn pick(&mut self, len: usize) -> usize {
        let sides = u32::try_from(len).unwrap_or(u32::MAX);
        (self.die(sides) - 1) as usize
    }
}
