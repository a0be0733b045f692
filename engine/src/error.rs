use thiserror::Error;

/// Failures of the combat core. None of these are recovered locally: they
/// abort the trial or the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("character {character} carries unknown weapon '{weapon}'")]
    UnknownWeapon { character: String, weapon: String },

    #[error("team '{team}' has no living members to defend")]
    NoLivingMembers { team: String },

    #[error("both teams lost in the same round (trial {trial})")]
    SimultaneousLoss { trial: usize },

    #[error("trial count must be positive, got {0}")]
    InvalidTrialCount(i64),

    #[error("team '{team}' has an empty roster")]
    EmptyRoster { team: String },

    #[error("both teams are named '{0}'")]
    DuplicateTeamName(String),

    #[error("encounter undecided after {max_rounds} rounds")]
    RoundLimitExceeded { max_rounds: u32 },
}
