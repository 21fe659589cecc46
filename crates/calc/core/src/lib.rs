//! Deterministic combat-metric calculations shared across clients.
//!
//! `calc-core` defines the canonical domain model (stats, snapshots, combat
//! styles) and exposes pure APIs for turning a (player, monster) snapshot
//! pair into computed values: accuracy, max hit, full hit distribution, and
//! derived aggregates like DPS. All computation flows through
//! [`engine::compute`], and supporting crates depend on the types
//! re-exported here.
pub mod combat;
pub mod engine;
pub mod snapshot;
pub mod stats;

pub use combat::{
    AttackStance, CombatStyle, DamageType, HitDistribution, SpecialEffect, SpecialEffectError,
};
pub use engine::{ComputeError, ComputedValues, compute};
pub use snapshot::{
    MonsterAttributes, MonsterForm, MonsterSnapshot, PlayerForm, PlayerSnapshot, ValidationError,
};
pub use stats::{
    DefensiveBonuses, EquipmentBonuses, OffensiveBonuses, PrayerMultipliers, SkillBoosts,
    SkillLevels, StrengthBonuses,
};

/// Length of one game tick in seconds.
///
/// Attack intervals are measured in ticks and converted to wall-clock
/// seconds when deriving DPS and time-to-kill.
pub const TICK_SECONDS: f64 = 0.6;
