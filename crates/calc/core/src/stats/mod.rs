//! Stat containers for players and equipment.
//!
//! All types here are plain value objects: immutable once constructed,
//! cheap to clone, and free of behavior beyond small accessors. The actual
//! combat math lives in [`crate::combat`] and consumes these by reference.

pub mod bonuses;
pub mod levels;

pub use bonuses::{DefensiveBonuses, EquipmentBonuses, OffensiveBonuses, StrengthBonuses};
pub use levels::{PrayerMultipliers, SkillBoosts, SkillLevels};
