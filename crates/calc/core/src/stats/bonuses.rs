//! Equipment bonus containers.
//!
//! Bonuses are summed across worn equipment by the editing surface before a
//! snapshot is built; this crate only ever sees the aggregated totals.

use crate::combat::DamageType;

/// Offensive (attack) bonuses per damage type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffensiveBonuses {
    pub stab: i32,
    pub slash: i32,
    pub crush: i32,
    pub magic: i32,
    pub ranged: i32,
}

impl OffensiveBonuses {
    /// Bonus applying to attacks of the given damage type.
    pub fn for_type(&self, damage_type: DamageType) -> i32 {
        match damage_type {
            DamageType::Stab => self.stab,
            DamageType::Slash => self.slash,
            DamageType::Crush => self.crush,
            DamageType::Magic => self.magic,
            DamageType::Ranged => self.ranged,
        }
    }
}

/// Defensive bonuses per incoming damage type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefensiveBonuses {
    pub stab: i32,
    pub slash: i32,
    pub crush: i32,
    pub magic: i32,
    pub ranged: i32,
}

impl DefensiveBonuses {
    /// Bonus applying against attacks of the given damage type.
    pub fn for_type(&self, damage_type: DamageType) -> i32 {
        match damage_type {
            DamageType::Stab => self.stab,
            DamageType::Slash => self.slash,
            DamageType::Crush => self.crush,
            DamageType::Magic => self.magic,
            DamageType::Ranged => self.ranged,
        }
    }
}

/// Damage ("strength") bonuses.
///
/// Melee and ranged strength are flat roll inputs; magic damage is a
/// percentage increase applied to the spell's base max hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrengthBonuses {
    pub melee: i32,
    pub ranged: i32,
    /// Magic damage bonus as an integer percentage (e.g. 15 = +15%).
    pub magic_percent: i32,
}

/// Combined bonus aggregate for a full loadout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentBonuses {
    pub offensive: OffensiveBonuses,
    pub defensive: DefensiveBonuses,
    pub strength: StrengthBonuses,
}
