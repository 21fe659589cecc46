//! Monster form and snapshot.

use bitflags::bitflags;

use crate::combat::DamageType;
use crate::stats::DefensiveBonuses;

use super::ValidationError;

bitflags! {
    /// Attribute and immunity flags carried by a monster.
    ///
    /// Category flags (undead, demon, ...) exist for bonus-vs-attribute
    /// effects; immunity flags force accuracy to zero for the matching
    /// damage type.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MonsterAttributes: u16 {
        const UNDEAD           = 1 << 0;
        const DEMON            = 1 << 1;
        const DRAGON           = 1 << 2;
        const LEAFY            = 1 << 3;
        const IMMUNE_TO_MELEE  = 1 << 4;
        const IMMUNE_TO_RANGED = 1 << 5;
        const IMMUNE_TO_MAGIC  = 1 << 6;
    }
}

impl MonsterAttributes {
    /// Whether this monster is fully immune to the given damage type.
    pub fn is_immune_to(&self, damage_type: DamageType) -> bool {
        match damage_type {
            DamageType::Stab | DamageType::Slash | DamageType::Crush => {
                self.contains(Self::IMMUNE_TO_MELEE)
            }
            DamageType::Ranged => self.contains(Self::IMMUNE_TO_RANGED),
            DamageType::Magic => self.contains(Self::IMMUNE_TO_MAGIC),
        }
    }
}

/// Editable monster state as held by the UI.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterForm {
    pub name: String,
    pub hitpoints: u32,
    pub defence: u32,
    /// Magic level, used for the magic defence roll.
    pub magic: u32,
    pub defensive: DefensiveBonuses,
    pub attributes: MonsterAttributes,
}

impl MonsterForm {
    /// Validate the form and produce an independent snapshot.
    ///
    /// Monster levels have a much wider domain than player levels; bosses
    /// routinely exceed 99.
    pub fn validate(&self) -> Result<MonsterSnapshot, ValidationError> {
        ValidationError::check_range("hitpoints", self.hitpoints as i64, 1, 50_000)?;
        ValidationError::check_range("defence", self.defence as i64, 0, 5_000)?;
        ValidationError::check_range("magic", self.magic as i64, 0, 5_000)?;

        Ok(MonsterSnapshot {
            name: self.name.clone(),
            hitpoints: self.hitpoints,
            defence: self.defence,
            magic: self.magic,
            defensive: self.defensive,
            attributes: self.attributes,
        })
    }
}

/// Immutable monster state at a point in time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSnapshot {
    pub name: String,
    pub hitpoints: u32,
    pub defence: u32,
    pub magic: u32,
    pub defensive: DefensiveBonuses,
    pub attributes: MonsterAttributes,
}

impl MonsterSnapshot {
    /// Level used in the defence roll against the given damage type.
    ///
    /// Monsters defend against magic with their magic level, everything
    /// else with their defence level.
    pub fn defence_level_against(&self, damage_type: DamageType) -> u32 {
        match damage_type {
            DamageType::Magic => self.magic,
            _ => self.defence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immunity_flags_cover_damage_types() {
        let attrs = MonsterAttributes::IMMUNE_TO_MELEE | MonsterAttributes::UNDEAD;
        assert!(attrs.is_immune_to(DamageType::Stab));
        assert!(attrs.is_immune_to(DamageType::Crush));
        assert!(!attrs.is_immune_to(DamageType::Ranged));
        assert!(!attrs.is_immune_to(DamageType::Magic));
    }

    #[test]
    fn zero_hitpoints_rejected() {
        let form = MonsterForm {
            name: "dummy".into(),
            hitpoints: 0,
            ..Default::default()
        };
        assert!(matches!(
            form.validate(),
            Err(ValidationError::OutOfRange {
                field: "hitpoints",
                ..
            })
        ));
    }

    #[test]
    fn magic_defence_uses_magic_level() {
        let form = MonsterForm {
            name: "warlock".into(),
            hitpoints: 200,
            defence: 100,
            magic: 250,
            ..Default::default()
        };
        let snapshot = form.validate().unwrap();
        assert_eq!(snapshot.defence_level_against(DamageType::Magic), 250);
        assert_eq!(snapshot.defence_level_against(DamageType::Slash), 100);
    }
}
