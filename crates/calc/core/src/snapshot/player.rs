//! Player loadout form and snapshot.

use crate::TICK_SECONDS;
use crate::combat::{CombatStyle, DamageType, SpecialEffect};
use crate::stats::{EquipmentBonuses, PrayerMultipliers, SkillBoosts, SkillLevels};

use super::ValidationError;

/// Valid range for player combat skill levels.
const LEVEL_MIN: i64 = 1;
const LEVEL_MAX: i64 = 99;

/// Editable player state as held by the UI.
///
/// All fields are freely mutable; [`PlayerForm::validate`] turns the form
/// into an immutable [`PlayerSnapshot`] or reports why it can't.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerForm {
    pub levels: SkillLevels,
    pub boosts: SkillBoosts,
    pub prayers: PrayerMultipliers,
    pub equipment: EquipmentBonuses,
    pub style: CombatStyle,
    /// Weapon attack interval in game ticks (before stance adjustment).
    pub attack_interval_ticks: u32,
    /// Base max hit of the selected spell; required for magic styles.
    pub spell_max_hit: Option<u32>,
    /// Active special effect, if any.
    pub special: Option<SpecialEffect>,
}

impl PlayerForm {
    /// Validate the form and produce an independent snapshot.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::OutOfRange`] when a level or the attack
    ///   interval is outside its domain
    /// - [`ValidationError::MissingField`] when a magic style is selected
    ///   without a spell max hit
    pub fn validate(&self) -> Result<PlayerSnapshot, ValidationError> {
        let levels = &self.levels;
        ValidationError::check_range("attack", levels.attack as i64, LEVEL_MIN, LEVEL_MAX)?;
        ValidationError::check_range("strength", levels.strength as i64, LEVEL_MIN, LEVEL_MAX)?;
        ValidationError::check_range("defence", levels.defence as i64, LEVEL_MIN, LEVEL_MAX)?;
        ValidationError::check_range("ranged", levels.ranged as i64, LEVEL_MIN, LEVEL_MAX)?;
        ValidationError::check_range("magic", levels.magic as i64, LEVEL_MIN, LEVEL_MAX)?;
        ValidationError::check_range("hitpoints", levels.hitpoints as i64, LEVEL_MIN, LEVEL_MAX)?;
        ValidationError::check_range(
            "attack_interval_ticks",
            self.attack_interval_ticks as i64,
            1,
            20,
        )?;

        if self.style.damage_type == DamageType::Magic && self.spell_max_hit.is_none() {
            return Err(ValidationError::MissingField {
                field: "spell_max_hit",
            });
        }

        Ok(PlayerSnapshot {
            levels: self.levels,
            boosts: self.boosts,
            prayers: self.prayers,
            equipment: self.equipment,
            style: self.style,
            attack_interval_ticks: self.attack_interval_ticks,
            spell_max_hit: self.spell_max_hit,
            special: self.special,
        })
    }
}

/// Immutable player state at a point in time.
///
/// Produced by [`PlayerForm::validate`]; holds owned copies of every field
/// so later edits to the form cannot be observed through it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    pub levels: SkillLevels,
    pub boosts: SkillBoosts,
    pub prayers: PrayerMultipliers,
    pub equipment: EquipmentBonuses,
    pub style: CombatStyle,
    pub attack_interval_ticks: u32,
    pub spell_max_hit: Option<u32>,
    pub special: Option<SpecialEffect>,
}

impl PlayerSnapshot {
    /// Attack interval in seconds after stance adjustment.
    ///
    /// Rapid stances shorten the interval by one tick; the interval never
    /// drops below a single tick.
    pub fn attack_interval_seconds(&self) -> f64 {
        let ticks = (self.attack_interval_ticks as i32 + self.style.stance.interval_adjustment())
            .max(1) as f64;
        ticks * TICK_SECONDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::AttackStance;

    fn melee_form() -> PlayerForm {
        PlayerForm {
            levels: SkillLevels::uniform(70),
            attack_interval_ticks: 4,
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_produces_snapshot() {
        let snapshot = melee_form().validate().expect("form should validate");
        assert_eq!(snapshot.levels.attack, 70);
        assert_eq!(snapshot.attack_interval_ticks, 4);
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        let mut form = melee_form();
        form.levels.attack = 0;
        assert_eq!(
            form.validate(),
            Err(ValidationError::OutOfRange {
                field: "attack",
                value: 0,
                min: 1,
                max: 99,
            })
        );
    }

    #[test]
    fn magic_style_requires_spell() {
        let mut form = melee_form();
        form.style.damage_type = DamageType::Magic;
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField {
                field: "spell_max_hit",
            })
        );

        form.spell_max_hit = Some(24);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn snapshot_is_independent_of_later_edits() {
        let mut form = melee_form();
        let snapshot = form.validate().unwrap();
        form.levels.strength = 99;
        assert_eq!(snapshot.levels.strength, 70);
    }

    #[test]
    fn rapid_stance_shortens_interval() {
        let mut form = melee_form();
        form.style.stance = AttackStance::Rapid;
        let snapshot = form.validate().unwrap();
        // 4 ticks - 1 = 3 ticks × 0.6s
        assert!((snapshot.attack_interval_seconds() - 1.8).abs() < 1e-12);
    }
}
