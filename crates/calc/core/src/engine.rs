//! The calculation engine: snapshot pair in, computed values out.
//!
//! [`compute`] is the single entry point. It is total, deterministic, and
//! side-effect free: given identical snapshots it returns bit-for-bit
//! identical results, which lets callers skip redundant recomputation and
//! makes every result reproducible in tests.

use thiserror::Error;

use crate::combat::{
    DamageType, HitDistribution, SpecialEffectError, effective_level, hit_chance, magic_max_hit,
    max_attack_roll, max_defence_roll, strength_max_hit,
};
use crate::snapshot::{MonsterSnapshot, PlayerSnapshot};

/// Error raised when the engine cannot compute a snapshot pair.
///
/// These are unexpected-input faults, not validation failures: a snapshot
/// that passed validation can still describe a combination the formula set
/// does not support. The engine stays usable after returning one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComputeError {
    #[error("magic style selected but snapshot carries no spell max hit")]
    MissingSpellDamage,

    #[error("special effect could not be applied")]
    Special(#[from] SpecialEffectError),
}

/// Full set of values computed for one (player, monster) snapshot pair.
///
/// A pure function of its inputs: no hidden state, no history dependence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputedValues {
    /// Probability that an attack lands (non-zero damage possible).
    pub accuracy: f64,
    /// Upper bound of damage dealt by a single attack, after specials.
    pub max_hit: u32,
    /// Per-attack damage distribution. Mass at zero includes both "miss"
    /// and "hit for zero"; the non-zero mass sums to `accuracy`.
    pub hit_distribution: HitDistribution,
    /// Expected damage of a single attack.
    pub expected_hit: f64,
    /// Expected damage per second.
    pub dps: f64,
    /// Estimated seconds to deplete the monster's hitpoints.
    pub ttk_seconds: f64,
}

/// Compute combat metrics for a snapshot pair.
///
/// Pipeline:
/// 1. Resolve the active attack configuration from the player snapshot.
/// 2. Accuracy from attack roll vs. defence roll (forced to zero when the
///    monster is immune to the active damage type).
/// 3. Base hit distribution: uniform over `[0, max_hit]`, reshaped by the
///    active special effect if any.
/// 4. Fold accuracy into the distribution and derive aggregates.
pub fn compute(
    player: &PlayerSnapshot,
    monster: &MonsterSnapshot,
) -> Result<ComputedValues, ComputeError> {
    let damage_type = player.style.damage_type;
    let stance = player.style.stance;

    let attack_roll = {
        let (level, boost, prayer) = match damage_type {
            DamageType::Ranged => (
                player.levels.ranged,
                player.boosts.ranged,
                player.prayers.ranged,
            ),
            DamageType::Magic => (
                player.levels.magic,
                player.boosts.magic,
                player.prayers.magic,
            ),
            _ => (
                player.levels.attack,
                player.boosts.attack,
                player.prayers.attack,
            ),
        };
        let effective = effective_level(level, boost, prayer, stance.attack_bonus());
        max_attack_roll(effective, player.equipment.offensive.for_type(damage_type))
    };

    let defence_roll = max_defence_roll(
        monster.defence_level_against(damage_type),
        monster.defensive.for_type(damage_type),
    );

    let accuracy = if monster.attributes.is_immune_to(damage_type) {
        0.0
    } else {
        hit_chance(attack_roll, defence_roll)
    };

    let base_max_hit = match damage_type {
        DamageType::Ranged => {
            let effective = effective_level(
                player.levels.ranged,
                player.boosts.ranged,
                player.prayers.ranged,
                stance.strength_bonus(),
            );
            strength_max_hit(effective, player.equipment.strength.ranged)
        }
        DamageType::Magic => {
            let spell = player.spell_max_hit.ok_or(ComputeError::MissingSpellDamage)?;
            magic_max_hit(spell, player.equipment.strength.magic_percent)
        }
        _ => {
            let effective = effective_level(
                player.levels.strength,
                player.boosts.strength,
                player.prayers.strength,
                stance.strength_bonus(),
            );
            strength_max_hit(effective, player.equipment.strength.melee)
        }
    };

    let mut hit_dist = HitDistribution::uniform(base_max_hit);
    if let Some(special) = player.special {
        hit_dist = special.apply(hit_dist)?;
    }

    let max_hit = hit_dist.max_damage();
    let hit_distribution = hit_dist.into_outcome(accuracy);

    let expected_hit = hit_distribution.expected();
    let dps = expected_hit / player.attack_interval_seconds();
    let ttk_seconds = if dps > 0.0 {
        monster.hitpoints as f64 / dps
    } else {
        f64::INFINITY
    };

    Ok(ComputedValues {
        accuracy,
        max_hit,
        hit_distribution,
        expected_hit,
        dps,
        ttk_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{AttackStance, CombatStyle, SpecialEffect};
    use crate::snapshot::{MonsterAttributes, MonsterForm, PlayerForm};
    use crate::stats::SkillLevels;

    const EPSILON: f64 = 1e-9;

    fn player() -> PlayerSnapshot {
        let mut form = PlayerForm {
            levels: SkillLevels::uniform(99),
            attack_interval_ticks: 4,
            ..Default::default()
        };
        form.equipment.offensive.slash = 67;
        form.equipment.strength.melee = 72;
        form.style = CombatStyle::new(DamageType::Slash, AttackStance::Aggressive);
        form.validate().unwrap()
    }

    fn monster() -> MonsterSnapshot {
        MonsterForm {
            name: "greater fiend".into(),
            hitpoints: 150,
            defence: 100,
            magic: 80,
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn compute_is_deterministic() {
        let (p, m) = (player(), monster());
        let first = compute(&p, &m).unwrap();
        let second = compute(&p, &m).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn distribution_is_normalized() {
        let result = compute(&player(), &monster()).unwrap();
        assert!((result.hit_distribution.sum() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn accuracy_never_rises_with_defence() {
        let p = player();
        let mut prev = f64::INFINITY;
        for defence in (0..2_000).step_by(50) {
            let m = MonsterForm {
                name: "scaling dummy".into(),
                hitpoints: 100,
                defence,
                ..Default::default()
            }
            .validate()
            .unwrap();
            let result = compute(&p, &m).unwrap();
            assert!(result.accuracy <= prev);
            prev = result.accuracy;
        }
    }

    #[test]
    fn immunity_forces_zero_accuracy() {
        let p = player();
        let mut form = MonsterForm {
            name: "wraith".into(),
            hitpoints: 100,
            ..Default::default()
        };
        form.attributes = MonsterAttributes::IMMUNE_TO_MELEE;
        let result = compute(&p, &form.validate().unwrap()).unwrap();

        assert_eq!(result.accuracy, 0.0);
        assert!((result.hit_distribution.at(0) - 1.0).abs() < EPSILON);
        assert_eq!(result.dps, 0.0);
        assert!(result.ttk_seconds.is_infinite());
    }

    #[test]
    fn expected_hit_and_dps_are_consistent() {
        let result = compute(&player(), &monster()).unwrap();
        // Interval is 4 ticks = 2.4 seconds.
        assert!((result.dps - result.expected_hit / 2.4).abs() < EPSILON);
        // Expected hit of a uniform distribution folded with accuracy.
        let expected = result.accuracy * result.max_hit as f64 / 2.0;
        assert!((result.expected_hit - expected).abs() < EPSILON);
    }

    #[test]
    fn special_effect_reshapes_distribution() {
        let plain = compute(&player(), &monster()).unwrap();

        let mut form = PlayerForm {
            levels: SkillLevels::uniform(99),
            attack_interval_ticks: 4,
            ..Default::default()
        };
        form.equipment.offensive.slash = 67;
        form.equipment.strength.melee = 72;
        form.style = CombatStyle::new(DamageType::Slash, AttackStance::Aggressive);
        form.special = Some(SpecialEffect::MultiHit(2));
        let doubled = compute(&form.validate().unwrap(), &monster()).unwrap();

        assert_eq!(doubled.max_hit, plain.max_hit * 2);
        assert!((doubled.hit_distribution.sum() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn magic_without_spell_is_an_engine_fault() {
        // Bypass form validation to exercise the engine's own guard.
        let mut p = player();
        p.style = CombatStyle::new(DamageType::Magic, AttackStance::Accurate);
        p.spell_max_hit = None;
        assert_eq!(
            compute(&p, &monster()),
            Err(ComputeError::MissingSpellDamage)
        );
    }
}
