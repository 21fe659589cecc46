//! Effective levels and attack/defence roll calculations.
//!
//! All math is integer with explicit flooring so results are bit-for-bit
//! reproducible across platforms.

use crate::stats::{PrayerMultipliers, SkillBoosts};

/// Calculate an effective combat level.
///
/// # Formula
///
/// ```text
/// effective = floor((base + boost) * prayer%) + stance_bonus + 8
/// ```
///
/// # Arguments
///
/// * `base` - Unboosted skill level
/// * `boost` - Temporary level delta (clamped at zero)
/// * `prayer_percent` - Prayer multiplier (100 = none)
/// * `stance_bonus` - Invisible stance bonus (0..=3)
///
/// # Returns
///
/// Effective level used as input to the roll calculations.
pub fn effective_level(base: u32, boost: i32, prayer_percent: u32, stance_bonus: u32) -> u32 {
    let boosted = SkillBoosts::apply(base, boost);
    PrayerMultipliers::scale(boosted, prayer_percent) + stance_bonus + 8
}

/// Calculate the maximum attack roll.
///
/// # Formula
///
/// ```text
/// max_attack_roll = effective_level * (equipment_bonus + 64)
/// ```
///
/// Equipment bonuses can be negative; the roll is clamped at zero.
pub fn max_attack_roll(effective_level: u32, equipment_bonus: i32) -> u32 {
    (effective_level as i64 * (equipment_bonus as i64 + 64)).max(0) as u32
}

/// Calculate a defender's maximum defence roll.
///
/// # Formula
///
/// ```text
/// max_defence_roll = (defence_level + 9) * (style_defence_bonus + 64)
/// ```
///
/// Monsters use their magic level in place of defence for the magic
/// defence roll; the caller picks the right level.
pub fn max_defence_roll(defence_level: u32, style_defence_bonus: i32) -> u32 {
    ((defence_level as i64 + 9) * (style_defence_bonus as i64 + 64)).max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_level_orders_operations() {
        // (99 + 19) × 1.20 = 141.6 → 141, + 3 stance + 8 = 152
        assert_eq!(effective_level(99, 19, 120, 3), 152);
        // No modifiers: 70 + 0 + 8 = 78
        assert_eq!(effective_level(70, 0, 100, 0), 78);
    }

    #[test]
    fn rolls_clamp_negative_bonuses() {
        // A -70 bonus would produce a negative roll; clamp to zero.
        assert_eq!(max_attack_roll(10, -70), 0);
        assert_eq!(max_defence_roll(1, -80), 0);
    }

    #[test]
    fn defence_roll_baseline() {
        // (100 + 9) × (20 + 64) = 109 × 84 = 9156
        assert_eq!(max_defence_roll(100, 20), 9156);
    }
}
