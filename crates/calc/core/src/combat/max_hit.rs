//! Maximum hit calculations.

/// Calculate the maximum hit from an effective strength level.
///
/// # Formula
///
/// ```text
/// max_hit = floor((effective_strength * (strength_bonus + 64) + 320) / 640)
/// ```
///
/// Used for both melee (melee strength bonus) and ranged (ranged strength
/// bonus) attacks.
///
/// # Arguments
///
/// * `effective_strength` - Effective strength or ranged level
/// * `strength_bonus` - Equipment strength bonus (may be negative)
pub fn strength_max_hit(effective_strength: u32, strength_bonus: i32) -> u32 {
    let roll = effective_strength as i64 * (strength_bonus as i64 + 64) + 320;
    (roll / 640).max(0) as u32
}

/// Calculate the maximum hit of a spell.
///
/// # Formula
///
/// ```text
/// max_hit = floor(spell_max_hit * (100 + magic_damage_percent) / 100)
/// ```
///
/// # Arguments
///
/// * `spell_max_hit` - The spell's unmodified max hit
/// * `magic_damage_percent` - Equipment magic damage bonus (15 = +15%)
pub fn magic_max_hit(spell_max_hit: u32, magic_damage_percent: i32) -> u32 {
    let scaled = spell_max_hit as i64 * (100 + magic_damage_percent as i64) / 100;
    scaled.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_melee_max_hits() {
        // Effective strength 118, bonus 85: (118 × 149 + 320) / 640 = 27.97 → 27
        assert_eq!(strength_max_hit(118, 85), 27);
        // Zero bonus baseline: (10 × 64 + 320) / 640 = 1.5 → 1
        assert_eq!(strength_max_hit(10, 0), 1);
    }

    #[test]
    fn negative_strength_bonus_floors_at_zero() {
        assert_eq!(strength_max_hit(1, -70), 0);
    }

    #[test]
    fn magic_damage_scaling() {
        assert_eq!(magic_max_hit(24, 0), 24);
        // 24 × 1.15 = 27.6 → 27
        assert_eq!(magic_max_hit(24, 15), 27);
    }
}
