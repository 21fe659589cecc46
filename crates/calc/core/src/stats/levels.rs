//! Skill levels, temporary boosts, and prayer multipliers.

/// Base combat skill levels.
///
/// Levels are stored unboosted; temporary modifiers live in
/// [`SkillBoosts`] so the two can be edited independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillLevels {
    pub attack: u32,
    pub strength: u32,
    pub defence: u32,
    pub ranged: u32,
    pub magic: u32,
    pub hitpoints: u32,
}

impl SkillLevels {
    /// All combat skills at the given level.
    pub const fn uniform(level: u32) -> Self {
        Self {
            attack: level,
            strength: level,
            defence: level,
            ranged: level,
            magic: level,
            hitpoints: level,
        }
    }

    /// Maximum combat stats (level 99 across the board).
    pub const fn maxed() -> Self {
        Self::uniform(99)
    }
}

impl Default for SkillLevels {
    fn default() -> Self {
        Self::uniform(1)
    }
}

/// Temporary per-skill level deltas (potions, drains).
///
/// Boosts are signed: a +19 attack boost models an overload, a negative
/// value models a drain. Applying a boost never takes a level below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillBoosts {
    pub attack: i32,
    pub strength: i32,
    pub defence: i32,
    pub ranged: i32,
    pub magic: i32,
}

impl SkillBoosts {
    /// Apply a boost to a base level, clamping at zero.
    pub fn apply(base: u32, boost: i32) -> u32 {
        (base as i64 + boost as i64).max(0) as u32
    }
}

/// Prayer multipliers for effective-level calculation.
///
/// Stored as integer percentages (100 = no prayer, 115 = +15%). The
/// multiplier is applied to the boosted level before stance bonuses,
/// with the result floored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerMultipliers {
    pub attack: u32,
    pub strength: u32,
    pub defence: u32,
    pub ranged: u32,
    pub magic: u32,
}

impl PrayerMultipliers {
    /// No active prayers (all multipliers at 100%).
    pub const fn none() -> Self {
        Self {
            attack: 100,
            strength: 100,
            defence: 100,
            ranged: 100,
            magic: 100,
        }
    }

    /// Multiply a level by a percentage, flooring the result.
    pub fn scale(level: u32, percent: u32) -> u32 {
        (level as u64 * percent as u64 / 100) as u32
    }
}

impl Default for PrayerMultipliers {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boost_clamps_at_zero() {
        assert_eq!(SkillBoosts::apply(70, 5), 75);
        assert_eq!(SkillBoosts::apply(3, -10), 0);
    }

    #[test]
    fn prayer_scaling_floors() {
        // 99 × 1.15 = 113.85 → 113
        assert_eq!(PrayerMultipliers::scale(99, 115), 113);
        assert_eq!(PrayerMultipliers::scale(99, 100), 99);
    }
}
