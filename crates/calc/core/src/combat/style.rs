//! Attack style selection: damage type and stance.

/// Damage type of an attack.
///
/// Determines which offensive equipment bonus applies and which of the
/// defender's defensive bonuses oppose it. Stab, slash and crush are the
/// melee types; ranged and magic roll against their own stats.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    /// Piercing melee (spears, daggers)
    #[default]
    Stab,
    /// Cutting melee (swords, scimitars)
    Slash,
    /// Blunt melee (maces, hammers)
    Crush,
    /// Projectiles (bows, thrown weapons)
    Ranged,
    /// Spells and powered staves
    Magic,
}

impl DamageType {
    /// Returns true for the three melee damage types.
    pub const fn is_melee(&self) -> bool {
        matches!(self, Self::Stab | Self::Slash | Self::Crush)
    }
}

/// Attack stance selected on the weapon's style tab.
///
/// Stances grant invisible effective-level bonuses and, for rapid ranged
/// styles, shorten the attack interval by one tick.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackStance {
    /// +3 effective attack (or ranged/magic accuracy)
    #[default]
    Accurate,
    /// +3 effective strength
    Aggressive,
    /// +1 effective attack, strength, and defence
    Controlled,
    /// +3 effective defence
    Defensive,
    /// No accuracy bonus, attack interval shortened by one tick
    Rapid,
    /// +3 effective defence at extended range
    Longrange,
}

impl AttackStance {
    /// Invisible bonus added to the effective attack (accuracy) level.
    pub const fn attack_bonus(&self) -> u32 {
        match self {
            Self::Accurate => 3,
            Self::Controlled => 1,
            Self::Aggressive | Self::Defensive | Self::Rapid | Self::Longrange => 0,
        }
    }

    /// Invisible bonus added to the effective strength (damage) level.
    pub const fn strength_bonus(&self) -> u32 {
        match self {
            Self::Aggressive => 3,
            Self::Controlled => 1,
            Self::Accurate | Self::Defensive | Self::Rapid | Self::Longrange => 0,
        }
    }

    /// Tick adjustment to the weapon's base attack interval.
    pub const fn interval_adjustment(&self) -> i32 {
        match self {
            Self::Rapid => -1,
            _ => 0,
        }
    }
}

/// The active attack configuration resolved from the player's selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStyle {
    pub damage_type: DamageType,
    pub stance: AttackStance,
}

impl CombatStyle {
    pub const fn new(damage_type: DamageType, stance: AttackStance) -> Self {
        Self {
            damage_type,
            stance,
        }
    }
}
