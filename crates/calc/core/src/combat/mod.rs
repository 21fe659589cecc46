//! Combat formula primitives.
//!
//! This module provides pure functions for the individual pieces of the
//! calculation pipeline. All combat logic is deterministic and side-effect
//! free.
//!
//! # Architecture
//!
//! - **Pure Functions**: rolls, accuracy, and max-hit calculations take
//!   plain integers and return plain values
//! - **Used by the Engine**: [`crate::engine::compute`] assembles these
//!   pieces into the full pipeline
//! - **Distribution-based**: per-attack outcomes are modeled as discrete
//!   probability distributions, not sampled rolls

pub mod accuracy;
pub mod distribution;
pub mod max_hit;
pub mod rolls;
pub mod specials;
pub mod style;

pub use accuracy::hit_chance;
pub use distribution::HitDistribution;
pub use max_hit::{magic_max_hit, strength_max_hit};
pub use rolls::{effective_level, max_attack_roll, max_defence_roll};
pub use specials::{SpecialEffect, SpecialEffectError};
pub use style::{AttackStance, CombatStyle, DamageType};
