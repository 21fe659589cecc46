//! Immutable snapshots of editable player/monster state.
//!
//! The editing surface mutates [`PlayerForm`] and [`MonsterForm`] freely;
//! when a recomputation is wanted, `validate()` checks the form and produces
//! a fully-owned snapshot with no aliasing back into the mutable source.
//! Snapshots are never mutated in place: a fresh snapshot replaces the old
//! one on every recompute, so the engine can never observe state changing
//! mid-computation.

pub mod monster;
pub mod player;

use thiserror::Error;

pub use monster::{MonsterAttributes, MonsterForm, MonsterSnapshot};
pub use player::{PlayerForm, PlayerSnapshot};

/// Error produced when a form fails snapshot validation.
///
/// Validation errors are surfaced to the editing surface; no computation is
/// attempted and previously computed values stay untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("{field} = {value} outside valid range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ValidationError {
    /// Check that `value` lies in `min..=max`, reporting `field` otherwise.
    pub(crate) fn check_range(
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    ) -> Result<(), ValidationError> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min,
                max,
            })
        }
    }
}
