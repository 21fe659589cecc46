//! Special attack effects that reshape the hit distribution.

use thiserror::Error;

use super::distribution::HitDistribution;

/// Error raised when a special effect cannot be applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialEffectError {
    #[error("multi-hit special requires at least one sub-hit")]
    EmptyMultiHit,

    #[error("damage multiplier denominator must be non-zero")]
    ZeroDenominator,
}

/// A special effect active on the player's attack.
///
/// Effects compose by transforming the hit-conditional base distribution:
/// shifting mass (minimum hits), re-binning (multipliers), or convolving
/// sub-hit distributions (multi-hit weapons).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialEffect {
    /// Successful hits always deal at least this much damage.
    MinimumHit(u32),

    /// Damage is multiplied by `numer / denom`, floored per outcome.
    DamageMultiplier { numer: u32, denom: u32 },

    /// The attack lands as `hits` independent sub-hits, each rolling the
    /// base distribution; the final damage is their sum.
    MultiHit(u32),
}

impl SpecialEffect {
    /// Apply this effect to a hit-conditional base distribution.
    pub fn apply(&self, base: HitDistribution) -> Result<HitDistribution, SpecialEffectError> {
        match *self {
            SpecialEffect::MinimumHit(min) => Ok(base.with_minimum(min)),
            SpecialEffect::DamageMultiplier { numer, denom } => {
                if denom == 0 {
                    return Err(SpecialEffectError::ZeroDenominator);
                }
                Ok(base.scale_damage(numer, denom))
            }
            SpecialEffect::MultiHit(hits) => {
                if hits == 0 {
                    return Err(SpecialEffectError::EmptyMultiHit);
                }
                let mut combined = base.clone();
                for _ in 1..hits {
                    combined = combined.convolve(&base);
                }
                Ok(combined)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn effects_preserve_normalization() {
        let base = HitDistribution::uniform(15);
        let effects = [
            SpecialEffect::MinimumHit(5),
            SpecialEffect::DamageMultiplier { numer: 3, denom: 2 },
            SpecialEffect::MultiHit(3),
        ];
        for effect in effects {
            let dist = effect.apply(base.clone()).unwrap();
            assert!((dist.sum() - 1.0).abs() < EPSILON, "{effect:?} denormalized");
        }
    }

    #[test]
    fn multi_hit_scales_expectation() {
        let base = HitDistribution::uniform(10);
        let triple = SpecialEffect::MultiHit(3).apply(base.clone()).unwrap();
        assert!((triple.expected() - 3.0 * base.expected()).abs() < EPSILON);
        assert_eq!(triple.max_damage(), 30);
    }

    #[test]
    fn invalid_effects_are_rejected() {
        let base = HitDistribution::uniform(10);
        assert_eq!(
            SpecialEffect::MultiHit(0).apply(base.clone()),
            Err(SpecialEffectError::EmptyMultiHit)
        );
        assert_eq!(
            SpecialEffect::DamageMultiplier { numer: 1, denom: 0 }.apply(base),
            Err(SpecialEffectError::ZeroDenominator)
        );
    }
}
