//! Discrete hit-damage probability distributions.
//!
//! A [`HitDistribution`] is a dense probability mass function over damage
//! amounts `0..=max`. Distributions start out conditional on a successful
//! hit; [`HitDistribution::into_outcome`] folds the miss chance into the
//! zero bucket to produce the final per-attack distribution.

/// Probability mass function over discrete damage outcomes.
///
/// Index `k` of the backing vector holds `P(damage = k)`. The vector is
/// never empty: a degenerate distribution is a single 1.0 entry at zero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitDistribution {
    probs: Vec<f64>,
}

impl HitDistribution {
    /// Discrete uniform distribution over `[0, max_hit]`.
    ///
    /// This is the base shape of an unmodified successful attack: every
    /// damage amount from 0 through the max hit is equally likely.
    pub fn uniform(max_hit: u32) -> Self {
        let n = max_hit as usize + 1;
        Self {
            probs: vec![1.0 / n as f64; n],
        }
    }

    /// Degenerate distribution with all mass at zero damage.
    pub fn zero() -> Self {
        Self { probs: vec![1.0] }
    }

    /// Highest damage amount with an entry in the support.
    pub fn max_damage(&self) -> u32 {
        (self.probs.len() - 1) as u32
    }

    /// Total probability mass (1.0 up to floating-point error).
    pub fn sum(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Expected damage of a single draw.
    pub fn expected(&self) -> f64 {
        self.probs
            .iter()
            .enumerate()
            .map(|(damage, p)| damage as f64 * p)
            .sum()
    }

    /// Probability of dealing exactly `damage`.
    pub fn at(&self, damage: u32) -> f64 {
        self.probs.get(damage as usize).copied().unwrap_or(0.0)
    }

    /// Scale every damage amount by `numer / denom`, flooring results.
    ///
    /// Mass at damage `k` moves to `floor(k * numer / denom)`; buckets that
    /// collide are summed. Used by damage-multiplier special effects.
    /// `denom` must be non-zero; [`crate::combat::SpecialEffect`] rejects a
    /// zero denominator before calling this.
    pub fn scale_damage(&self, numer: u32, denom: u32) -> Self {
        let max = (self.max_damage() as u64 * numer as u64 / denom as u64) as usize;
        let mut probs = vec![0.0; max + 1];
        for (damage, p) in self.probs.iter().enumerate() {
            let scaled = (damage as u64 * numer as u64 / denom as u64) as usize;
            probs[scaled] += p;
        }
        Self { probs }
    }

    /// Move all mass below `min` onto `min` (guaranteed minimum hit).
    ///
    /// If `min` exceeds the current support, the support is extended so the
    /// minimum becomes the only outcome.
    pub fn with_minimum(&self, min: u32) -> Self {
        let min = min as usize;
        let len = self.probs.len().max(min + 1);
        let mut probs = vec![0.0; len];
        for (damage, p) in self.probs.iter().enumerate() {
            probs[damage.max(min)] += p;
        }
        Self { probs }
    }

    /// Distribution of the sum of two independent draws.
    ///
    /// Standard discrete convolution; used for multi-hit attacks where each
    /// sub-hit rolls its own damage.
    pub fn convolve(&self, other: &Self) -> Self {
        let mut probs = vec![0.0; self.probs.len() + other.probs.len() - 1];
        for (a, pa) in self.probs.iter().enumerate() {
            if *pa == 0.0 {
                continue;
            }
            for (b, pb) in other.probs.iter().enumerate() {
                probs[a + b] += pa * pb;
            }
        }
        Self { probs }
    }

    /// Fold the miss chance into the zero bucket.
    ///
    /// The hit-conditional mass is scaled by `accuracy` and the remaining
    /// `1 - accuracy` lands on zero damage, so zero ends up holding both
    /// "miss" and "hit for zero" while the non-zero mass sums to `accuracy`.
    pub fn into_outcome(self, accuracy: f64) -> Self {
        let mut probs: Vec<f64> = self.probs.iter().map(|p| p * accuracy).collect();
        probs[0] += 1.0 - accuracy;
        Self { probs }
    }

    /// Borrow the raw probabilities, indexed by damage amount.
    pub fn as_slice(&self) -> &[f64] {
        &self.probs
    }

    /// Consume into the raw probability vector.
    pub fn into_vec(self) -> Vec<f64> {
        self.probs
    }
}
