//! Hit chance calculation from opposing rolls.

/// Calculate the probability that an attack lands.
///
/// # Formula
///
/// ```text
/// if attack_roll > defence_roll:
///     accuracy = 1 - (defence_roll + 2) / (2 * (attack_roll + 1))
/// else:
///     accuracy = attack_roll / (2 * (defence_roll + 1))
/// ```
///
/// The result is monotonically increasing in `attack_roll` and
/// monotonically decreasing in `defence_roll`, and always lies in `[0, 1)`.
///
/// # Arguments
///
/// * `attack_roll` - Attacker's maximum attack roll
/// * `defence_roll` - Defender's maximum defence roll
pub fn hit_chance(attack_roll: u32, defence_roll: u32) -> f64 {
    let atk = attack_roll as f64;
    let def = defence_roll as f64;

    if attack_roll > defence_roll {
        1.0 - (def + 2.0) / (2.0 * (atk + 1.0))
    } else {
        atk / (2.0 * (def + 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_rolls_near_half() {
        let a = hit_chance(10_000, 10_000);
        assert!(a < 0.5);
        assert!(a > 0.49);
    }

    #[test]
    fn zero_attack_roll_never_hits() {
        assert_eq!(hit_chance(0, 5_000), 0.0);
    }

    #[test]
    fn monotonic_in_defence() {
        let mut prev = hit_chance(12_000, 0);
        for def in (500..30_000).step_by(500) {
            let a = hit_chance(12_000, def);
            assert!(a <= prev, "accuracy rose when defence increased to {def}");
            prev = a;
        }
    }

    #[test]
    fn monotonic_in_attack() {
        let mut prev = hit_chance(0, 12_000);
        for atk in (500..30_000).step_by(500) {
            let a = hit_chance(atk, 12_000);
            assert!(a >= prev, "accuracy fell when attack increased to {atk}");
            prev = a;
        }
    }

    #[test]
    fn bounded_to_unit_interval() {
        for (atk, def) in [(0, 0), (1, 100_000), (100_000, 1), (64, 64)] {
            let a = hit_chance(atk, def);
            assert!((0.0..1.0).contains(&a), "accuracy {a} out of range");
        }
    }
}
