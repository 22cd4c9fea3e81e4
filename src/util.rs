/// Computes the gamma function Γ(z) using the Lanczos approximation.
///
/// This uses the standard 9-term Lanczos coefficients (`g = 7`). For
/// `z < 0.5` the reflection formula is applied:
///
/// `Γ(z) = π / (sin(πz) * Γ(1 − z))`
///
/// The factorial builtin is defined through this function as
/// `x! = Γ(x + 1)`, which extends the factorial to non-integer arguments.
/// At the poles (zero and the negative integers) the reflection formula
/// divides by a vanishing sine and the result is an infinity or a huge
/// meaningless value, matching `f64` arithmetic elsewhere in the evaluator.
///
/// # Example
/// ```
/// use numex::util::gamma;
///
/// // Γ(5) = 4! = 24
/// let g = gamma(5.0);
/// assert!((g - 24.0).abs() < 1e-10);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn gamma(z: f64) -> f64 {
    // Lanczos coefficients, g = 7, n = 9.
    // These are standard values from Numerical Recipes.
    const COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                              676.520_368_121_885_1,
                              -1_259.139_216_722_402_8,
                              771.323_428_777_653_1,
                              -176.615_029_162_140_6,
                              12.507_343_278_686_905,
                              -0.138_571_095_265_720_12,
                              9.984_369_578_019_572e-6,
                              1.505_632_735_149_311_6e-7];
    const G: f64 = 7.0;

    if z < 0.5 {
        std::f64::consts::PI / ((std::f64::consts::PI * z).sin() * gamma(1.0 - z))
    } else {
        let z_minus_1 = z - 1.0;
        let mut x = COEFFS[0];

        for (i, &c) in COEFFS.iter().enumerate().skip(1) {
            x += c / (z_minus_1 + i as f64);
        }

        let t = z_minus_1 + G + 0.5;

        std::f64::consts::TAU.sqrt() * t.powf(z_minus_1 + 0.5) * (-t).exp() * x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamma_matches_integer_factorials() {
        for (n, expected) in [(1.0, 1.0), (2.0, 1.0), (5.0, 24.0), (8.0, 5040.0)] {
            let g = gamma(n);
            assert!((g - expected).abs() / expected < 1e-12,
                    "gamma({n}) = {g}, expected {expected}");
        }
    }

    #[test]
    fn gamma_of_one_half_is_sqrt_pi() {
        let g = gamma(0.5);
        assert!((g - std::f64::consts::PI.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn gamma_reflects_for_negative_arguments() {
        // Γ(-1/2) = -2√π
        let g = gamma(-0.5);
        assert!((g + 2.0 * std::f64::consts::PI.sqrt()).abs() < 1e-12);
        assert!(!gamma(0.0).is_finite());
    }
}
