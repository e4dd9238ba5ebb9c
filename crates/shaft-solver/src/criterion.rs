//! Maximum Shear Stress Theory design criterion for a solid circular shaft.

use std::f64::consts::PI;

use shaft_core::ShaftLoading;

/// The governing equation in the unknown diameter `d` (meters).
///
/// Equating the allowable design shear stress (yield strength over factor of
/// safety) to the combined shear stress from the twisting moment and the
/// axial pull, then clearing denominators, gives
///
/// ```text
/// f(d) = (sigma_yt^2 / (4 FOS^2)) d^6 - (4 P^2 / pi^2) d^2 - 256 T^2 / pi^2
/// ```
///
/// The design diameter is the positive root of `f`. The three coefficients
/// are fixed per loading case, so they are precomputed once; `evaluate` is
/// pure and total over `d >= 0` (for positive loads `f(0) < 0` and `f` grows
/// without bound, so exactly one positive root exists).
#[derive(Clone, Copy, Debug)]
pub struct ShearCriterion {
    /// Coefficient of d^6: sigma_yt^2 / (4 FOS^2)
    sixth: f64,
    /// Coefficient of d^2: 4 P^2 / pi^2
    quad: f64,
    /// Constant term: 256 T^2 / pi^2
    constant: f64,
}

impl ShearCriterion {
    pub fn new(loading: &ShaftLoading) -> Self {
        Self::from_si(
            loading.pull_n(),
            loading.moment_nm(),
            loading.fos(),
            loading.yield_pa(),
        )
    }

    /// Builds the criterion from raw SI values without positivity checks.
    ///
    /// The evaluator itself is total, so degenerate inputs (e.g. zero loads)
    /// are allowed here; they simply produce a criterion with no sign change,
    /// which the bracket scan reports as such.
    pub fn from_si(pull_n: f64, moment_nm: f64, fos: f64, yield_pa: f64) -> Self {
        let pi_sq = PI * PI;
        Self {
            sixth: (yield_pa * yield_pa) / (4.0 * fos * fos),
            quad: 4.0 * pull_n * pull_n / pi_sq,
            constant: 256.0 * moment_nm * moment_nm / pi_sq,
        }
    }

    /// Evaluates the criterion at diameter `d` (meters).
    #[inline]
    pub fn evaluate(&self, d: f64) -> f64 {
        let d2 = d * d;
        self.sixth * d2 * d2 * d2 - self.quad * d2 - self.constant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concrete_case() -> ShearCriterion {
        // P = 10 kN, T = 2 kN·m, FOS = 2, sigma_yt = 250 MPa
        ShearCriterion::from_si(10_000.0, 2_000.0, 2.0, 2.5e8)
    }

    #[test]
    fn value_at_zero_is_minus_constant_term() {
        let criterion = concrete_case();
        let expected = -256.0 * 2_000.0_f64.powi(2) / (PI * PI);
        assert_eq!(criterion.evaluate(0.0), expected);
        assert!(criterion.evaluate(0.0) < 0.0);
    }

    #[test]
    fn sign_change_between_zero_and_one_meter() {
        let criterion = concrete_case();
        assert!(criterion.evaluate(0.0) < 0.0);
        assert!(criterion.evaluate(1.0) > 0.0);
    }

    #[test]
    fn zero_loads_never_go_negative() {
        let criterion = ShearCriterion::from_si(0.0, 0.0, 2.0, 2.5e8);
        assert_eq!(criterion.evaluate(0.0), 0.0);
        for k in 1..=100 {
            assert!(criterion.evaluate(f64::from(k)) > 0.0);
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let criterion = concrete_case();
        assert_eq!(criterion.evaluate(0.3), criterion.evaluate(0.3));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Once the criterion turns positive on the integer scan grid it
            // stays positive: there is a single positive root, so the first
            // sign change found by the scan is the only one.
            #[test]
            fn single_sign_change_on_scan_grid(
                p in 1.0_f64..1e6_f64,
                t in 1.0_f64..1e5_f64,
                fos in 1.0_f64..10.0_f64,
                sigma in 1e6_f64..1e9_f64,
            ) {
                let criterion = ShearCriterion::from_si(p, t, fos, sigma);
                let mut seen_positive = false;
                for k in 0..=100 {
                    let value = criterion.evaluate(f64::from(k));
                    if seen_positive {
                        prop_assert!(value > 0.0);
                    } else if value > 0.0 {
                        seen_positive = true;
                    }
                }
            }
        }
    }
}
