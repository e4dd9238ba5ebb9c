//! Regula Falsi (false position) refinement of a bracketed root.

use tracing::{trace, warn};

use crate::bracket::{Bracket, checked_eval};
use crate::config::{SolverConfig, Variant};
use crate::criterion::ShearCriterion;
use crate::error::{SolverError, SolverResult};

/// Outcome of a false-position run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegulaFalsiResult {
    /// Best root estimate (meters)
    pub root: f64,
    /// Criterion value at the estimate
    pub residual: f64,
    /// Number of iterations performed
    pub iterations: usize,
    /// False if the iteration budget ran out before a tolerance was met
    pub converged: bool,
}

/// Which bracket endpoint was replaced by the latest estimate.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Replaced {
    Low,
    High,
}

/// Refines a bracketed root of the criterion with false-position steps.
///
/// Each iteration interpolates the secant through the bracket endpoints,
///
/// ```text
/// x = (a f(b) - b f(a)) / (f(b) - f(a))
/// ```
///
/// stops if `|f(x)|` is within `residual_tol` or the bracket width is within
/// the x tolerances, and otherwise replaces the endpoint whose criterion
/// value shares the sign of `f(x)`. Running out of `max_iterations` is not an
/// error: the last estimate is returned flagged as unconverged so callers can
/// tell it apart from a verified root.
///
/// # Errors
///
/// Returns `DegenerateBracket` if the endpoint values do not straddle zero or
/// become numerically indistinguishable (the secant denominator vanishes),
/// and `NonFiniteResidual` if the criterion overflows at an evaluation point.
pub fn refine(
    criterion: &ShearCriterion,
    bracket: &Bracket,
    config: &SolverConfig,
) -> SolverResult<RegulaFalsiResult> {
    let mut a = bracket.low();
    let mut b = bracket.high();
    let mut f_a = checked_eval(criterion, a)?;
    let mut f_b = checked_eval(criterion, b)?;

    // An endpoint may already satisfy the residual tolerance.
    if f_a.abs() <= config.residual_tol {
        return Ok(RegulaFalsiResult {
            root: a,
            residual: f_a,
            iterations: 0,
            converged: true,
        });
    }
    if f_b.abs() <= config.residual_tol {
        return Ok(RegulaFalsiResult {
            root: b,
            residual: f_b,
            iterations: 0,
            converged: true,
        });
    }

    if f_a.signum() == f_b.signum() {
        return Err(SolverError::DegenerateBracket {
            low: a,
            high: b,
            low_residual: f_a,
            high_residual: f_b,
        });
    }

    let mut last_replaced: Option<Replaced> = None;
    let mut root = a;
    let mut residual = f_a;

    for iteration in 1..=config.max_iterations {
        let denominator = f_b - f_a;
        let scale = f_a.abs().max(f_b.abs()).max(1.0);
        if denominator.abs() <= f64::EPSILON * scale {
            return Err(SolverError::DegenerateBracket {
                low: a,
                high: b,
                low_residual: f_a,
                high_residual: f_b,
            });
        }

        root = (a * f_b - b * f_a) / denominator;
        residual = checked_eval(criterion, root)?;
        trace!(iteration, root, residual, a, b, "false position step");

        let width = (b - a).abs();
        if residual.abs() <= config.residual_tol
            || width <= config.x_abs_tol + config.x_rel_tol * root.abs()
        {
            return Ok(RegulaFalsiResult {
                root,
                residual,
                iterations: iteration,
                converged: true,
            });
        }

        if residual * f_a < 0.0 {
            // Root lies in [a, x]; the low endpoint is retained.
            b = root;
            f_b = residual;
            if config.variant == Variant::Illinois && last_replaced == Some(Replaced::High) {
                f_a *= 0.5;
            }
            last_replaced = Some(Replaced::High);
        } else {
            // Root lies in [x, b]; the high endpoint is retained.
            a = root;
            f_a = residual;
            if config.variant == Variant::Illinois && last_replaced == Some(Replaced::Low) {
                f_b *= 0.5;
            }
            last_replaced = Some(Replaced::Low);
        }
    }

    warn!(
        iterations = config.max_iterations,
        root, residual, "iteration budget exhausted before convergence"
    );
    Ok(RegulaFalsiResult {
        root,
        residual,
        iterations: config.max_iterations,
        converged: false,
    })
}
