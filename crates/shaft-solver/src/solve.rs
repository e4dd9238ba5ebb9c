//! High-level solve interface.

use shaft_core::ShaftLoading;
use shaft_core::units::{Length, m};
use tracing::debug;

use crate::bracket::Bracket;
use crate::config::SolverConfig;
use crate::criterion::ShearCriterion;
use crate::error::{SolverError, SolverResult};
use crate::regula_falsi::refine;

/// Result of a diameter solve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiameterSolution {
    /// Computed shaft diameter (m)
    pub diameter_m: f64,
    /// Initial bracket the iteration started from (m)
    pub bracket: [f64; 2],
    /// Criterion value at the reported diameter
    pub residual: f64,
    /// Number of false-position iterations
    pub iterations: usize,
    /// False if the iteration budget ran out; the diameter is then the last
    /// estimate, not a verified root
    pub converged: bool,
}

impl DiameterSolution {
    /// The computed diameter as a typed length.
    pub fn diameter(&self) -> Length {
        m(self.diameter_m)
    }
}

/// Solves for the minimum safe diameter of a solid circular shaft under the
/// given combined loading.
///
/// This function:
/// 1. Validates the solver configuration (the loading is validated at
///    construction)
/// 2. Builds the shear-stress failure criterion for the loading
/// 3. Scans whole-meter diameters for a sign-change bracket
/// 4. Refines the root with Regula Falsi until a tolerance is met or the
///    iteration budget runs out
///
/// Each solve is independent and deterministic; identical inputs produce
/// identical solutions.
///
/// # Arguments
/// * `loading` - The validated loading case
/// * `config` - Optional solver configuration (defaults are sensible)
///
/// # Errors
///
/// Returns `InvalidConfig`, `BracketNotFound`, `DegenerateBracket`, or
/// `NonFiniteResidual`; an exhausted iteration budget is not an error and is
/// reported through [`DiameterSolution::converged`] instead.
pub fn solve_diameter(
    loading: &ShaftLoading,
    config: Option<SolverConfig>,
) -> SolverResult<DiameterSolution> {
    let cfg = config.unwrap_or_default();
    cfg.validate()
        .map_err(|reason| SolverError::InvalidConfig { reason })?;

    let criterion = ShearCriterion::new(loading);
    let bracket = Bracket::scan(&criterion, cfg.search_limit)?;
    debug!(
        low = bracket.low(),
        high = bracket.high(),
        "starting false-position refinement"
    );

    let result = refine(&criterion, &bracket, &cfg)?;

    Ok(DiameterSolution {
        diameter_m: result.root,
        bracket: bracket.as_array(),
        residual: result.residual,
        iterations: result.iterations,
        converged: result.converged,
    })
}
