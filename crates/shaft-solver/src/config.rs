//! Solver configuration.

/// Which false-position update to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Textbook Regula Falsi: interpolate, then replace the endpoint on the
    /// same side as the new estimate. Can stall when one endpoint's criterion
    /// value dwarfs the other's, as it keeps interpolating against the stale
    /// endpoint; with the integer bracket scan that is the common case, since
    /// the high endpoint sits at a whole meter while roots are centimeters.
    Pure,
    /// Illinois modification: same update, but when an endpoint survives two
    /// iterations in a row its stored criterion value is halved, which breaks
    /// the one-sided stall and restores fast convergence.
    #[default]
    Illinois,
}

/// Regula Falsi solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Maximum false-position iterations
    pub max_iterations: usize,
    /// Upper end of the bracket scan, in whole meters
    pub search_limit: usize,
    /// Absolute tolerance on the criterion value at the estimate
    pub residual_tol: f64,
    /// Absolute tolerance on bracket width
    pub x_abs_tol: f64,
    /// Relative tolerance on bracket width
    pub x_rel_tol: f64,
    /// False-position update rule
    pub variant: Variant,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1_000_000,
            search_limit: 100,
            residual_tol: 1e-6,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-9,
            variant: Variant::default(),
        }
    }
}

impl SolverConfig {
    /// Validates limits and tolerances.
    ///
    /// # Errors
    ///
    /// Returns a reason string if a limit is zero or a tolerance is negative
    /// or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1");
        }
        if self.search_limit == 0 {
            return Err("search_limit must be at least 1");
        }
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err("residual_tol must be finite and non-negative");
        }
        if !self.x_abs_tol.is_finite() || self.x_abs_tol < 0.0 {
            return Err("x_abs_tol must be finite and non-negative");
        }
        if !self.x_rel_tol.is_finite() || self.x_rel_tol < 0.0 {
            return Err("x_rel_tol must be finite and non-negative");
        }
        Ok(())
    }
}
