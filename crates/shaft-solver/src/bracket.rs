//! Sign-change bracket for the diameter root.

use tracing::debug;

use crate::criterion::ShearCriterion;
use crate::error::{SolverError, SolverResult};

/// An interval `[low, high]` whose endpoints straddle the root.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bracket {
    low: f64,
    high: f64,
}

impl Bracket {
    /// Creates a bracket from explicit endpoints, normalized to `low < high`.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is non-finite or the endpoints are
    /// equal. Sign agreement of the criterion at the endpoints is checked
    /// later, by the iteration phase.
    pub fn new(a: f64, b: f64) -> SolverResult<Self> {
        if !a.is_finite() {
            return Err(SolverError::NonFiniteBracket { value: a });
        }
        if !b.is_finite() {
            return Err(SolverError::NonFiniteBracket { value: b });
        }
        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(SolverError::ZeroWidthBracket { value: a });
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { low, high })
    }

    /// Scans for the first whole-meter diameter at which the criterion has
    /// crossed zero.
    ///
    /// `low` is fixed at 0, where the criterion is nonpositive for any
    /// physical loading; `high` walks 1, 2, ... up to `search_limit` meters
    /// and the scan stops at the first endpoint pair with opposite-signed
    /// criterion values. Diameters are meters, so for sensible loads the
    /// first step already brackets the root.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::BracketNotFound` if no sign change shows up
    /// within `search_limit` steps, rather than handing back an interval
    /// that does not actually contain a root.
    pub fn scan(criterion: &ShearCriterion, search_limit: usize) -> SolverResult<Self> {
        let low = 0.0;
        let f_low = checked_eval(criterion, low)?;

        let mut f_high = f_low;
        for step in 1..=search_limit {
            let high = step as f64;
            f_high = checked_eval(criterion, high)?;
            if f_low * f_high < 0.0 {
                debug!(low, high, f_low, f_high, "bracket found");
                return Ok(Self { low, high });
            }
        }

        Err(SolverError::BracketNotFound {
            search_limit,
            last_residual: f_high,
        })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }
}

/// Evaluates the criterion and rejects non-finite values.
pub(crate) fn checked_eval(criterion: &ShearCriterion, d: f64) -> SolverResult<f64> {
    let residual = criterion.evaluate(d);
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(SolverError::NonFiniteResidual { d, residual })
    }
}
