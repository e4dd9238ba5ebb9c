//! Physical parameters for a single shaft sizing solve.

use crate::error::CoreResult;
use crate::numeric::ensure_positive;
use crate::units::{Force, Ratio, Stress, Torque, newton_meters, newtons, pa, unitless};

/// Combined loading on a solid circular shaft.
///
/// Immutable once constructed; `new` is the only way in and it enforces
/// that all four parameters are finite and strictly positive, so every
/// `ShaftLoading` handed to the solver is already a valid problem.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShaftLoading {
    pull: Force,
    moment: Torque,
    factor_of_safety: Ratio,
    yield_strength: Stress,
}

impl ShaftLoading {
    /// Creates a validated loading case.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NonPositive` or `CoreError::NonFinite` if any
    /// parameter is not a strictly positive finite value.
    pub fn new(
        pull: Force,
        moment: Torque,
        factor_of_safety: Ratio,
        yield_strength: Stress,
    ) -> CoreResult<Self> {
        use uom::si::force::newton;
        use uom::si::pressure::pascal;
        use uom::si::ratio::ratio;
        use uom::si::torque::newton_meter;

        ensure_positive(pull.get::<newton>(), "axial pull")?;
        ensure_positive(moment.get::<newton_meter>(), "twisting moment")?;
        ensure_positive(factor_of_safety.get::<ratio>(), "factor of safety")?;
        ensure_positive(yield_strength.get::<pascal>(), "yield strength")?;

        Ok(Self {
            pull,
            moment,
            factor_of_safety,
            yield_strength,
        })
    }

    /// Convenience constructor from raw SI values (N, N·m, -, Pa).
    pub fn from_si(
        pull_n: f64,
        moment_nm: f64,
        factor_of_safety: f64,
        yield_strength_pa: f64,
    ) -> CoreResult<Self> {
        Self::new(
            newtons(pull_n),
            newton_meters(moment_nm),
            unitless(factor_of_safety),
            pa(yield_strength_pa),
        )
    }

    pub fn pull(&self) -> Force {
        self.pull
    }

    pub fn moment(&self) -> Torque {
        self.moment
    }

    pub fn factor_of_safety(&self) -> Ratio {
        self.factor_of_safety
    }

    pub fn yield_strength(&self) -> Stress {
        self.yield_strength
    }

    /// Axial pull in newtons, for the numeric kernel.
    pub fn pull_n(&self) -> f64 {
        use uom::si::force::newton;
        self.pull.get::<newton>()
    }

    /// Twisting moment in newton-meters, for the numeric kernel.
    pub fn moment_nm(&self) -> f64 {
        use uom::si::torque::newton_meter;
        self.moment.get::<newton_meter>()
    }

    /// Dimensionless factor of safety, for the numeric kernel.
    pub fn fos(&self) -> f64 {
        use uom::si::ratio::ratio;
        self.factor_of_safety.get::<ratio>()
    }

    /// Yield strength in pascals, for the numeric kernel.
    pub fn yield_pa(&self) -> f64 {
        use uom::si::pressure::pascal;
        self.yield_strength.get::<pascal>()
    }
}
