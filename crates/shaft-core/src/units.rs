// shaft-core/src/units.rs

use uom::si::f64::{
    Force as UomForce, Length as UomLength, Pressure as UomPressure, Ratio as UomRatio,
    Torque as UomTorque,
};

// Public canonical unit types (SI, f64)
pub type Force = UomForce;
pub type Length = UomLength;
pub type Ratio = UomRatio;
pub type Stress = UomPressure;
pub type Torque = UomTorque;

#[inline]
pub fn newtons(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

#[inline]
pub fn newton_meters(v: f64) -> Torque {
    use uom::si::torque::newton_meter;
    Torque::new::<newton_meter>(v)
}

#[inline]
pub fn pa(v: f64) -> Stress {
    use uom::si::pressure::pascal;
    Stress::new::<pascal>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}
