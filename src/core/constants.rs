//! Physical constants shared by the derivation and the integrator (SI units).

use std::f64::consts::PI;

/// Speed of light in vacuum (m/s).
pub const C: f64 = 299_792_458.0;

/// Elementary charge (C), at the precision the readouts are calibrated to.
pub const ELEMENTARY_CHARGE: f64 = 1.6022e-19;

/// One kiloelectronvolt expressed in joules.
pub const KEV_TO_JOULE: f64 = 1000.0 * ELEMENTARY_CHARGE;

/// Full turn in radians.
pub const TWO_PI: f64 = 2.0 * PI;

/// Hertz per megahertz.
pub const HZ_PER_MHZ: f64 = 1.0e6;

/// Millimetres per metre.
pub const MM_PER_M: f64 = 1.0e3;

/// Nanoseconds per second.
pub const NS_PER_S: f64 = 1.0e9;
