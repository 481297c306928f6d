//! Global configuration constants for the cyclotron simulator.

/// Fixed physics step applied by every tick (normalized time units).
pub const DEFAULT_TIME_STEP: f64 = 0.05;

/// Proportionality between the displayed frequency (MHz) and the angular rate
/// used by the integrator.
pub const DEFAULT_OMEGA_COUPLING: f64 = 0.1;

/// Orbit radius (normalized units) at which the particle leaves the dees.
pub const DEFAULT_EXIT_RADIUS: f64 = 2.0;

/// Velocity given to the particle at the centre after a reset.
pub const DEFAULT_LAUNCH_VELOCITY: [f64; 2] = [0.1, 0.0];

/// Slider range for the magnetic flux density (tesla).
pub const FLUX_DENSITY_RANGE: (f64, f64) = (0.05, 2.0);

/// Slider range for the acceleration voltage (volts).
pub const VOLTAGE_RANGE: (f64, f64) = (500.0, 10_000.0);

/// Default acceleration voltage (volts).
pub const DEFAULT_VOLTAGE: f64 = 5000.0;

/// Default magnetic flux density (tesla).
pub const DEFAULT_FLUX_DENSITY: f64 = 1.0;

/// Default injection kinetic energy (keV).
pub const DEFAULT_KINETIC_ENERGY_KEV: f64 = 0.5;

/// Minimum distance between two recorded trail points (normalized units).
///
/// Two canvas pixels at 120 px per unit.
pub const DEFAULT_TRAIL_SPACING: f64 = 2.0 / 120.0;

/// Decimal places for readouts in MHz and mm.
pub const FINE_DISPLAY_DECIMALS: i32 = 3;

/// Decimal places for readouts in % of c and ns.
pub const COARSE_DISPLAY_DECIMALS: i32 = 2;

/// Frame budget used by drivers when reporting slow frames (milliseconds).
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 1000.0 / 60.0;
