//! Utility helpers for numeric formatting and logging.

pub mod logging;
pub mod math;

pub use math::*;
