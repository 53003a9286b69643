//! Tank sounding to mass conversion.
//!
//! Observed volume is converted to metric tonnes using the density at 15 C,
//! corrected linearly for the observed fuel temperature:
//!
//! ```text
//! density_t = density_15 * (1 - THERMAL_EXPANSION_PER_C * (t - 15))
//! mass_mt   = volume_m3 * density_t / 1000
//! ```

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Volumetric expansion coefficient for residual and distillate fuels.
pub const THERMAL_EXPANSION_PER_C: f64 = 0.00065;
pub const REFERENCE_TEMPERATURE_C: f64 = 15.0;
pub const MIN_TEMPERATURE_C: f64 = -20.0;
pub const MAX_TEMPERATURE_C: f64 = 100.0;

/// A single tank reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelReading {
    pub volume_m3: f64,
    pub density_15c_kg_m3: f64,
    pub temperature_c: f64,
}

/// Compute fuel mass in metric tonnes, rounded to three decimals.
#[track_caller]
pub fn calculate_mass(reading: &FuelReading) -> CoreErrorResult<f64> {
    check_finite(reading.volume_m3, "volume_m3")?;
    check_finite(reading.density_15c_kg_m3, "density_kg_m3")?;
    check_finite(reading.temperature_c, "temperature_c")?;

    if reading.volume_m3 < 0.0 {
        return Err(validation("volume_m3 cannot be negative", "volume_m3"));
    }
    if reading.density_15c_kg_m3 <= 0.0 {
        return Err(validation("density_kg_m3 must be positive", "density_kg_m3"));
    }
    if !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&reading.temperature_c) {
        return Err(validation(
            &format!(
                "temperature_c must be between {} and {}",
                MIN_TEMPERATURE_C, MAX_TEMPERATURE_C
            ),
            "temperature_c",
        ));
    }

    let correction =
        1.0 - THERMAL_EXPANSION_PER_C * (reading.temperature_c - REFERENCE_TEMPERATURE_C);
    let mass = reading.volume_m3 * reading.density_15c_kg_m3 * correction / 1000.0;
    let rounded = (mass * 1000.0).round() / 1000.0;
    if !rounded.is_finite() {
        return Err(validation("volume_m3 is too large", "volume_m3"));
    }

    Ok(rounded)
}

#[track_caller]
fn check_finite(value: f64, field: &str) -> CoreErrorResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(validation(&format!("{} must be a finite number", field), field))
    }
}

#[track_caller]
fn validation(message: &str, field: &str) -> CoreError {
    CoreError::Validation {
        message: message.to_string(),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    }
}
