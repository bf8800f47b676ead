//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities. Two small gaps matter
//! for heat exchanger work and are filled here:
//!
//! - Subtracting one absolute temperature from another should produce a
//!   [`TemperatureInterval`], not another absolute temperature. `uom` keeps
//!   the two on separate kinds, so the subtraction needs the
//!   [`TemperatureDifference`] extension trait
//!   (see [uom#380](https://github.com/iliekturtles/uom/issues/380)).
//! - Bulk fluid properties are evaluated at the mean of two boundary
//!   temperatures, which [`midpoint`] computes without leaving the absolute
//!   temperature kind.

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracts two [`ThermodynamicTemperature`] values (absolute temperatures)
/// and returns a [`TemperatureInterval`] (temperature difference).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

/// Returns the temperature halfway between `a` and `b`.
#[must_use]
pub fn midpoint(
    a: ThermodynamicTemperature,
    b: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<abs_kelvin>(
        0.5 * (a.get::<abs_kelvin>() + b.get::<abs_kelvin>()),
    )
}
