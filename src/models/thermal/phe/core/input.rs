//! Problem definition and input validation.
//!
//! [`BoundaryConditions`] is a sum type over the operating mode, so each mode
//! carries exactly the two temperatures the caller must supply and nothing
//! else can be referenced unset. Validation collects every violated
//! constraint into one batch rather than failing on the first.

use std::cmp::Ordering;

use uom::si::{
    f64::{Length, MassRate, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use super::error::{SimulationError, Violation, Violations};
use super::fluid::HotFluid;

/// Plate-stack geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Plate length.
    ///
    /// Validated with the rest of the geometry, but the lumped correlations
    /// size the exchanger by required area rather than plate dimensions, so
    /// the length does not enter the calculation itself.
    pub length: Length,

    /// Plate breadth.
    pub breadth: Length,

    /// Inter-plate gap.
    pub gap: Length,

    /// Number of plates in the stack.
    pub plate_count: u32,
}

impl Geometry {
    /// Number of parallel flow channels available to each stream.
    ///
    /// An N-plate stack forms N−1 channels, split evenly between the two
    /// streams. For an odd N−1 the split is fractional; this is accepted as
    /// an approximation rather than rejected, matching the original tool's
    /// arithmetic.
    #[must_use]
    pub fn channels_per_side(&self) -> f64 {
        (f64::from(self.plate_count) - 1.0) / 2.0
    }
}

/// The two user-supplied boundary temperatures, keyed by operating mode.
///
/// The remaining two boundary temperatures are resolved by the engine's
/// fixed closure assumptions, not by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryConditions {
    /// The hot stream is the known/driving stream; water is being heated.
    Heating {
        /// Hot fluid inlet temperature.
        hot_inlet: ThermodynamicTemperature,
        /// Cold water outlet temperature.
        cold_outlet: ThermodynamicTemperature,
    },

    /// The cold stream is the known/driving stream; the hot fluid is being
    /// cooled.
    Cooling {
        /// Cold water inlet temperature.
        cold_inlet: ThermodynamicTemperature,
        /// Hot fluid outlet temperature.
        hot_outlet: ThermodynamicTemperature,
    },
}

/// Full problem definition for one engine invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    /// Hot-side fluid selection.
    pub hot_fluid: HotFluid,

    /// Mass flow rate of the driving stream: the hot fluid when heating,
    /// the cold water when cooling.
    pub mass_flow: MassRate,

    /// The two mode-appropriate boundary temperatures.
    pub boundary: BoundaryConditions,

    /// Plate-stack geometry.
    pub geometry: Geometry,
}

impl Inputs {
    /// Checks every input constraint and reports all violations together.
    ///
    /// Rules: the mass flow rate and all geometry dimensions must be
    /// strictly positive, the plate count at least 2, both supplied
    /// temperatures above 0 °C, and the mode's ordering constraint must hold
    /// (heating: hot inlet above cold outlet; cooling: cold inlet below hot
    /// outlet). The ordering rule is only evaluated once both temperatures
    /// are individually valid, so one bad field yields one message.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidInputs`] carrying the complete
    /// batch of violations.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let mut violations = Violations::new();

        violations.check(
            !strictly_positive(self.mass_flow.value),
            Violation::MassFlowNotPositive,
        );

        match self.boundary {
            BoundaryConditions::Heating {
                hot_inlet,
                cold_outlet,
            } => {
                let hot_ok = above_freezing(hot_inlet);
                let cold_ok = above_freezing(cold_outlet);
                violations.check(!hot_ok, Violation::HotInletNotPositive);
                violations.check(!cold_ok, Violation::ColdOutletNotPositive);
                violations.check(
                    hot_ok && cold_ok && hot_inlet <= cold_outlet,
                    Violation::HotInletNotAboveColdOutlet,
                );
            }
            BoundaryConditions::Cooling {
                cold_inlet,
                hot_outlet,
            } => {
                let cold_ok = above_freezing(cold_inlet);
                let hot_ok = above_freezing(hot_outlet);
                violations.check(!cold_ok, Violation::ColdInletNotPositive);
                violations.check(!hot_ok, Violation::HotOutletNotPositive);
                violations.check(
                    cold_ok && hot_ok && cold_inlet >= hot_outlet,
                    Violation::ColdInletNotBelowHotOutlet,
                );
            }
        }

        violations.check(
            !strictly_positive(self.geometry.length.value),
            Violation::LengthNotPositive,
        );
        violations.check(
            !strictly_positive(self.geometry.breadth.value),
            Violation::BreadthNotPositive,
        );
        violations.check(
            !strictly_positive(self.geometry.gap.value),
            Violation::GapNotPositive,
        );
        violations.check(self.geometry.plate_count < 2, Violation::TooFewPlates);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SimulationError::InvalidInputs(violations))
        }
    }
}

/// Strict positivity that also fails for NaN.
fn strictly_positive(value: f64) -> bool {
    value.partial_cmp(&0.0) == Some(Ordering::Greater)
}

fn above_freezing(temperature: ThermodynamicTemperature) -> bool {
    strictly_positive(temperature.get::<degree_celsius>())
}
