//! Orchestration and heat-balance closure.
//!
//! A single straight-line pipeline per operating mode: resolve the two
//! missing boundary temperatures and the non-driving mass flow from the
//! mode's closure assumptions, then run the common correlation tail. No
//! iteration and no intermediate state.

use uom::{
    ConstZero,
    si::{
        f64::{MassRate, Power, TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::units::{TemperatureDifference, midpoint};

use super::{
    correlations,
    error::SimulationError,
    fluid::{FluidProperties, water_properties},
    input::{BoundaryConditions, Inputs},
    results::Results,
};

/// Assumed cold water inlet temperature in heating mode, °C.
///
/// A fixed operating simplification inherited from the original tool, not
/// derived from any input; it stands in for whatever source-water condition
/// the site actually has.
const ASSUMED_COLD_INLET_C: f64 = 25.0;

/// Assumed hot-side temperature drop in heating mode, K.
const ASSUMED_HOT_DROP_K: f64 = 20.0;

/// Assumed hot-side temperature span in cooling mode, K.
const ASSUMED_HOT_SPAN_K: f64 = 30.0;

/// Assumed cold-side temperature rise in cooling mode, K.
const ASSUMED_COLD_RISE_K: f64 = 25.0;

/// Boundary temperatures and mass flows after mode resolution.
#[derive(Debug, Clone, Copy)]
struct Resolved {
    hot_inlet: ThermodynamicTemperature,
    hot_outlet: ThermodynamicTemperature,
    cold_inlet: ThermodynamicTemperature,
    cold_outlet: ThermodynamicTemperature,
    hot_mass_flow: MassRate,
    cold_mass_flow: MassRate,
}

/// Closes the boundary problem with the mode's fixed assumptions.
///
/// Heating: the caller supplies the hot inlet and cold outlet; the cold
/// inlet is fixed at [`ASSUMED_COLD_INLET_C`], the hot outlet at
/// [`ASSUMED_HOT_DROP_K`] below the inlet, and the cold mass flow is backed
/// out of the energy balance using the provisional hot-side duty and water
/// properties at the cold mean temperature.
///
/// Cooling: the caller supplies the cold inlet and hot outlet; the hot
/// inlet and cold outlet are fixed offsets above them, and the hot mass
/// flow is backed out of the cold-side duty.
fn resolve(inputs: &Inputs, hot_props: &FluidProperties) -> Resolved {
    match inputs.boundary {
        BoundaryConditions::Heating {
            hot_inlet,
            cold_outlet,
        } => {
            let cold_inlet = ThermodynamicTemperature::new::<degree_celsius>(ASSUMED_COLD_INLET_C);
            let hot_outlet =
                hot_inlet - TemperatureInterval::new::<delta_kelvin>(ASSUMED_HOT_DROP_K);

            let provisional_duty: Power =
                inputs.mass_flow * hot_props.cp * hot_inlet.minus(hot_outlet);

            let cold_props = water_properties(midpoint(cold_inlet, cold_outlet));
            let cold_mass_flow: MassRate =
                provisional_duty / (cold_props.cp * cold_outlet.minus(cold_inlet));

            Resolved {
                hot_inlet,
                hot_outlet,
                cold_inlet,
                cold_outlet,
                hot_mass_flow: inputs.mass_flow,
                cold_mass_flow,
            }
        }
        BoundaryConditions::Cooling {
            cold_inlet,
            hot_outlet,
        } => {
            let hot_inlet =
                hot_outlet + TemperatureInterval::new::<delta_kelvin>(ASSUMED_HOT_SPAN_K);
            let cold_outlet =
                cold_inlet + TemperatureInterval::new::<delta_kelvin>(ASSUMED_COLD_RISE_K);

            let cold_props = water_properties(midpoint(cold_inlet, cold_outlet));
            let cold_duty: Power =
                inputs.mass_flow * cold_props.cp * cold_outlet.minus(cold_inlet);

            let hot_mass_flow: MassRate =
                cold_duty / (hot_props.cp * hot_inlet.minus(hot_outlet));

            Resolved {
                hot_inlet,
                hot_outlet,
                cold_inlet,
                cold_outlet,
                hot_mass_flow,
                cold_mass_flow: inputs.mass_flow,
            }
        }
    }
}

/// Solves the plate heat exchanger performance problem.
///
/// Validates the inputs, closes the boundary problem for the selected mode,
/// and evaluates the full correlation tail: channel velocities,
/// Reynolds/Prandtl/Nusselt numbers, film and overall coefficients, LMTD,
/// and the required heat-transfer area. The returned duty is the
/// authoritative hot-side energy balance.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidInputs`] with the complete violation
/// batch before any calculation is attempted;
/// [`SimulationError::NonPositiveTerminalDifference`] when the resolved
/// temperatures leave the log-mean temperature difference undefined; and
/// [`SimulationError::NonFinite`] when a derived quantity escapes to NaN or
/// infinity.
pub fn solve(inputs: &Inputs) -> Result<Results, SimulationError> {
    inputs.validate()?;

    let hot_props = inputs.hot_fluid.properties();
    let resolved = resolve(inputs, &hot_props);

    // Hot-side properties are constant, so only the cold stream needs a
    // property refresh at its mean temperature.
    let cold_props = water_properties(midpoint(resolved.cold_inlet, resolved.cold_outlet));

    let duty: Power = resolved.hot_mass_flow
        * hot_props.cp
        * resolved.hot_inlet.minus(resolved.hot_outlet);

    let geometry = inputs.geometry;
    let d_h = correlations::hydraulic_diameter(geometry.gap);
    let flow_area = correlations::channel_flow_area(geometry.breadth, geometry.gap);
    let channels = geometry.channels_per_side();

    let hot_velocity =
        correlations::channel_velocity(resolved.hot_mass_flow, hot_props.rho, flow_area, channels);
    let cold_velocity =
        correlations::channel_velocity(resolved.cold_mass_flow, cold_props.rho, flow_area, channels);

    let hot_reynolds = correlations::reynolds(hot_props.rho, hot_velocity, d_h, hot_props.mu);
    let cold_reynolds = correlations::reynolds(cold_props.rho, cold_velocity, d_h, cold_props.mu);

    let hot_prandtl = correlations::prandtl(hot_props.cp, hot_props.mu, hot_props.k);
    let cold_prandtl = correlations::prandtl(cold_props.cp, cold_props.mu, cold_props.k);

    let hot_nusselt = correlations::nusselt(hot_reynolds, hot_prandtl);
    let cold_nusselt = correlations::nusselt(cold_reynolds, cold_prandtl);

    let hot_film = correlations::film_coefficient(hot_nusselt, hot_props.k, d_h);
    let cold_film = correlations::film_coefficient(cold_nusselt, cold_props.k, d_h);
    let overall = correlations::overall_coefficient(hot_film, cold_film);

    let delta_hot_end = resolved.hot_inlet.minus(resolved.cold_outlet);
    let delta_cold_end = resolved.hot_outlet.minus(resolved.cold_inlet);
    if delta_hot_end <= TemperatureInterval::ZERO || delta_cold_end <= TemperatureInterval::ZERO {
        return Err(SimulationError::NonPositiveTerminalDifference {
            hot_end: delta_hot_end,
            cold_end: delta_cold_end,
        });
    }

    let lmtd = correlations::log_mean_temperature_difference(delta_hot_end, delta_cold_end);
    let area = correlations::required_area(duty, overall, lmtd);

    check_finite(overall.value, "overall heat transfer coefficient")?;
    check_finite(lmtd.value, "log mean temperature difference")?;
    check_finite(area.value, "required heat transfer area")?;

    Ok(Results {
        hot_inlet: resolved.hot_inlet,
        hot_outlet: resolved.hot_outlet,
        cold_inlet: resolved.cold_inlet,
        cold_outlet: resolved.cold_outlet,
        duty,
        hot_mass_flow: resolved.hot_mass_flow,
        cold_mass_flow: resolved.cold_mass_flow,
        hot_velocity,
        cold_velocity,
        hot_reynolds,
        cold_reynolds,
        hot_prandtl,
        cold_prandtl,
        hot_nusselt,
        cold_nusselt,
        overall_coefficient: overall,
        area,
        lmtd,
    })
}

fn check_finite(value: f64, quantity: &'static str) -> Result<(), SimulationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::NonFinite { quantity })
    }
}
