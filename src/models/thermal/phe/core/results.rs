//! Output records of a solved plate heat exchanger.
//!
//! [`Results`] is the engine's native output, uom-typed where dimensional.
//! [`Report`] is a flat `f64` snapshot in conventional reporting units for
//! callers that render, persist, or export. The engine itself does no I/O.

use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, MassRate, Power, TemperatureInterval, ThermodynamicTemperature, Velocity},
    heat_transfer::watt_per_square_meter_kelvin,
    mass_rate::kilogram_per_second,
    power::kilowatt,
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

/// Complete thermal/hydraulic performance of one solved exchanger.
///
/// Produced atomically by a single [`solve`](super::solve::solve) call and
/// immutable afterwards. All four boundary temperatures are reported, whether
/// user-supplied or resolved by the closure assumptions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Results {
    /// Hot fluid inlet temperature.
    pub hot_inlet: ThermodynamicTemperature,

    /// Hot fluid outlet temperature.
    pub hot_outlet: ThermodynamicTemperature,

    /// Cold water inlet temperature.
    pub cold_inlet: ThermodynamicTemperature,

    /// Cold water outlet temperature.
    pub cold_outlet: ThermodynamicTemperature,

    /// Heat duty transferred between the streams.
    pub duty: Power,

    /// Hot-side mass flow rate.
    pub hot_mass_flow: MassRate,

    /// Cold-side mass flow rate.
    pub cold_mass_flow: MassRate,

    /// Hot-side bulk channel velocity.
    pub hot_velocity: Velocity,

    /// Cold-side bulk channel velocity.
    pub cold_velocity: Velocity,

    /// Hot-side Reynolds number.
    pub hot_reynolds: f64,

    /// Cold-side Reynolds number.
    pub cold_reynolds: f64,

    /// Hot-side Prandtl number.
    pub hot_prandtl: f64,

    /// Cold-side Prandtl number.
    pub cold_prandtl: f64,

    /// Hot-side Nusselt number.
    pub hot_nusselt: f64,

    /// Cold-side Nusselt number.
    pub cold_nusselt: f64,

    /// Overall heat-transfer coefficient.
    pub overall_coefficient: HeatTransfer,

    /// Required heat-transfer area.
    pub area: Area,

    /// Log mean temperature difference.
    pub lmtd: TemperatureInterval,
}

/// Flat snapshot of [`Results`] in conventional reporting units.
///
/// Temperatures and LMTD are in °C, duty in kW, mass flows in kg/s,
/// velocities in m/s, the overall coefficient in W/(m²·K), and area in m².
/// With the `serde` feature enabled the record round-trips through JSON,
/// which is all an export collaborator needs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub t_hot_in: f64,
    pub t_hot_out: f64,
    pub t_cold_in: f64,
    pub t_cold_out: f64,
    pub duty_kw: f64,
    pub m_dot_hot: f64,
    pub m_dot_cold: f64,
    pub v_hot: f64,
    pub v_cold: f64,
    pub re_hot: f64,
    pub re_cold: f64,
    pub pr_hot: f64,
    pub pr_cold: f64,
    pub nu_hot: f64,
    pub nu_cold: f64,
    pub u: f64,
    pub area: f64,
    pub lmtd: f64,
}

impl From<&Results> for Report {
    fn from(results: &Results) -> Self {
        Self {
            t_hot_in: results.hot_inlet.get::<degree_celsius>(),
            t_hot_out: results.hot_outlet.get::<degree_celsius>(),
            t_cold_in: results.cold_inlet.get::<degree_celsius>(),
            t_cold_out: results.cold_outlet.get::<degree_celsius>(),
            duty_kw: results.duty.get::<kilowatt>(),
            m_dot_hot: results.hot_mass_flow.get::<kilogram_per_second>(),
            m_dot_cold: results.cold_mass_flow.get::<kilogram_per_second>(),
            v_hot: results.hot_velocity.get::<meter_per_second>(),
            v_cold: results.cold_velocity.get::<meter_per_second>(),
            re_hot: results.hot_reynolds,
            re_cold: results.cold_reynolds,
            pr_hot: results.hot_prandtl,
            pr_cold: results.cold_prandtl,
            nu_hot: results.hot_nusselt,
            nu_cold: results.cold_nusselt,
            u: results.overall_coefficient.get::<watt_per_square_meter_kelvin>(),
            area: results.area.get::<square_meter>(),
            lmtd: results.lmtd.get::<delta_celsius>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn sample_results() -> Results {
        Results {
            hot_inlet: ThermodynamicTemperature::new::<degree_celsius>(80.0),
            hot_outlet: ThermodynamicTemperature::new::<degree_celsius>(60.0),
            cold_inlet: ThermodynamicTemperature::new::<degree_celsius>(25.0),
            cold_outlet: ThermodynamicTemperature::new::<degree_celsius>(60.0),
            duty: Power::new::<kilowatt>(105.0),
            hot_mass_flow: MassRate::new::<kilogram_per_second>(2.5),
            cold_mass_flow: MassRate::new::<kilogram_per_second>(0.72),
            hot_velocity: Velocity::new::<meter_per_second>(2.18),
            cold_velocity: Velocity::new::<meter_per_second>(0.54),
            hot_reynolds: 11_111.1,
            cold_reynolds: 5092.1,
            hot_prandtl: 14.48,
            cold_prandtl: 4.13,
            hot_nusselt: 115.5,
            cold_nusselt: 37.5,
            overall_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(1637.4),
            area: Area::new::<square_meter>(2.39),
            lmtd: TemperatureInterval::new::<delta_celsius>(26.8),
        }
    }

    #[test]
    fn report_converts_to_reporting_units() {
        let report = Report::from(&sample_results());

        assert_relative_eq!(report.t_hot_in, 80.0, epsilon = 1e-12);
        assert_relative_eq!(report.t_cold_in, 25.0, epsilon = 1e-12);
        assert_relative_eq!(report.duty_kw, 105.0, max_relative = 1e-12);
        assert_relative_eq!(report.m_dot_hot, 2.5, max_relative = 1e-12);
        assert_relative_eq!(report.u, 1637.4, max_relative = 1e-12);
        assert_relative_eq!(report.area, 2.39, max_relative = 1e-12);
        assert_relative_eq!(report.lmtd, 26.8, max_relative = 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn report_round_trips_through_json() {
        let report = Report::from(&sample_results());

        let json = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
