//! Stateless heat-transfer and hydraulic correlations.
//!
//! Every function here is a pure O(1) formula. Dimensional arguments and
//! returns use [`uom`] quantities; the dimensionless groups (Re, Pr, Nu) are
//! plain `f64`. None of these functions validate their inputs; degenerate
//! arguments (zero flow area, non-positive temperature differences) are the
//! caller's responsibility.

use uom::si::{
    f64::{
        Area, DynamicViscosity, HeatTransfer, Length, MassDensity, MassRate, Power,
        SpecificHeatCapacity, TemperatureInterval, ThermalConductivity, Velocity,
    },
    ratio::ratio,
};

/// Relative tolerance for treating the two end temperature differences as
/// equal, where the log-mean formula degenerates to 0/0.
const EQUAL_DELTA_TOLERANCE: f64 = 1e-12;

/// Hydraulic diameter of a plate channel: `D_h = 2b` for a gap much narrower
/// than the plate breadth.
#[must_use]
pub fn hydraulic_diameter(gap: Length) -> Length {
    gap * 2.0
}

/// Cross-sectional flow area of a single inter-plate channel.
#[must_use]
pub fn channel_flow_area(breadth: Length, gap: Length) -> Area {
    breadth * gap
}

/// Bulk velocity of one stream, with its total mass flow split evenly across
/// `channels` parallel channels.
#[must_use]
pub fn channel_velocity(
    mass_flow: MassRate,
    density: MassDensity,
    flow_area: Area,
    channels: f64,
) -> Velocity {
    mass_flow / (density * flow_area * channels)
}

/// Reynolds number for channel flow.
#[must_use]
pub fn reynolds(
    density: MassDensity,
    velocity: Velocity,
    hydraulic_diameter: Length,
    viscosity: DynamicViscosity,
) -> f64 {
    (density * velocity * hydraulic_diameter / viscosity).get::<ratio>()
}

/// Prandtl number of the fluid.
#[must_use]
pub fn prandtl(
    cp: SpecificHeatCapacity,
    viscosity: DynamicViscosity,
    conductivity: ThermalConductivity,
) -> f64 {
    (cp * viscosity / conductivity).get::<ratio>()
}

/// Nusselt number from the Dittus–Boelter correlation.
///
/// The 0.4 Prandtl exponent is used for both streams regardless of whether
/// they are being heated or cooled.
#[must_use]
pub fn nusselt(reynolds: f64, prandtl: f64) -> f64 {
    0.023 * reynolds.powf(0.8) * prandtl.powf(0.4)
}

/// Convective film coefficient from a Nusselt number.
#[must_use]
pub fn film_coefficient(
    nusselt: f64,
    conductivity: ThermalConductivity,
    hydraulic_diameter: Length,
) -> HeatTransfer {
    conductivity * nusselt / hydraulic_diameter
}

/// Overall heat-transfer coefficient of the two films in series.
///
/// Algebraically `1 / (1/h_hot + 1/h_cold)`; no fouling or wall resistance
/// term is included.
#[must_use]
pub fn overall_coefficient(hot_film: HeatTransfer, cold_film: HeatTransfer) -> HeatTransfer {
    hot_film * cold_film / (hot_film + cold_film)
}

/// Log mean temperature difference between the two exchanger ends.
///
/// `delta_hot_end` is the hot-inlet/cold-outlet difference and
/// `delta_cold_end` the hot-outlet/cold-inlet difference. When the two agree
/// to within one part in 10¹² the analytic limit `LMTD = ΔT1` is returned
/// directly, since the log-mean formula is 0/0 there. The result is made
/// non-negative before return.
///
/// Both differences must be strictly positive; a non-positive argument puts
/// the logarithm outside its domain and the caller is expected to reject
/// such cases first.
#[must_use]
pub fn log_mean_temperature_difference(
    delta_hot_end: TemperatureInterval,
    delta_cold_end: TemperatureInterval,
) -> TemperatureInterval {
    let end_ratio = (delta_hot_end / delta_cold_end).get::<ratio>();
    if (end_ratio - 1.0).abs() <= EQUAL_DELTA_TOLERANCE {
        return delta_hot_end;
    }
    ((delta_hot_end - delta_cold_end) / end_ratio.ln()).abs()
}

/// Heat-transfer area required to move `duty` across the exchanger.
#[must_use]
pub fn required_area(duty: Power, overall: HeatTransfer, lmtd: TemperatureInterval) -> Area {
    duty / (overall * lmtd)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        dynamic_viscosity::pascal_second,
        heat_transfer::watt_per_square_meter_kelvin,
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second,
        power::kilowatt,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        temperature_interval::degree_celsius as delta_celsius,
        thermal_conductivity::watt_per_meter_kelvin,
        velocity::meter_per_second,
    };

    #[test]
    fn hydraulic_diameter_is_twice_the_gap() {
        let d_h = hydraulic_diameter(Length::new::<meter>(0.003));
        assert_relative_eq!(d_h.get::<meter>(), 0.006);
    }

    #[test]
    fn velocity_splits_flow_across_channels() {
        // Oil side of the reference heating case: 2.5 kg/s over 4.5 channels
        // of 0.1 m x 0.003 m at 850 kg/m³.
        let v = channel_velocity(
            MassRate::new::<kilogram_per_second>(2.5),
            MassDensity::new::<kilogram_per_cubic_meter>(850.0),
            channel_flow_area(Length::new::<meter>(0.1), Length::new::<meter>(0.003)),
            4.5,
        );
        assert_relative_eq!(v.get::<meter_per_second>(), 2.178_649_237_472_767, max_relative = 1e-12);
    }

    #[test]
    fn dimensionless_groups() {
        let re = reynolds(
            MassDensity::new::<kilogram_per_cubic_meter>(850.0),
            Velocity::new::<meter_per_second>(2.178_649_237_472_767),
            Length::new::<meter>(0.006),
            DynamicViscosity::new::<pascal_second>(0.001),
        );
        assert_relative_eq!(re, 11_111.111_111_111_111, max_relative = 1e-12);

        let pr = prandtl(
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2100.0),
            DynamicViscosity::new::<pascal_second>(0.001),
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.145),
        );
        assert_relative_eq!(pr, 14.482_758_620_689_657, max_relative = 1e-12);

        assert_relative_eq!(nusselt(re, pr), 115.524_565_951_933_52, max_relative = 1e-9);
    }

    #[test]
    fn film_coefficient_from_nusselt() {
        let h = film_coefficient(
            100.0,
            ThermalConductivity::new::<watt_per_meter_kelvin>(0.6),
            Length::new::<meter>(0.006),
        );
        assert_relative_eq!(h.get::<watt_per_square_meter_kelvin>(), 10_000.0);
    }

    #[test]
    fn overall_coefficient_is_series_combination() {
        let h1 = HeatTransfer::new::<watt_per_square_meter_kelvin>(2000.0);
        let h2 = HeatTransfer::new::<watt_per_square_meter_kelvin>(3000.0);
        let u = overall_coefficient(h1, h2);

        // 1 / (1/2000 + 1/3000) = 1200
        assert_relative_eq!(u.get::<watt_per_square_meter_kelvin>(), 1200.0, max_relative = 1e-12);

        // Two equal films halve the coefficient.
        let u = overall_coefficient(h1, h1);
        assert_relative_eq!(u.get::<watt_per_square_meter_kelvin>(), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn lmtd_matches_the_closed_form() {
        // Reference heating case ends: ΔT1 = 20, ΔT2 = 35.
        let lmtd = log_mean_temperature_difference(
            TemperatureInterval::new::<delta_celsius>(20.0),
            TemperatureInterval::new::<delta_celsius>(35.0),
        );
        assert_relative_eq!(
            lmtd.get::<delta_celsius>(),
            26.804_104_393_371_645,
            max_relative = 1e-12
        );
    }

    #[test]
    fn lmtd_is_non_negative_either_way_round() {
        let d1 = TemperatureInterval::new::<delta_celsius>(35.0);
        let d2 = TemperatureInterval::new::<delta_celsius>(20.0);

        let a = log_mean_temperature_difference(d1, d2);
        let b = log_mean_temperature_difference(d2, d1);
        assert!(a.value > 0.0);
        assert_relative_eq!(a.get::<delta_celsius>(), b.get::<delta_celsius>(), max_relative = 1e-12);
    }

    #[test]
    fn lmtd_equal_ends_returns_the_common_difference() {
        let delta = TemperatureInterval::new::<delta_celsius>(15.0);
        let lmtd = log_mean_temperature_difference(delta, delta);
        assert_eq!(lmtd, delta);
    }

    #[test]
    fn area_scales_inversely_with_overall_coefficient() {
        let duty = Power::new::<kilowatt>(105.0);
        let lmtd = TemperatureInterval::new::<delta_celsius>(26.8);
        let u = HeatTransfer::new::<watt_per_square_meter_kelvin>(1600.0);

        let a = required_area(duty, u, lmtd);
        let a_doubled_u = required_area(duty, u * 2.0, lmtd);
        assert_relative_eq!(
            a.get::<square_meter>(),
            2.0 * a_doubled_u.get::<square_meter>(),
            max_relative = 1e-12
        );
    }
}
