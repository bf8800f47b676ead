//! Thermophysical properties for the two streams.
//!
//! The hot stream is one of three constant-property fluids; its record never
//! varies with temperature. The cold stream is always water, looked up from
//! an eight-anchor table spanning 20–90 °C with linear interpolation between
//! anchors and clamping outside them. Both tables are process-wide constants.

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

/// Bulk thermophysical properties of a single-phase liquid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// Specific heat capacity.
    pub cp: SpecificHeatCapacity,

    /// Mass density.
    pub rho: MassDensity,

    /// Dynamic viscosity.
    pub mu: DynamicViscosity,

    /// Thermal conductivity.
    pub k: ThermalConductivity,
}

impl FluidProperties {
    /// Wraps raw SI property values (J/(kg·K), kg/m³, Pa·s, W/(m·K)).
    fn from_si(cp: f64, rho: f64, mu: f64, k: f64) -> Self {
        Self {
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp),
            rho: MassDensity::new::<kilogram_per_cubic_meter>(rho),
            mu: DynamicViscosity::new::<pascal_second>(mu),
            k: ThermalConductivity::new::<watt_per_meter_kelvin>(k),
        }
    }
}

/// Raw SI property record, kept `const`-friendly.
struct RawProperties {
    cp: f64,
    rho: f64,
    mu: f64,
    k: f64,
}

/// The hot-side fluid selection.
///
/// Each fluid maps to a fixed property record. The model treats these as
/// temperature-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotFluid {
    Oil,
    Petrol,
    Diesel,
}

impl HotFluid {
    /// Returns the constant properties for this fluid.
    #[must_use]
    pub fn properties(self) -> FluidProperties {
        let raw = match self {
            Self::Oil => RawProperties {
                cp: 2100.0,
                rho: 850.0,
                mu: 0.001,
                k: 0.145,
            },
            Self::Petrol => RawProperties {
                cp: 2220.0,
                rho: 740.0,
                mu: 0.0003,
                k: 0.12,
            },
            Self::Diesel => RawProperties {
                cp: 2010.0,
                rho: 820.0,
                mu: 0.0025,
                k: 0.135,
            },
        };
        FluidProperties::from_si(raw.cp, raw.rho, raw.mu, raw.k)
    }
}

/// One anchor of the water property table: temperature in °C plus the four
/// properties at that temperature.
struct WaterAnchor {
    t: f64,
    cp: f64,
    rho: f64,
    mu: f64,
    k: f64,
}

/// Saturated liquid water properties, 20–90 °C.
#[rustfmt::skip]
const WATER_TABLE: [WaterAnchor; 8] = [
    WaterAnchor { t: 20.0, cp: 4182.0, rho: 998.2, mu: 0.001_002, k: 0.598 },
    WaterAnchor { t: 30.0, cp: 4178.0, rho: 995.7, mu: 0.000_798, k: 0.615 },
    WaterAnchor { t: 40.0, cp: 4179.0, rho: 992.2, mu: 0.000_653, k: 0.631 },
    WaterAnchor { t: 50.0, cp: 4181.0, rho: 988.1, mu: 0.000_547, k: 0.644 },
    WaterAnchor { t: 60.0, cp: 4185.0, rho: 983.2, mu: 0.000_467, k: 0.654 },
    WaterAnchor { t: 70.0, cp: 4190.0, rho: 977.8, mu: 0.000_404, k: 0.663 },
    WaterAnchor { t: 80.0, cp: 4197.0, rho: 971.8, mu: 0.000_355, k: 0.670 },
    WaterAnchor { t: 90.0, cp: 4205.0, rho: 965.3, mu: 0.000_315, k: 0.675 },
];

/// Returns water properties at the given bulk temperature.
///
/// Each property is interpolated linearly and independently between the
/// bracketing table anchors. Temperatures at or below the 20 °C anchor and
/// at or above the 90 °C anchor are clamped to the edge values, never
/// extrapolated, so this is a total function over all finite temperatures.
#[must_use]
pub fn water_properties(temperature: ThermodynamicTemperature) -> FluidProperties {
    let t = temperature.get::<degree_celsius>();

    let first = &WATER_TABLE[0];
    if t <= first.t {
        return FluidProperties::from_si(first.cp, first.rho, first.mu, first.k);
    }

    let last = &WATER_TABLE[WATER_TABLE.len() - 1];
    if t >= last.t {
        return FluidProperties::from_si(last.cp, last.rho, last.mu, last.k);
    }

    for pair in WATER_TABLE.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        if t >= lo.t && t <= hi.t {
            let frac = (t - lo.t) / (hi.t - lo.t);
            let lerp = |y1: f64, y2: f64| y1 + (y2 - y1) * frac;
            return FluidProperties::from_si(
                lerp(lo.cp, hi.cp),
                lerp(lo.rho, hi.rho),
                lerp(lo.mu, hi.mu),
                lerp(lo.k, hi.k),
            );
        }
    }

    // Only a NaN temperature falls through every scan; answer with the low
    // edge rather than fail, keeping the lookup total.
    FluidProperties::from_si(first.cp, first.rho, first.mu, first.k)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    #[test]
    fn hot_fluid_records() {
        let oil = HotFluid::Oil.properties();
        assert_relative_eq!(oil.cp.get::<joule_per_kilogram_kelvin>(), 2100.0);
        assert_relative_eq!(oil.rho.get::<kilogram_per_cubic_meter>(), 850.0);
        assert_relative_eq!(oil.mu.get::<pascal_second>(), 0.001);
        assert_relative_eq!(oil.k.get::<watt_per_meter_kelvin>(), 0.145);

        let petrol = HotFluid::Petrol.properties();
        assert_relative_eq!(petrol.cp.get::<joule_per_kilogram_kelvin>(), 2220.0);
        assert_relative_eq!(petrol.rho.get::<kilogram_per_cubic_meter>(), 740.0);
        assert_relative_eq!(petrol.mu.get::<pascal_second>(), 0.0003);
        assert_relative_eq!(petrol.k.get::<watt_per_meter_kelvin>(), 0.12);

        let diesel = HotFluid::Diesel.properties();
        assert_relative_eq!(diesel.cp.get::<joule_per_kilogram_kelvin>(), 2010.0);
        assert_relative_eq!(diesel.rho.get::<kilogram_per_cubic_meter>(), 820.0);
        assert_relative_eq!(diesel.mu.get::<pascal_second>(), 0.0025);
        assert_relative_eq!(diesel.k.get::<watt_per_meter_kelvin>(), 0.135);
    }

    #[test]
    fn water_at_anchor_temperatures_matches_the_table() {
        let at_40 = water_properties(celsius(40.0));
        assert_relative_eq!(at_40.cp.get::<joule_per_kilogram_kelvin>(), 4179.0);
        assert_relative_eq!(at_40.rho.get::<kilogram_per_cubic_meter>(), 992.2);
        assert_relative_eq!(at_40.mu.get::<pascal_second>(), 0.000_653);
        assert_relative_eq!(at_40.k.get::<watt_per_meter_kelvin>(), 0.631);

        let at_90 = water_properties(celsius(90.0));
        assert_relative_eq!(at_90.cp.get::<joule_per_kilogram_kelvin>(), 4205.0);
        assert_relative_eq!(at_90.rho.get::<kilogram_per_cubic_meter>(), 965.3);
    }

    #[test]
    fn water_clamps_outside_the_table() {
        assert_eq!(water_properties(celsius(5.0)), water_properties(celsius(20.0)));
        assert_eq!(water_properties(celsius(-10.0)), water_properties(celsius(20.0)));
        assert_eq!(water_properties(celsius(95.0)), water_properties(celsius(90.0)));
        assert_eq!(water_properties(celsius(150.0)), water_properties(celsius(90.0)));
    }

    #[test]
    fn water_interpolates_between_anchors() {
        // Midway between the 40 °C and 50 °C anchors, offset by the 42.5 °C
        // mean film temperature used in the heating scenario.
        let props = water_properties(celsius(42.5));
        assert_relative_eq!(props.cp.get::<joule_per_kilogram_kelvin>(), 4179.5);
        assert_relative_eq!(props.rho.get::<kilogram_per_cubic_meter>(), 991.175);
        assert_relative_eq!(props.mu.get::<pascal_second>(), 0.000_626_5, epsilon = 1e-12);
        assert_relative_eq!(props.k.get::<watt_per_meter_kelvin>(), 0.634_25);
    }

    proptest! {
        #[test]
        fn water_stays_within_table_bounds(t in -20.0_f64..130.0) {
            let props = water_properties(celsius(t));

            let cp = props.cp.get::<joule_per_kilogram_kelvin>();
            let rho = props.rho.get::<kilogram_per_cubic_meter>();
            let mu = props.mu.get::<pascal_second>();
            let k = props.k.get::<watt_per_meter_kelvin>();

            prop_assert!((4178.0..=4205.0).contains(&cp));
            prop_assert!((965.3..=998.2).contains(&rho));
            prop_assert!((0.000_315..=0.001_002).contains(&mu));
            prop_assert!((0.598..=0.675).contains(&k));
        }

        #[test]
        fn water_density_decreases_with_temperature(t in 20.0_f64..89.0) {
            // Density is the one column that is strictly monotonic.
            let warmer = water_properties(celsius(t + 1.0));
            let cooler = water_properties(celsius(t));
            prop_assert!(warmer.rho < cooler.rho);
        }
    }
}
