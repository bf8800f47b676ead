//! Plate heat exchanger performance model.
//!
//! Computes the steady-state thermal and hydraulic performance of a gasketed
//! plate heat exchanger from a sparse set of boundary conditions. The model
//! is a lumped-parameter, single-pass estimator: one of the two streams is
//! fully specified by the caller and the other is closed with fixed assumed
//! temperature deltas (see [`solve`] for the exact closure), then channel
//! velocities, Reynolds/Prandtl/Nusselt numbers, film and overall
//! heat-transfer coefficients, LMTD, and the required transfer area follow
//! from standard correlations.
//!
//! The hot stream is one of three constant-property fluids ([`HotFluid`]);
//! the cold stream is always water, with properties interpolated from a
//! fixed temperature table.
//!
//! # Example
//!
//! ```
//! use phe_models::models::thermal::phe::{
//!     BoundaryConditions, Geometry, HotFluid, Inputs, solve,
//! };
//! use uom::si::{
//!     f64::{Length, MassRate, ThermodynamicTemperature},
//!     length::meter,
//!     mass_rate::kilogram_per_second,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let inputs = Inputs {
//!     hot_fluid: HotFluid::Oil,
//!     mass_flow: MassRate::new::<kilogram_per_second>(2.5),
//!     boundary: BoundaryConditions::Heating {
//!         hot_inlet: ThermodynamicTemperature::new::<degree_celsius>(80.0),
//!         cold_outlet: ThermodynamicTemperature::new::<degree_celsius>(60.0),
//!     },
//!     geometry: Geometry {
//!         length: Length::new::<meter>(0.5),
//!         breadth: Length::new::<meter>(0.1),
//!         gap: Length::new::<meter>(0.003),
//!         plate_count: 10,
//!     },
//! };
//!
//! let results = solve(&inputs).unwrap();
//! assert!(results.area.value > 0.0);
//! ```

mod core;

pub use self::core::correlations;
pub use self::core::error::{SimulationError, Violation, Violations};
pub use self::core::fluid::{FluidProperties, HotFluid, water_properties};
pub use self::core::input::{BoundaryConditions, Geometry, Inputs};
pub use self::core::results::{Report, Results};
pub use self::core::solve::solve;
