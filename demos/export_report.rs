//! Writes a timestamped JSON snapshot of a solved heating case.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example export_report --features serde
//! ```
//!
//! File export is a collaborator concern, not part of the engine; this demo
//! shows everything such a collaborator needs from the crate.

use phe_models::models::thermal::phe::{
    BoundaryConditions, Geometry, HotFluid, Inputs, Report, solve,
};
use serde::Serialize;
use uom::si::{
    f64::{Length, MassRate, ThermodynamicTemperature},
    length::meter,
    mass_rate::kilogram_per_second,
    thermodynamic_temperature::degree_celsius,
};

#[derive(Serialize)]
struct Snapshot {
    exported_at: String,
    report: Report,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let inputs = Inputs {
        hot_fluid: HotFluid::Oil,
        mass_flow: MassRate::new::<kilogram_per_second>(2.5),
        boundary: BoundaryConditions::Heating {
            hot_inlet: ThermodynamicTemperature::new::<degree_celsius>(80.0),
            cold_outlet: ThermodynamicTemperature::new::<degree_celsius>(60.0),
        },
        geometry: Geometry {
            length: Length::new::<meter>(0.5),
            breadth: Length::new::<meter>(0.1),
            gap: Length::new::<meter>(0.003),
            plate_count: 10,
        },
    };

    let results = solve(&inputs)?;
    let snapshot = Snapshot {
        exported_at: jiff::Timestamp::now().to_string(),
        report: Report::from(&results),
    };

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
