// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Cathode Emission Binary
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Evaluate the W–Cs emission chain at the reference operating point
//! and write the report plus the sweep figures.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use spd_cathode::emission::{EmissionInputs, EmissionModel};
use spd_report::{plots, report};
use spd_types::error::SpdResult;

const REPORT_PATH: &str = "cathode_emission.txt";
const FIGURE_PATH: &str = "cathode_emission.svg";

fn run() -> SpdResult<()> {
    let model = EmissionModel::new(EmissionInputs::default());
    let result = model.calculate();
    log::info!(
        "emission density {:.3} A/cm^2 at {} K (coverage {:.2})",
        result.emission_density,
        model.inputs.cathode_temperature_k,
        result.coverage
    );

    let file = File::create(REPORT_PATH)?;
    let mut writer = BufWriter::new(file);
    report::write_emission_report(&mut writer, &model.inputs, &result)?;
    log::info!("report written to {REPORT_PATH}");

    plots::plot_emission(Path::new(FIGURE_PATH), &model)?;
    log::info!("figure written to {FIGURE_PATH}");

    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("cathode_emission: {e}");
        std::process::exit(1);
    }
}
