// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Report Binary
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Derive the discharge-chamber parameters and write the text report
//! plus the panel figure. An optional argument points at an alternative
//! JSON measurement profile; the built-in SPD-100 krypton campaign is
//! used otherwise.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use spd_physics::pipeline;
use spd_report::{plots, report};
use spd_types::config::ThrusterConfig;
use spd_types::error::SpdResult;

const REPORT_PATH: &str = "plasma_report.txt";
const FIGURE_PATH: &str = "plasma_panels.svg";

fn run() -> SpdResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading measurement profile from {path}");
            ThrusterConfig::from_file(&path)?
        }
        None => ThrusterConfig::default(),
    };
    config.validate()?;

    let profiles = config.create_profiles();
    let derived = pipeline::derive(&config)?;
    log::info!(
        "derived {} stations for {} ({})",
        profiles.len(),
        config.thruster_name,
        derived.species.name
    );

    let file = File::create(REPORT_PATH)?;
    let mut writer = BufWriter::new(file);
    report::write_plasma_report(&mut writer, &config, &profiles, &derived)?;
    log::info!("report written to {REPORT_PATH}");

    plots::plot_plasma_panels(Path::new(FIGURE_PATH), &profiles, &derived)?;
    log::info!("figure written to {FIGURE_PATH}");

    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("spd-report: {e}");
        std::process::exit(1);
    }
}
