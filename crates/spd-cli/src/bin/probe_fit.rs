// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Probe Fit Binary
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Smooth the recorded probe IV sweep, report the floating potential
//! and render the raw/fit figure.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use spd_diagnostics::probe::ProbeCharacteristic;
use spd_report::{plots, report};
use spd_types::error::SpdResult;

const SUMMARY_PATH: &str = "probe_fit.txt";
const FIGURE_PATH: &str = "probe_fit.svg";

/// Curvature penalty for the reference sweep; the voltage axis spans
/// hundreds of volts, so the penalty sits well above unity.
const LAMBDA: f64 = 50.0;

fn run() -> SpdResult<()> {
    let probe = ProbeCharacteristic::measured();
    let fit = probe.fit(LAMBDA)?;
    match fit.floating_potential() {
        Some(fp) => log::info!("floating potential {fp:.2} V over {} samples", probe.len()),
        None => log::warn!("fitted characteristic never crosses zero"),
    }

    let file = File::create(SUMMARY_PATH)?;
    let mut writer = BufWriter::new(file);
    report::write_probe_summary(&mut writer, &probe, &fit)?;
    log::info!("summary written to {SUMMARY_PATH}");

    plots::plot_probe_fit(Path::new(FIGURE_PATH), &probe, &fit)?;
    log::info!("figure written to {FIGURE_PATH}");

    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("probe_fit: {e}");
        std::process::exit(1);
    }
}
