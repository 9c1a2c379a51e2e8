// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-layout text reports. Writers take any `io::Write` so tests
//! capture output in memory and the binaries hand in buffered files.

use std::io::Write;

use ndarray::Array1;
use spd_cathode::emission::{EmissionInputs, EmissionResult};
use spd_diagnostics::probe::{ProbeCharacteristic, ProbeFit};
use spd_physics::pipeline::PlasmaDerived;
use spd_types::config::ThrusterConfig;
use spd_types::constants::{A_BOHR, EPSILON_0, K_BOLTZMANN, M_ELECTRON, Q_ELEMENTARY};
use spd_types::error::SpdResult;
use spd_types::state::MeasuredProfiles;

fn fmt_array(values: &Array1<f64>) -> String {
    let inner: Vec<String> = values.iter().map(|v| format!("{v:.6e}")).collect();
    format!("[{}]", inner.join(", "))
}

fn section<W: Write>(w: &mut W, title: &str) -> SpdResult<()> {
    writeln!(w, "{title}:")?;
    writeln!(w, "{}", "-".repeat(30))?;
    Ok(())
}

/// Full discharge-chamber report in the fixed section order.
pub fn write_plasma_report<W: Write>(
    w: &mut W,
    config: &ThrusterConfig,
    profiles: &MeasuredProfiles,
    derived: &PlasmaDerived,
) -> SpdResult<()> {
    let species = &derived.species;

    writeln!(w, "SPD PLASMA PARAMETER REPORT — {}", config.thruster_name)?;
    writeln!(w, "{}", "=".repeat(50))?;
    writeln!(w)?;

    section(w, "INPUT PARAMETERS")?;
    let distances: Vec<String> = profiles.distance_mm.iter().map(|v| format!("{v:.1}")).collect();
    writeln!(w, "Distance from anode (mm): [{}]", distances.join(", "))?;
    writeln!(w, "Plasma potential (V): {}", fmt_array(&profiles.potential_v))?;
    writeln!(w, "Magnetic field (G): {}", fmt_array(&profiles.field_gauss))?;
    writeln!(w, "Magnetic field (T): {}", fmt_array(&profiles.field_tesla))?;
    writeln!(w, "Electron current (A): {}", fmt_array(&profiles.electron_current_a))?;
    writeln!(w, "Ion current (A): {}", fmt_array(&profiles.ion_current_a))?;
    writeln!(
        w,
        "Electron temperature (eV): {}",
        fmt_array(&profiles.electron_temperature_ev)
    )?;
    writeln!(
        w,
        "Ion temperature (eV): {}",
        fmt_array(&derived.velocities.ion_temperature_ev)
    )?;
    writeln!(w, "Elastic interaction time (s): {}", fmt_array(&profiles.elastic_time_s))?;
    writeln!(
        w,
        "Inelastic interaction time (s): {}",
        fmt_array(&profiles.inelastic_time_s)
    )?;
    writeln!(w, "Neutral temperature (K): {:.1}", config.neutral_temperature_k)?;
    writeln!(w, "Kinetic diameter (m): {:.6e}", species.kinetic_diameter_m)?;
    writeln!(w, "Volume flow (m^3/s): {:.6e}", config.volume_flow_m3_s)?;
    writeln!(w, "Propellant density (kg/m^3): {:.3}", species.density_stp)?;
    writeln!(w, "Mass flow (kg/s): {:.6e}", derived.concentrations.mass_flow_kg_s)?;
    writeln!(
        w,
        "Neutral mass flow (kg/s): {}",
        fmt_array(&derived.concentrations.neutral_mass_flow_kg_s)
    )?;
    writeln!(w)?;

    section(w, "PHYSICAL CONSTANTS")?;
    writeln!(w, "Boltzmann constant (J/K): {K_BOLTZMANN:.6e}")?;
    writeln!(w, "Electron mass (kg): {M_ELECTRON:.6e}")?;
    writeln!(w, "Elementary charge (C): {Q_ELEMENTARY:.6e}")?;
    writeln!(w, "Vacuum permittivity (F/m): {EPSILON_0:.6e}")?;
    writeln!(w, "Propellant atom mass (kg): {:.6e}", species.mass_kg)?;
    writeln!(w, "Propellant atom radius (m): {:.6e}", species.atom_radius_m)?;
    writeln!(
        w,
        "Ionization potential (eV): {:.3}",
        species.ionization_potential_ev
    )?;
    writeln!(w, "Bohr radius (m): {A_BOHR:.6e}")?;
    writeln!(w)?;

    section(w, "PARTICLE VELOCITIES")?;
    writeln!(w, "Electron velocity (m/s): {}", fmt_array(&derived.velocities.electron_m_s))?;
    writeln!(w, "Ion velocity (m/s): {}", fmt_array(&derived.velocities.ion_m_s))?;
    writeln!(w, "Neutral velocity (m/s): {:.6e}", derived.velocities.neutral_m_s)?;
    writeln!(w)?;

    section(w, "PARTICLE CONCENTRATIONS")?;
    writeln!(
        w,
        "Electron concentration (m^-3): {}",
        fmt_array(&derived.concentrations.electron_m3)
    )?;
    writeln!(w, "Ion concentration (m^-3): {}", fmt_array(&derived.concentrations.ion_m3))?;
    writeln!(
        w,
        "Neutral concentration (m^-3): {}",
        fmt_array(&derived.concentrations.neutral_m3)
    )?;
    writeln!(w)?;

    section(w, "PLASMA PARAMETERS")?;
    writeln!(w, "Debye radius (m): {}", fmt_array(&derived.plasma.debye_radius_m))?;
    writeln!(
        w,
        "Particles in Debye sphere: {}",
        fmt_array(&derived.plasma.debye_count)
    )?;
    writeln!(
        w,
        "Plasma frequency (rad/s): {}",
        fmt_array(&derived.plasma.plasma_frequency_rad_s)
    )?;
    writeln!(
        w,
        "Coulomb logarithm (electrons): {}",
        fmt_array(&derived.plasma.coulomb_log_electron)
    )?;
    writeln!(
        w,
        "Coulomb logarithm (ions): {}",
        fmt_array(&derived.plasma.coulomb_log_ion)
    )?;
    writeln!(w)?;

    section(w, "PARTICLE MOTION")?;
    writeln!(
        w,
        "Electron cyclotron frequency (rad/s): {}",
        fmt_array(&derived.gyromotion.electron_cyclotron_rad_s)
    )?;
    writeln!(
        w,
        "Ion cyclotron frequency (rad/s): {}",
        fmt_array(&derived.gyromotion.ion_cyclotron_rad_s)
    )?;
    writeln!(
        w,
        "Atom polarizability (m^3): {:.6e}",
        derived.gyromotion.polarizability_m3
    )?;
    writeln!(
        w,
        "Ion-atom relative energy (eV): {}",
        fmt_array(&derived.gyromotion.relative_energy_ev)
    )?;
    writeln!(
        w,
        "Electron Larmor radius (m): {}",
        fmt_array(&derived.gyromotion.electron_larmor_m)
    )?;
    writeln!(w, "Ion Larmor radius (m): {}", fmt_array(&derived.gyromotion.ion_larmor_m))?;
    writeln!(
        w,
        "Electron cycloid height (m): {}",
        fmt_array(&derived.gyromotion.electron_cycloid_height_m)
    )?;
    writeln!(
        w,
        "Ion cycloid height (m): {}",
        fmt_array(&derived.gyromotion.ion_cycloid_height_m)
    )?;
    writeln!(w)?;

    section(w, "COLLISION CROSS SECTIONS")?;
    writeln!(
        w,
        "Neutral-neutral section (m^2): {:.6e}",
        derived.cross_sections.neutral_neutral_m2
    )?;
    writeln!(
        w,
        "Coulomb section, electrons (m^2): {}",
        fmt_array(&derived.cross_sections.coulomb_electron_m2)
    )?;
    writeln!(
        w,
        "Coulomb section, ions (m^2): {}",
        fmt_array(&derived.cross_sections.coulomb_ion_m2)
    )?;
    writeln!(
        w,
        "Ion transport section (m^2): {}",
        fmt_array(&derived.cross_sections.ion_transport_m2)
    )?;
    writeln!(
        w,
        "Charge-exchange section (m^2): {}",
        fmt_array(&derived.cross_sections.charge_exchange_m2)
    )?;
    writeln!(w)?;

    section(w, "ELECTRON COLLISION FREQUENCIES")?;
    writeln!(
        w,
        "Electron-electron (s^-1): {}",
        fmt_array(&derived.collisions.electron_electron)
    )?;
    writeln!(w, "Electron-ion (s^-1): {}", fmt_array(&derived.collisions.electron_ion))?;
    writeln!(
        w,
        "Electron-neutral (s^-1): {}",
        fmt_array(&derived.collisions.electron_neutral)
    )?;
    writeln!(w, "Electron total (s^-1): {}", fmt_array(&derived.collisions.electron_total))?;
    writeln!(w)?;

    section(w, "ION COLLISION FREQUENCIES")?;
    writeln!(w, "Ion-ion (s^-1): {}", fmt_array(&derived.collisions.ion_ion))?;
    writeln!(w, "Ion-electron (s^-1): {}", fmt_array(&derived.collisions.ion_electron))?;
    writeln!(w, "Ion-neutral (s^-1): {}", fmt_array(&derived.collisions.ion_neutral))?;
    writeln!(w, "Ion total (s^-1): {}", fmt_array(&derived.collisions.ion_total))?;
    writeln!(w)?;

    section(w, "NEUTRAL COLLISION FREQUENCIES")?;
    writeln!(
        w,
        "Neutral-electron (s^-1): {}",
        fmt_array(&derived.collisions.neutral_electron)
    )?;
    writeln!(w, "Neutral-ion (s^-1): {}", fmt_array(&derived.collisions.neutral_ion))?;
    writeln!(
        w,
        "Neutral-neutral (s^-1): {}",
        fmt_array(&derived.collisions.neutral_neutral)
    )?;
    writeln!(w, "Neutral total (s^-1): {}", fmt_array(&derived.collisions.neutral_total))?;
    writeln!(w)?;

    section(w, "MEAN FREE PATHS")?;
    writeln!(w, "Electron free path (m): {}", fmt_array(&derived.transport.electron_mfp_m))?;
    writeln!(w, "Ion free path (m): {}", fmt_array(&derived.transport.ion_mfp_m))?;
    writeln!(w, "Neutral free path (m): {}", fmt_array(&derived.transport.neutral_mfp_m))?;
    writeln!(w)?;

    section(w, "HALL PARAMETERS")?;
    writeln!(w, "Electron Hall parameter: {}", fmt_array(&derived.transport.electron_hall))?;
    writeln!(w, "Ion Hall parameter: {}", fmt_array(&derived.transport.ion_hall))?;
    writeln!(w)?;

    section(w, "ELECTRIC CONDUCTIVITY")?;
    writeln!(
        w,
        "Conductivity along B (S/m): {}",
        fmt_array(&derived.transport.conductivity_parallel_s_m)
    )?;
    writeln!(
        w,
        "Conductivity across B (S/m): {}",
        fmt_array(&derived.transport.conductivity_transverse_s_m)
    )?;
    writeln!(w)?;

    Ok(())
}

/// Cathode emission report: inputs, then the chain in evaluation order.
pub fn write_emission_report<W: Write>(
    w: &mut W,
    inputs: &EmissionInputs,
    result: &EmissionResult,
) -> SpdResult<()> {
    writeln!(w, "W-Cs THERMIONIC EMISSION REPORT")?;
    writeln!(w, "{}", "=".repeat(50))?;
    writeln!(w)?;

    section(w, "INPUT PARAMETERS")?;
    writeln!(w, "Cathode temperature (K): {:.1}", inputs.cathode_temperature_k)?;
    writeln!(w, "Cesium flux (cm^-2 s^-1): {:.6e}", inputs.cesium_flux_cm2_s)?;
    writeln!(w, "Cesium reservoir temperature (K): {:.1}", inputs.cesium_temperature_k)?;
    writeln!(w, "Surface field (V/cm): {:.6e}", inputs.surface_field_v_cm)?;
    writeln!(w)?;

    section(w, "DERIVED QUANTITIES")?;
    writeln!(w, "S-diagram current density (A/cm^2): {:.6e}", result.s_curve_density)?;
    writeln!(
        w,
        "Work function reduction (eV): {:.6e}",
        result.work_function_reduction
    )?;
    writeln!(w, "Cesium coverage: {:.6e}", result.coverage)?;
    writeln!(w, "Adsorption rate (cm^-2 s^-1): {:.6e}", result.adsorption_rate)?;
    writeln!(w, "Adatom density (cm^-2): {:.6e}", result.adatom_density)?;
    writeln!(w, "Dipole arm (cm): {:.6e}", result.dipole_arm_cm)?;
    writeln!(w, "Cesium vapour pressure (mmHg): {:.6e}", result.cesium_pressure_mmhg)?;
    writeln!(w, "Schottky barrier lowering (eV): {:.6e}", result.schottky_lowering)?;
    writeln!(
        w,
        "Effective work function (eV): {:.6e}",
        result.effective_work_function
    )?;
    writeln!(w, "Emission density with field (A/cm^2): {:.6e}", result.emission_density)?;
    writeln!(w)?;

    Ok(())
}

/// Probe fit summary: sweep size, smoothing parameter, floating
/// potential and the fitted current at round voltages.
pub fn write_probe_summary<W: Write>(
    w: &mut W,
    probe: &ProbeCharacteristic,
    fit: &ProbeFit,
) -> SpdResult<()> {
    writeln!(w, "LANGMUIR PROBE CHARACTERISTIC FIT")?;
    writeln!(w, "{}", "=".repeat(50))?;
    writeln!(w)?;

    section(w, "SWEEP")?;
    writeln!(w, "Samples: {}", probe.len())?;
    writeln!(
        w,
        "Voltage range (V): [{:.1}, {:.1}]",
        probe.voltage_v[0],
        probe.voltage_v[probe.len() - 1]
    )?;
    writeln!(w, "Smoothing parameter: {:.3e}", fit.lambda)?;
    writeln!(w)?;

    section(w, "FIT")?;
    match fit.floating_potential() {
        Some(fp) => writeln!(w, "Floating potential (V): {fp:.3}")?,
        None => writeln!(w, "Floating potential (V): not crossed")?,
    }
    for v in [-100.0, -50.0, 0.0, 50.0, 100.0, 150.0] {
        writeln!(w, "Fitted current at {v:+.0} V: {:.4}", fit.current_at(v))?;
    }
    writeln!(w)?;

    Ok(())
}
