// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Concentrations
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Charged-particle concentrations from the measured currents and the
//! neutral concentration from the propellant mass balance.

use ndarray::Array1;
use spd_types::constants::{GasSpecies, Q_ELEMENTARY};
use spd_types::state::{ChannelGeometry, MeasuredProfiles};

use crate::velocities::Velocities;

#[derive(Debug, Clone)]
pub struct Concentrations {
    /// Electron concentration I_e/(v_e·q) [m⁻³].
    pub electron_m3: Array1<f64>,
    /// Ion concentration I_i/(v_i·q) [m⁻³].
    pub ion_m3: Array1<f64>,
    /// Neutral concentration ṁ_n/(m·v_n·A_exit) [m⁻³].
    pub neutral_m3: Array1<f64>,
    /// Total propellant mass flow Q_v·ρ [kg/s].
    pub mass_flow_kg_s: f64,
    /// Neutral fraction of the mass flow ṁ − I_i·m/q [kg/s].
    pub neutral_mass_flow_kg_s: Array1<f64>,
}

pub fn compute(
    profiles: &MeasuredProfiles,
    velocities: &Velocities,
    species: &GasSpecies,
    geometry: &ChannelGeometry,
    volume_flow_m3_s: f64,
) -> Concentrations {
    let m_ion = species.mass_kg;
    let mass_flow_kg_s = volume_flow_m3_s * species.density_stp;

    let electron_flux = velocities.electron_m_s.mapv(|v| v * Q_ELEMENTARY);
    let ion_flux = velocities.ion_m_s.mapv(|v| v * Q_ELEMENTARY);
    let electron_m3 = &profiles.electron_current_a / &electron_flux;
    let ion_m3 = &profiles.ion_current_a / &ion_flux;

    let neutral_mass_flow_kg_s = profiles
        .ion_current_a
        .mapv(|i| mass_flow_kg_s - i * m_ion / Q_ELEMENTARY);

    let exit_area = geometry.exit_area();
    let neutral_m3 = neutral_mass_flow_kg_s.mapv(|f| f / (m_ion * velocities.neutral_m_s * exit_area));

    Concentrations {
        electron_m3,
        ion_m3,
        neutral_m3,
        mass_flow_kg_s,
        neutral_mass_flow_kg_s,
    }
}
