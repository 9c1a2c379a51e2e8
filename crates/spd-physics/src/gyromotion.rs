// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Gyromotion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Motion of charged particles in the radial magnetic field: cyclotron
//! frequencies, Larmor radii, cycloid heights of the E×B drift, plus
//! the atom polarizability and the ion–atom relative energy feeding the
//! induced-dipole cross section downstream.

use ndarray::{Array1, Zip};
use spd_types::constants::{GasSpecies, J_TO_EV, M_ELECTRON, Q_ELEMENTARY};
use spd_types::state::MeasuredProfiles;

use crate::velocities::Velocities;

#[derive(Debug, Clone)]
pub struct Gyromotion {
    /// Electron cyclotron frequency qB/mₑ [rad/s].
    pub electron_cyclotron_rad_s: Array1<f64>,
    /// Ion cyclotron frequency qB/mᵢ [rad/s].
    pub ion_cyclotron_rad_s: Array1<f64>,
    /// Electron Larmor radius mₑv/(qB) [m].
    pub electron_larmor_m: Array1<f64>,
    /// Ion Larmor radius mᵢv/(qB) [m].
    pub ion_larmor_m: Array1<f64>,
    /// Electron cycloid height 2mₑU/(qB²) [m].
    pub electron_cycloid_height_m: Array1<f64>,
    /// Ion cycloid height 2mᵢU/(qB²) [m].
    pub ion_cycloid_height_m: Array1<f64>,
    /// Atom polarizability (r/0.62)³ [m³].
    pub polarizability_m3: f64,
    /// Relative ion–atom kinetic energy mᵢ(vᵢ−vₙ)²/2 [eV].
    pub relative_energy_ev: Array1<f64>,
}

pub fn compute(
    profiles: &MeasuredProfiles,
    velocities: &Velocities,
    species: &GasSpecies,
) -> Gyromotion {
    let m_ion = species.mass_kg;
    let b = &profiles.field_tesla;

    let electron_cyclotron_rad_s = b.mapv(|b| Q_ELEMENTARY * b / M_ELECTRON);
    let ion_cyclotron_rad_s = b.mapv(|b| Q_ELEMENTARY * b / m_ion);

    let electron_larmor_m = Zip::from(&velocities.electron_m_s)
        .and(b)
        .map_collect(|&v, &b| M_ELECTRON * v / (Q_ELEMENTARY * b));
    let ion_larmor_m = Zip::from(&velocities.ion_m_s)
        .and(b)
        .map_collect(|&v, &b| m_ion * v / (Q_ELEMENTARY * b));

    let electron_cycloid_height_m = Zip::from(&profiles.potential_v)
        .and(b)
        .map_collect(|&u, &b| 2.0 * M_ELECTRON * u / (Q_ELEMENTARY * b * b));
    let ion_cycloid_height_m = Zip::from(&profiles.potential_v)
        .and(b)
        .map_collect(|&u, &b| 2.0 * m_ion * u / (Q_ELEMENTARY * b * b));

    let polarizability_m3 = species.polarizability();

    let neutral = velocities.neutral_m_s;
    let relative_energy_ev = velocities
        .ion_m_s
        .mapv(|v| (m_ion * (v - neutral) * (v - neutral) / 2.0) * J_TO_EV);

    Gyromotion {
        electron_cyclotron_rad_s,
        ion_cyclotron_rad_s,
        electron_larmor_m,
        ion_larmor_m,
        electron_cycloid_height_m,
        ion_cycloid_height_m,
        polarizability_m3,
        relative_energy_ev,
    }
}
