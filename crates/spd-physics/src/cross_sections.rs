// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Cross Sections
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Collision cross sections: hard-sphere neutral–neutral, Coulomb, and
//! the induced-dipole ion transport / charge-exchange pair.

use ndarray::{Array1, Zip};
use spd_types::constants::{A_BOHR, GasSpecies};
use spd_types::state::MeasuredProfiles;

use crate::gyromotion::Gyromotion;
use crate::plasma::PlasmaBulk;
use crate::velocities::Velocities;

/// Coefficient of the Coulomb section σ = 2.87e-14·lnΛ/T² [m²·eV²].
const COULOMB_SECTION_COEFF: f64 = 2.87e-14;

#[derive(Debug, Clone)]
pub struct CrossSections {
    /// Hard-sphere neutral–neutral section πd_kin² [m²].
    pub neutral_neutral_m2: f64,
    /// Coulomb section for electrons [m²].
    pub coulomb_electron_m2: Array1<f64>,
    /// Coulomb section for ions [m²].
    pub coulomb_ion_m2: Array1<f64>,
    /// Induced-dipole ion transport section [m²].
    pub ion_transport_m2: Array1<f64>,
    /// Charge-exchange section (half the transport section) [m²].
    pub charge_exchange_m2: Array1<f64>,
}

pub fn compute(
    profiles: &MeasuredProfiles,
    velocities: &Velocities,
    plasma: &PlasmaBulk,
    gyro: &Gyromotion,
    species: &GasSpecies,
) -> CrossSections {
    let neutral_neutral_m2 = std::f64::consts::PI * species.kinetic_diameter_m.powi(2);

    let coulomb_electron_m2 = Zip::from(&plasma.coulomb_log_electron)
        .and(&profiles.electron_temperature_ev)
        .map_collect(|&ln_l, &t| COULOMB_SECTION_COEFF * ln_l / (t * t));

    let coulomb_ion_m2 = Zip::from(&plasma.coulomb_log_ion)
        .and(&velocities.ion_temperature_ev)
        .map_collect(|&ln_l, &t| COULOMB_SECTION_COEFF * ln_l / (t * t));

    // σ_tr = 2π√2·a₀²·√((α/a₀³)·(U_ion/E_rel))
    let dipole_strength = gyro.polarizability_m3 / A_BOHR.powi(3);
    let u_ion = species.ionization_potential_ev;
    let ion_transport_m2 = gyro.relative_energy_ev.mapv(|e_rel| {
        2.0 * std::f64::consts::PI
            * std::f64::consts::SQRT_2
            * A_BOHR.powi(2)
            * (dipole_strength * (u_ion / e_rel)).sqrt()
    });

    let charge_exchange_m2 = ion_transport_m2.mapv(|s| s / 2.0);

    CrossSections {
        neutral_neutral_m2,
        coulomb_electron_m2,
        coulomb_ion_m2,
        ion_transport_m2,
        charge_exchange_m2,
    }
}
