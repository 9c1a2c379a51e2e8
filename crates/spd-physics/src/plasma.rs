// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Plasma Bulk
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bulk plasma parameters: Debye shielding, plasma frequency and the
//! Coulomb logarithms.
//!
//! The electron logarithm is evaluated with the ion temperature and
//! concentration and the ion logarithm with the electron pair — the
//! convention of the reference probe campaign, kept as measured.

use ndarray::{Array1, Zip};
use spd_types::constants::{EPSILON_0, EV_TO_KELVIN, K_BOLTZMANN, M_ELECTRON, Q_ELEMENTARY};
use spd_types::state::MeasuredProfiles;

use crate::concentrations::Concentrations;
use crate::velocities::Velocities;

/// Coefficient of the Coulomb-logarithm argument T[K]³/n.
const COULOMB_LOG_COEFF: f64 = 1.24e7;

#[derive(Debug, Clone)]
pub struct PlasmaBulk {
    /// Debye radius √(ε₀kTe/(n_e q²)) [m].
    pub debye_radius_m: Array1<f64>,
    /// Particle count in the Debye sphere (4/3)π n_e r_D³.
    pub debye_count: Array1<f64>,
    /// Electron plasma frequency √(n_e q²/(ε₀mₑ)) [rad/s].
    pub plasma_frequency_rad_s: Array1<f64>,
    /// ln(1.24e7·(T_i[K])³/n_i).
    pub coulomb_log_electron: Array1<f64>,
    /// ln(1.24e7·(T_e[K])³/n_e).
    pub coulomb_log_ion: Array1<f64>,
}

pub fn compute(
    profiles: &MeasuredProfiles,
    velocities: &Velocities,
    concentrations: &Concentrations,
) -> PlasmaBulk {
    let debye_radius_m = Zip::from(&profiles.electron_temperature_ev)
        .and(&concentrations.electron_m3)
        .map_collect(|&t_ev, &n_e| {
            ((EPSILON_0 * K_BOLTZMANN * t_ev) / (n_e * Q_ELEMENTARY * Q_ELEMENTARY)).sqrt()
        });

    let debye_count = Zip::from(&concentrations.electron_m3)
        .and(&debye_radius_m)
        .map_collect(|&n_e, &r_d| n_e * r_d.powi(3) * std::f64::consts::PI * 4.0 / 3.0);

    let plasma_frequency_rad_s = concentrations
        .electron_m3
        .mapv(|n_e| ((n_e * Q_ELEMENTARY * Q_ELEMENTARY) / (EPSILON_0 * M_ELECTRON)).sqrt());

    let coulomb_log_electron = Zip::from(&velocities.ion_temperature_ev)
        .and(&concentrations.ion_m3)
        .map_collect(|&t_ev, &n| (COULOMB_LOG_COEFF * (t_ev * EV_TO_KELVIN).powi(3) / n).ln());

    let coulomb_log_ion = Zip::from(&profiles.electron_temperature_ev)
        .and(&concentrations.electron_m3)
        .map_collect(|&t_ev, &n| (COULOMB_LOG_COEFF * (t_ev * EV_TO_KELVIN).powi(3) / n).ln());

    PlasmaBulk {
        debye_radius_m,
        debye_count,
        plasma_frequency_rad_s,
        coulomb_log_electron,
        coulomb_log_ion,
    }
}
