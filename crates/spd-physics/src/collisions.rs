// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Collisions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pairwise collision frequencies per species and their totals.
//!
//! Electron–neutral (and its neutral–electron mirror) comes straight
//! from the measured elastic/inelastic interaction times; everything
//! else is σ·n·v with the like-particle channels carrying the √2
//! relative-speed factor.

use ndarray::{Array1, Zip};
use spd_types::state::MeasuredProfiles;

use crate::concentrations::Concentrations;
use crate::cross_sections::CrossSections;
use crate::velocities::Velocities;

/// Charge-exchange pickup factor in the ion–neutral channel.
const CHARGE_EXCHANGE_FACTOR: f64 = 1.5;

#[derive(Debug, Clone)]
pub struct CollisionFrequencies {
    pub electron_electron: Array1<f64>,
    pub electron_ion: Array1<f64>,
    pub electron_neutral: Array1<f64>,
    pub electron_total: Array1<f64>,
    pub ion_ion: Array1<f64>,
    pub ion_electron: Array1<f64>,
    pub ion_neutral: Array1<f64>,
    pub ion_total: Array1<f64>,
    pub neutral_electron: Array1<f64>,
    pub neutral_ion: Array1<f64>,
    pub neutral_neutral: Array1<f64>,
    pub neutral_total: Array1<f64>,
}

pub fn compute(
    profiles: &MeasuredProfiles,
    velocities: &Velocities,
    concentrations: &Concentrations,
    sections: &CrossSections,
) -> CollisionFrequencies {
    let sqrt2 = std::f64::consts::SQRT_2;

    let electron_electron = Zip::from(&sections.coulomb_electron_m2)
        .and(&concentrations.electron_m3)
        .and(&velocities.electron_m_s)
        .map_collect(|&s, &n, &v| sqrt2 * s * n * v);

    let electron_ion = Zip::from(&sections.coulomb_ion_m2)
        .and(&concentrations.ion_m3)
        .and(&velocities.electron_m_s)
        .map_collect(|&s, &n, &v| s * n * v);

    let electron_neutral = Zip::from(&profiles.elastic_time_s)
        .and(&profiles.inelastic_time_s)
        .map_collect(|&tau_el, &tau_inel| 1.0 / (tau_el + tau_inel));

    let electron_total = &(&electron_electron + &electron_ion) + &electron_neutral;

    let ion_ion = Zip::from(&sections.coulomb_ion_m2)
        .and(&concentrations.ion_m3)
        .and(&velocities.ion_m_s)
        .map_collect(|&s, &n, &v| sqrt2 * s * n * v);

    let ion_electron = Zip::from(&sections.coulomb_ion_m2)
        .and(&concentrations.electron_m3)
        .and(&velocities.ion_m_s)
        .map_collect(|&s, &n, &v| s * n * v);

    let ion_neutral = Zip::from(&velocities.ion_m_s)
        .and(&concentrations.neutral_m3)
        .and(&sections.charge_exchange_m2)
        .map_collect(|&v, &n, &s| CHARGE_EXCHANGE_FACTOR * v * n * s);

    let ion_total = &(&ion_ion + &ion_electron) + &ion_neutral;

    let neutral_electron = electron_neutral.clone();

    let v_n = velocities.neutral_m_s;
    let neutral_ion = concentrations
        .ion_m3
        .mapv(|n| sections.neutral_neutral_m2 * n * v_n);

    let neutral_neutral = concentrations
        .neutral_m3
        .mapv(|n| n * v_n * sections.neutral_neutral_m2);

    let neutral_total = &(&neutral_electron + &neutral_ion) + &neutral_neutral;

    CollisionFrequencies {
        electron_electron,
        electron_ion,
        electron_neutral,
        electron_total,
        ion_ion,
        ion_electron,
        ion_neutral,
        ion_total,
        neutral_electron,
        neutral_ion,
        neutral_neutral,
        neutral_total,
    }
}
