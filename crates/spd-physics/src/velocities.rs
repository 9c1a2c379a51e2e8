// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Velocities
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Characteristic particle speeds per probe station.
//!
//! Electrons carry the Maxwellian mean speed for the measured Te, ions
//! the directed speed gained by falling through the plasma potential,
//! neutrals the thermal speed at the feed-gas temperature. The ion
//! temperature is back-derived from the directed ion speed.

use ndarray::Array1;
use spd_types::constants::{EV_TO_KELVIN, GasSpecies, K_BOLTZMANN, M_ELECTRON, Q_ELEMENTARY};
use spd_types::state::MeasuredProfiles;

/// Speeds [m/s] and the derived ion temperature [eV].
#[derive(Debug, Clone)]
pub struct Velocities {
    /// Mean electron thermal speed √(8kTe/πmₑ).
    pub electron_m_s: Array1<f64>,
    /// Directed ion speed √(qU/2mᵢ).
    pub ion_m_s: Array1<f64>,
    /// Neutral thermal speed √(3kTₙ/m) (single feed-gas temperature).
    pub neutral_m_s: f64,
    /// Ion temperature mᵢvᵢ²/2k [eV].
    pub ion_temperature_ev: Array1<f64>,
}

pub fn compute(
    profiles: &MeasuredProfiles,
    species: &GasSpecies,
    neutral_temperature_k: f64,
) -> Velocities {
    let m_ion = species.mass_kg;

    let electron_m_s = profiles.electron_temperature_ev.mapv(|t_ev| {
        ((8.0 * K_BOLTZMANN * t_ev * EV_TO_KELVIN) / (std::f64::consts::PI * M_ELECTRON)).sqrt()
    });

    let ion_m_s = profiles
        .potential_v
        .mapv(|u| (Q_ELEMENTARY * u / (2.0 * m_ion)).sqrt());

    let neutral_m_s = (3.0 * K_BOLTZMANN * neutral_temperature_k / m_ion).sqrt();

    let ion_temperature_ev = ion_m_s.mapv(|v| (m_ion * v * v / (2.0 * K_BOLTZMANN)) / EV_TO_KELVIN);

    Velocities {
        electron_m_s,
        ion_m_s,
        neutral_m_s,
        ion_temperature_ev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spd_types::config::ThrusterConfig;

    fn reference() -> Velocities {
        let cfg = ThrusterConfig::default();
        compute(
            &cfg.create_profiles(),
            &cfg.species().unwrap(),
            cfg.neutral_temperature_k,
        )
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            ((actual - expected) / expected).abs() < 1e-9,
            "{actual} vs {expected}"
        );
    }

    #[test]
    fn test_electron_speed_reference() {
        let v = reference();
        assert_close(v.electron_m_s[0], 1.3378560968434885e6);
        assert_close(v.electron_m_s[1], 1.7710809651444277e6);
        assert_close(v.electron_m_s[2], 1.0513029501025616e6);
    }

    #[test]
    fn test_ion_speed_reference() {
        let v = reference();
        assert_close(v.ion_m_s[0], 1.0706013140161785e4);
        assert_close(v.ion_m_s[2], 6.58942620296199e3);
    }

    #[test]
    fn test_neutral_speed_reference() {
        let v = reference();
        assert_close(v.neutral_m_s, 345.03193634018027);
    }

    #[test]
    fn test_ion_temperature_roundtrip() {
        // Back-deriving T from v must invert the speed formula:
        // T_i = U q / (2k) expressed in eV.
        let v = reference();
        assert_close(v.ion_temperature_ev[0], 49.80009995002499);
        assert_close(v.ion_temperature_ev[1], 46.50174912543728);
        assert_close(v.ion_temperature_ev[2], 18.865567216391796);
    }

    #[test]
    fn test_electron_speed_grows_with_temperature() {
        let v = reference();
        // Station 1 has the hottest electrons in the reference set.
        assert!(v.electron_m_s[1] > v.electron_m_s[0]);
        assert!(v.electron_m_s[1] > v.electron_m_s[2]);
    }
}
