// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Transport
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Transport figures: mean free paths, Hall parameters and the
//! electric conductivity along/across the magnetic field.
//!
//! The conductivity denominator carries only the momentum-destroying
//! electron channels (neutral + ion); like-particle collisions do not
//! impede the current.

use ndarray::{Array1, Zip};
use spd_types::constants::{M_ELECTRON, Q_ELEMENTARY};

use crate::collisions::CollisionFrequencies;
use crate::concentrations::Concentrations;
use crate::gyromotion::Gyromotion;
use crate::velocities::Velocities;

#[derive(Debug, Clone)]
pub struct TransportParameters {
    /// Electron mean free path v/ν [m].
    pub electron_mfp_m: Array1<f64>,
    /// Ion mean free path v/ν [m].
    pub ion_mfp_m: Array1<f64>,
    /// Neutral mean free path v/ν [m].
    pub neutral_mfp_m: Array1<f64>,
    /// Electron Hall parameter ω_ce/ν_e.
    pub electron_hall: Array1<f64>,
    /// Ion Hall parameter ω_ci/ν_i.
    pub ion_hall: Array1<f64>,
    /// Conductivity along B: n_e q²/(mₑ(ν_en + ν_ei)) [S/m].
    pub conductivity_parallel_s_m: Array1<f64>,
    /// Conductivity across B: σ_∥·β/(β²+1) [S/m].
    pub conductivity_transverse_s_m: Array1<f64>,
}

pub fn compute(
    velocities: &Velocities,
    concentrations: &Concentrations,
    gyro: &Gyromotion,
    collisions: &CollisionFrequencies,
) -> TransportParameters {
    let electron_mfp_m = Zip::from(&velocities.electron_m_s)
        .and(&collisions.electron_total)
        .map_collect(|&v, &nu| v / nu);
    let ion_mfp_m = Zip::from(&velocities.ion_m_s)
        .and(&collisions.ion_total)
        .map_collect(|&v, &nu| v / nu);
    let v_n = velocities.neutral_m_s;
    let neutral_mfp_m = collisions.neutral_total.mapv(|nu| v_n / nu);

    let electron_hall = Zip::from(&gyro.electron_cyclotron_rad_s)
        .and(&collisions.electron_total)
        .map_collect(|&w, &nu| w / nu);
    let ion_hall = Zip::from(&gyro.ion_cyclotron_rad_s)
        .and(&collisions.ion_total)
        .map_collect(|&w, &nu| w / nu);

    let conductivity_parallel_s_m = Zip::from(&concentrations.electron_m3)
        .and(&collisions.electron_neutral)
        .and(&collisions.electron_ion)
        .map_collect(|&n, &nu_en, &nu_ei| {
            n * Q_ELEMENTARY * Q_ELEMENTARY / (M_ELECTRON * (nu_en + nu_ei))
        });

    let conductivity_transverse_s_m = Zip::from(&conductivity_parallel_s_m)
        .and(&electron_hall)
        .map_collect(|&sigma, &beta| sigma * beta / (beta * beta + 1.0));

    TransportParameters {
        electron_mfp_m,
        ion_mfp_m,
        neutral_mfp_m,
        electron_hall,
        ion_hall,
        conductivity_parallel_s_m,
        conductivity_transverse_s_m,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collisions, concentrations, cross_sections, gyromotion, plasma, velocities};
    use spd_types::config::ThrusterConfig;

    fn reference() -> TransportParameters {
        let cfg = ThrusterConfig::default();
        let profiles = cfg.create_profiles();
        let species = cfg.species().unwrap();
        let vel = velocities::compute(&profiles, &species, cfg.neutral_temperature_k);
        let conc = concentrations::compute(
            &profiles,
            &vel,
            &species,
            &cfg.create_geometry(),
            cfg.volume_flow_m3_s,
        );
        let bulk = plasma::compute(&profiles, &vel, &conc);
        let gyro = gyromotion::compute(&profiles, &vel, &species);
        let sections = cross_sections::compute(&profiles, &vel, &bulk, &gyro, &species);
        let freq = collisions::compute(&profiles, &vel, &conc, &sections);
        compute(&vel, &conc, &gyro, &freq)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            ((actual - expected) / expected).abs() < 1e-9,
            "{actual} vs {expected}"
        );
    }

    #[test]
    fn test_mean_free_paths_reference() {
        let t = reference();
        assert_close(t.electron_mfp_m[0], 1.158194937646589);
        assert_close(t.electron_mfp_m[2], 0.2631705261892423);
        assert_close(t.ion_mfp_m[0], 8.915743125593878e-5);
        assert_close(t.neutral_mfp_m[1], 5.136377683333661e-4);
    }

    #[test]
    fn test_hall_parameters_reference() {
        let t = reference();
        assert_close(t.electron_hall[0], 84.53735537846642);
        assert_close(t.electron_hall[1], 633.5023523834345);
        assert_close(t.electron_hall[2], 680.5843021030396);
        assert_close(t.ion_hall[0], 5.325774918178105e-6);
        assert_close(t.ion_hall[2], 1.8037946326610072e-3);
    }

    #[test]
    fn test_electrons_magnetized_ions_not() {
        let t = reference();
        for i in 0..3 {
            assert!(t.electron_hall[i] > 1.0, "electron beta at {i}");
            assert!(t.ion_hall[i] < 1.0, "ion beta at {i}");
        }
    }

    #[test]
    fn test_conductivities_reference() {
        let t = reference();
        assert_close(t.conductivity_parallel_s_m[0], 2.1954529198015997);
        assert_close(t.conductivity_parallel_s_m[2], 2.3064809901074044e-2);
        assert_close(t.conductivity_transverse_s_m[0], 2.5966577130212918e-2);
        assert_close(t.conductivity_transverse_s_m[2], 3.388964458168861e-5);
    }

    #[test]
    fn test_transverse_conductivity_suppressed() {
        // β ≫ 1 ⇒ σ_⊥ ≈ σ_∥/β.
        let t = reference();
        for i in 0..3 {
            let ratio = t.conductivity_parallel_s_m[i] / t.conductivity_transverse_s_m[i];
            assert!(
                (ratio - (t.electron_hall[i] + 1.0 / t.electron_hall[i])).abs() / ratio < 1e-9,
                "suppression ratio at {i}"
            );
        }
    }
}
