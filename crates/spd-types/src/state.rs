// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;

/// Probe-station measurements along the discharge channel axis.
///
/// One entry per axial station; every derived quantity downstream keeps
/// this length. The magnetic field is carried both as recorded (gauss)
/// and converted to tesla for the formula chain.
#[derive(Debug, Clone)]
pub struct MeasuredProfiles {
    /// Axial distance from the anode [mm].
    pub distance_mm: Array1<f64>,
    /// Plasma potential [V].
    pub potential_v: Array1<f64>,
    /// Radial magnetic field as recorded [G].
    pub field_gauss: Array1<f64>,
    /// Radial magnetic field [T].
    pub field_tesla: Array1<f64>,
    /// Electron current [A].
    pub electron_current_a: Array1<f64>,
    /// Ion current [A].
    pub ion_current_a: Array1<f64>,
    /// Electron temperature [eV].
    pub electron_temperature_ev: Array1<f64>,
    /// Elastic electron–neutral interaction time [s].
    pub elastic_time_s: Array1<f64>,
    /// Inelastic electron–neutral interaction time [s].
    pub inelastic_time_s: Array1<f64>,
}

impl MeasuredProfiles {
    /// Number of axial stations.
    pub fn len(&self) -> usize {
        self.distance_mm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distance_mm.is_empty()
    }
}

/// Annular discharge channel geometry.
#[derive(Debug, Clone)]
pub struct ChannelGeometry {
    /// Mean channel diameter [m].
    pub mean_diameter_m: f64,
    /// Channel width [m].
    pub width_m: f64,
}

impl ChannelGeometry {
    /// Exit cross section π(d_mean + w)²/4 [m²].
    pub fn exit_area(&self) -> f64 {
        std::f64::consts::PI * (self.mean_diameter_m + self.width_m).powi(2) / 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_area_reference_channel() {
        let geom = ChannelGeometry {
            mean_diameter_m: 56e-3,
            width_m: 28e-3,
        };
        let area = geom.exit_area();
        assert!(
            (area - 5.541769440932396e-3).abs() < 1e-15,
            "area = {area}"
        );
    }

    #[test]
    fn test_profiles_len() {
        let n = 3;
        let zeros = || Array1::zeros(n);
        let profiles = MeasuredProfiles {
            distance_mm: Array1::from(vec![10.0, 20.0, 30.0]),
            potential_v: zeros(),
            field_gauss: zeros(),
            field_tesla: zeros(),
            electron_current_a: zeros(),
            ion_current_a: zeros(),
            electron_temperature_ev: zeros(),
            elastic_time_s: zeros(),
            inelastic_time_s: zeros(),
        };
        assert_eq!(profiles.len(), 3);
        assert!(!profiles.is_empty());
    }
}
