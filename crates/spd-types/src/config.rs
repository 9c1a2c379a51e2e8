// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::constants::GasSpecies;
use crate::error::{SpdError, SpdResult};
use crate::state::{ChannelGeometry, MeasuredProfiles};

/// Top-level measurement campaign description.
/// Maps 1:1 to the spd100_config.json schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThrusterConfig {
    pub thruster_name: String,
    /// Propellant species: "krypton" or "xenon".
    pub propellant: String,
    /// Volumetric propellant flow [m³/s].
    pub volume_flow_m3_s: f64,
    /// Neutral gas temperature [K].
    pub neutral_temperature_k: f64,
    pub channel: ChannelConfig,
    pub profiles: ProfileTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub mean_diameter_m: f64,
    pub channel_width_m: f64,
}

/// Per-station measurement arrays. All arrays share one length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileTable {
    pub distance_mm: Vec<f64>,
    pub plasma_potential_v: Vec<f64>,
    pub magnetic_field_gauss: Vec<f64>,
    pub electron_current_a: Vec<f64>,
    pub ion_current_a: Vec<f64>,
    pub electron_temperature_ev: Vec<f64>,
    pub elastic_time_s: Vec<f64>,
    pub inelastic_time_s: Vec<f64>,
}

impl Default for ThrusterConfig {
    /// Reference SPD-100 krypton campaign: three probe stations at
    /// 10/20/30 mm from the anode.
    fn default() -> Self {
        ThrusterConfig {
            thruster_name: "SPD-100-Krypton".to_string(),
            propellant: "krypton".to_string(),
            volume_flow_m3_s: 0.55e-6,
            neutral_temperature_k: 400.0,
            channel: ChannelConfig {
                mean_diameter_m: 56e-3,
                channel_width_m: 28e-3,
            },
            profiles: ProfileTable {
                distance_mm: vec![10.0, 20.0, 30.0],
                plasma_potential_v: vec![199.3, 186.1, 75.5],
                magnetic_field_gauss: vec![5.56, 38.6, 154.8],
                electron_current_a: vec![2.59, 2.23, 0.5],
                ion_current_a: vec![0.108, 0.475, 2.19],
                electron_temperature_ev: vec![4.0, 7.01, 2.47],
                elastic_time_s: vec![0.764e-7, 0.506e-7, 1.84e-7],
                inelastic_time_s: vec![7.23e-6, 1.44e-6, 2.44e-6],
            },
        }
    }
}

impl ThrusterConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> SpdResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve the propellant species table.
    pub fn species(&self) -> SpdResult<GasSpecies> {
        match self.propellant.as_str() {
            "krypton" => Ok(GasSpecies::krypton()),
            "xenon" => Ok(GasSpecies::xenon()),
            other => Err(SpdError::ConfigError(format!(
                "unknown propellant: {other}"
            ))),
        }
    }

    /// Structural validation: consistent array lengths, at least one
    /// station, positive field and temperature entries.
    pub fn validate(&self) -> SpdResult<()> {
        let p = &self.profiles;
        let n = p.distance_mm.len();
        if n == 0 {
            return Err(SpdError::InvalidProfile {
                message: "no measurement stations".to_string(),
            });
        }
        let lengths = [
            ("plasma_potential_v", p.plasma_potential_v.len()),
            ("magnetic_field_gauss", p.magnetic_field_gauss.len()),
            ("electron_current_a", p.electron_current_a.len()),
            ("ion_current_a", p.ion_current_a.len()),
            ("electron_temperature_ev", p.electron_temperature_ev.len()),
            ("elastic_time_s", p.elastic_time_s.len()),
            ("inelastic_time_s", p.inelastic_time_s.len()),
        ];
        for (name, len) in lengths {
            if len != n {
                return Err(SpdError::InvalidProfile {
                    message: format!("{name} has {len} entries, expected {n}"),
                });
            }
        }
        if p.magnetic_field_gauss.iter().any(|&b| b <= 0.0) {
            return Err(SpdError::InvalidProfile {
                message: "magnetic field must be positive".to_string(),
            });
        }
        if p.electron_temperature_ev.iter().any(|&t| t <= 0.0) {
            return Err(SpdError::InvalidProfile {
                message: "electron temperature must be positive".to_string(),
            });
        }
        self.species()?;
        Ok(())
    }

    /// Build the SI measurement state for the derivation chain.
    pub fn create_profiles(&self) -> MeasuredProfiles {
        let p = &self.profiles;
        let gauss = Array1::from(p.magnetic_field_gauss.clone());
        let tesla = &gauss / 1.0e4;
        MeasuredProfiles {
            distance_mm: Array1::from(p.distance_mm.clone()),
            potential_v: Array1::from(p.plasma_potential_v.clone()),
            field_gauss: gauss,
            field_tesla: tesla,
            electron_current_a: Array1::from(p.electron_current_a.clone()),
            ion_current_a: Array1::from(p.ion_current_a.clone()),
            electron_temperature_ev: Array1::from(p.electron_temperature_ev.clone()),
            elastic_time_s: Array1::from(p.elastic_time_s.clone()),
            inelastic_time_s: Array1::from(p.inelastic_time_s.clone()),
        }
    }

    pub fn create_geometry(&self) -> ChannelGeometry {
        ChannelGeometry {
            mean_diameter_m: self.channel.mean_diameter_m,
            width_m: self.channel.channel_width_m,
        }
    }
}
