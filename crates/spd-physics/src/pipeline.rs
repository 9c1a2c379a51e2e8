// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Pipeline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Full derivation chain for one measurement campaign.

use spd_types::config::ThrusterConfig;
use spd_types::constants::GasSpecies;
use spd_types::error::SpdResult;
use spd_types::state::{ChannelGeometry, MeasuredProfiles};

use crate::collisions::{self, CollisionFrequencies};
use crate::concentrations::{self, Concentrations};
use crate::cross_sections::{self, CrossSections};
use crate::gyromotion::{self, Gyromotion};
use crate::plasma::{self, PlasmaBulk};
use crate::transport::{self, TransportParameters};
use crate::velocities::{self, Velocities};

/// Everything the report and the figure panels consume.
#[derive(Debug, Clone)]
pub struct PlasmaDerived {
    pub species: GasSpecies,
    pub velocities: Velocities,
    pub concentrations: Concentrations,
    pub plasma: PlasmaBulk,
    pub gyromotion: Gyromotion,
    pub cross_sections: CrossSections,
    pub collisions: CollisionFrequencies,
    pub transport: TransportParameters,
}

/// Run the chain in data-dependency order. Structural defects in the
/// configuration are rejected up front; degenerate numerics inside the
/// closed forms propagate as NaN/Inf untouched.
pub fn derive(config: &ThrusterConfig) -> SpdResult<PlasmaDerived> {
    config.validate()?;
    let species = config.species()?;
    let profiles = config.create_profiles();
    let geometry = config.create_geometry();
    derive_profiles(
        &profiles,
        &geometry,
        &species,
        config.volume_flow_m3_s,
        config.neutral_temperature_k,
    )
}

/// Chain over already-built profile state.
pub fn derive_profiles(
    profiles: &MeasuredProfiles,
    geometry: &ChannelGeometry,
    species: &GasSpecies,
    volume_flow_m3_s: f64,
    neutral_temperature_k: f64,
) -> SpdResult<PlasmaDerived> {
    let velocities = velocities::compute(profiles, species, neutral_temperature_k);
    let concentrations =
        concentrations::compute(profiles, &velocities, species, geometry, volume_flow_m3_s);
    let plasma = plasma::compute(profiles, &velocities, &concentrations);
    let gyromotion = gyromotion::compute(profiles, &velocities, species);
    let cross_sections =
        cross_sections::compute(profiles, &velocities, &plasma, &gyromotion, species);
    let collisions = collisions::compute(profiles, &velocities, &concentrations, &cross_sections);
    let transport = transport::compute(&velocities, &concentrations, &gyromotion, &collisions);

    Ok(PlasmaDerived {
        species: species.clone(),
        velocities,
        concentrations,
        plasma,
        gyromotion,
        cross_sections,
        collisions,
        transport,
    })
}
