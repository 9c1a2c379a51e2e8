//! Derived plasma parameters for the SPD discharge channel.
//!
//! One module per formula group, chained by `pipeline::derive` in
//! data-dependency order: velocities → concentrations → bulk plasma →
//! gyromotion → cross sections → collision frequencies → transport.

pub mod collisions;
pub mod concentrations;
pub mod cross_sections;
pub mod gyromotion;
pub mod pipeline;
pub mod plasma;
pub mod transport;
pub mod velocities;
