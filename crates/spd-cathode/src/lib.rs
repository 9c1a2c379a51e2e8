//! Thermionic emission estimates for a Cs-on-W cathode surface.

pub mod emission;
