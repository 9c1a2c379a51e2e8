// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Boltzmann constant (J/K).
/// NOTE: the discharge-chamber chain uses the rounded lab value; the
/// cathode emission chain carries the exact SI value separately.
pub const K_BOLTZMANN: f64 = 1.38e-23;

/// Electron mass (kg).
pub const M_ELECTRON: f64 = 9.11e-31;

/// Elementary charge (C).
pub const Q_ELEMENTARY: f64 = 1.6e-19;

/// Vacuum permittivity (F/m).
pub const EPSILON_0: f64 = 8.85e-12;

/// Bohr radius (m).
pub const A_BOHR: f64 = 0.529e-8;

/// Atomic mass unit (kg).
pub const AMU_KG: f64 = 1.66e-27;

/// Electron-volt expressed in kelvin.
pub const EV_TO_KELVIN: f64 = 11600.0;

/// Joule expressed in electron-volts.
pub const J_TO_EV: f64 = 6.24e18;

/// Propellant species table for the discharge-chamber chain.
///
/// The atom radius feeds the polarizability estimate r = 0.62·α^(1/3)
/// inverted to α = (r/0.62)³ and is kept in the reference data set's
/// own unit convention.
#[derive(Debug, Clone)]
pub struct GasSpecies {
    /// Atom mass [kg].
    pub mass_kg: f64,
    /// Atom radius for the polarizability estimate [m].
    pub atom_radius_m: f64,
    /// First ionization potential [eV].
    pub ionization_potential_ev: f64,
    /// Kinetic diameter [m].
    pub kinetic_diameter_m: f64,
    /// Density at standard conditions [kg/m³].
    pub density_stp: f64,
    /// Species name.
    pub name: &'static str,
}

impl GasSpecies {
    /// Krypton propellant parameters.
    pub fn krypton() -> Self {
        GasSpecies {
            mass_kg: 83.798 * AMU_KG,
            atom_radius_m: 198e-10,
            ionization_potential_ev: 13.99,
            kinetic_diameter_m: 360e-12,
            density_stp: 3.749,
            name: "krypton",
        }
    }

    /// Xenon propellant parameters.
    pub fn xenon() -> Self {
        GasSpecies {
            mass_kg: 131.293 * AMU_KG,
            atom_radius_m: 216e-10,
            ionization_potential_ev: 12.13,
            kinetic_diameter_m: 396e-12,
            density_stp: 5.894,
            name: "xenon",
        }
    }

    /// Atom polarizability α = (r/0.62)³ [m³].
    pub fn polarizability(&self) -> f64 {
        (self.atom_radius_m / 0.62).powi(3)
    }
}
