// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Emission
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Emission chain for a cesium-coated tungsten surface: S-curve current
//! density, Richardson inversion for the work-function reduction,
//! cesium coverage and adsorption balance, dipole arm, vapour pressure
//! and the Schottky-corrected emission current.
//!
//! The chain works in the CGS-flavoured units of thermionic practice
//! (A/cm², cm⁻², V/cm) and carries the exact SI charge/Boltzmann
//! values, unlike the discharge-chamber chain's rounded lab constants.

/// Elementary charge (C), exact SI.
const Q_EXACT: f64 = 1.602176634e-19;

/// Boltzmann constant (J/K), exact SI.
const K_EXACT: f64 = 1.380649e-23;

/// Richardson constant for tungsten [A/(cm²·K²)].
const RICHARDSON_A: f64 = 60.0;

/// Work function of clean tungsten [eV].
const PHI_TUNGSTEN: f64 = 4.52;

/// Work function of bulk cesium [eV].
const PHI_CESIUM: f64 = 1.69;

/// Cesium monolayer density [cm⁻²].
const MONOLAYER_DENSITY: f64 = 1e15;

/// S-curve saturation density [A/cm²].
const S_CURVE_J_SAT: f64 = 1.0;

/// S-curve optimum temperature [K].
const S_CURVE_T_OPT: f64 = 1200.0;

/// S-curve width [K].
const S_CURVE_WIDTH: f64 = 200.0;

/// Dipole-layer coefficient in Δφ = 8.9e-14·n·e·d.
const DIPOLE_COEFF: f64 = 8.9e-14;

/// Schottky barrier-lowering coefficient [eV/(V/cm)^½].
const SCHOTTKY_COEFF: f64 = 3.62e-4;

/// Cathode operating point.
#[derive(Debug, Clone)]
pub struct EmissionInputs {
    /// Cathode temperature [K].
    pub cathode_temperature_k: f64,
    /// Incident cesium atom flux [cm⁻²·s⁻¹].
    pub cesium_flux_cm2_s: f64,
    /// Cesium reservoir temperature [K].
    pub cesium_temperature_k: f64,
    /// Accelerating surface field [V/cm].
    pub surface_field_v_cm: f64,
}

impl Default for EmissionInputs {
    fn default() -> Self {
        EmissionInputs {
            cathode_temperature_k: 1000.0,
            cesium_flux_cm2_s: 1e16,
            cesium_temperature_k: 340.0,
            surface_field_v_cm: 8e5,
        }
    }
}

/// Every intermediate of the emission chain.
#[derive(Debug, Clone)]
pub struct EmissionResult {
    /// S-diagram current density at the operating point [A/cm²].
    pub s_curve_density: f64,
    /// Work-function reduction Δφ [eV].
    pub work_function_reduction: f64,
    /// Cesium coverage θ ∈ [0, 1].
    pub coverage: f64,
    /// Adsorption rate N_i(1 − θ) [cm⁻²·s⁻¹].
    pub adsorption_rate: f64,
    /// Adatom density θ·n₀ [cm⁻²].
    pub adatom_density: f64,
    /// Dipole arm Δφ/(8.9e-14·n·e) [cm].
    pub dipole_arm_cm: f64,
    /// Saturated cesium vapour pressure [mmHg].
    pub cesium_pressure_mmhg: f64,
    /// Schottky barrier lowering 3.62e-4·√E [eV].
    pub schottky_lowering: f64,
    /// Effective work function φ_W − Δφ − Schottky [eV].
    pub effective_work_function: f64,
    /// Field-corrected emission density [A/cm²].
    pub emission_density: f64,
}

/// Thermionic model over the W–Cs system.
pub struct EmissionModel {
    pub inputs: EmissionInputs,
}

impl EmissionModel {
    pub fn new(inputs: EmissionInputs) -> Self {
        EmissionModel { inputs }
    }

    /// Thermal energy kT expressed in eV.
    fn kt_ev(t_k: f64) -> f64 {
        K_EXACT * t_k / Q_EXACT
    }

    /// Empirical S-shaped emission characteristic of the W–Cs system.
    pub fn s_curve_density(t_k: f64, field_v_cm: f64) -> f64 {
        let peak = (-((t_k - S_CURVE_T_OPT) / S_CURVE_WIDTH).powi(2)).exp();
        S_CURVE_J_SAT * peak * (1.0 + 0.1 * (field_v_cm / 1e5).log10())
    }

    /// Invert Richardson's law for the work-function reduction:
    /// j = A·T²·exp(−(φ_W − Δφ)/kT) ⇒ Δφ = φ_W + kT·ln(j/(A·T²)).
    /// Clamped to [0, φ_W]; no reduction when the log argument vanishes.
    pub fn work_function_reduction(j_a_cm2: f64, t_k: f64) -> f64 {
        let arg = j_a_cm2 / (RICHARDSON_A * t_k * t_k);
        if arg <= 0.0 {
            return PHI_TUNGSTEN;
        }
        (PHI_TUNGSTEN + Self::kt_ev(t_k) * arg.ln()).max(0.0)
    }

    /// Coverage from the work-function balance Δφ = θ(φ_W − φ_Cs).
    pub fn coverage(work_function_reduction: f64) -> f64 {
        (work_function_reduction / (PHI_TUNGSTEN - PHI_CESIUM)).clamp(0.0, 1.0)
    }

    /// Saturated cesium vapour pressure [mmHg].
    pub fn cesium_pressure(t_cs_k: f64) -> f64 {
        2.45e8 * (-8910.0 / t_cs_k).exp()
    }

    /// Emission density with the Schottky field correction.
    /// Returns (j [A/cm²], φ_eff [eV]).
    pub fn schottky_emission(t_k: f64, field_v_cm: f64, reduction: f64) -> (f64, f64) {
        let lowering = SCHOTTKY_COEFF * field_v_cm.sqrt();
        let phi_eff = PHI_TUNGSTEN - reduction - lowering;
        let j = RICHARDSON_A * t_k * t_k * (-phi_eff / Self::kt_ev(t_k)).exp();
        (j, phi_eff)
    }

    /// Run the full chain at the configured operating point.
    pub fn calculate(&self) -> EmissionResult {
        let t = self.inputs.cathode_temperature_k;
        let e_field = self.inputs.surface_field_v_cm;

        let s_curve_density = Self::s_curve_density(t, e_field);
        let work_function_reduction = Self::work_function_reduction(s_curve_density, t);
        let coverage = Self::coverage(work_function_reduction);
        let adsorption_rate = self.inputs.cesium_flux_cm2_s * (1.0 - coverage);
        let adatom_density = coverage * MONOLAYER_DENSITY;
        let dipole_arm_cm = work_function_reduction / (DIPOLE_COEFF * adatom_density * Q_EXACT);
        let cesium_pressure_mmhg = Self::cesium_pressure(self.inputs.cesium_temperature_k);
        let schottky_lowering = SCHOTTKY_COEFF * e_field.sqrt();
        let (emission_density, effective_work_function) =
            Self::schottky_emission(t, e_field, work_function_reduction);

        EmissionResult {
            s_curve_density,
            work_function_reduction,
            coverage,
            adsorption_rate,
            adatom_density,
            dipole_arm_cm,
            cesium_pressure_mmhg,
            schottky_lowering,
            effective_work_function,
            emission_density,
        }
    }

    /// S-diagram samples over T ∈ [800, 2000] K.
    pub fn s_diagram(&self) -> Vec<(f64, f64)> {
        let e_field = self.inputs.surface_field_v_cm;
        linspace(800.0, 2000.0, 100)
            .map(|t| (t, Self::s_curve_density(t, e_field)))
            .collect()
    }

    /// Emission density against surface field, log-spaced over
    /// [1e4, 1e7] V/cm at the configured temperature and reduction.
    pub fn field_sweep(&self) -> Vec<(f64, f64)> {
        let t = self.inputs.cathode_temperature_k;
        let reduction =
            Self::work_function_reduction(Self::s_curve_density(t, self.inputs.surface_field_v_cm), t);
        (0..100)
            .map(|i| {
                let exponent = 4.0 + 3.0 * i as f64 / 99.0;
                let e_field = 10f64.powf(exponent);
                (e_field, Self::schottky_emission(t, e_field, reduction).0)
            })
            .collect()
    }

    /// Emission density against cathode temperature over [800, 1500] K
    /// at the configured field and reduction.
    pub fn temperature_sweep(&self) -> Vec<(f64, f64)> {
        let e_field = self.inputs.surface_field_v_cm;
        let t0 = self.inputs.cathode_temperature_k;
        let reduction = Self::work_function_reduction(Self::s_curve_density(t0, e_field), t0);
        linspace(800.0, 1500.0, 50)
            .map(|t| (t, Self::schottky_emission(t, e_field, reduction).0))
            .collect()
    }
}

fn linspace(a: f64, b: f64, n: usize) -> impl Iterator<Item = f64> {
    (0..n).map(move |i| a + (b - a) * i as f64 / (n - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            ((actual - expected) / expected).abs() < 1e-9,
            "{actual} vs {expected}"
        );
    }

    #[test]
    fn test_s_curve_reference_point() {
        let j = EmissionModel::s_curve_density(1000.0, 8e5);
        assert_close(j, 0.40110226514565445);
    }

    #[test]
    fn test_s_curve_peaks_at_optimum() {
        let j_opt = EmissionModel::s_curve_density(1200.0, 8e5);
        for t in [800.0, 1000.0, 1400.0, 2000.0] {
            assert!(EmissionModel::s_curve_density(t, 8e5) < j_opt);
        }
        // Symmetric Gaussian in T around the optimum.
        assert_close(
            EmissionModel::s_curve_density(1000.0, 8e5),
            EmissionModel::s_curve_density(1400.0, 8e5),
        );
    }

    #[test]
    fn test_work_function_reduction_reference() {
        let j = EmissionModel::s_curve_density(1000.0, 8e5);
        let dphi = EmissionModel::work_function_reduction(j, 1000.0);
        assert_close(dphi, 2.8979254095765814);
    }

    #[test]
    fn test_reduction_clamps_on_vanishing_current() {
        assert_close(
            EmissionModel::work_function_reduction(0.0, 1000.0),
            PHI_TUNGSTEN,
        );
        // An absurdly small current would push Δφ negative; it clamps.
        assert_eq!(EmissionModel::work_function_reduction(1e-300, 1000.0), 0.0);
    }

    #[test]
    fn test_coverage_saturates_for_reference_point() {
        let j = EmissionModel::s_curve_density(1000.0, 8e5);
        let dphi = EmissionModel::work_function_reduction(j, 1000.0);
        // Δφ ≈ 2.90 eV > φ_W − φ_Cs = 2.83 eV → full monolayer.
        assert_eq!(EmissionModel::coverage(dphi), 1.0);
    }

    #[test]
    fn test_cesium_pressure_reference() {
        assert_close(
            EmissionModel::cesium_pressure(340.0),
            1.0188165356930098e-3,
        );
    }

    #[test]
    fn test_full_chain_reference() {
        let model = EmissionModel::new(EmissionInputs::default());
        let r = model.calculate();
        assert_close(r.s_curve_density, 0.40110226514565445);
        assert_close(r.work_function_reduction, 2.8979254095765814);
        assert_eq!(r.coverage, 1.0);
        assert_eq!(r.adsorption_rate, 0.0);
        assert_close(r.adatom_density, 1e15);
        assert_close(r.dipole_arm_cm, 2.0322952517958038e17);
        assert_close(r.cesium_pressure_mmhg, 1.0188165356930098e-3);
        assert_close(r.schottky_lowering, 0.3237826431419696);
        assert_close(r.effective_work_function, 1.2982919472814487);
        assert_close(r.emission_density, 17.1809754108527);
    }

    #[test]
    fn test_field_sweep_monotonic() {
        let model = EmissionModel::new(EmissionInputs::default());
        let sweep = model.field_sweep();
        assert_eq!(sweep.len(), 100);
        assert!((sweep[0].0 - 1e4).abs() / 1e4 < 1e-12);
        assert!((sweep[99].0 - 1e7).abs() / 1e7 < 1e-12);
        // Schottky lowering grows with field → density rises.
        for w in sweep.windows(2) {
            assert!(w[1].1 > w[0].1);
        }
    }

    #[test]
    fn test_temperature_sweep_monotonic() {
        let model = EmissionModel::new(EmissionInputs::default());
        let sweep = model.temperature_sweep();
        assert_eq!(sweep.len(), 50);
        // With the reduction frozen at the operating point the
        // Richardson exponential dominates: hotter is always stronger.
        for w in sweep.windows(2) {
            assert!(w[1].1 > w[0].1);
        }
    }
}
