// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Probe
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Langmuir-probe current–voltage characteristic.
//!
//! The recorded sweep runs from deep ion saturation (−202 V) through
//! the floating point into electron saturation (+161 V). A cubic
//! smoothing spline flattens digitisation steps; the floating potential
//! is read off the fitted curve's zero crossing.

use spd_math::spline::{CubicSpline, SmoothingSpline};
use spd_types::error::SpdResult;

/// Recorded probe sweep: (voltage [V], current [arb. units]).
pub const PROBE_IV: [(f64, f64); 55] = [
    (-202.2, -0.15),
    (-177.2, -0.14),
    (-160.5, -0.13),
    (-139.7, -0.12),
    (-127.2, -0.10),
    (-98.1, -0.08),
    (-80.1, -0.06),
    (-78.5, -0.06),
    (-77.9, -0.06),
    (-41.6, 1.1),
    (-40.6, 1.4),
    (-36.5, 3.6),
    (-32.3, 4.1),
    (-26.1, 5.1),
    (-23.3, 5.6),
    (-21.6, 6.0),
    (-19.0, 5.0),
    (-18.2, 5.0),
    (-17.4, 6.0),
    (-10.1, 13.0),
    (-8.5, 14.0),
    (-7.4, 13.0),
    (-6.5, 12.0),
    (-2.0, 15.0),
    (-0.5, 15.0),
    (0.2, 28.0),
    (1.0, 28.0),
    (3.0, 28.0),
    (7.2, 28.0),
    (11.3, 29.0),
    (15.6, 27.0),
    (23.8, 27.0),
    (32.1, 28.0),
    (36.3, 27.0),
    (44.6, 29.0),
    (57.1, 31.0),
    (61.3, 31.0),
    (65.4, 32.0),
    (69.6, 33.0),
    (77.9, 34.0),
    (82.1, 35.0),
    (86.3, 37.0),
    (94.6, 38.0),
    (98.8, 39.0),
    (102.9, 41.0),
    (103.1, 45.0),
    (111.2, 48.0),
    (115.4, 50.0),
    (123.7, 50.0),
    (127.9, 49.0),
    (132.1, 49.0),
    (140.4, 48.0),
    (141.5, 47.0),
    (148.7, 47.0),
    (161.2, 48.0),
];

/// A probe sweep plus the smoothing parameter used against it.
#[derive(Debug, Clone)]
pub struct ProbeCharacteristic {
    pub voltage_v: Vec<f64>,
    pub current: Vec<f64>,
}

impl ProbeCharacteristic {
    /// The recorded reference sweep.
    pub fn measured() -> Self {
        ProbeCharacteristic {
            voltage_v: PROBE_IV.iter().map(|&(v, _)| v).collect(),
            current: PROBE_IV.iter().map(|&(_, c)| c).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.voltage_v.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voltage_v.is_empty()
    }

    /// Fit the characteristic with a smoothing spline.
    pub fn fit(&self, lambda: f64) -> SpdResult<ProbeFit> {
        let spline = SmoothingSpline::fit(&self.voltage_v, &self.current, lambda)?;
        Ok(ProbeFit { spline, lambda })
    }

    /// ln(I) over the strictly positive branch only; the ion-saturation
    /// points carry no information for the retardation analysis.
    pub fn log_current_points(&self) -> Vec<(f64, f64)> {
        self.voltage_v
            .iter()
            .zip(self.current.iter())
            .filter(|(_, &c)| c > 0.0)
            .map(|(&v, &c)| (v, c.ln()))
            .collect()
    }
}

/// Smoothing-spline fit of a probe sweep.
#[derive(Debug, Clone)]
pub struct ProbeFit {
    spline: CubicSpline,
    pub lambda: f64,
}

impl ProbeFit {
    pub fn spline(&self) -> &CubicSpline {
        &self.spline
    }

    /// Fitted current at the measurement voltages.
    pub fn fitted(&self) -> &[f64] {
        self.spline.values()
    }

    /// `n` evenly spaced samples of the fitted curve.
    pub fn smoothed(&self, n: usize) -> Vec<(f64, f64)> {
        self.spline.sample(n)
    }

    /// Fitted current at an arbitrary voltage.
    pub fn current_at(&self, voltage: f64) -> f64 {
        self.spline.eval(voltage)
    }

    /// Floating potential: the first upward zero crossing of the fitted
    /// current, linearly interpolated between the bracketing knots.
    /// None when the fit never crosses zero.
    pub fn floating_potential(&self) -> Option<f64> {
        let v = self.spline.knots();
        let f = self.spline.values();
        for i in 0..f.len() - 1 {
            if f[i] <= 0.0 && f[i + 1] > 0.0 {
                return Some(v[i] + (0.0 - f[i]) * (v[i + 1] - v[i]) / (f[i + 1] - f[i]));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAMBDA: f64 = 50.0;

    #[test]
    fn test_sweep_is_strictly_increasing() {
        let probe = ProbeCharacteristic::measured();
        assert_eq!(probe.len(), 55);
        for w in probe.voltage_v.windows(2) {
            assert!(w[1] > w[0], "{} !< {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_fit_reference_values() {
        let fit = ProbeCharacteristic::measured().fit(LAMBDA).unwrap();
        let fitted = fit.fitted();
        // Ion-saturation shoulder stays put under smoothing.
        assert!((fitted[0] - (-0.150034339)).abs() < 1e-6, "{}", fitted[0]);
        assert!((fitted[1] - (-0.139817736)).abs() < 1e-6, "{}", fitted[1]);
        // Residuals stay bounded by the digitisation scatter.
        let probe = ProbeCharacteristic::measured();
        for (f, y) in fitted.iter().zip(probe.current.iter()) {
            assert!((f - y).abs() < 7.0);
        }
    }

    #[test]
    fn test_floating_potential_reference() {
        let fit = ProbeCharacteristic::measured().fit(LAMBDA).unwrap();
        let fp = fit.floating_potential().unwrap();
        assert!(
            (fp - (-75.33201885914151)).abs() < 1e-6,
            "floating potential = {fp}"
        );
    }

    #[test]
    fn test_no_crossing_gives_none() {
        let probe = ProbeCharacteristic {
            voltage_v: vec![0.0, 1.0, 2.0, 3.0],
            current: vec![1.0, 2.0, 3.0, 4.0],
        };
        let fit = probe.fit(1.0).unwrap();
        assert!(fit.floating_potential().is_none());
    }

    #[test]
    fn test_smoothed_sampling() {
        let fit = ProbeCharacteristic::measured().fit(LAMBDA).unwrap();
        let pts = fit.smoothed(200);
        assert_eq!(pts.len(), 200);
        assert!((pts[0].0 - (-202.2)).abs() < 1e-9);
        assert!((pts[199].0 - 161.2).abs() < 1e-9);
        // Electron branch sample against the reference evaluation.
        assert!((fit.current_at(0.0) - 22.241983247901306).abs() < 1e-6);
        assert!((fit.current_at(100.0) - 40.713476482243976).abs() < 1e-6);
    }

    #[test]
    fn test_log_current_excludes_ion_branch() {
        let probe = ProbeCharacteristic::measured();
        let pts = probe.log_current_points();
        assert_eq!(pts.len(), 46);
        assert!((pts[0].0 - (-41.6)).abs() < 1e-12);
        assert!((pts[0].1 - 1.1f64.ln()).abs() < 1e-12);
        assert!(pts.iter().all(|&(_, ln_c)| ln_c.is_finite()));
    }
}
