// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Spline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Natural cubic splines and the cubic smoothing spline.
//!
//! The smoothing spline minimises Σ(yᵢ − f(xᵢ))² + λ∫f″² in the Reinsch
//! penalty form: solve (R + λQᵀQ)γ = Qᵀy for the interior second
//! derivatives γ, then ŷ = y − λQγ. The result is the natural cubic
//! spline through ŷ with second derivatives γ (zero at both ends).
//! λ→0 interpolates the data; λ→∞ tends to the least-squares line.

use spd_types::error::{SpdError, SpdResult};

use crate::penta::penta_ldl_solve;
use crate::tridiag::thomas_solve;

fn check_abscissa(x: &[f64], y: &[f64], min_len: usize) -> SpdResult<()> {
    if x.len() < min_len || x.len() != y.len() {
        return Err(SpdError::InvalidProfile {
            message: format!(
                "spline needs at least {min_len} matched points, got {}/{}",
                x.len(),
                y.len()
            ),
        });
    }
    for i in 0..x.len() - 1 {
        if x[i + 1] <= x[i] {
            return Err(SpdError::NonMonotonicAbscissa { index: i + 1 });
        }
    }
    Ok(())
}

/// A natural cubic spline: knot values plus second derivatives, zero
/// curvature at both ends.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    knots: Vec<f64>,
    values: Vec<f64>,
    second_derivatives: Vec<f64>,
}

impl CubicSpline {
    /// Interpolating natural spline through (x, y).
    pub fn natural(x: &[f64], y: &[f64]) -> SpdResult<Self> {
        check_abscissa(x, y, 2)?;
        let n = x.len();
        let mut m = vec![0.0; n];

        if n > 2 {
            // Interior second derivatives from the tridiagonal
            // continuity system; natural ends stay zero.
            let rows = n - 2;
            let h: Vec<f64> = (0..n - 1).map(|i| x[i + 1] - x[i]).collect();
            let mut sub = vec![0.0; rows];
            let mut diag = vec![0.0; rows];
            let mut sup = vec![0.0; rows];
            let mut rhs = vec![0.0; rows];
            for j in 0..rows {
                let i = j + 1;
                if j > 0 {
                    sub[j] = h[i - 1] / 6.0;
                }
                diag[j] = (h[i - 1] + h[i]) / 3.0;
                if j + 1 < rows {
                    sup[j] = h[i] / 6.0;
                }
                rhs[j] = (y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1];
            }
            let gamma = thomas_solve(&sub, &diag, &sup, &rhs)?;
            m[1..(rows + 1)].copy_from_slice(&gamma);
        }

        Ok(CubicSpline {
            knots: x.to_vec(),
            values: y.to_vec(),
            second_derivatives: m,
        })
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Values at the knots (the fitted values for a smoothing spline).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn second_derivatives(&self) -> &[f64] {
        &self.second_derivatives
    }

    /// Evaluate at `t`. Outside the knot range the end cubics are
    /// extended (clamped to the first/last interval).
    pub fn eval(&self, t: f64) -> f64 {
        let x = &self.knots;
        let n = x.len();
        let mut i = 0;
        if t >= x[n - 1] {
            i = n - 2;
        } else if t > x[0] {
            while x[i + 1] < t {
                i += 1;
            }
        }

        let h = x[i + 1] - x[i];
        let a = (x[i + 1] - t) / h;
        let b = (t - x[i]) / h;
        let m = &self.second_derivatives;
        a * self.values[i]
            + b * self.values[i + 1]
            + ((a.powi(3) - a) * m[i] + (b.powi(3) - b) * m[i + 1]) * h * h / 6.0
    }

    /// `n` evenly spaced (t, f(t)) samples across the knot range.
    pub fn sample(&self, n: usize) -> Vec<(f64, f64)> {
        let x0 = self.knots[0];
        let x1 = self.knots[self.knots.len() - 1];
        (0..n)
            .map(|i| {
                let t = if n > 1 {
                    x0 + (x1 - x0) * i as f64 / (n - 1) as f64
                } else {
                    x0
                };
                (t, self.eval(t))
            })
            .collect()
    }
}

/// Cubic smoothing spline fit.
pub struct SmoothingSpline;

impl SmoothingSpline {
    /// Fit (x, y) with smoothing parameter `lambda` ≥ 0.
    ///
    /// `lambda` carries units of x³ (curvature penalty against squared
    /// residuals); zero reduces to natural interpolation.
    pub fn fit(x: &[f64], y: &[f64], lambda: f64) -> SpdResult<CubicSpline> {
        check_abscissa(x, y, 3)?;
        if !(lambda >= 0.0) {
            return Err(SpdError::InvalidProfile {
                message: format!("smoothing parameter must be non-negative, got {lambda}"),
            });
        }
        if lambda == 0.0 {
            return CubicSpline::natural(x, y);
        }

        let n = x.len();
        let rows = n - 2;
        let h: Vec<f64> = (0..n - 1).map(|i| x[i + 1] - x[i]).collect();

        // Column j of Q touches rows j, j+1, j+2.
        let q1: Vec<f64> = (0..rows).map(|j| 1.0 / h[j]).collect();
        let q2: Vec<f64> = (0..rows).map(|j| -1.0 / h[j] - 1.0 / h[j + 1]).collect();
        let q3: Vec<f64> = (0..rows).map(|j| 1.0 / h[j + 1]).collect();

        // Bands of R + λQᵀQ.
        let mut diag = vec![0.0; rows];
        let mut off1 = vec![0.0; rows.saturating_sub(1)];
        let mut off2 = vec![0.0; rows.saturating_sub(2)];
        for j in 0..rows {
            let r_jj = (h[j] + h[j + 1]) / 3.0;
            diag[j] = r_jj + lambda * (q1[j] * q1[j] + q2[j] * q2[j] + q3[j] * q3[j]);
        }
        for j in 0..rows.saturating_sub(1) {
            let r_j1 = h[j + 1] / 6.0;
            off1[j] = r_j1 + lambda * (q2[j] * q1[j + 1] + q3[j] * q2[j + 1]);
        }
        for j in 0..rows.saturating_sub(2) {
            off2[j] = lambda * q3[j] * q1[j + 2];
        }

        // Qᵀy
        let qty: Vec<f64> = (0..rows)
            .map(|j| q1[j] * y[j] + q2[j] * y[j + 1] + q3[j] * y[j + 2])
            .collect();

        let gamma = penta_ldl_solve(&diag, &off1, &off2, &qty)?;

        // ŷ = y − λQγ
        let mut q_gamma = vec![0.0; n];
        for j in 0..rows {
            q_gamma[j] += q1[j] * gamma[j];
            q_gamma[j + 1] += q2[j] * gamma[j];
            q_gamma[j + 2] += q3[j] * gamma[j];
        }
        let fitted: Vec<f64> = (0..n).map(|i| y[i] - lambda * q_gamma[i]).collect();

        let mut m = vec![0.0; n];
        m[1..(rows + 1)].copy_from_slice(&gamma);

        Ok(CubicSpline {
            knots: x.to_vec(),
            values: fitted,
            second_derivatives: m,
        })
    }
}
