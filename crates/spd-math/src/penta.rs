// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Penta
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! LDLᵀ solve for symmetric positive-definite pentadiagonal systems.
//!
//! The smoothing-spline normal matrix R + λQᵀQ has half-bandwidth 2;
//! the factorization keeps that band structure, so the solve is O(n).

use spd_types::error::{SpdError, SpdResult};

/// Solve Ax = b for symmetric pentadiagonal A given by its bands:
///
/// - `diag`: main diagonal \[n\]
/// - `off1`: first off-diagonal \[n-1\] (A\[i\]\[i+1\])
/// - `off2`: second off-diagonal \[n-2\] (A\[i\]\[i+2\])
///
/// A must be positive definite; a non-positive pivot is reported as a
/// singular-system error.
pub fn penta_ldl_solve(
    diag: &[f64],
    off1: &[f64],
    off2: &[f64],
    rhs: &[f64],
) -> SpdResult<Vec<f64>> {
    let n = diag.len();
    if n == 0 || rhs.len() != n || off1.len() + 1 != n.max(1) || off2.len() + 2 != n.max(2) {
        return Err(SpdError::SingularSystem(format!(
            "pentadiagonal band lengths {}/{}/{} do not match rhs {}",
            diag.len(),
            off1.len(),
            off2.len(),
            rhs.len()
        )));
    }

    // A = L D Lᵀ with unit lower-triangular L carrying bands e (first
    // sub-diagonal) and f (second sub-diagonal).
    let mut d = vec![0.0; n];
    let mut e = vec![0.0; n];
    let mut f = vec![0.0; n];

    for i in 0..n {
        let fi = if i >= 2 { off2[i - 2] / d[i - 2] } else { 0.0 };
        let ei = if i >= 1 {
            let corr = if i >= 2 { fi * e[i - 1] * d[i - 2] } else { 0.0 };
            (off1[i - 1] - corr) / d[i - 1]
        } else {
            0.0
        };
        let mut di = diag[i];
        if i >= 1 {
            di -= ei * ei * d[i - 1];
        }
        if i >= 2 {
            di -= fi * fi * d[i - 2];
        }
        if di <= 0.0 {
            return Err(SpdError::SingularSystem(format!(
                "non-positive pivot {di} at row {i}"
            )));
        }
        d[i] = di;
        e[i] = ei;
        f[i] = fi;
    }

    // Forward solve L z = b
    let mut z = vec![0.0; n];
    for i in 0..n {
        let mut zi = rhs[i];
        if i >= 1 {
            zi -= e[i] * z[i - 1];
        }
        if i >= 2 {
            zi -= f[i] * z[i - 2];
        }
        z[i] = zi;
    }

    // Diagonal scale
    for i in 0..n {
        z[i] /= d[i];
    }

    // Back solve Lᵀ x = z
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut xi = z[i];
        if i + 1 < n {
            xi -= e[i + 1] * x[i + 1];
        }
        if i + 2 < n {
            xi -= f[i + 2] * x[i + 2];
        }
        x[i] = xi;
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band_mul(diag: &[f64], off1: &[f64], off2: &[f64], v: &[f64]) -> Vec<f64> {
        let n = diag.len();
        let mut out = vec![0.0; n];
        for i in 0..n {
            out[i] = diag[i] * v[i];
            if i > 0 {
                out[i] += off1[i - 1] * v[i - 1];
            }
            if i + 1 < n {
                out[i] += off1[i] * v[i + 1];
            }
            if i > 1 {
                out[i] += off2[i - 2] * v[i - 2];
            }
            if i + 2 < n {
                out[i] += off2[i] * v[i + 2];
            }
        }
        out
    }

    #[test]
    fn test_penta_identity() {
        let n = 6;
        let diag = vec![1.0; n];
        let off1 = vec![0.0; n - 1];
        let off2 = vec![0.0; n - 2];
        let rhs: Vec<f64> = (0..n).map(|i| i as f64 - 2.0).collect();
        let x = penta_ldl_solve(&diag, &off1, &off2, &rhs).unwrap();
        for i in 0..n {
            assert!((x[i] - rhs[i]).abs() < 1e-14);
        }
    }

    #[test]
    fn test_penta_diagonally_dominant_residual() {
        let n = 9;
        let diag: Vec<f64> = (0..n).map(|i| 4.0 + 0.1 * i as f64).collect();
        let off1: Vec<f64> = (0..n - 1).map(|i| -0.5 + 0.03 * i as f64).collect();
        let off2: Vec<f64> = (0..n - 2).map(|i| 0.2 - 0.01 * i as f64).collect();
        let rhs: Vec<f64> = (0..n).map(|i| ((i + 1) as f64).sin()).collect();

        let x = penta_ldl_solve(&diag, &off1, &off2, &rhs).unwrap();
        let ax = band_mul(&diag, &off1, &off2, &x);
        for i in 0..n {
            assert!(
                (ax[i] - rhs[i]).abs() < 1e-10,
                "residual at row {i}: {}",
                (ax[i] - rhs[i]).abs()
            );
        }
    }

    #[test]
    fn test_penta_indefinite_is_error() {
        let diag = vec![1.0, -5.0, 1.0];
        let off1 = vec![0.0, 0.0];
        let off2 = vec![0.0];
        let rhs = vec![1.0, 1.0, 1.0];
        assert!(penta_ldl_solve(&diag, &off1, &off2, &rhs).is_err());
    }
}
