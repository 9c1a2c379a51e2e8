// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Tridiag
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thomas algorithm for tridiagonal systems.
//!
//! Used by the natural cubic spline (second-derivative system) in the
//! probe-characteristic fit.

use spd_types::error::{SpdError, SpdResult};

/// Solve tridiagonal system Ax = d using the Thomas algorithm.
///
/// - `sub`: sub-diagonal \[n\] (sub\[0\] unused)
/// - `diag`: main diagonal \[n\]
/// - `sup`: super-diagonal \[n\] (sup\[n-1\] unused)
/// - `rhs`: right-hand side \[n\]
///
/// Returns the solution vector x \[n\]. Probe sweeps come from outside
/// the program, so a vanishing pivot is reported as an error rather
/// than a panic.
pub fn thomas_solve(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> SpdResult<Vec<f64>> {
    let n = rhs.len();
    if n == 0 || sub.len() != n || diag.len() != n || sup.len() != n {
        return Err(SpdError::SingularSystem(format!(
            "tridiagonal band lengths {}/{}/{} do not match rhs {}",
            sub.len(),
            diag.len(),
            sup.len(),
            n
        )));
    }

    let mut sup_prime = vec![0.0; n];
    let mut rhs_prime = vec![0.0; n];

    // Forward sweep
    if diag[0] == 0.0 {
        return Err(SpdError::SingularSystem("zero pivot at row 0".to_string()));
    }
    sup_prime[0] = sup[0] / diag[0];
    rhs_prime[0] = rhs[0] / diag[0];

    for i in 1..n {
        let den = diag[i] - sub[i] * sup_prime[i - 1];
        if den == 0.0 {
            return Err(SpdError::SingularSystem(format!("zero pivot at row {i}")));
        }
        if i < n - 1 {
            sup_prime[i] = sup[i] / den;
        }
        rhs_prime[i] = (rhs[i] - sub[i] * rhs_prime[i - 1]) / den;
    }

    // Back substitution
    let mut x = vec![0.0; n];
    x[n - 1] = rhs_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = rhs_prime[i] - sup_prime[i] * x[i + 1];
    }

    Ok(x)
}
