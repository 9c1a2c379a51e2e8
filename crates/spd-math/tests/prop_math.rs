// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Property-Based Tests (proptest) for spd-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for spd-math using proptest.
//!
//! Covers: Thomas solver residuals, pentadiagonal LDLᵀ residuals,
//! spline knot interpolation and the smoothing-spline limits.

use proptest::prelude::*;
use spd_math::penta::penta_ldl_solve;
use spd_math::spline::{CubicSpline, SmoothingSpline};
use spd_math::tridiag::thomas_solve;

// ── Thomas Solver Properties ─────────────────────────────────────────

proptest! {
    /// For any diagonally dominant tridiagonal system, x = thomas_solve(...)
    /// satisfies Ax = d within floating-point tolerance.
    #[test]
    fn thomas_solve_ax_eq_d(n in 3usize..30) {
        let sub: Vec<f64> = (0..n).map(|i| if i > 0 { -0.3 } else { 0.0 }).collect();
        let diag = vec![2.0; n];
        let sup: Vec<f64> = (0..n).map(|i| if i < n - 1 { -0.3 } else { 0.0 }).collect();
        let rhs: Vec<f64> = (0..n).map(|i| (i as f64 + 1.0).sin()).collect();

        let x = thomas_solve(&sub, &diag, &sup, &rhs).unwrap();

        for i in 0..n {
            let mut ax_i = diag[i] * x[i];
            if i > 0 { ax_i += sub[i] * x[i - 1]; }
            if i < n - 1 { ax_i += sup[i] * x[i + 1]; }
            prop_assert!((ax_i - rhs[i]).abs() < 1e-10,
                "Ax[{}] = {}, d[{}] = {}", i, ax_i, i, rhs[i]);
        }
    }

    /// Identity system (diag=1, bands=0) → x = d.
    #[test]
    fn thomas_identity_system(n in 1usize..50) {
        let sub = vec![0.0; n];
        let diag = vec![1.0; n];
        let sup = vec![0.0; n];
        let rhs: Vec<f64> = (0..n).map(|i| (i as f64) * 0.7 - 3.0).collect();

        let x = thomas_solve(&sub, &diag, &sup, &rhs).unwrap();
        for i in 0..n {
            prop_assert!((x[i] - rhs[i]).abs() < 1e-14);
        }
    }
}

// ── Pentadiagonal LDLᵀ Properties ────────────────────────────────────

proptest! {
    /// Diagonally dominant SPD pentadiagonal systems solve to Ax = b.
    #[test]
    fn penta_solve_ax_eq_b(n in 3usize..40, shift in 0.0f64..2.0) {
        let diag: Vec<f64> = (0..n).map(|i| 4.0 + shift + 0.05 * i as f64).collect();
        let off1: Vec<f64> = (0..n - 1).map(|i| -0.6 + 0.02 * i as f64).collect();
        let off2: Vec<f64> = (0..n - 2).map(|i| 0.25 - 0.01 * i as f64).collect();
        let rhs: Vec<f64> = (0..n).map(|i| ((i * i) as f64 * 0.1).cos()).collect();

        let x = penta_ldl_solve(&diag, &off1, &off2, &rhs).unwrap();

        for i in 0..n {
            let mut ax_i = diag[i] * x[i];
            if i > 0 { ax_i += off1[i - 1] * x[i - 1]; }
            if i + 1 < n { ax_i += off1[i] * x[i + 1]; }
            if i > 1 { ax_i += off2[i - 2] * x[i - 2]; }
            if i + 2 < n { ax_i += off2[i] * x[i + 2]; }
            prop_assert!((ax_i - rhs[i]).abs() < 1e-9,
                "residual at row {}: {}", i, (ax_i - rhs[i]).abs());
        }
    }
}

// ── Spline Properties ────────────────────────────────────────────────

fn knot_grid(n: usize, step: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 * step).collect()
}

proptest! {
    /// The interpolating natural spline passes through every knot.
    #[test]
    fn natural_spline_hits_knots(n in 2usize..24, step in 0.1f64..3.0) {
        let x = knot_grid(n, step);
        let y: Vec<f64> = (0..n).map(|i| ((i as f64) * 1.3).sin()).collect();
        let s = CubicSpline::natural(&x, &y).unwrap();
        for i in 0..n {
            prop_assert!((s.eval(x[i]) - y[i]).abs() < 1e-9,
                "knot {}: {} vs {}", i, s.eval(x[i]), y[i]);
        }
    }

    /// Affine data is reproduced exactly by the smoothing spline for
    /// any positive smoothing parameter.
    #[test]
    fn smoothing_spline_affine_invariance(
        n in 3usize..24,
        step in 0.1f64..3.0,
        slope in -5.0f64..5.0,
        intercept in -10.0f64..10.0,
        lambda in 1e-6f64..1e6,
    ) {
        let x = knot_grid(n, step);
        let y: Vec<f64> = x.iter().map(|&t| slope * t + intercept).collect();
        let s = SmoothingSpline::fit(&x, &y, lambda).unwrap();
        for i in 0..n {
            prop_assert!((s.values()[i] - y[i]).abs() < 1e-7,
                "fitted[{}] = {} vs {}", i, s.values()[i], y[i]);
        }
    }

    /// The fitted curve's residual never exceeds the data's deviation
    /// from its own mean (the spline cannot be worse than the flattest
    /// admissible fit by more than round-off).
    #[test]
    fn smoothing_spline_values_bounded(n in 3usize..24, lambda in 0.0f64..100.0) {
        let x = knot_grid(n, 0.5);
        let y: Vec<f64> = (0..n).map(|i| ((i as f64) * 0.9).cos()).collect();
        let s = SmoothingSpline::fit(&x, &y, lambda).unwrap();
        let (lo, hi) = y.iter().fold((f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let span = (hi - lo).max(1e-12);
        for i in 0..n {
            prop_assert!(s.values()[i] > lo - span && s.values()[i] < hi + span,
                "fitted[{}] = {} escapes data band [{}, {}]", i, s.values()[i], lo, hi);
        }
    }
}
