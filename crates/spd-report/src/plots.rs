// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Plots
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Diagnostic figures rendered to SVG.
//!
//! Log-scaled panels drop non-positive values before ranging, so a
//! degenerate series cannot poison an axis.

use std::error::Error;
use std::path::Path;

use ndarray::Array1;
use plotters::coord::Shift;
use plotters::prelude::*;
use spd_cathode::emission::EmissionModel;
use spd_diagnostics::probe::{ProbeCharacteristic, ProbeFit};
use spd_physics::pipeline::PlasmaDerived;
use spd_types::error::{SpdError, SpdResult};
use spd_types::state::MeasuredProfiles;

type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

const SERIES_COLORS: [RGBColor; 3] = [RED, BLUE, GREEN];

fn pair(x: &Array1<f64>, y: &Array1<f64>) -> Vec<(f64, f64)> {
    x.iter().zip(y.iter()).map(|(&a, &b)| (a, b)).collect()
}

/// Positive-value bounds for a log axis, padded by a factor of 2.
fn log_bounds(series: &[Vec<(f64, f64)>]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for s in series {
        for &(_, v) in s {
            if v > 0.0 && v.is_finite() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.1, 10.0);
    }
    (lo * 0.5, hi * 2.0)
}

/// Linear bounds padded by 5% of the span.
fn lin_bounds(series: &[Vec<(f64, f64)>]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for s in series {
        for &(_, v) in s {
            if v.is_finite() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.05).max(1e-12);
    (lo - pad, hi + pad)
}

fn x_bounds(series: &[Vec<(f64, f64)>]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for s in series {
        for &(x, _) in s {
            lo = lo.min(x);
            hi = hi.max(x);
        }
    }
    let pad = ((hi - lo) * 0.03).max(1e-12);
    (lo - pad, hi + pad)
}

fn draw_log_panel(
    area: &Panel,
    title: &str,
    x_label: &str,
    y_label: &str,
    series: &[(&str, Vec<(f64, f64)>)],
) -> Result<(), Box<dyn Error>> {
    let all: Vec<Vec<(f64, f64)>> = series.iter().map(|(_, s)| s.clone()).collect();
    let (x_lo, x_hi) = x_bounds(&all);
    let (y_lo, y_hi) = log_bounds(&all);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(8)
        .x_label_area_size(34)
        .y_label_area_size(56)
        .build_cartesian_2d(x_lo..x_hi, (y_lo..y_hi).log_scale())?;
    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()?;

    for (idx, (name, pts)) in series.iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        let positive: Vec<(f64, f64)> = pts.iter().copied().filter(|&(_, v)| v > 0.0).collect();
        chart
            .draw_series(LineSeries::new(positive.clone(), &color))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &color));
        chart.draw_series(
            positive
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
        )?;
    }
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

fn draw_linear_panel(
    area: &Panel,
    title: &str,
    x_label: &str,
    y_label: &str,
    series: &[(&str, Vec<(f64, f64)>)],
) -> Result<(), Box<dyn Error>> {
    let all: Vec<Vec<(f64, f64)>> = series.iter().map(|(_, s)| s.clone()).collect();
    let (x_lo, x_hi) = x_bounds(&all);
    let (y_lo, y_hi) = lin_bounds(&all);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(8)
        .x_label_area_size(34)
        .y_label_area_size(56)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()?;

    for (idx, (name, pts)) in series.iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        chart
            .draw_series(LineSeries::new(pts.clone(), &color))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &color));
        chart.draw_series(pts.iter().map(|&(x, y)| Circle::new((x, y), 3, color.filled())))?;
    }
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

/// 3×3 panel figure over the axial stations.
pub fn plot_plasma_panels(
    path: &Path,
    profiles: &MeasuredProfiles,
    derived: &PlasmaDerived,
) -> SpdResult<()> {
    draw_plasma_panels(path, profiles, derived).map_err(|e| SpdError::Render(e.to_string()))
}

fn draw_plasma_panels(
    path: &Path,
    profiles: &MeasuredProfiles,
    derived: &PlasmaDerived,
) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (1500, 1200)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((3, 3));
    let x = &profiles.distance_mm;
    let x_label = "Distance (mm)";

    draw_log_panel(
        &panels[0],
        "Particle concentrations",
        x_label,
        "Concentration (m^-3)",
        &[
            ("Electrons", pair(x, &derived.concentrations.electron_m3)),
            ("Ions", pair(x, &derived.concentrations.ion_m3)),
            ("Neutrals", pair(x, &derived.concentrations.neutral_m3)),
        ],
    )?;

    draw_linear_panel(
        &panels[1],
        "Particle temperatures",
        x_label,
        "Temperature (eV)",
        &[
            ("Electrons", pair(x, &profiles.electron_temperature_ev)),
            ("Ions", pair(x, &derived.velocities.ion_temperature_ev)),
        ],
    )?;

    draw_log_panel(
        &panels[2],
        "Particle velocities",
        x_label,
        "Velocity (m/s)",
        &[
            ("Electrons", pair(x, &derived.velocities.electron_m_s)),
            ("Ions", pair(x, &derived.velocities.ion_m_s)),
        ],
    )?;

    draw_log_panel(
        &panels[3],
        "Hall parameters",
        x_label,
        "Hall parameter",
        &[
            ("Electrons", pair(x, &derived.transport.electron_hall)),
            ("Ions", pair(x, &derived.transport.ion_hall)),
        ],
    )?;

    draw_log_panel(
        &panels[4],
        "Total collision frequencies",
        x_label,
        "Frequency (s^-1)",
        &[
            ("Electrons", pair(x, &derived.collisions.electron_total)),
            ("Ions", pair(x, &derived.collisions.ion_total)),
            ("Neutrals", pair(x, &derived.collisions.neutral_total)),
        ],
    )?;

    draw_log_panel(
        &panels[5],
        "Mean free paths",
        x_label,
        "Free path (m)",
        &[
            ("Electrons", pair(x, &derived.transport.electron_mfp_m)),
            ("Ions", pair(x, &derived.transport.ion_mfp_m)),
            ("Neutrals", pair(x, &derived.transport.neutral_mfp_m)),
        ],
    )?;

    draw_log_panel(
        &panels[6],
        "Electric conductivity",
        x_label,
        "Conductivity (S/m)",
        &[
            (
                "Along B",
                pair(x, &derived.transport.conductivity_parallel_s_m),
            ),
            (
                "Across B",
                pair(x, &derived.transport.conductivity_transverse_s_m),
            ),
        ],
    )?;

    draw_log_panel(
        &panels[7],
        "Larmor radii",
        x_label,
        "Larmor radius (m)",
        &[
            ("Electrons", pair(x, &derived.gyromotion.electron_larmor_m)),
            ("Ions", pair(x, &derived.gyromotion.ion_larmor_m)),
        ],
    )?;

    draw_potential_field_panel(&panels[8], profiles)?;

    root.present()?;
    Ok(())
}

/// Plasma potential (left axis) against magnetic field (right axis).
fn draw_potential_field_panel(
    area: &Panel,
    profiles: &MeasuredProfiles,
) -> Result<(), Box<dyn Error>> {
    let pot = pair(&profiles.distance_mm, &profiles.potential_v);
    let field = pair(&profiles.distance_mm, &profiles.field_gauss);
    let (x_lo, x_hi) = x_bounds(&[pot.clone(), field.clone()]);
    let (p_lo, p_hi) = lin_bounds(&[pot.clone()]);
    let (f_lo, f_hi) = lin_bounds(&[field.clone()]);

    let mut chart = ChartBuilder::on(area)
        .caption("Plasma potential and magnetic field", ("sans-serif", 18))
        .margin(8)
        .x_label_area_size(34)
        .y_label_area_size(56)
        .right_y_label_area_size(56)
        .build_cartesian_2d(x_lo..x_hi, p_lo..p_hi)?
        .set_secondary_coord(x_lo..x_hi, f_lo..f_hi);

    chart
        .configure_mesh()
        .x_desc("Distance (mm)")
        .y_desc("Plasma potential (V)")
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("Magnetic field (G)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(pot.clone(), &RED))?
        .label("Plasma potential")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &RED));
    chart.draw_series(pot.iter().map(|&(x, y)| Circle::new((x, y), 3, RED.filled())))?;

    chart
        .draw_secondary_series(LineSeries::new(field.clone(), &BLUE))?
        .label("Magnetic field")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &BLUE));
    chart.draw_secondary_series(
        field
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

/// Raw sweep + smoothing-spline fit, with the log-current branch in a
/// second panel.
pub fn plot_probe_fit(path: &Path, probe: &ProbeCharacteristic, fit: &ProbeFit) -> SpdResult<()> {
    draw_probe_fit(path, probe, fit).map_err(|e| SpdError::Render(e.to_string()))
}

fn draw_probe_fit(
    path: &Path,
    probe: &ProbeCharacteristic,
    fit: &ProbeFit,
) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (1200, 500)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    let raw: Vec<(f64, f64)> = probe
        .voltage_v
        .iter()
        .zip(probe.current.iter())
        .map(|(&v, &c)| (v, c))
        .collect();
    let smooth = fit.smoothed(400);

    {
        let (x_lo, x_hi) = x_bounds(&[raw.clone()]);
        let (y_lo, y_hi) = lin_bounds(&[raw.clone(), smooth.clone()]);
        let mut chart = ChartBuilder::on(&panels[0])
            .caption("Probe IV characteristic", ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(34)
            .y_label_area_size(56)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
        chart
            .configure_mesh()
            .x_desc("Voltage (V)")
            .y_desc("Current (arb. units)")
            .draw()?;
        chart
            .draw_series(raw.iter().map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())))?
            .label("Measured")
            .legend(|(x, y)| Circle::new((x + 8, y), 3, BLUE.filled()));
        chart
            .draw_series(LineSeries::new(smooth.clone(), &RED))?
            .label("Smoothing spline")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &RED));
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    {
        let log_pts = probe.log_current_points();
        let (x_lo, x_hi) = x_bounds(&[log_pts.clone()]);
        let (y_lo, y_hi) = lin_bounds(&[log_pts.clone()]);
        let mut chart = ChartBuilder::on(&panels[1])
            .caption("Electron branch, log current", ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(34)
            .y_label_area_size(56)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
        chart
            .configure_mesh()
            .x_desc("Voltage (V)")
            .y_desc("ln I")
            .draw()?;
        chart.draw_series(LineSeries::new(log_pts.clone(), &BLUE))?;
        chart.draw_series(
            log_pts
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
        )?;
    }

    root.present()?;
    Ok(())
}

/// S-diagram, field sweep and temperature sweep for the cathode.
pub fn plot_emission(path: &Path, model: &EmissionModel) -> SpdResult<()> {
    draw_emission(path, model).map_err(|e| SpdError::Render(e.to_string()))
}

fn draw_emission(path: &Path, model: &EmissionModel) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (1500, 450)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 3));

    let t_op = model.inputs.cathode_temperature_k;

    {
        let s_curve = model.s_diagram();
        let (y_lo, y_hi) = log_bounds(&[s_curve.clone()]);
        let mut chart = ChartBuilder::on(&panels[0])
            .caption("W-Cs S-diagram", ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(34)
            .y_label_area_size(56)
            .build_cartesian_2d(800f64..2000f64, (y_lo..y_hi).log_scale())?;
        chart
            .configure_mesh()
            .x_desc("Temperature (K)")
            .y_desc("Current density (A/cm^2)")
            .draw()?;
        chart
            .draw_series(LineSeries::new(s_curve, &BLUE))?
            .label("S-curve")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &BLUE));
        chart
            .draw_series(LineSeries::new(vec![(t_op, y_lo), (t_op, y_hi)], &RED))?
            .label("Operating point")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &RED));
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    {
        let sweep = model.field_sweep();
        let (y_lo, y_hi) = log_bounds(&[sweep.clone()]);
        let mut chart = ChartBuilder::on(&panels[1])
            .caption("Emission vs surface field", ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(34)
            .y_label_area_size(56)
            .build_cartesian_2d((1e4f64..1e7f64).log_scale(), (y_lo..y_hi).log_scale())?;
        chart
            .configure_mesh()
            .x_desc("Field (V/cm)")
            .y_desc("Current density (A/cm^2)")
            .draw()?;
        chart.draw_series(LineSeries::new(sweep, &BLUE))?;
        chart.draw_series(LineSeries::new(
            vec![
                (model.inputs.surface_field_v_cm, y_lo),
                (model.inputs.surface_field_v_cm, y_hi),
            ],
            &RED,
        ))?;
    }

    {
        let sweep = model.temperature_sweep();
        let (y_lo, y_hi) = log_bounds(&[sweep.clone()]);
        let mut chart = ChartBuilder::on(&panels[2])
            .caption("Emission vs temperature", ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(34)
            .y_label_area_size(56)
            .build_cartesian_2d(800f64..1500f64, (y_lo..y_hi).log_scale())?;
        chart
            .configure_mesh()
            .x_desc("Temperature (K)")
            .y_desc("Current density (A/cm^2)")
            .draw()?;
        chart.draw_series(LineSeries::new(sweep, &BLUE))?;
        chart.draw_series(LineSeries::new(vec![(t_op, y_lo), (t_op, y_hi)], &RED))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spd_cathode::emission::EmissionInputs;
    use spd_physics::pipeline;
    use spd_types::config::ThrusterConfig;

    fn tmp(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn test_plasma_panels_render() {
        let cfg = ThrusterConfig::default();
        let profiles = cfg.create_profiles();
        let derived = pipeline::derive(&cfg).unwrap();
        let path = tmp("spd_test_plasma_panels.svg");
        plot_plasma_panels(&path, &profiles, &derived).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn test_probe_figure_renders() {
        let probe = ProbeCharacteristic::measured();
        let fit = probe.fit(50.0).unwrap();
        let path = tmp("spd_test_probe_fit.svg");
        plot_probe_fit(&path, &probe, &fit).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_emission_figure_renders() {
        let model = EmissionModel::new(EmissionInputs::default());
        let path = tmp("spd_test_emission.svg");
        plot_emission(&path, &model).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_log_bounds_skip_non_positive() {
        let series = vec![vec![(0.0, -1.0), (1.0, 0.0), (2.0, 4.0), (3.0, 100.0)]];
        let (lo, hi) = log_bounds(&series);
        assert!((lo - 2.0).abs() < 1e-12);
        assert!((hi - 200.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_bounds_degenerate_series() {
        let series = vec![vec![(0.0, -1.0), (1.0, -2.0)]];
        let (lo, hi) = log_bounds(&series);
        assert!(lo > 0.0 && hi > lo);
    }
}
