// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Pipeline Bench
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spd_physics::pipeline;
use spd_types::config::ThrusterConfig;

fn dense_campaign(stations: usize) -> ThrusterConfig {
    let mut cfg = ThrusterConfig::default();
    let p = &mut cfg.profiles;
    let interp = |a: f64, b: f64, t: f64| a + (b - a) * t;
    p.distance_mm = (0..stations).map(|i| 10.0 + 20.0 * i as f64 / (stations - 1) as f64).collect();
    p.plasma_potential_v = (0..stations)
        .map(|i| interp(199.3, 75.5, i as f64 / (stations - 1) as f64))
        .collect();
    p.magnetic_field_gauss = (0..stations)
        .map(|i| interp(5.56, 154.8, i as f64 / (stations - 1) as f64))
        .collect();
    p.electron_current_a = (0..stations)
        .map(|i| interp(2.59, 0.5, i as f64 / (stations - 1) as f64))
        .collect();
    p.ion_current_a = (0..stations)
        .map(|i| interp(0.108, 2.19, i as f64 / (stations - 1) as f64))
        .collect();
    p.electron_temperature_ev = (0..stations)
        .map(|i| interp(4.0, 2.47, i as f64 / (stations - 1) as f64))
        .collect();
    p.elastic_time_s = (0..stations)
        .map(|i| interp(0.764e-7, 1.84e-7, i as f64 / (stations - 1) as f64))
        .collect();
    p.inelastic_time_s = (0..stations)
        .map(|i| interp(7.23e-6, 2.44e-6, i as f64 / (stations - 1) as f64))
        .collect();
    cfg
}

fn bench_derive(c: &mut Criterion) {
    let reference = ThrusterConfig::default();
    c.bench_function("derive_3_stations", |b| {
        b.iter(|| pipeline::derive(black_box(&reference)).unwrap())
    });

    let dense = dense_campaign(1000);
    c.bench_function("derive_1000_stations", |b| {
        b.iter(|| pipeline::derive(black_box(&dense)).unwrap())
    });
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
