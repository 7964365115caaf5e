use simulator::{
    decay_curve,
    output::{write_rows, CSV_HEADER},
    sweep_strengths, ChannelKind,
};
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn curve_starts_pure_and_decays() {
    let rows = decay_curve(FRAC_PI_2, 0.0, ChannelKind::Depolarizing, 0.2, 10);

    assert_eq!(rows.len(), 11);
    assert_eq!(rows[0].tick, 0);
    assert!((rows[0].purity - 1.0).abs() < 1e-12);
    assert!((rows[1].purity - 0.82).abs() < 1e-12);
    for w in rows.windows(2) {
        assert!(w[1].rmag < w[0].rmag, "Bloch length did not shrink at tick {}", w[1].tick);
    }
    // depolarizing scales the Bloch vector by (1-p) every tick
    assert!((rows[10].rmag - 0.8f64.powi(10)).abs() < 1e-12);
}

#[test]
fn dephasing_preserves_populations() {
    let rows = decay_curve(1.0, 0.5, ChannelKind::Dephasing, 0.2, 20);
    let p0 = rows[0].p0;
    assert!(rows.iter().all(|r| (r.p0 - p0).abs() < 1e-12));
    assert!(rows[20].purity < rows[0].purity);
}

#[test]
fn damping_drives_to_ground() {
    let rows = decay_curve(PI, 0.0, ChannelKind::Damping, 0.2, 100);
    assert!(rows[0].p0 < 1e-12);
    assert!((rows[100].p0 - 1.0).abs() < 1e-9);
}

#[test]
fn parallel_sweep_keeps_input_order() {
    let strengths = [0.2, 0.0, 0.05, 0.1];
    let curves = sweep_strengths(FRAC_PI_2, 0.0, ChannelKind::Depolarizing, &strengths, 5);

    assert_eq!(curves.len(), strengths.len());
    for (curve, &s) in curves.iter().zip(strengths.iter()) {
        assert!(curve.iter().all(|r| r.strength == s));
        assert_eq!(curve, &decay_curve(FRAC_PI_2, 0.0, ChannelKind::Depolarizing, s, 5));
    }
    // zero strength never evolves
    assert!(curves[1].iter().all(|r| (r.purity - 1.0).abs() < 1e-12));
}

#[test]
fn csv_layout() {
    let rows = decay_curve(0.0, 0.0, ChannelKind::Damping, 0.1, 2);
    let mut buf = Vec::new();
    write_rows(&mut buf, &rows).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("damping,0.1,0,"));
    assert_eq!(lines[3].split(',').count(), 6);
}
