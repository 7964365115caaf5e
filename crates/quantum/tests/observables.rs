use linalg::{c64, Mat2};
use proptest::prelude::*;
use quantum::{
    gates::{pauli_x, pauli_y, pauli_z},
    noise::{amplitude_damp, dephase, depolarize},
    observables::{basis_probs, bloch, purity, recover_amplitudes, PURITY_THRESHOLD},
    state::{prepare, pure_amplitudes},
};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

fn expect(rho: &Mat2, op: Mat2) -> f64 {
    (*rho * op).trace().re
}

#[test]
fn equator_observables() {
    let rho = prepare(FRAC_PI_2, 0.0);
    let b = bloch(&rho);
    let probs = basis_probs(&b);
    let amps = recover_amplitudes(&rho, PURITY_THRESHOLD).expect("pure state");

    assert!((b.x - 1.0).abs() < 1e-12 && b.y.abs() < 1e-12 && b.z.abs() < 1e-12);
    assert!((probs.z[0] - 0.5).abs() < 1e-12 && (probs.z[1] - 0.5).abs() < 1e-12);
    assert!((probs.x[0] - 1.0).abs() < 1e-12 && probs.x[1].abs() < 1e-12);
    assert!((amps.alpha - c64(FRAC_1_SQRT_2, 0.0)).norm() < 1e-12);
    assert!((amps.beta - c64(FRAC_1_SQRT_2, 0.0)).norm() < 1e-12);
    assert!((purity(&rho) - 1.0).abs() < 1e-12);
}

#[test]
fn y_component_sign() {
    let b = bloch(&prepare(FRAC_PI_2, FRAC_PI_2));
    assert!((b.y + 1.0).abs() < 1e-12, "y = {}", b.y);
}

#[test]
fn bloch_matches_pauli_expectations_up_to_y_sign() {
    let rho = amplitude_damp(&dephase(&prepare(1.2, 0.8), 0.1), 0.15);
    let b = bloch(&rho);

    assert!((b.x - expect(&rho, pauli_x())).abs() < 1e-12);
    assert!((b.y + expect(&rho, pauli_y())).abs() < 1e-12);
    assert!((b.z - expect(&rho, pauli_z())).abs() < 1e-12);
}

#[test]
fn purity_of_maximally_mixed_is_half() {
    let rho = Mat2::identity().scale(0.5);
    assert!((purity(&rho) - 0.5).abs() < 1e-15);
    assert!(recover_amplitudes(&rho, PURITY_THRESHOLD).is_none());
}

#[test]
fn purity_one_only_for_rank_one() {
    let pure = prepare(0.4, 1.9);
    let mixed = depolarize(&pure, 0.01);

    assert!((purity(&pure) - 1.0).abs() < 1e-12);
    assert!(purity(&mixed) < 1.0 - 1e-3);
    assert!(recover_amplitudes(&mixed, PURITY_THRESHOLD).is_none());
}

#[test]
fn depolarized_purity_formula() {
    // (1 + (1-p)^2) / 2 for a pure input
    let rho = depolarize(&prepare(FRAC_PI_2, 0.0), 0.2);
    assert!((purity(&rho) - 0.82).abs() < 1e-12, "purity = {}", purity(&rho));
    assert!((bloch(&rho).rmag - 0.8).abs() < 1e-12);
}

#[test]
fn south_pole_recovers_real_beta() {
    let amps = recover_amplitudes(&prepare(PI, 1.3), PURITY_THRESHOLD).expect("pure state");
    assert!(amps.alpha.norm() < 1e-8);
    assert!((amps.beta.norm() - 1.0).abs() < 1e-12);
}

proptest! {
    #[test]
    fn amplitude_round_trip(theta in 0.0f64..3.0, phi in 0.0f64..(2.0 * PI)) {
        let (alpha, beta) = pure_amplitudes(theta, phi);
        let amps = recover_amplitudes(&prepare(theta, phi), PURITY_THRESHOLD);
        prop_assert!(amps.is_some());
        let amps = amps.unwrap();
        prop_assert!((amps.alpha - alpha).norm() < 1e-9, "alpha {} vs {}", amps.alpha, alpha);
        if beta.norm() > 1e-6 {
            prop_assert!((amps.beta - beta).norm() < 1e-9, "beta {} vs {}", amps.beta, beta);
        }
    }

    #[test]
    fn basis_pairs_sum_to_one(theta in 0.0f64..=PI, phi in 0.0f64..(2.0 * PI), p in 0.0f64..1.0, g in 0.0f64..1.0) {
        let rho = amplitude_damp(&depolarize(&prepare(theta, phi), p), g);
        let probs = basis_probs(&bloch(&rho));
        for pair in [probs.z, probs.x, probs.y] {
            prop_assert!((pair[0] + pair[1] - 1.0).abs() < 1e-9);
            prop_assert!(pair[0] >= -1e-9 && pair[1] >= -1e-9);
        }
    }

    #[test]
    fn bloch_length_tracks_purity(theta in 0.0f64..=PI, phi in 0.0f64..(2.0 * PI), p in 0.0f64..1.0) {
        let rho = depolarize(&prepare(theta, phi), p);
        let b = bloch(&rho);
        prop_assert!(b.rmag <= 1.0 + 1e-9);
        prop_assert!((purity(&rho) - (1.0 + b.rmag * b.rmag) / 2.0).abs() < 1e-9);
    }
}
