//! Single-qubit noise channels acting on a density matrix.
//!
//! Every channel is trace preserving and keeps ρ Hermitian. Strengths are
//! clamped to [0, 1] before use, so out-of-range input degrades to the
//! nearest physical channel instead of producing complex square roots.
//! Strength 0 is the identity map for all three.

use linalg::{c64, Mat2};

#[inline]
fn clamp_strength(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Phase damping: coherences shrink by (1 - p), populations untouched.
pub fn dephase(rho: &Mat2, p: f64) -> Mat2 {
    let keep = 1.0 - clamp_strength(p);
    let mut out = *rho;
    out[0][1] *= keep;
    out[1][0] *= keep;
    out
}

/// Depolarizing: (1 - p)·ρ + p·I/2.
pub fn depolarize(rho: &Mat2, p: f64) -> Mat2 {
    let p = clamp_strength(p);
    rho.scale(1.0 - p) + Mat2::identity().scale(p / 2.0)
}

/// Kraus operators of amplitude damping with decay probability `gamma`.
///
/// ```text
/// E0 = [[1, 0], [0, √(1-γ)]]
/// E1 = [[0, √γ], [0, 0]]
/// ```
pub fn damping_kraus(gamma: f64) -> [Mat2; 2] {
    let g = clamp_strength(gamma);
    let z = c64(0.0, 0.0);
    let e0 = Mat2::diag(c64(1.0, 0.0), c64((1.0 - g).max(0.0).sqrt(), 0.0));
    let e1 = Mat2::new(z, c64(g.sqrt(), 0.0), z, z);
    [e0, e1]
}

/// Amplitude damping: relaxation of |1⟩ toward |0⟩.
pub fn amplitude_damp(rho: &Mat2, gamma: f64) -> Mat2 {
    damping_kraus(gamma)
        .iter()
        .fold(Mat2::zero(), |acc, e| acc + e.sandwich(rho))
}

/// One configured noise channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channel {
    Dephasing(f64),
    Depolarizing(f64),
    AmplitudeDamping(f64),
}

impl Channel {
    pub fn apply(&self, rho: &Mat2) -> Mat2 {
        match *self {
            Channel::Dephasing(p) => dephase(rho, p),
            Channel::Depolarizing(p) => depolarize(rho, p),
            Channel::AmplitudeDamping(gamma) => amplitude_damp(rho, gamma),
        }
    }

    pub fn strength(&self) -> f64 {
        match *self {
            Channel::Dephasing(p) | Channel::Depolarizing(p) | Channel::AmplitudeDamping(p) => p,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Dephasing(_) => "dephasing",
            Channel::Depolarizing(_) => "depolarizing",
            Channel::AmplitudeDamping(_) => "damping",
        }
    }
}

/// Apply `channels` left to right.
pub fn apply_sequence(rho: &Mat2, channels: &[Channel]) -> Mat2 {
    channels.iter().fold(*rho, |r, ch| ch.apply(&r))
}
