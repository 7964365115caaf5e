use crate::observables::purity;
use linalg::{c64, Mat2, C64};
use thiserror::Error;

/// Amplitudes `(α, β)` of cos(θ/2)|0⟩ + e^{iφ} sin(θ/2)|1⟩.
///
/// `α` is real and non-negative; the global phase is fixed by that choice.
pub fn pure_amplitudes(theta: f64, phi: f64) -> (C64, C64) {
    let alpha = c64((theta / 2.0).cos(), 0.0);
    let beta = C64::from_polar((theta / 2.0).sin(), phi);
    (alpha, beta)
}

/// Density matrix |ψ⟩⟨ψ| of the pure state at Bloch angles (θ, φ).
///
/// Angles are not range-checked; any real pair yields a valid pure state.
pub fn prepare(theta: f64, phi: f64) -> Mat2 {
    let (alpha, beta) = pure_amplitudes(theta, phi);
    let rho01 = alpha * beta.conj();
    Mat2::new(
        c64(alpha.norm_sqr(), 0.0),
        rho01,
        rho01.conj(),
        c64(beta.norm_sqr(), 0.0),
    )
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("not Hermitian: rho01 = {rho01}, conj(rho10) = {rho10_conj}")]
    NotHermitian { rho01: C64, rho10_conj: C64 },

    #[error("trace is {0}, expected 1")]
    Trace(f64),

    #[error("diagonal entry rho{index}{index} = {value} outside [0, 1]")]
    Diagonal { index: usize, value: f64 },

    #[error("purity {0} outside (0, 1]")]
    Purity(f64),
}

/// Check that `rho` is a physical single-qubit density matrix within `tol`.
pub fn check_density(rho: &Mat2, tol: f64) -> Result<(), Violation> {
    let rho10_conj = rho[1][0].conj();
    let d = rho[0][1] - rho10_conj;
    if d.re.abs() > tol || d.im.abs() > tol || rho[0][0].im.abs() > tol || rho[1][1].im.abs() > tol {
        return Err(Violation::NotHermitian {
            rho01: rho[0][1],
            rho10_conj,
        });
    }

    let tr = rho.trace().re;
    if (tr - 1.0).abs() > tol {
        return Err(Violation::Trace(tr));
    }

    for index in 0..2 {
        let value = rho[index][index].re;
        if value < -tol || value > 1.0 + tol {
            return Err(Violation::Diagonal { index, value });
        }
    }

    let p = purity(rho);
    if p <= 0.0 || p > 1.0 + tol {
        return Err(Violation::Purity(p));
    }

    Ok(())
}
