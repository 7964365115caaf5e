use linalg::{Mat2, C64};
use serde::{Deserialize, Serialize};

/// Purity above which amplitudes are reported.
pub const PURITY_THRESHOLD: f64 = 0.999_999;

/// Tr(ρ²). 1 for pure states, 1/2 for the maximally mixed state.
pub fn purity(rho: &Mat2) -> f64 {
    (*rho * *rho).trace().re
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Euclidean length; 1 on the sphere, < 1 inside.
    pub rmag: f64,
}

/// Bloch vector read off ρ: x = 2 Re ρ01, y = 2 Im ρ01, z = ρ00 - ρ11.
///
/// The y sign follows ρ01 = α·conj(β), so a state prepared with φ = π/2
/// sits at y = -1.
pub fn bloch(rho: &Mat2) -> BlochVector {
    let x = 2.0 * rho[0][1].re;
    let y = 2.0 * rho[0][1].im;
    let z = rho[0][0].re - rho[1][1].re;
    BlochVector {
        x,
        y,
        z,
        rmag: (x * x + y * y + z * z).sqrt(),
    }
}

/// `(+, −)` outcome probabilities in the Z, X and Y bases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasisProbs {
    #[serde(rename = "Z")]
    pub z: [f64; 2],
    #[serde(rename = "X")]
    pub x: [f64; 2],
    #[serde(rename = "Y")]
    pub y: [f64; 2],
}

fn pair(component: f64) -> [f64; 2] {
    [(1.0 + component) / 2.0, (1.0 - component) / 2.0]
}

pub fn basis_probs(b: &BlochVector) -> BasisProbs {
    BasisProbs {
        z: pair(b.z),
        x: pair(b.x),
        y: pair(b.y),
    }
}

/// Recovered amplitudes of a pure state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amplitudes {
    pub alpha: C64,
    pub beta: C64,
}

/// Amplitudes (α, β) of `rho` if its purity exceeds `threshold`.
///
/// ρ only fixes the state up to a global phase. The phase is pinned by
/// taking α real and non-negative, which is the same convention
/// [`crate::state::prepare`] uses, so prepare -> recover returns the input
/// amplitudes whenever α ≠ 0. When α = 0 the relative phase is lost and β
/// comes back as a non-negative real.
pub fn recover_amplitudes(rho: &Mat2, threshold: f64) -> Option<Amplitudes> {
    if purity(rho) <= threshold {
        return None;
    }

    let a = rho[0][0].re.max(0.0).sqrt();
    let b = rho[1][1].re.max(0.0).sqrt();
    let phi = -rho[0][1].arg();

    Some(Amplitudes {
        alpha: C64::new(a, 0.0),
        beta: C64::from_polar(b, phi),
    })
}
