use crate::gates::{pauli_x, pauli_y, pauli_z};
use linalg::Mat2;
use rng::ShotRng;
use serde::{Deserialize, Serialize};

/// Measurement basis, named by the Pauli operator it diagonalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    Z,
    X,
    Y,
}

impl Basis {
    pub const ALL: [Basis; 3] = [Basis::Z, Basis::X, Basis::Y];

    pub fn pauli(self) -> Mat2 {
        match self {
            Basis::Z => pauli_z(),
            Basis::X => pauli_x(),
            Basis::Y => pauli_y(),
        }
    }

    fn tag(self) -> &'static [u8] {
        match self {
            Basis::Z => b"MEASURE_Z",
            Basis::X => b"MEASURE_X",
            Basis::Y => b"MEASURE_Y",
        }
    }
}

/// (I ± σ)/2; outcome 0 is the +1 eigenvalue, outcome 1 the -1 eigenvalue.
pub fn projector(basis: Basis, outcome: u8) -> Mat2 {
    let sign = if outcome == 0 { 1.0 } else { -1.0 };
    (Mat2::identity() + basis.pauli().scale(sign)).scale(0.5)
}

/// Born-rule probability Tr(P·ρ), floored at zero.
pub fn outcome_probability(rho: &Mat2, basis: Basis, outcome: u8) -> f64 {
    (projector(basis, outcome) * *rho).trace().re.max(0.0)
}

/// Sample one outcome without disturbing `rho`.
pub fn measure(rho: &Mat2, basis: Basis, rng: &mut ShotRng) -> u8 {
    let p0 = outcome_probability(rho, basis, 0);
    let p1 = outcome_probability(rho, basis, 1);
    let total = p0 + p1;
    if total == 0.0 {
        return 0;
    }

    let x = rng.next_f64(basis.tag()) * total;
    if x < p0 {
        0
    } else {
        1
    }
}
