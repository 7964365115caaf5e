use linalg::{Mat2, C64};
use quantum::observables::{basis_probs, bloch, purity, recover_amplitudes};
use quantum::{BasisProbs, BlochVector};
use serde::{Deserialize, Serialize};

/// Complex number as it crosses the wire: `{"re": .., "im": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireComplex {
    pub re: f64,
    pub im: f64,
}

impl From<C64> for WireComplex {
    fn from(c: C64) -> Self {
        Self { re: c.re, im: c.im }
    }
}

impl From<WireComplex> for C64 {
    fn from(w: WireComplex) -> Self {
        C64::new(w.re, w.im)
    }
}

/// Everything a renderer needs from one session state.
///
/// `alpha`/`beta` are `None` when the state is too mixed to assign
/// amplitudes. `mixed` is bookkeeping (a channel ran since the last
/// preparation) and is reported independently of `purity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub alpha: Option<WireComplex>,
    pub beta: Option<WireComplex>,
    pub bloch: BlochVector,
    pub probs: BasisProbs,
    pub purity: f64,
    pub mixed: bool,
}

impl Snapshot {
    pub fn observe(rho: &Mat2, mixed: bool, purity_threshold: f64) -> Self {
        let b = bloch(rho);
        let amps = recover_amplitudes(rho, purity_threshold);
        Self {
            alpha: amps.map(|a| a.alpha.into()),
            beta: amps.map(|a| a.beta.into()),
            bloch: b,
            probs: basis_probs(&b),
            purity: purity(rho),
            mixed,
        }
    }
}
