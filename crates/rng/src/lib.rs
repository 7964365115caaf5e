use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// Deterministic uniform generator for shot sampling.
///
/// Every draw ratchets a 32-byte SHAKE256 state and squeezes the output
/// together with a caller-supplied context tag, so two generators built from
/// the same seed replay the same sequence for the same tags.
#[derive(Clone)]
pub struct ShotRng {
    state: [u8; 32],
    draws: u64,
}

impl ShotRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        squeeze(&[seed, b"POLARIS_SEED"], &mut state);
        Self { state, draws: 0 }
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Uniform sample in [0, 1).
    pub fn next_f64(&mut self, tag: &[u8]) -> f64 {
        self.draws += 1;

        let prev = self.state;
        squeeze(&[&prev, &self.draws.to_le_bytes(), b"RATCHET"], &mut self.state);

        let mut out = [0u8; 8];
        squeeze(&[&self.state, tag], &mut out);

        // top 53 bits keep the result strictly below 1.0
        (u64::from_le_bytes(out) >> 11) as f64 / (1u64 << 53) as f64
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    pub fn bernoulli(&mut self, p: f64, tag: &[u8]) -> bool {
        self.next_f64(tag) < p.clamp(0.0, 1.0)
    }
}

fn squeeze(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    h.finalize_xof().read(out);
}
