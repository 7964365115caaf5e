use crate::config::{NoiseConfig, SessionConfig};
use crate::protocol::Inbound;
use crate::snapshot::Snapshot;
use linalg::Mat2;
use quantum::noise::apply_sequence;
use quantum::state::prepare;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[cfg(debug_assertions)]
const INVARIANT_TOL: f64 = 1e-9;

/// Whether any channel has run since the last preparation or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Pure,
    Evolved,
}

/// Sole owner of the simulated qubit.
///
/// Events are processed strictly in call order. Every transition is total
/// and returns the snapshot a renderer should display next.
#[derive(Debug, Clone)]
pub struct Session {
    theta: f64,
    phi: f64,
    rho: Mat2,
    noise: NoiseConfig,
    phase: Phase,
    purity_threshold: f64,
    ticks_applied: u64,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let session = Self {
            theta: config.initial_theta,
            phi: config.initial_phi,
            rho: prepare(config.initial_theta, config.initial_phi),
            noise: config.initial_noise,
            phase: Phase::Pure,
            purity_threshold: config.purity_threshold,
            ticks_applied: 0,
        };
        session.debug_check();
        session
    }

    /// Prepare a new pure state and remember its angles for `reset`.
    pub fn set_angles(&mut self, theta: f64, phi: f64) -> Snapshot {
        debug!(theta, phi, "set angles");
        self.theta = theta;
        self.phi = phi;
        self.prepare_current();
        self.emit()
    }

    /// Return to the pure state of the last `set_angles`.
    pub fn reset(&mut self) -> Snapshot {
        debug!(theta = self.theta, phi = self.phi, "reset");
        self.prepare_current();
        self.emit()
    }

    /// Replace the noise configuration. ρ is left untouched.
    pub fn set_noise(&mut self, noise: NoiseConfig) -> Snapshot {
        debug!(?noise, "set noise");
        self.noise = noise;
        self.emit()
    }

    /// Apply one round of dephasing, depolarizing, then amplitude damping
    /// if auto-evolution is on and any strength is positive.
    pub fn tick(&mut self) -> Snapshot {
        if self.noise.is_active() {
            self.rho = apply_sequence(&self.rho, &self.noise.channels());
            self.phase = Phase::Evolved;
            self.ticks_applied += 1;
            self.debug_check();
        }
        self.emit()
    }

    pub fn handle(&mut self, msg: Inbound) -> Snapshot {
        match msg {
            Inbound::SetAngles { theta, phi } => self.set_angles(theta, phi),
            Inbound::SetNoise {
                dephasing,
                depolarizing,
                damping,
                auto,
            } => self.set_noise(NoiseConfig::new(dephasing, depolarizing, damping, auto)),
            Inbound::Tick => self.tick(),
            Inbound::Reset => self.reset(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::observe(&self.rho, self.is_mixed(), self.purity_threshold)
    }

    pub fn rho(&self) -> &Mat2 {
        &self.rho
    }

    pub fn noise(&self) -> NoiseConfig {
        self.noise
    }

    pub fn angles(&self) -> (f64, f64) {
        (self.theta, self.phi)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_mixed(&self) -> bool {
        self.phase == Phase::Evolved
    }

    /// Ticks that actually changed ρ since the session was created.
    pub fn ticks_applied(&self) -> u64 {
        self.ticks_applied
    }

    fn prepare_current(&mut self) {
        self.rho = prepare(self.theta, self.phi);
        self.phase = Phase::Pure;
        self.debug_check();
    }

    fn emit(&self) -> Snapshot {
        let snap = self.snapshot();
        trace!(purity = snap.purity, rmag = snap.bloch.rmag, mixed = snap.mixed, "snapshot");
        snap
    }

    #[cfg(debug_assertions)]
    fn debug_check(&self) {
        if let Err(v) = quantum::state::check_density(&self.rho, INVARIANT_TOL) {
            panic!("density matrix invariant broken: {} (rho = {:?})", v, self.rho);
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_check(&self) {}
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
