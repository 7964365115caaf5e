use crate::error::Result;
use quantum::{Channel, PURITY_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::path::Path;

/// Per-tick channel strengths plus the auto-evolution switch.
///
/// The controller keeps strengths in [0, 0.2]; anything else is accepted
/// and clamped by the channels themselves.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub dephasing: f64,
    pub depolarizing: f64,
    pub damping: f64,
    pub auto: bool,
}

impl NoiseConfig {
    pub fn new(dephasing: f64, depolarizing: f64, damping: f64, auto: bool) -> Self {
        Self {
            dephasing,
            depolarizing,
            damping,
            auto,
        }
    }

    /// Whether a tick would change the state.
    pub fn is_active(&self) -> bool {
        self.auto && (self.dephasing > 0.0 || self.depolarizing > 0.0 || self.damping > 0.0)
    }

    /// Channels in tick order: dephasing, depolarizing, amplitude damping.
    ///
    /// The three maps do not commute, so this order is part of the model.
    pub fn channels(&self) -> [Channel; 3] {
        [
            Channel::Dephasing(self.dephasing),
            Channel::Depolarizing(self.depolarizing),
            Channel::AmplitudeDamping(self.damping),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub initial_theta: f64,
    pub initial_phi: f64,
    /// Purity above which snapshots carry amplitudes.
    pub purity_threshold: f64,
    pub initial_noise: NoiseConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_theta: FRAC_PI_2,
            initial_phi: 0.0,
            purity_threshold: PURITY_THRESHOLD,
            initial_noise: NoiseConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
