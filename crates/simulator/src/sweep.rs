use crate::config::{NoiseConfig, SessionConfig};
use crate::session::Session;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Dephasing,
    Depolarizing,
    Damping,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 3] = [
        ChannelKind::Dephasing,
        ChannelKind::Depolarizing,
        ChannelKind::Damping,
    ];

    /// Auto-evolving config with only this channel switched on.
    pub fn isolated(self, strength: f64) -> NoiseConfig {
        let mut cfg = NoiseConfig {
            auto: true,
            ..NoiseConfig::default()
        };
        match self {
            ChannelKind::Dephasing => cfg.dephasing = strength,
            ChannelKind::Depolarizing => cfg.depolarizing = strength,
            ChannelKind::Damping => cfg.damping = strength,
        }
        cfg
    }

    pub fn name(self) -> &'static str {
        match self {
            ChannelKind::Dephasing => "dephasing",
            ChannelKind::Depolarizing => "depolarizing",
            ChannelKind::Damping => "damping",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChannelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dephasing" | "phase" => Ok(ChannelKind::Dephasing),
            "depolarizing" | "depol" => Ok(ChannelKind::Depolarizing),
            "damping" | "amplitude" => Ok(ChannelKind::Damping),
            other => Err(format!(
                "unknown channel '{}', expected dephasing | depolarizing | damping",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub channel: ChannelKind,
    pub strength: f64,
    /// 0 is the freshly prepared state.
    pub tick: usize,
    pub purity: f64,
    pub rmag: f64,
    /// Probability of |0⟩.
    pub p0: f64,
}

/// Purity and Bloch length of one channel's decay, sampled after every tick.
pub fn decay_curve(
    theta: f64,
    phi: f64,
    channel: ChannelKind,
    strength: f64,
    ticks: usize,
) -> Vec<SweepPoint> {
    let mut session = Session::new(SessionConfig {
        initial_theta: theta,
        initial_phi: phi,
        initial_noise: channel.isolated(strength),
        ..SessionConfig::default()
    });

    let mut rows = Vec::with_capacity(ticks + 1);
    let mut snap = session.snapshot();
    for tick in 0..=ticks {
        if tick > 0 {
            snap = session.tick();
        }
        rows.push(SweepPoint {
            channel,
            strength,
            tick,
            purity: snap.purity,
            rmag: snap.bloch.rmag,
            p0: snap.probs.z[0],
        });
    }
    rows
}

/// One decay curve per strength, computed in parallel, returned in input order.
pub fn sweep_strengths(
    theta: f64,
    phi: f64,
    channel: ChannelKind,
    strengths: &[f64],
    ticks: usize,
) -> Vec<Vec<SweepPoint>> {
    info!(
        %channel,
        points = strengths.len(),
        ticks,
        "sweeping channel strength"
    );

    strengths
        .par_iter()
        .map(|&s| decay_curve(theta, phi, channel, s, ticks))
        .collect()
}
