//! Wire format between the session and its controller/renderer.
//!
//! Inbound messages are JSON objects tagged by `type`:
//!
//! ```text
//! {"type":"setAngles","theta":1.57,"phi":0.0}
//! {"type":"setNoise","dephasing":0.01,"depolarizing":0.0,"damping":0.02,"auto":true}
//! {"type":"tick"}
//! {"type":"reset"}
//! ```
//!
//! Every inbound message is answered with exactly one [`Snapshot`].

use crate::config::NoiseConfig;
use crate::error::{Result, SimulatorError};
use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inbound {
    SetAngles {
        theta: f64,
        phi: f64,
    },
    SetNoise {
        dephasing: f64,
        depolarizing: f64,
        damping: f64,
        auto: bool,
    },
    Tick,
    Reset,
}

impl Inbound {
    pub fn noise(noise: NoiseConfig) -> Self {
        Inbound::SetNoise {
            dephasing: noise.dephasing,
            depolarizing: noise.depolarizing,
            damping: noise.damping,
            auto: noise.auto,
        }
    }

    fn check_finite(&self) -> Result<()> {
        let fields: Vec<(&'static str, f64)> = match self {
            Inbound::SetAngles { theta, phi } => vec![("theta", *theta), ("phi", *phi)],
            Inbound::SetNoise {
                dephasing,
                depolarizing,
                damping,
                ..
            } => vec![
                ("dephasing", *dephasing),
                ("depolarizing", *depolarizing),
                ("damping", *damping),
            ],
            Inbound::Tick | Inbound::Reset => Vec::new(),
        };

        match fields.into_iter().find(|(_, v)| !v.is_finite()) {
            Some((field, value)) => Err(SimulatorError::non_finite(field, value)),
            None => Ok(()),
        }
    }
}

/// Parse one JSON line into an inbound message.
pub fn decode_line(line: &str) -> Result<Inbound> {
    let line = line.trim();
    if line.is_empty() {
        return Err(SimulatorError::Empty);
    }

    let msg: Inbound = serde_json::from_str(line)?;
    msg.check_finite()?;
    Ok(msg)
}

/// Render a snapshot as a single JSON line (no trailing newline).
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string(snapshot)?)
}
