pub mod config;
pub mod error;
pub mod output;
pub mod protocol;
pub mod session;
pub mod snapshot;
pub mod sweep;

pub use config::{NoiseConfig, SessionConfig};
pub use error::{Result, SimulatorError};
pub use protocol::{decode_line, encode_snapshot, Inbound};
pub use session::{Phase, Session};
pub use snapshot::{Snapshot, WireComplex};
pub use sweep::{decay_curve, sweep_strengths, ChannelKind, SweepPoint};
