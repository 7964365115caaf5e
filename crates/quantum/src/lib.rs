pub mod gates;
pub mod measurement;
pub mod noise;
pub mod observables;
pub mod shot_estimator;
pub mod state;

pub use noise::Channel;
pub use observables::{BasisProbs, BlochVector, PURITY_THRESHOLD};
pub use state::prepare;
