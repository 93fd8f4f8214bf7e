//! Simulation engine
//!
//! [`PlatformSimulator`] owns a fixed population of creators and decides,
//! tick by tick, who posts and whose profile drifts. The submodules hold the
//! individual models; they are pure functions over a creator, its state and
//! the engine's random source.

pub mod drift;
pub mod engine;
pub mod population;
pub mod posting;
pub mod state;
pub mod synthesis;
pub mod tables;

pub use engine::PlatformSimulator;
pub use state::{CreatorEntry, CreatorState};
