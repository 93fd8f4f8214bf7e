//! Creator Pulse - synthetic creator and content event stream
//!
//! A seeded simulation of a subscription-content platform that emits creator
//! profile updates and content posts for exercising downstream consumers.

pub mod core;
pub mod driver;
pub mod model;
pub mod publish;
pub mod simulation;

pub use crate::core::{Clock, ManualClock, PulseError, Result, SimulationConfig, SystemClock};
pub use crate::model::{Category, Content, ContentKind, Creator};
pub use crate::simulation::PlatformSimulator;
