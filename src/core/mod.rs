pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SimulationConfig;
pub use error::{PulseError, Result};
pub use types::{ContentId, CreatorId};
