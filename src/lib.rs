pub mod console;
pub mod error;
pub mod stopwatch;

pub use crate::error::InvalidStateError;
pub use crate::stopwatch::{Clock, ManualClock, Snapshot, State, Stopwatch, SystemClock};
