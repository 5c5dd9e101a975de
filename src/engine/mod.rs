//! Countdown engine module
//!
//! Pure time-tracking logic: the event window, the remaining-duration
//! breakdown, session flags and the deadline edge. Nothing in here reads the
//! clock or touches the runtime.

pub mod countdown;
pub mod remaining;
pub mod session;
pub mod window;

pub use countdown::{CountdownEngine, CountdownSnapshot, TickOutcome};
pub use remaining::RemainingDuration;
pub use session::{EdgeDetector, SessionFlags};
pub use window::{EventPhase, EventWindow, TargetDeadline};
