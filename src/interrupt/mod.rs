//! Fullscreen takeover: a periodic random pick from the fullscreen pool that
//! preempts the normal layout until the picked ad's own dwell runs out.

pub mod scheduler;
pub mod state;

pub use scheduler::FullscreenInterruptScheduler;
pub use state::{ActiveInterrupt, PresentationMode};
