use std::time::Duration;

pub const FPS: u32 = 30;                                               // Scheduler updates per second

pub const SLOT_DWELL: Duration = Duration::from_secs(10);              // Sidebar / primary item without its own duration
pub const AD_DWELL: Duration = Duration::from_secs(10);                // Stripe ad without its own duration
pub const FULLSCREEN_DWELL: Duration = Duration::from_secs(15);        // Fullscreen takeover without its own duration
pub const TICKER_DWELL: Duration = Duration::from_secs(30);            // Ticker phase between stripe ads
pub const INTERRUPT_PERIOD: Duration = Duration::from_secs(60);        // Fullscreen trigger period

pub const MIN_ARM_DURATION: Duration = Duration::from_millis(100);     // Floor for zero-length timers
