use std::time::Duration;

use crate::constants::*;

/// Tunable dwell and trigger durations for the rotation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub slot_dwell: Duration,       // Primary / sidebar item without its own duration
    pub ad_dwell: Duration,         // Stripe ad without its own duration
    pub fullscreen_dwell: Duration, // Fullscreen takeover without its own duration
    pub ticker_dwell: Duration,     // Ticker phase length between stripe ads
    pub interrupt_period: Duration, // Time between fullscreen triggers
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            slot_dwell: SLOT_DWELL,
            ad_dwell: AD_DWELL,
            fullscreen_dwell: FULLSCREEN_DWELL,
            ticker_dwell: TICKER_DWELL,
            interrupt_period: INTERRUPT_PERIOD,
        }
    }
}

impl SchedulerConfig {
    pub fn with_slot_dwell(mut self, dwell: Duration) -> Self {
        self.slot_dwell = dwell;
        self
    }

    pub fn with_ad_dwell(mut self, dwell: Duration) -> Self {
        self.ad_dwell = dwell;
        self
    }

    pub fn with_fullscreen_dwell(mut self, dwell: Duration) -> Self {
        self.fullscreen_dwell = dwell;
        self
    }

    pub fn with_ticker_dwell(mut self, dwell: Duration) -> Self {
        self.ticker_dwell = dwell;
        self
    }

    pub fn with_interrupt_period(mut self, period: Duration) -> Self {
        self.interrupt_period = period;
        self
    }
}
