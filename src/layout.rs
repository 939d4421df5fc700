use std::time::Duration;

use rand::Rng;
use tracing::{info, warn};

use crate::config::SchedulerConfig;
use crate::content::{ContentItem, ContentPools, TickerFeed};
use crate::interrupt::{ActiveInterrupt, FullscreenInterruptScheduler, PresentationMode};
use crate::rotator::SlotRotator;
use crate::ticker::{StripeContent, TickerAdAlternator, TickerPhase};

/// Where the primary media region sits in the composition.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrimaryPlacement {
    Main,   // Primary media framed by the sidebar and strip
    Behind, // Primary media keeps playing under a fullscreen takeover
}

/// Everything a renderer needs to compose one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationFrame<'a> {
    pub mode: PresentationMode,
    pub active_interrupt: Option<&'a ActiveInterrupt>,
    pub primary: Option<&'a ContentItem>,
    pub sidebar: Option<&'a ContentItem>,
    pub stripe: StripeContent<'a>,
    pub placement: PrimaryPlacement,
}

/// Composes every rotation into one "what to show now" answer.
///
/// The controller never pauses the slot rotators or the strip while a
/// takeover runs; it only reports the mode so the renderer can foreground the
/// takeover.
#[derive(Debug)]
pub struct LayoutModeController<R> {
    now: Duration,
    primary: SlotRotator,
    sidebar: SlotRotator,
    strip: TickerAdAlternator,
    interrupts: FullscreenInterruptScheduler<R>,
    ticker: TickerFeed,
}

impl<R: Rng> LayoutModeController<R> {
    pub fn new(config: &SchedulerConfig, rng: R) -> Self {
        Self {
            now: Duration::ZERO,
            primary: SlotRotator::new("primary", config.slot_dwell),
            sidebar: SlotRotator::new("sidebar", config.slot_dwell),
            strip: TickerAdAlternator::new(config.ticker_dwell, config.ad_dwell),
            interrupts: FullscreenInterruptScheduler::new(
                config.interrupt_period,
                config.fullscreen_dwell,
                rng,
            ),
            ticker: TickerFeed::default(),
        }
    }

    /// Builds a controller with its first content set and starts every timer.
    pub fn start(config: &SchedulerConfig, rng: R, pools: ContentPools) -> Self {
        let mut controller = Self::new(config, rng);
        controller.primary.start(Duration::ZERO);
        controller.sidebar.start(Duration::ZERO);
        controller.strip.start(Duration::ZERO);
        controller.interrupts.start(Duration::ZERO);
        controller.replace_content(pools);
        controller
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn mode(&self) -> PresentationMode {
        self.interrupts.mode()
    }

    pub fn active_interrupt(&self) -> Option<&ActiveInterrupt> {
        self.interrupts.active()
    }

    pub fn sidebar(&self) -> &SlotRotator {
        &self.sidebar
    }

    pub fn strip(&self) -> &TickerAdAlternator {
        &self.strip
    }

    pub fn strip_phase(&self) -> TickerPhase {
        self.strip.phase()
    }

    /// Pushes a full content refresh into every rotation.
    pub fn replace_content(&mut self, pools: ContentPools) {
        let ContentPools {
            media,
            sidebar,
            stripe,
            fullscreen,
            ticker,
            sidebar_fallback,
        } = pools;

        info!(
            media = media.len(),
            sidebar = sidebar.len(),
            stripe = stripe.len(),
            fullscreen = fullscreen.len(),
            "content refreshed"
        );
        if media.is_empty() {
            warn!("no primary media to rotate");
        }

        self.primary.replace_pool(media, self.now);
        self.sidebar.set_fallback(sidebar_fallback);
        self.sidebar.replace_pool(sidebar, self.now);
        self.strip.replace_ads(stripe, self.now);
        self.interrupts.replace_pool(fullscreen, self.now);
        self.ticker = ticker;
    }

    /// Advances the clock by one frame step.
    pub fn update(&mut self, dt: Duration) {
        self.advance_to(self.now + dt);
    }

    /// Moves the clock to `now` and runs everything that came due.
    pub fn advance_to(&mut self, now: Duration) {
        self.now = self.now.max(now);
        self.interrupts.update(self.now);
        self.primary.update(self.now);
        self.sidebar.update(self.now);
        self.strip.update(self.now);
    }

    pub fn frame(&self) -> PresentationFrame<'_> {
        let mode = self.mode();
        PresentationFrame {
            mode,
            active_interrupt: self.interrupts.active(),
            primary: self.primary.current(),
            sidebar: self.sidebar.current(),
            stripe: self.strip.content(&self.ticker),
            placement: match mode {
                PresentationMode::Normal => PrimaryPlacement::Main,
                PresentationMode::Interrupt => PrimaryPlacement::Behind,
            },
        }
    }
}
