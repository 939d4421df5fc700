use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::content::ContentItem;
use crate::interrupt::state::{ActiveInterrupt, ModeState, PresentationMode};
use crate::timer::RotationTimer;

/// Promotes a random fullscreen ad to a takeover once per trigger period.
///
/// The trigger runs on its own fixed period whatever the mode is. A trigger
/// that finds a takeover already running, or an empty pool, is dropped.
#[derive(Debug)]
pub struct FullscreenInterruptScheduler<R> {
    pool: Vec<ContentItem>,
    state: ModeState,
    trigger: RotationTimer,
    expiry: RotationTimer,
    period: Duration,
    default_dwell: Duration,
    rng: R,
}

impl<R: Rng> FullscreenInterruptScheduler<R> {
    pub fn new(period: Duration, default_dwell: Duration, rng: R) -> Self {
        Self {
            pool: Vec::new(),
            state: ModeState::Normal,
            trigger: RotationTimer::new(),
            expiry: RotationTimer::new(),
            period,
            default_dwell,
            rng,
        }
    }

    pub fn mode(&self) -> PresentationMode {
        self.state.mode()
    }

    pub fn active(&self) -> Option<&ActiveInterrupt> {
        self.state.active()
    }

    pub fn trigger_deadline(&self) -> Option<Duration> {
        self.trigger.deadline()
    }

    pub fn expiry_deadline(&self) -> Option<Duration> {
        self.expiry.deadline()
    }

    pub fn start(&mut self, now: Duration) {
        self.trigger.arm(now, self.period);
    }

    /// Swaps in a refreshed fullscreen pool.
    ///
    /// A running takeover keeps its own copy of the item and runs to its
    /// expiry, unless the pool is now empty, in which case it expires at once.
    pub fn replace_pool(&mut self, pool: Vec<ContentItem>, now: Duration) {
        self.pool = pool;
        if self.pool.is_empty() && self.expiry.is_armed() {
            self.expiry.cancel();
            self.expire(now);
        }
    }

    /// Runs every trigger and expiry due at `now`, oldest first.
    pub fn update(&mut self, now: Duration) {
        loop {
            let expiry_due = self.expiry.deadline().filter(|at| *at <= now);
            let trigger_due = self.trigger.deadline().filter(|at| *at <= now);
            match (expiry_due, trigger_due) {
                (Some(expired_at), Some(triggered_at)) if expired_at <= triggered_at => {
                    self.expiry.cancel();
                    self.expire(expired_at);
                }
                (Some(expired_at), None) => {
                    self.expiry.cancel();
                    self.expire(expired_at);
                }
                (_, Some(triggered_at)) => {
                    self.trigger.arm(triggered_at, self.period);
                    self.on_trigger(triggered_at);
                }
                (None, None) => break,
            }
        }
    }

    fn on_trigger(&mut self, now: Duration) {
        if let ModeState::Interrupt(active) = &self.state {
            debug!(id = active.item().id, "takeover already running, trigger dropped");
            return;
        }
        if self.pool.is_empty() {
            return;
        }

        let item = self.pool[self.rng.random_range(0..self.pool.len())].clone();
        let dwell = item.dwell(self.default_dwell);
        info!(id = item.id, ?dwell, "fullscreen takeover");
        self.expiry.arm(now, dwell);
        self.state = ModeState::interrupt(item, now);
    }

    fn expire(&mut self, now: Duration) {
        if let ModeState::Interrupt(active) = &self.state {
            info!(id = active.item().id, at = ?now, "fullscreen takeover ended");
        }
        self.state = ModeState::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{LayoutTag, MediaKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fullscreen(id: u64, secs: Option<u32>) -> ContentItem {
        let item = ContentItem::new(id, MediaKind::Video, format!("fs-{id}.mp4"), LayoutTag::Fullscreen);
        match secs {
            Some(secs) => item.with_duration(secs),
            None => item,
        }
    }

    fn scheduler(pool: Vec<ContentItem>) -> FullscreenInterruptScheduler<StdRng> {
        let mut scheduler = FullscreenInterruptScheduler::new(
            Duration::from_secs(60),
            Duration::from_secs(15),
            StdRng::seed_from_u64(7),
        );
        scheduler.start(Duration::ZERO);
        scheduler.replace_pool(pool, Duration::ZERO);
        scheduler
    }

    #[test]
    fn empty_pool_never_interrupts() {
        let mut scheduler = scheduler(Vec::new());
        scheduler.update(Duration::from_secs(600));

        assert_eq!(scheduler.mode(), PresentationMode::Normal);
        assert_eq!(scheduler.trigger_deadline(), Some(Duration::from_secs(660)));
    }

    #[test]
    fn trigger_during_takeover_is_dropped() {
        let mut scheduler = FullscreenInterruptScheduler::new(
            Duration::from_secs(60),
            Duration::from_secs(15),
            StdRng::seed_from_u64(1),
        );
        scheduler.start(Duration::ZERO);
        scheduler.replace_pool(vec![fullscreen(1, Some(90)), fullscreen(2, Some(90))], Duration::ZERO);

        scheduler.update(Duration::from_secs(60));
        let first = scheduler.active().cloned().unwrap();

        scheduler.update(Duration::from_secs(120));
        assert_eq!(scheduler.mode(), PresentationMode::Interrupt);
        assert_eq!(scheduler.active(), Some(&first));
        assert_eq!(scheduler.expiry_deadline(), Some(Duration::from_secs(150)));
    }

    #[test]
    fn default_dwell_applies_without_duration() {
        let mut scheduler = scheduler(vec![fullscreen(1, None)]);

        scheduler.update(Duration::from_secs(60));
        assert_eq!(scheduler.expiry_deadline(), Some(Duration::from_secs(75)));
        scheduler.update(Duration::from_secs(75));
        assert_eq!(scheduler.mode(), PresentationMode::Normal);
        assert_eq!(scheduler.active(), None);
    }

    #[test]
    fn expiry_wins_a_shared_deadline() {
        let mut scheduler = scheduler(vec![fullscreen(1, Some(60))]);

        scheduler.update(Duration::from_secs(120));
        let active = scheduler.active().unwrap();
        assert_eq!(active.armed_at(), Duration::from_secs(120));
        assert_eq!(scheduler.expiry_deadline(), Some(Duration::from_secs(180)));
    }

    #[test]
    fn emptied_pool_ends_takeover() {
        let mut scheduler = scheduler(vec![fullscreen(1, Some(30))]);
        scheduler.update(Duration::from_secs(61));
        assert_eq!(scheduler.mode(), PresentationMode::Interrupt);

        scheduler.replace_pool(Vec::new(), Duration::from_secs(65));
        assert_eq!(scheduler.mode(), PresentationMode::Normal);
        assert_eq!(scheduler.expiry_deadline(), None);
    }

    #[test]
    fn refreshed_pool_keeps_running_takeover() {
        let mut scheduler = scheduler(vec![fullscreen(1, Some(30))]);
        scheduler.update(Duration::from_secs(60));

        scheduler.replace_pool(vec![fullscreen(2, Some(30))], Duration::from_secs(70));
        assert_eq!(scheduler.active().map(|active| active.item().id), Some(1));
        scheduler.update(Duration::from_secs(90));
        assert_eq!(scheduler.mode(), PresentationMode::Normal);
    }

    #[test]
    fn every_item_is_eventually_picked() {
        let pool = (1..=4).map(|id| fullscreen(id, Some(1))).collect();
        let mut scheduler = scheduler(pool);
        let mut seen = [false; 4];

        for period in 1..=200u64 {
            scheduler.update(Duration::from_secs(period * 60));
            if let Some(active) = scheduler.active() {
                seen[(active.item().id - 1) as usize] = true;
            }
        }
        assert!(seen.iter().all(|picked| *picked));
    }
}
