use std::time::Duration;

use tracing::debug;

use crate::content::{ContentItem, TickerFeed};
use crate::rotator::RotationCursor;
use crate::ticker::state::TickerPhase;
use crate::timer::RotationTimer;

/// What the strip region shows right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripeContent<'a> {
    Ticker(&'a TickerFeed),
    Ad(&'a ContentItem),
}

/// Time-shares the strip between the ticker feed and the stripe ad pool.
///
/// Every phase entry arms its own exit timer, so the strip is never left
/// without a pending transition. An empty ad pool pins the strip to the
/// ticker; the ticker dwell keeps re-arming so a later refill is picked up on
/// the next ticker exit.
#[derive(Debug, Clone)]
pub struct TickerAdAlternator {
    phase: TickerPhase,
    ads: Vec<ContentItem>,
    ad_cursor: RotationCursor,
    timer: RotationTimer,
    ticker_dwell: Duration,
    ad_dwell: Duration,
}

impl TickerAdAlternator {
    pub fn new(ticker_dwell: Duration, ad_dwell: Duration) -> Self {
        Self {
            phase: TickerPhase::Ticker,
            ads: Vec::new(),
            ad_cursor: RotationCursor::new(),
            timer: RotationTimer::new(),
            ticker_dwell,
            ad_dwell,
        }
    }

    pub fn phase(&self) -> TickerPhase {
        self.phase
    }

    pub fn timer(&self) -> &RotationTimer {
        &self.timer
    }

    /// The ad the next (or current) ad phase shows.
    pub fn current_ad(&self) -> Option<&ContentItem> {
        self.ad_cursor
            .position(self.ads.len())
            .and_then(|index| self.ads.get(index))
    }

    pub fn content<'a>(&'a self, ticker: &'a TickerFeed) -> StripeContent<'a> {
        match (self.phase, self.current_ad()) {
            (TickerPhase::Ad, Some(ad)) => StripeContent::Ad(ad),
            _ => StripeContent::Ticker(ticker),
        }
    }

    pub fn start(&mut self, now: Duration) {
        self.enter_ticker(now);
    }

    /// Swaps in a refreshed ad pool.
    ///
    /// An ad phase left with no ads falls back to the ticker; an ad phase that
    /// still has ads re-times its dwell from when the phase began, against the
    /// item now under the cursor. The ticker phase keeps its pending timer.
    pub fn replace_ads(&mut self, ads: Vec<ContentItem>, now: Duration) {
        self.ads = ads;
        match self.phase {
            TickerPhase::Ad if self.ads.is_empty() => self.enter_ticker(now),
            TickerPhase::Ad => {
                let started = self.timer.started().unwrap_or(now);
                self.enter_ad(started);
            }
            TickerPhase::Ticker if !self.timer.is_armed() => self.enter_ticker(now),
            TickerPhase::Ticker => {}
        }
    }

    /// Runs every phase change due at `now`.
    pub fn update(&mut self, now: Duration) {
        while let Some(fired_at) = self.timer.fire(now) {
            match self.phase {
                TickerPhase::Ticker if self.ads.is_empty() => self.enter_ticker(fired_at),
                TickerPhase::Ticker => self.enter_ad(fired_at),
                TickerPhase::Ad => {
                    self.ad_cursor.advance(self.ads.len());
                    self.enter_ticker(fired_at);
                }
            }
        }
    }

    fn enter_ticker(&mut self, from: Duration) {
        if self.phase != TickerPhase::Ticker {
            debug!("strip back to ticker");
        }
        self.phase = TickerPhase::Ticker;
        self.timer.arm(from, self.ticker_dwell);
    }

    fn enter_ad(&mut self, from: Duration) {
        let Some(ad) = self.current_ad() else {
            self.enter_ticker(from);
            return;
        };
        let dwell = ad.dwell(self.ad_dwell);
        debug!(id = ad.id, ?dwell, "strip showing ad");
        self.phase = TickerPhase::Ad;
        self.timer.arm(from, dwell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{LayoutTag, MediaKind};

    fn stripe(id: u64, secs: u32) -> ContentItem {
        ContentItem::new(id, MediaKind::Image, format!("stripe-{id}.png"), LayoutTag::Stripe)
            .with_duration(secs)
    }

    fn alternator(ads: Vec<ContentItem>) -> TickerAdAlternator {
        let mut alternator = TickerAdAlternator::new(Duration::from_secs(30), Duration::from_secs(10));
        alternator.start(Duration::ZERO);
        alternator.replace_ads(ads, Duration::ZERO);
        alternator
    }

    #[test]
    fn empty_pool_pins_ticker() {
        let mut alternator = alternator(Vec::new());
        let feed = TickerFeed::default();

        for minute in 1..=60 {
            alternator.update(Duration::from_secs(minute * 60));
            assert_eq!(alternator.phase(), TickerPhase::Ticker);
            assert_eq!(alternator.content(&feed), StripeContent::Ticker(&feed));
            assert!(alternator.timer().is_armed());
        }
    }

    #[test]
    fn ad_phase_exits_after_item_duration() {
        let mut alternator = alternator(vec![stripe(1, 4), stripe(2, 6)]);

        alternator.update(Duration::from_secs(30));
        assert_eq!(alternator.phase(), TickerPhase::Ad);
        assert_eq!(alternator.current_ad().map(|ad| ad.id), Some(1));
        assert_eq!(alternator.timer().deadline(), Some(Duration::from_secs(34)));

        alternator.update(Duration::from_secs(34));
        assert_eq!(alternator.phase(), TickerPhase::Ticker);
        assert_eq!(alternator.current_ad().map(|ad| ad.id), Some(2));

        alternator.update(Duration::from_secs(64));
        assert_eq!(alternator.phase(), TickerPhase::Ad);
        assert_eq!(alternator.current_ad().map(|ad| ad.id), Some(2));

        alternator.update(Duration::from_secs(70));
        assert_eq!(alternator.phase(), TickerPhase::Ticker);
        assert_eq!(alternator.current_ad().map(|ad| ad.id), Some(1));
    }

    #[test]
    fn ad_without_duration_uses_default() {
        let ad = ContentItem::new(1, MediaKind::Video, "clip.mp4", LayoutTag::Stripe);
        let mut alternator = alternator(vec![ad]);

        alternator.update(Duration::from_secs(30));
        assert_eq!(alternator.timer().deadline(), Some(Duration::from_secs(40)));
    }

    #[test]
    fn pool_emptied_before_ticker_exit_stays_on_ticker() {
        let mut alternator = alternator(vec![stripe(1, 5)]);
        alternator.replace_ads(Vec::new(), Duration::from_secs(10));

        alternator.update(Duration::from_secs(30));
        assert_eq!(alternator.phase(), TickerPhase::Ticker);
        assert_eq!(alternator.timer().deadline(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn pool_emptied_during_ad_returns_to_ticker() {
        let mut alternator = alternator(vec![stripe(1, 5)]);
        alternator.update(Duration::from_secs(30));
        assert_eq!(alternator.phase(), TickerPhase::Ad);

        alternator.replace_ads(Vec::new(), Duration::from_secs(32));
        assert_eq!(alternator.phase(), TickerPhase::Ticker);
        assert_eq!(alternator.timer().deadline(), Some(Duration::from_secs(62)));
    }

    #[test]
    fn refresh_during_ad_keeps_phase_start() {
        let ads = vec![stripe(1, 10)];
        let mut alternator = alternator(ads.clone());
        alternator.update(Duration::from_secs(30));

        alternator.replace_ads(ads.clone(), Duration::from_secs(35));
        assert_eq!(alternator.timer().deadline(), Some(Duration::from_secs(40)));

        alternator.replace_ads(vec![stripe(2, 3)], Duration::from_secs(35));
        assert_eq!(alternator.timer().deadline(), Some(Duration::from_secs(33)));
        alternator.update(Duration::from_secs(35));
        assert_eq!(alternator.phase(), TickerPhase::Ticker);
        assert_eq!(alternator.timer().deadline(), Some(Duration::from_secs(63)));
    }

    #[test]
    fn refilled_pool_is_picked_up_on_next_ticker_exit() {
        let mut alternator = alternator(Vec::new());
        alternator.update(Duration::from_secs(45));
        alternator.replace_ads(vec![stripe(3, 5)], Duration::from_secs(45));

        alternator.update(Duration::from_secs(60));
        assert_eq!(alternator.phase(), TickerPhase::Ad);
        assert_eq!(alternator.current_ad().map(|ad| ad.id), Some(3));
    }
}
