use std::time::Duration;

use tracing::debug;

use crate::content::ContentItem;
use crate::timer::RotationTimer;

/// Cyclic position over a pool whose length can change under it.
///
/// The index is never trusted against the current pool: reads clamp a stale
/// index to the first item, and the next advance resets it to zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RotationCursor {
    index: usize,
}

impl RotationCursor {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Index to read for a pool of `len` items, or `None` if the pool is empty.
    pub fn position(&self, len: usize) -> Option<usize> {
        match len {
            0 => None,
            _ if self.index < len => Some(self.index),
            _ => Some(0),
        }
    }

    pub fn advance(&mut self, len: usize) {
        self.index = if self.index + 1 < len { self.index + 1 } else { 0 };
    }
}

/// Cycles one visual slot through a content pool, one item per dwell.
#[derive(Debug, Clone)]
pub struct SlotRotator {
    name: &'static str,
    pool: Vec<ContentItem>,
    cursor: RotationCursor,
    timer: RotationTimer,
    default_dwell: Duration,
    fallback: Option<ContentItem>,
}

impl SlotRotator {
    pub fn new(name: &'static str, default_dwell: Duration) -> Self {
        Self {
            name,
            pool: Vec::new(),
            cursor: RotationCursor::new(),
            timer: RotationTimer::new(),
            default_dwell,
            fallback: None,
        }
    }

    /// Placeholder advertised while the pool is empty.
    pub fn with_fallback(mut self, fallback: Option<ContentItem>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn set_fallback(&mut self, fallback: Option<ContentItem>) {
        self.fallback = fallback;
    }

    pub fn cursor(&self) -> RotationCursor {
        self.cursor
    }

    pub fn timer(&self) -> &RotationTimer {
        &self.timer
    }

    /// The item on display, the fallback for an empty pool, or nothing.
    pub fn current(&self) -> Option<&ContentItem> {
        match self.cursor.position(self.pool.len()) {
            Some(index) => self.pool.get(index),
            None => self.fallback.as_ref(),
        }
    }

    /// Starts the rotation cycle at `now`.
    pub fn start(&mut self, now: Duration) {
        self.arm(now);
    }

    /// Swaps in a refreshed pool and re-times the current dwell against it.
    ///
    /// The dwell keeps its original start, so a refresh never extends it; if
    /// the new item's dwell has already run out, the next `update` advances.
    /// The cursor is kept; if it no longer fits the new pool, reads clamp to
    /// the first item until the next advance.
    pub fn replace_pool(&mut self, pool: Vec<ContentItem>, now: Duration) {
        let started = self.timer.started().unwrap_or(now);
        self.timer.cancel();
        self.pool = pool;
        debug!(slot = self.name, len = self.pool.len(), "pool replaced");
        self.arm(started);
    }

    /// Advances to the next item and arms its dwell from `now`.
    pub fn tick(&mut self, now: Duration) {
        self.advance();
        self.arm(now);
    }

    /// Runs every advance that is due at `now`.
    pub fn update(&mut self, now: Duration) {
        while let Some(fired_at) = self.timer.fire(now) {
            self.tick(fired_at);
        }
    }

    fn advance(&mut self) {
        self.cursor.advance(self.pool.len());
        debug!(
            slot = self.name,
            index = self.cursor.index(),
            id = self.current().map(|item| item.id),
            "slot advanced"
        );
    }

    fn arm(&mut self, from: Duration) {
        let dwell = match self.cursor.position(self.pool.len()) {
            Some(index) => self.pool[index].dwell(self.default_dwell),
            None => {
                self.timer.cancel();
                return;
            }
        };
        self.timer.arm(from, dwell);
    }
}
