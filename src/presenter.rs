use tracing::info;

use crate::interrupt::PresentationMode;
use crate::layout::{PresentationFrame, PrimaryPlacement};
use crate::ticker::StripeContent;

/// Rendering side of the scheduler: receives the composition every frame.
pub trait Presenter {
    fn present(&mut self, frame: &PresentationFrame<'_>);
}

/// Identity of what is on screen, used to detect composition changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummary {
    pub mode: PresentationMode,
    pub takeover: Option<u64>,
    pub primary: Option<u64>,
    pub sidebar: Option<u64>,
    pub stripe_ad: Option<u64>,
    pub placement: PrimaryPlacement,
}

impl From<&PresentationFrame<'_>> for FrameSummary {
    fn from(frame: &PresentationFrame<'_>) -> Self {
        Self {
            mode: frame.mode,
            takeover: frame.active_interrupt.map(|active| active.item().id),
            primary: frame.primary.map(|item| item.id),
            sidebar: frame.sidebar.map(|item| item.id),
            stripe_ad: match frame.stripe {
                StripeContent::Ad(item) => Some(item.id),
                StripeContent::Ticker(_) => None,
            },
            placement: frame.placement,
        }
    }
}

/// Presenter that logs the composition whenever it changes.
#[derive(Debug, Default)]
pub struct LogPresenter {
    last: Option<FrameSummary>,
    changes: usize,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct compositions presented so far.
    pub fn changes(&self) -> usize {
        self.changes
    }

    pub fn last(&self) -> Option<FrameSummary> {
        self.last
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &PresentationFrame<'_>) {
        let summary = FrameSummary::from(frame);
        if self.last == Some(summary) {
            return;
        }

        info!(
            mode = ?summary.mode,
            takeover = ?summary.takeover,
            primary = ?summary.primary,
            sidebar = ?summary.sidebar,
            stripe_ad = ?summary.stripe_ad,
            placement = ?summary.placement,
            "composition changed"
        );
        self.last = Some(summary);
        self.changes += 1;
    }
}
