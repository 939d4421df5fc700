use std::time::Duration;

use crate::content::ContentItem;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PresentationMode {
    Normal,    // Regular multi-region layout
    Interrupt, // A fullscreen ad has taken over the display
}

/// Fullscreen ad currently holding the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveInterrupt {
    item: ContentItem,
    armed_at: Duration,
}

impl ActiveInterrupt {
    pub fn item(&self) -> &ContentItem {
        &self.item
    }

    /// Scheduler time the takeover started.
    pub fn armed_at(&self) -> Duration {
        self.armed_at
    }
}

/// Display mode with the takeover it carries, if any.
///
/// An [`ActiveInterrupt`] can only be built inside this module, so only the
/// interrupt scheduler's trigger can enter `Interrupt`; its expiry is the only
/// path back to `Normal`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModeState {
    #[default]
    Normal,
    Interrupt(ActiveInterrupt),
}

impl ModeState {
    pub(super) fn interrupt(item: ContentItem, armed_at: Duration) -> Self {
        ModeState::Interrupt(ActiveInterrupt { item, armed_at })
    }

    pub fn mode(&self) -> PresentationMode {
        match self {
            ModeState::Normal => PresentationMode::Normal,
            ModeState::Interrupt(_) => PresentationMode::Interrupt,
        }
    }

    pub fn active(&self) -> Option<&ActiveInterrupt> {
        match self {
            ModeState::Normal => None,
            ModeState::Interrupt(active) => Some(active),
        }
    }
}
