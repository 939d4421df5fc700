//! Content rotation core for an unattended signage display.
//!
//! The controller decides, for any instant, what each visual slot shows:
//! primary media, the sidebar ad, the ticker/stripe strip, and whether a
//! fullscreen sponsor takeover currently owns the screen. Rendering and
//! content fetching sit on the other side of [`presenter::Presenter`] and
//! [`content::ContentPools`].

pub mod config;
pub mod constants;
pub mod content;
pub mod content_loader;
pub mod error;
pub mod interrupt;
pub mod layout;
pub mod presenter;
pub mod rotator;
pub mod ticker;
pub mod timer;

pub use config::SchedulerConfig;
pub use content::{ContentItem, ContentPools, LayoutTag, MediaKind, TickerFeed};
pub use interrupt::{ActiveInterrupt, FullscreenInterruptScheduler, PresentationMode};
pub use layout::{LayoutModeController, PresentationFrame, PrimaryPlacement};
pub use rotator::{RotationCursor, SlotRotator};
pub use ticker::{StripeContent, TickerAdAlternator, TickerPhase};
pub use timer::RotationTimer;
