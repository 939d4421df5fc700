use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Placement a piece of content was booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutTag {
    Sidebar,
    LBar,
    #[default]
    All,
    Stripe,
    Fullscreen,
}

impl LayoutTag {
    pub fn in_sidebar_pool(self) -> bool {
        matches!(self, LayoutTag::Sidebar | LayoutTag::LBar | LayoutTag::All)
    }

    pub fn in_stripe_pool(self) -> bool {
        matches!(self, LayoutTag::Stripe | LayoutTag::All)
    }

    pub fn in_fullscreen_pool(self) -> bool {
        matches!(self, LayoutTag::Fullscreen | LayoutTag::All)
    }
}

/// One playable media item, immutable once handed to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: u64,
    pub kind: MediaKind,
    pub source_ref: String,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub layout_tag: LayoutTag,
}

impl ContentItem {
    pub fn new(id: u64, kind: MediaKind, source_ref: impl Into<String>, layout_tag: LayoutTag) -> Self {
        Self {
            id,
            kind,
            source_ref: source_ref.into(),
            duration_seconds: None,
            layout_tag,
        }
    }

    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    /// How long the item stays current, falling back to the slot's default.
    pub fn dwell(&self, default: Duration) -> Duration {
        self.duration_seconds
            .map(|secs| Duration::from_secs(u64::from(secs)))
            .unwrap_or(default)
    }
}

/// Ticker strip content, passed to the presenter untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerFeed {
    #[serde(default)]
    pub headlines: Vec<String>,
}

/// Every rotation pool the controller consumes, rebuilt on each refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentPools {
    pub media: Vec<ContentItem>,
    pub sidebar: Vec<ContentItem>,
    pub stripe: Vec<ContentItem>,
    pub fullscreen: Vec<ContentItem>,
    pub ticker: TickerFeed,
    pub sidebar_fallback: Option<ContentItem>,
}

impl ContentPools {
    /// Splits a flat ad list into per-slot pools by layout tag.
    ///
    /// Items tagged `all` land in every ad pool; everything else lands in
    /// exactly one. Relative order is preserved.
    pub fn partition(media: Vec<ContentItem>, ads: &[ContentItem], ticker: TickerFeed) -> Self {
        let pick = |keep: fn(LayoutTag) -> bool| {
            ads.iter()
                .filter(|item| keep(item.layout_tag))
                .cloned()
                .collect::<Vec<_>>()
        };

        Self {
            media,
            sidebar: pick(LayoutTag::in_sidebar_pool),
            stripe: pick(LayoutTag::in_stripe_pool),
            fullscreen: pick(LayoutTag::in_fullscreen_pool),
            ticker,
            sidebar_fallback: None,
        }
    }

    pub fn with_sidebar_fallback(mut self, fallback: Option<ContentItem>) -> Self {
        self.sidebar_fallback = fallback;
        self
    }
}
