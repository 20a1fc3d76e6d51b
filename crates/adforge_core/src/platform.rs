//! Platform placements and their fixed ad geometry.
//!
//! Every supported placement carries pixel dimensions, an aspect-ratio string
//! understood by the image-generation APIs, and a safe zone that platform UI
//! chrome is known to cover.

use serde::{Deserialize, Serialize};

/// A supported ad placement.
///
/// Wire names are snake_case, matching the brief and profile JSON.
///
/// # Examples
///
/// ```
/// use adforge_core::Platform;
///
/// let platform = Platform::MetaStory;
/// let size = platform.ad_size();
/// assert_eq!(size.width, 1080);
/// assert_eq!(size.height, 1920);
/// assert_eq!(size.aspect_ratio, "9:16");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Platform {
    /// Meta feed, square 1:1
    MetaFeedSquare,
    /// Meta feed, landscape 1.91:1
    MetaFeedLandscape,
    /// Meta feed, portrait 4:5
    MetaFeedPortrait,
    /// Meta story, 9:16
    MetaStory,
    /// Instagram feed, 1:1
    InstagramFeed,
    /// Instagram story, 9:16
    InstagramStory,
    /// Instagram reel, 9:16
    InstagramReel,
}

/// Pixel insets that platform UI chrome can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SafeZone {
    /// Pixels from the top edge to exclude
    pub top: u32,
    /// Pixels from the bottom edge to exclude
    pub bottom: u32,
    /// Pixels from the left edge to exclude
    pub left: u32,
    /// Pixels from the right edge to exclude
    pub right: u32,
}

/// Fixed geometry for one placement.
///
/// Entries are compiled in; the table is the source of truth and is never
/// read from user data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdSize {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Aspect-ratio string for image generation APIs (e.g. "1:1")
    pub aspect_ratio: &'static str,
    /// Human-readable placement label
    pub label: &'static str,
    /// Pixel insets excluded by platform chrome
    pub safe_zone: SafeZone,
    /// Prose description of the safe zone, embedded into prompts
    pub safe_zone_description: &'static str,
}

impl Platform {
    /// The fixed geometry for this placement.
    pub fn ad_size(&self) -> &'static AdSize {
        match self {
            Platform::MetaFeedSquare => &META_FEED_SQUARE,
            Platform::MetaFeedLandscape => &META_FEED_LANDSCAPE,
            Platform::MetaFeedPortrait => &META_FEED_PORTRAIT,
            Platform::MetaStory => &META_STORY,
            Platform::InstagramFeed => &INSTAGRAM_FEED,
            Platform::InstagramStory => &INSTAGRAM_STORY,
            Platform::InstagramReel => &INSTAGRAM_REEL,
        }
    }
}

static META_FEED_SQUARE: AdSize = AdSize {
    width: 1080,
    height: 1080,
    aspect_ratio: "1:1",
    label: "Meta Feed — Square (1:1)",
    safe_zone: SafeZone {
        top: 151,
        bottom: 151,
        left: 151,
        right: 151,
    },
    safe_zone_description:
        "Keep all key content within 778×778px centered — 14% safe margin on all sides",
};

static META_FEED_LANDSCAPE: AdSize = AdSize {
    width: 1200,
    height: 628,
    aspect_ratio: "1.91:1",
    label: "Meta Feed — Landscape (1.91:1)",
    safe_zone: SafeZone {
        top: 88,
        bottom: 88,
        left: 168,
        right: 168,
    },
    safe_zone_description:
        "Keep content within 864×452px centered — 14% safe margin on all sides",
};

static META_FEED_PORTRAIT: AdSize = AdSize {
    width: 1080,
    height: 1350,
    aspect_ratio: "4:5",
    label: "Meta Feed — Portrait (4:5)",
    safe_zone: SafeZone {
        top: 189,
        bottom: 189,
        left: 151,
        right: 151,
    },
    safe_zone_description:
        "Keep content within 778×972px centered — 14% safe margin on all sides",
};

static META_STORY: AdSize = AdSize {
    width: 1080,
    height: 1920,
    aspect_ratio: "9:16",
    label: "Meta Story (9:16)",
    safe_zone: SafeZone {
        top: 250,
        bottom: 350,
        left: 0,
        right: 0,
    },
    safe_zone_description:
        "Avoid top 250px (UI chrome) and bottom 350px (CTA bar) — content safe zone: 250–1570px vertically",
};

static INSTAGRAM_FEED: AdSize = AdSize {
    width: 1080,
    height: 1080,
    aspect_ratio: "1:1",
    label: "Instagram Feed (1:1)",
    safe_zone: SafeZone {
        top: 151,
        bottom: 151,
        left: 151,
        right: 151,
    },
    safe_zone_description:
        "Keep all key content within 778×778px centered — 14% safe margin on all sides",
};

static INSTAGRAM_STORY: AdSize = AdSize {
    width: 1080,
    height: 1920,
    aspect_ratio: "9:16",
    label: "Instagram Story (9:16)",
    safe_zone: SafeZone {
        top: 250,
        bottom: 350,
        left: 0,
        right: 0,
    },
    safe_zone_description:
        "Avoid top 250px (profile header) and bottom 350px (reply bar) — safe zone: 250–1570px vertically",
};

static INSTAGRAM_REEL: AdSize = AdSize {
    width: 1080,
    height: 1920,
    aspect_ratio: "9:16",
    label: "Instagram Reel (9:16)",
    safe_zone: SafeZone {
        top: 250,
        bottom: 350,
        left: 0,
        right: 0,
    },
    safe_zone_description:
        "Avoid top 250px and bottom 350px — safe zone: 250–1570px vertically",
};
