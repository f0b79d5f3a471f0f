//! Drawable description of a national flag.
//!
//! Flags are modelled as weighted colour bands with an optional overlay, which is
//! enough to draw every flag in the quiz pool without shipping image assets.

/// Direction the bands of a flag run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandLayout {
    /// Bands stacked top to bottom.
    Horizontal,
    /// Bands placed left to right.
    Vertical,
}

/// A single colour band. `weight` is relative to the other bands of the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub color: &'static str,
    pub weight: u8,
}

impl Band {
    #[must_use]
    pub const fn new(color: &'static str) -> Self {
        Self { color, weight: 1 }
    }

    #[must_use]
    pub const fn weighted(color: &'static str, weight: u8) -> Self {
        Self { color, weight }
    }
}

/// Decoration drawn on top of the bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagOverlay {
    /// Rectangle in the top-left corner.
    Canton { color: &'static str },
    /// Straight cross over a diagonal saltire.
    Union {
        cross: &'static str,
        saltire: &'static str,
    },
    /// Emblem placed towards the hoist side of the centre band.
    Crest { color: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDesign {
    layout: BandLayout,
    bands: &'static [Band],
    overlay: Option<FlagOverlay>,
}

impl FlagDesign {
    #[must_use]
    pub const fn new(
        layout: BandLayout,
        bands: &'static [Band],
        overlay: Option<FlagOverlay>,
    ) -> Self {
        Self {
            layout,
            bands,
            overlay,
        }
    }

    #[must_use]
    pub fn layout(&self) -> BandLayout {
        self.layout
    }

    #[must_use]
    pub fn bands(&self) -> &'static [Band] {
        self.bands
    }

    #[must_use]
    pub fn overlay(&self) -> Option<FlagOverlay> {
        self.overlay
    }
}
