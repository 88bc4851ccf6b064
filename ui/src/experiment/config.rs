//! Session configurations and the counterbalancing pairing rule.
//!
//! A session runs under one of exactly four configurations: a pricing layout
//! crossed with a catalog range. The landing screen exposes all four as
//! "Button 1".."Button 4"; whichever the participant picks, the partner
//! session uses the configuration that differs in both dimensions, so every
//! completed run covers both layouts and both ranges exactly once.

use serde::{Deserialize, Serialize};

/// Which price figure a product card visually foregrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayMode {
    DiscountEmphasis,
    PriceEmphasis,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DiscountEmphasis => "DISCOUNT_EMPHASIS",
            Self::PriceEmphasis => "PRICE_EMPHASIS",
        }
    }

    /// Label used on the landing buttons and in reports.
    pub fn describe(self) -> &'static str {
        match self {
            Self::DiscountEmphasis => "Discount Emphasis",
            Self::PriceEmphasis => "Price Emphasis",
        }
    }
}

/// Which 50-item slice of the catalog a session shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductRange {
    #[serde(rename = "RANGE_1_50")]
    Range1To50,
    #[serde(rename = "RANGE_51_100")]
    Range51To100,
}

impl ProductRange {
    /// Items per range slice.
    pub const SLICE_LEN: usize = 50;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Range1To50 => "RANGE_1_50",
            Self::Range51To100 => "RANGE_51_100",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Range1To50 => "1-50",
            Self::Range51To100 => "51-100",
        }
    }

    /// Offset of this slice in the full ordered catalog.
    pub fn offset(self) -> usize {
        match self {
            Self::Range1To50 => 0,
            Self::Range51To100 => Self::SLICE_LEN,
        }
    }
}

/// One of the four landing configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonConfig {
    pub mode: DisplayMode,
    pub range: ProductRange,
}

impl ButtonConfig {
    /// The closed set, in landing-screen order.
    pub const ALL: [ButtonConfig; 4] = [
        Self::new(DisplayMode::DiscountEmphasis, ProductRange::Range1To50),
        Self::new(DisplayMode::PriceEmphasis, ProductRange::Range1To50),
        Self::new(DisplayMode::DiscountEmphasis, ProductRange::Range51To100),
        Self::new(DisplayMode::PriceEmphasis, ProductRange::Range51To100),
    ];

    pub const fn new(mode: DisplayMode, range: ProductRange) -> Self {
        Self { mode, range }
    }

    /// Stable display name matching landing-screen numbering.
    pub fn label(self) -> &'static str {
        match (self.mode, self.range) {
            (DisplayMode::DiscountEmphasis, ProductRange::Range1To50) => "Button 1",
            (DisplayMode::PriceEmphasis, ProductRange::Range1To50) => "Button 2",
            (DisplayMode::DiscountEmphasis, ProductRange::Range51To100) => "Button 3",
            (DisplayMode::PriceEmphasis, ProductRange::Range51To100) => "Button 4",
        }
    }

    /// The counterbalancing partner: a fixed total bijection with no fixed
    /// points, flipping both the mode and the range.
    ///
    ///   Button 1 (Discount, 1-50)   <-> Button 4 (Price, 51-100)
    ///   Button 2 (Price, 1-50)      <-> Button 3 (Discount, 51-100)
    pub fn partner(self) -> ButtonConfig {
        match (self.mode, self.range) {
            (DisplayMode::DiscountEmphasis, ProductRange::Range1To50) => {
                Self::new(DisplayMode::PriceEmphasis, ProductRange::Range51To100)
            }
            (DisplayMode::PriceEmphasis, ProductRange::Range1To50) => {
                Self::new(DisplayMode::DiscountEmphasis, ProductRange::Range51To100)
            }
            (DisplayMode::DiscountEmphasis, ProductRange::Range51To100) => {
                Self::new(DisplayMode::PriceEmphasis, ProductRange::Range1To50)
            }
            (DisplayMode::PriceEmphasis, ProductRange::Range51To100) => {
                Self::new(DisplayMode::DiscountEmphasis, ProductRange::Range1To50)
            }
        }
    }

    /// Landing-screen subtitle, e.g. `Discount Emphasis (1-50)`.
    pub fn describe(self) -> String {
        format!("{} ({})", self.mode.describe(), self.range.describe())
    }
}
