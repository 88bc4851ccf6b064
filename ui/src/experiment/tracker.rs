//! Session-scoped interaction tracking.
//!
//! One tracker lives exactly as long as one shopping session: started when a
//! configuration is chosen, consumed when the session seals. Because `stop`
//! takes the tracker by value, a sealed [`SessionRecord`] can never tick
//! again and counts cannot leak into the next session.

use serde::{Deserialize, Serialize};

use super::catalog::Product;
use super::config::{ButtonConfig, DisplayMode, ProductRange};
use crate::core::timing::EpochMs;

/// Immutable snapshot of one finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub button_label: String,
    pub mode: DisplayMode,
    pub range: ProductRange,
    #[serde(rename = "selectedProduct")]
    pub selected: Option<Product>,
    pub duration_seconds: f64,
    pub click_count: u32,
    pub max_scroll_px: f64,
    pub started_at_ms: EpochMs,
    pub ended_at_ms: EpochMs,
}

/// Live counters for the session currently on screen.
#[derive(Debug, Clone)]
pub struct SessionTracker {
    config: ButtonConfig,
    started_at_ms: EpochMs,
    click_count: u32,
    max_scroll_px: f64,
}

impl SessionTracker {
    /// Begin a session under `config` at the supplied reference instant.
    /// Both counters start at exactly zero.
    pub fn start(config: ButtonConfig, now_ms: EpochMs) -> Self {
        Self {
            config,
            started_at_ms: now_ms,
            click_count: 0,
            max_scroll_px: 0.0,
        }
    }

    pub fn config(&self) -> ButtonConfig {
        self.config
    }

    pub fn click_count(&self) -> u32 {
        self.click_count
    }

    pub fn max_scroll_px(&self) -> f64 {
        self.max_scroll_px
    }

    /// Every pointer click in the session viewport counts, with no
    /// deduplication and no distinction by target.
    pub fn record_click(&mut self) {
        self.click_count = self.click_count.saturating_add(1);
    }

    /// `depth_px` is `scrollOffset + viewportHeight`; the recorded maximum
    /// only ever grows.
    pub fn observe_scroll(&mut self, depth_px: f64) {
        if depth_px > self.max_scroll_px {
            self.max_scroll_px = depth_px;
        }
    }

    /// Seal the session into an immutable record. Consumes the tracker; the
    /// next session must start a fresh one.
    pub fn stop(self, selected: Option<Product>, now_ms: EpochMs) -> SessionRecord {
        let elapsed_ms = (now_ms - self.started_at_ms).max(0.0);
        SessionRecord {
            button_label: self.config.label().to_string(),
            mode: self.config.mode,
            range: self.config.range,
            selected,
            duration_seconds: elapsed_ms / 1000.0,
            click_count: self.click_count,
            max_scroll_px: self.max_scroll_px,
            started_at_ms: self.started_at_ms,
            ended_at_ms: now_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ButtonConfig {
        ButtonConfig::new(DisplayMode::DiscountEmphasis, ProductRange::Range1To50)
    }

    #[test]
    fn counters_start_at_zero() {
        let tracker = SessionTracker::start(config(), 1_000.0);
        assert_eq!(tracker.click_count(), 0);
        assert_eq!(tracker.max_scroll_px(), 0.0);
    }

    #[test]
    fn clicks_accumulate_without_deduplication() {
        let mut tracker = SessionTracker::start(config(), 1_000.0);
        for _ in 0..5 {
            tracker.record_click();
        }
        assert_eq!(tracker.click_count(), 5);
    }

    #[test]
    fn scroll_depth_is_monotonic() {
        let mut tracker = SessionTracker::start(config(), 1_000.0);
        tracker.observe_scroll(800.0);
        tracker.observe_scroll(1_450.0);
        tracker.observe_scroll(900.0);
        assert_eq!(tracker.max_scroll_px(), 1_450.0);
    }

    #[test]
    fn nan_scroll_depth_is_ignored() {
        let mut tracker = SessionTracker::start(config(), 1_000.0);
        tracker.observe_scroll(600.0);
        tracker.observe_scroll(f64::NAN);
        assert_eq!(tracker.max_scroll_px(), 600.0);
    }

    #[test]
    fn stop_seals_a_fractional_duration() {
        let mut tracker = SessionTracker::start(config(), 10_000.0);
        tracker.record_click();
        tracker.observe_scroll(1_200.0);

        let record = tracker.stop(None, 22_340.0);
        assert_eq!(record.duration_seconds, 12.34);
        assert_eq!(record.click_count, 1);
        assert_eq!(record.max_scroll_px, 1_200.0);
        assert_eq!(record.started_at_ms, 10_000.0);
        assert_eq!(record.ended_at_ms, 22_340.0);
        assert_eq!(record.button_label, "Button 1");
    }

    #[test]
    fn duration_is_never_negative() {
        let tracker = SessionTracker::start(config(), 5_000.0);
        // A clock that steps backwards still seals a non-negative duration.
        let record = tracker.stop(None, 4_000.0);
        assert_eq!(record.duration_seconds, 0.0);
    }

    #[test]
    fn record_captures_the_start_configuration() {
        let cfg = ButtonConfig::new(DisplayMode::PriceEmphasis, ProductRange::Range51To100);
        let tracker = SessionTracker::start(cfg, 0.0);
        let record = tracker.stop(None, 1_000.0);
        assert_eq!(record.button_label, "Button 4");
        assert_eq!(record.mode, DisplayMode::PriceEmphasis);
        assert_eq!(record.range, ProductRange::Range51To100);
    }
}
