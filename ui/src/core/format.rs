//! Formatting helpers for prices, durations, and report timestamps.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Korean won with thousands separators, e.g. `₩12,900`.
pub fn format_won(amount: u32) -> String {
    format!("₩{}", thousands(amount))
}

/// Seconds with two decimal places, e.g. `12.34 s`.
pub fn format_duration_secs(value: f64) -> String {
    format!("{value:.2} s")
}

/// Scroll depth as whole pixels.
pub fn format_scroll_px(value: f64) -> String {
    format!("{value:.0} px")
}

/// Human-readable UTC timestamp for report bodies, e.g. `2024-05-01 09:30:12 UTC`.
pub fn format_epoch_ms_utc(epoch_ms: f64) -> String {
    match offset_from_epoch_ms(epoch_ms) {
        Some(ts) => {
            use time::macros::format_description;
            ts.format(&format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second] UTC"
            ))
            .unwrap_or_else(|_| "invalid timestamp".into())
        }
        None => "invalid timestamp".into(),
    }
}

/// RFC3339 rendering of an epoch-ms stamp, used for remote sink columns.
pub fn epoch_ms_rfc3339(epoch_ms: f64) -> Option<String> {
    offset_from_epoch_ms(epoch_ms)?.format(&Rfc3339).ok()
}

fn offset_from_epoch_ms(epoch_ms: f64) -> Option<OffsetDateTime> {
    if !epoch_ms.is_finite() {
        return None;
    }
    let nanos = (epoch_ms * 1_000_000.0) as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
}

fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn won_groups_thousands() {
        assert_eq!(format_won(0), "₩0");
        assert_eq!(format_won(900), "₩900");
        assert_eq!(format_won(12_900), "₩12,900");
        assert_eq!(format_won(1_234_567), "₩1,234,567");
    }

    #[test]
    fn durations_keep_two_decimals() {
        assert_eq!(format_duration_secs(12.0), "12.00 s");
        assert_eq!(format_duration_secs(0.755), "0.76 s");
    }

    #[test]
    fn scroll_depth_rounds_to_whole_px() {
        assert_eq!(format_scroll_px(2480.4), "2480 px");
    }

    #[test]
    fn epoch_formatting_matches_known_instant() {
        // 2023-11-14T22:13:20Z
        let stamp = 1_700_000_000_000.0;
        assert_eq!(format_epoch_ms_utc(stamp), "2023-11-14 22:13:20 UTC");
        assert_eq!(
            epoch_ms_rfc3339(stamp).as_deref(),
            Some("2023-11-14T22:13:20Z")
        );
    }

    #[test]
    fn non_finite_epoch_degrades() {
        assert_eq!(format_epoch_ms_utc(f64::NAN), "invalid timestamp");
        assert!(epoch_ms_rfc3339(f64::INFINITY).is_none());
    }
}
