//! Plain-text report assembly.
//!
//! `assemble` is pure: the same [`CompletedRun`] always yields the same
//! text, so the report can be regenerated or unit-tested without touching
//! the clock or the filesystem.

use super::flow::CompletedRun;
use super::tracker::SessionRecord;
use crate::core::format;

/// Download name for a sealed run, keyed by its generation timestamp.
pub fn filename(run: &CompletedRun) -> String {
    format!("experiment_report_{}.txt", run.generated_at_ms as u64)
}

pub fn assemble(run: &CompletedRun) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Priceframe Experiment Report".to_string());
    lines.push("============================".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Generated: {}",
        format::format_epoch_ms_utc(run.generated_at_ms)
    ));
    lines.push(format!("Run ID: {}", run.run_id));
    lines.push(String::new());

    lines.push("-- Participant --".to_string());
    match run.survey.as_ref() {
        Some(survey) => {
            lines.push(format!("Name: {}", or_na(&survey.name)));
            lines.push(format!("Age: {}", or_na(&survey.age)));
            lines.push(format!("Gender: {}", or_na(&survey.gender)));
            lines.push(format!("Gift budget: {}", or_na(&survey.gift_budget)));
        }
        None => {
            lines.push("Name: N/A".to_string());
            lines.push("Age: N/A".to_string());
            lines.push("Gender: N/A".to_string());
            lines.push("Gift budget: N/A".to_string());
        }
    }
    lines.push(String::new());

    push_session(&mut lines, "First Session", run.first.as_ref());
    push_session(&mut lines, "Second Session", run.second.as_ref());

    lines.push("-- Post Survey --".to_string());
    match run.preference {
        Some(preference) => lines.push(format!("Preference: {}", preference.as_str())),
        None => lines.push("Preference: N/A".to_string()),
    }
    lines.push(String::new());

    lines.push("-- Summary --".to_string());
    match (run.first.as_ref(), run.second.as_ref()) {
        (Some(first), Some(second)) => {
            let total_duration = first.duration_seconds + second.duration_seconds;
            let total_clicks = first.click_count + second.click_count;
            lines.push(format!(
                "Total duration: {}",
                format::format_duration_secs(total_duration)
            ));
            lines.push(format!("Total clicks: {total_clicks}"));
        }
        _ => {
            lines.push("Total duration: N/A".to_string());
            lines.push("Total clicks: N/A".to_string());
        }
    }
    lines.push(String::new());

    lines.join("\n")
}

fn push_session(lines: &mut Vec<String>, title: &str, record: Option<&SessionRecord>) {
    lines.push(format!("-- {title} --"));
    let Some(record) = record else {
        lines.push("N/A".to_string());
        lines.push(String::new());
        return;
    };

    lines.push(format!("Button: {}", record.button_label));
    lines.push(format!("Mode: {}", record.mode.describe()));
    lines.push(format!("Range: {}", record.range.describe()));
    lines.push(format!(
        "Duration: {}",
        format::format_duration_secs(record.duration_seconds)
    ));
    lines.push(format!("Clicks: {}", record.click_count));
    lines.push(format!(
        "Max scroll depth: {}",
        format::format_scroll_px(record.max_scroll_px)
    ));
    lines.push(format!(
        "Started: {}",
        format::format_epoch_ms_utc(record.started_at_ms)
    ));
    lines.push(format!(
        "Ended: {}",
        format::format_epoch_ms_utc(record.ended_at_ms)
    ));
    match record.selected.as_ref() {
        Some(product) => {
            lines.push("Selected product:".to_string());
            lines.push(format!("  Id: {}", product.id));
            lines.push(format!("  Name: {}", product.name));
            lines.push(format!(
                "  Original price: {}",
                format::format_won(product.original_price)
            ));
            lines.push(format!(
                "  Discounted price: {}",
                format::format_won(product.discounted_price)
            ));
            lines.push(format!("  Discount: {}%", product.discount_percentage));
            lines.push(format!(
                "  Rating: {:.1} ({} reviews)",
                product.rating, product.review_count
            ));
            lines.push(format!("  Image keyword: {}", product.image_keyword));
        }
        None => lines.push("Selected product: (no product selected)".to_string()),
    }
    lines.push(String::new());
}

fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::catalog::Product;
    use crate::experiment::config::{ButtonConfig, DisplayMode, ProductRange};
    use crate::experiment::flow::{SitePreference, SurveyRecord};
    use uuid::Uuid;

    fn product(id: &str) -> Product {
        Product {
            id: id.into(),
            name: "크루아상".into(),
            description: "버터 크루아상".into(),
            original_price: 12_900,
            discounted_price: 9_900,
            discount_percentage: 23,
            rating: 4.5,
            review_count: 123,
            image_keyword: "photorealistic product shot of a croissant".into(),
        }
    }

    fn session(config: ButtonConfig, selected: Option<Product>) -> SessionRecord {
        let mut tracker = crate::experiment::tracker::SessionTracker::start(config, 1_700_000_000_000.0);
        tracker.record_click();
        tracker.record_click();
        tracker.observe_scroll(1_847.0);
        tracker.stop(selected, 1_700_000_012_500.0)
    }

    fn full_run() -> CompletedRun {
        let first = ButtonConfig::new(DisplayMode::DiscountEmphasis, ProductRange::Range1To50);
        CompletedRun {
            run_id: Uuid::nil(),
            generated_at_ms: 1_700_000_020_000.0,
            survey: Some(SurveyRecord {
                name: "Kim".into(),
                age: "25".into(),
                gender: "여성".into(),
                gift_budget: "1만원~3만원".into(),
            }),
            first: Some(session(first, Some(product("p5")))),
            second: Some(session(first.partner(), Some(product("p73")))),
            preference: Some(SitePreference::Bread),
        }
    }

    #[test]
    fn full_run_renders_every_section_once() {
        let text = assemble(&full_run());

        for header in [
            "-- Participant --",
            "-- First Session --",
            "-- Second Session --",
            "-- Post Survey --",
            "-- Summary --",
        ] {
            assert_eq!(text.matches(header).count(), 1, "{header}");
        }

        assert!(text.contains("Name: Kim"));
        assert!(text.contains("Gift budget: 1만원~3만원"));
        assert!(text.contains("Button: Button 1"));
        assert!(text.contains("Button: Button 4"));
        assert!(text.contains("  Id: p5"));
        assert!(text.contains("  Id: p73"));
        assert!(text.contains("Mode: Discount Emphasis"));
        assert!(text.contains("Mode: Price Emphasis"));
        assert!(text.contains("Range: 1-50"));
        assert!(text.contains("Range: 51-100"));
        assert!(text.contains("Duration: 12.50 s"));
        assert!(text.contains("Max scroll depth: 1847 px"));
        assert!(text.contains("  Original price: \u{20a9}12,900"));
        assert!(text.contains("  Rating: 4.5 (123 reviews)"));
        assert!(text.contains("Preference: 빵"));
        assert!(text.contains("Total duration: 25.00 s"));
        assert!(text.contains("Total clicks: 4"));
        assert!(text.contains("Generated: 2023-11-14 22:13:40 UTC"));
        assert!(!text.contains("N/A"));
    }

    #[test]
    fn first_button_precedes_its_partner() {
        let text = assemble(&full_run());
        let first = text.find("Button: Button 1").unwrap();
        let second = text.find("Button: Button 4").unwrap();
        assert!(first < second);
    }

    #[test]
    fn missing_second_session_renders_na_without_totals() {
        let mut run = full_run();
        run.second = None;
        run.preference = None;
        let text = assemble(&run);

        assert_eq!(text.matches("-- Second Session --").count(), 1);
        assert!(text.contains("-- Second Session --\nN/A"));
        assert!(text.contains("Button: Button 1"));
        assert!(text.contains("Preference: N/A"));
        assert!(text.contains("Total duration: N/A"));
        assert!(text.contains("Total clicks: N/A"));
    }

    #[test]
    fn productless_session_is_marked() {
        let mut run = full_run();
        let first = ButtonConfig::new(DisplayMode::DiscountEmphasis, ProductRange::Range1To50);
        run.first = Some(session(first, None));
        let text = assemble(&run);
        assert!(text.contains("Selected product: (no product selected)"));
        assert!(!text.contains("  Id: p5"));
    }

    #[test]
    fn missing_survey_renders_na_per_field() {
        let mut run = full_run();
        run.survey = None;
        let text = assemble(&run);
        assert!(text.contains("Name: N/A"));
        assert!(text.contains("Age: N/A"));
        assert!(text.contains("Gender: N/A"));
        assert!(text.contains("Gift budget: N/A"));
    }

    #[test]
    fn blank_survey_fields_degrade_to_na() {
        let mut run = full_run();
        run.survey = Some(SurveyRecord {
            name: "  ".into(),
            age: String::new(),
            gender: "여성".into(),
            gift_budget: "1만원 미만".into(),
        });
        let text = assemble(&run);
        assert!(text.contains("Name: N/A"));
        assert!(text.contains("Age: N/A"));
        assert!(text.contains("Gender: 여성"));
    }

    #[test]
    fn assembly_is_deterministic() {
        let run = full_run();
        assert_eq!(assemble(&run), assemble(&run));
    }

    #[test]
    fn filename_uses_whole_milliseconds() {
        let run = full_run();
        assert_eq!(filename(&run), "experiment_report_1700000020000.txt");
    }
}
