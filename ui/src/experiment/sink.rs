//! Best-effort mirroring of sealed runs to a remote store.
//!
//! The sink is a capability: views hold a `Box<dyn RecordSink>` and never
//! know whether uploads actually go anywhere. Without compile-time
//! configuration the [`NullSink`] stands in and every upload is a silent
//! no-op. Failures are returned, not propagated; the caller logs them and
//! shows a transient notice while the local report stays intact.

use async_trait::async_trait;
use serde::Serialize;

use super::flow::CompletedRun;
use super::tracker::SessionRecord;
use crate::core::format;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("record rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// One flat row per sealed run. Fields of absent sessions serialize as
/// nulls so the remote schema stays identical for partial runs.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentRow {
    pub run_id: String,
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub gift_budget: Option<String>,
    pub first_button: Option<String>,
    pub first_mode: Option<String>,
    pub first_range: Option<String>,
    pub first_product_id: Option<String>,
    pub first_product_name: Option<String>,
    pub first_duration_seconds: Option<f64>,
    pub first_click_count: Option<u32>,
    pub first_max_scroll_px: Option<f64>,
    pub first_started_at: Option<String>,
    pub first_ended_at: Option<String>,
    pub second_button: Option<String>,
    pub second_mode: Option<String>,
    pub second_range: Option<String>,
    pub second_product_id: Option<String>,
    pub second_product_name: Option<String>,
    pub second_duration_seconds: Option<f64>,
    pub second_click_count: Option<u32>,
    pub second_max_scroll_px: Option<f64>,
    pub second_started_at: Option<String>,
    pub second_ended_at: Option<String>,
    pub preference: Option<String>,
}

impl ExperimentRow {
    pub fn from_run(run: &CompletedRun) -> Self {
        let survey = run.survey.as_ref();
        let first = run.first.as_ref();
        let second = run.second.as_ref();
        Self {
            run_id: run.run_id.to_string(),
            name: survey.map(|s| s.name.clone()),
            age: survey.map(|s| s.age.clone()),
            gender: survey.map(|s| s.gender.clone()),
            gift_budget: survey.map(|s| s.gift_budget.clone()),
            first_button: first.map(|s| s.button_label.clone()),
            first_mode: first.map(|s| s.mode.as_str().to_string()),
            first_range: first.map(|s| s.range.as_str().to_string()),
            first_product_id: product_id(first),
            first_product_name: product_name(first),
            first_duration_seconds: first.map(|s| s.duration_seconds),
            first_click_count: first.map(|s| s.click_count),
            first_max_scroll_px: first.map(|s| s.max_scroll_px),
            first_started_at: first.and_then(|s| format::epoch_ms_rfc3339(s.started_at_ms)),
            first_ended_at: first.and_then(|s| format::epoch_ms_rfc3339(s.ended_at_ms)),
            second_button: second.map(|s| s.button_label.clone()),
            second_mode: second.map(|s| s.mode.as_str().to_string()),
            second_range: second.map(|s| s.range.as_str().to_string()),
            second_product_id: product_id(second),
            second_product_name: product_name(second),
            second_duration_seconds: second.map(|s| s.duration_seconds),
            second_click_count: second.map(|s| s.click_count),
            second_max_scroll_px: second.map(|s| s.max_scroll_px),
            second_started_at: second.and_then(|s| format::epoch_ms_rfc3339(s.started_at_ms)),
            second_ended_at: second.and_then(|s| format::epoch_ms_rfc3339(s.ended_at_ms)),
            preference: run.preference.map(|p| p.as_str().to_string()),
        }
    }
}

fn product_id(record: Option<&SessionRecord>) -> Option<String> {
    record
        .and_then(|s| s.selected.as_ref())
        .map(|p| p.id.clone())
}

fn product_name(record: Option<&SessionRecord>) -> Option<String> {
    record
        .and_then(|s| s.selected.as_ref())
        .map(|p| p.name.clone())
}

/// Where sealed runs get mirrored. `?Send` because the wasm client futures
/// are not `Send` and the UI awaits them on one thread anyway.
#[async_trait(?Send)]
pub trait RecordSink {
    fn label(&self) -> &'static str;
    async fn create_record(&self, row: &ExperimentRow) -> Result<(), SinkError>;
}

/// Stand-in when no sink is configured. Skipping is the intended behavior,
/// so this logs at debug and reports success.
#[derive(Debug, Default)]
pub struct NullSink;

#[async_trait(?Send)]
impl RecordSink for NullSink {
    fn label(&self) -> &'static str {
        "none"
    }

    async fn create_record(&self, _row: &ExperimentRow) -> Result<(), SinkError> {
        tracing::debug!("no record sink configured, upload skipped");
        Ok(())
    }
}

/// Supabase-style REST sink: one POST per run against the
/// `experiment_records` table.
#[derive(Debug, Clone)]
pub struct SupabaseSink {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl SupabaseSink {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn records_url(&self) -> String {
        format!(
            "{}/rest/v1/experiment_records",
            self.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait(?Send)]
impl RecordSink for SupabaseSink {
    fn label(&self) -> &'static str {
        "supabase"
    }

    async fn create_record(&self, row: &ExperimentRow) -> Result<(), SinkError> {
        let response = self
            .client
            .post(self.records_url())
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(run_id = %row.run_id, "experiment record uploaded");
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(SinkError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Resolves the sink from compile-time configuration. Both variables must
/// be present and non-empty, otherwise uploads are silently skipped.
pub fn configured_sink() -> Box<dyn RecordSink> {
    match (
        option_env!("PRICEFRAME_SUPABASE_URL"),
        option_env!("PRICEFRAME_SUPABASE_ANON_KEY"),
    ) {
        (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => {
            Box::new(SupabaseSink::new(url, key))
        }
        _ => Box::new(NullSink),
    }
}
