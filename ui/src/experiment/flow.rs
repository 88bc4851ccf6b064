//! The experiment state machine.
//!
//! One participant moves linearly through
//! `Survey -> Landing -> Session(first) -> Session(second) -> PostSurvey`,
//! after which the run seals into a [`CompletedRun`] and the machine resets
//! to a fresh survey. Sealing and resetting happen in the same call: the
//! caller receives an owned snapshot to deliver, so nothing that happens
//! during delivery (a failing remote sink, most notably) can corrupt the
//! next run's state.
//!
//! Transition methods take the current wall-clock time as a parameter and
//! return outcome enums. Calls that arrive outside their phase are ignored
//! and logged; under correct view wiring they are unreachable.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::{CatalogProvider, Product, StaticCatalog};
use super::config::ButtonConfig;
use super::tracker::{SessionRecord, SessionTracker};
use crate::core::timing::EpochMs;

/// Which session slot is (or was) active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSlot {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentPhase {
    Survey,
    Landing,
    Session(SessionSlot),
    PostSurvey,
}

/// Pre-survey answers, collected once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRecord {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub gift_budget: String,
}

/// The post-survey answer: which of the two shops felt easier to choose in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SitePreference {
    #[serde(rename = "빵")]
    Bread,
    #[serde(rename = "과일")]
    Fruit,
}

impl SitePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bread => "빵",
            Self::Fruit => "과일",
        }
    }
}

/// Sealed aggregate of one run, handed to the report assembler and the sink.
/// Optional fields stay `None` when a run was terminated early.
#[derive(Debug, Clone, Serialize)]
pub struct CompletedRun {
    pub run_id: Uuid,
    pub generated_at_ms: EpochMs,
    pub survey: Option<SurveyRecord>,
    pub first: Option<SessionRecord>,
    pub second: Option<SessionRecord>,
    pub preference: Option<SitePreference>,
}

/// Outcome of the simple forward transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    Advanced,
    Ignored,
}

/// Outcome of a product selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// First session sealed; the partner session is already running.
    PartnerStarted(ButtonConfig),
    /// Second session sealed; the post-survey is next.
    SessionsComplete,
    /// Call arrived outside a session phase.
    Ignored,
}

#[derive(Debug, Clone)]
struct ActiveSession {
    tracker: SessionTracker,
    products: Vec<Product>,
}

#[derive(Debug, Clone)]
pub struct ExperimentFlow {
    phase: ExperimentPhase,
    survey: Option<SurveyRecord>,
    first: Option<SessionRecord>,
    second: Option<SessionRecord>,
    active: Option<ActiveSession>,
    catalog: Rc<dyn CatalogProvider>,
}

impl Default for ExperimentFlow {
    fn default() -> Self {
        Self::new(Rc::new(StaticCatalog))
    }
}

impl ExperimentFlow {
    pub fn new(catalog: Rc<dyn CatalogProvider>) -> Self {
        Self {
            phase: ExperimentPhase::Survey,
            survey: None,
            first: None,
            second: None,
            active: None,
            catalog,
        }
    }

    pub fn phase(&self) -> ExperimentPhase {
        self.phase
    }

    pub fn survey(&self) -> Option<&SurveyRecord> {
        self.survey.as_ref()
    }

    /// Configuration of the session currently on screen, if any.
    pub fn active_config(&self) -> Option<ButtonConfig> {
        self.active.as_ref().map(|session| session.tracker.config())
    }

    /// Products of the session currently on screen; empty outside sessions.
    pub fn active_products(&self) -> &[Product] {
        self.active
            .as_ref()
            .map(|session| session.products.as_slice())
            .unwrap_or(&[])
    }

    /// Forwarded to the live tracker; a no-op outside sessions.
    pub fn record_click(&mut self) {
        if let Some(session) = self.active.as_mut() {
            session.tracker.record_click();
        }
    }

    /// Forwarded to the live tracker; a no-op outside sessions.
    pub fn observe_scroll(&mut self, depth_px: f64) {
        if let Some(session) = self.active.as_mut() {
            session.tracker.observe_scroll(depth_px);
        }
    }

    /// `Survey -> Landing`. Unconditional once the form validates.
    pub fn submit_survey(&mut self, record: SurveyRecord) -> FlowOutcome {
        if self.phase != ExperimentPhase::Survey {
            tracing::warn!("ignoring survey submission in {:?}", self.phase);
            return FlowOutcome::Ignored;
        }
        self.survey = Some(record);
        self.phase = ExperimentPhase::Landing;
        FlowOutcome::Advanced
    }

    /// `Landing -> Session(first)`. Resolves the catalog slice for the chosen
    /// range and starts a fresh tracker. An empty slice is not an error; the
    /// session simply shows no products.
    pub fn select_button(&mut self, config: ButtonConfig, now_ms: EpochMs) -> FlowOutcome {
        if self.phase != ExperimentPhase::Landing {
            tracing::warn!("ignoring button selection in {:?}", self.phase);
            return FlowOutcome::Ignored;
        }
        self.start_session(config, SessionSlot::First, now_ms);
        tracing::info!("first session started under {}", config.label());
        FlowOutcome::Advanced
    }

    /// Seals the active session with the chosen product. Mid-run this chains
    /// straight into the counterbalanced partner session with no landing
    /// screen in between; after the second session the post-survey is next.
    pub fn select_product(&mut self, product: Product, now_ms: EpochMs) -> SelectionOutcome {
        let slot = match self.phase {
            ExperimentPhase::Session(slot) => slot,
            _ => {
                tracing::warn!("ignoring product selection in {:?}", self.phase);
                return SelectionOutcome::Ignored;
            }
        };
        let Some(active) = self.active.take() else {
            tracing::warn!("session phase with no live tracker");
            return SelectionOutcome::Ignored;
        };

        let config = active.tracker.config();
        let record = active.tracker.stop(Some(product), now_ms);

        match slot {
            SessionSlot::First => {
                self.first = Some(record);
                let partner = config.partner();
                self.start_session(partner, SessionSlot::Second, now_ms);
                tracing::info!("second session started under {}", partner.label());
                SelectionOutcome::PartnerStarted(partner)
            }
            SessionSlot::Second => {
                self.second = Some(record);
                self.phase = ExperimentPhase::PostSurvey;
                SelectionOutcome::SessionsComplete
            }
        }
    }

    /// `PostSurvey -> sealed run`. Records the preference, seals the
    /// aggregate, and resets to a fresh survey in one step.
    pub fn submit_preference(
        &mut self,
        preference: SitePreference,
        now_ms: EpochMs,
    ) -> Option<CompletedRun> {
        if self.phase != ExperimentPhase::PostSurvey {
            tracing::warn!("ignoring preference submission in {:?}", self.phase);
            return None;
        }
        Some(self.seal_run(Some(preference), now_ms))
    }

    /// Operator escape hatch, available during sessions only. The active
    /// session seals into its own slot without a product; the untouched slot
    /// and the preference stay empty in the resulting run.
    pub fn end_early(&mut self, now_ms: EpochMs) -> Option<CompletedRun> {
        let slot = match self.phase {
            ExperimentPhase::Session(slot) => slot,
            _ => {
                tracing::warn!("ignoring early termination in {:?}", self.phase);
                return None;
            }
        };
        if let Some(active) = self.active.take() {
            let record = active.tracker.stop(None, now_ms);
            match slot {
                SessionSlot::First => self.first = Some(record),
                SessionSlot::Second => self.second = Some(record),
            }
        }
        tracing::info!("run terminated early during the {:?} session", slot);
        Some(self.seal_run(None, now_ms))
    }

    fn start_session(&mut self, config: ButtonConfig, slot: SessionSlot, now_ms: EpochMs) {
        let products = self.catalog.products_for(config.range);
        self.active = Some(ActiveSession {
            tracker: SessionTracker::start(config, now_ms),
            products,
        });
        self.phase = ExperimentPhase::Session(slot);
    }

    /// Drains every collected field into an owned snapshot and returns the
    /// machine to a fresh `Survey` state.
    fn seal_run(&mut self, preference: Option<SitePreference>, now_ms: EpochMs) -> CompletedRun {
        let run = CompletedRun {
            run_id: Uuid::new_v4(),
            generated_at_ms: now_ms,
            survey: self.survey.take(),
            first: self.first.take(),
            second: self.second.take(),
            preference,
        };
        self.active = None;
        self.phase = ExperimentPhase::Survey;
        run
    }
}
