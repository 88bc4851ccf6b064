use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::{download, platform, timing};
use crate::t;

use super::catalog::Product;
use super::config::ButtonConfig;
use super::flow::{
    CompletedRun, ExperimentFlow, ExperimentPhase, SelectionOutcome, SessionSlot, SitePreference,
    SurveyRecord,
};
use super::report;
use super::screens::{LandingScreen, PostSurveyScreen, SessionScreen, SurveyScreen};
use super::sink::{self, ExperimentRow, RecordSink};

/// How long a delivery notice stays on screen before auto-dismissing.
const NOTICE_DISMISS_MS: u64 = 6_000;

/// Hosts the whole experiment: one state machine signal, one event loop.
/// Every input, from form submits down to raw scroll ticks, arrives as an
/// [`ExperimentEvent`] so ordering is total and transitions stay serial.
#[component]
pub fn ExperimentView() -> Element {
    let flow = use_signal(ExperimentFlow::default);
    let notice = use_signal(|| Option::<Notice>::None);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<ExperimentEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let flow_ref = flow.clone();
        let notice_ref = notice.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<ExperimentEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut flow_signal = flow_ref.clone();
            let mut notice_signal = notice_ref.clone();
            let sink = sink::configured_sink();

            async move {
                tracing::debug!(sink = sink.label(), "experiment event loop ready");
                let mut next_notice_id: u64 = 0;

                while let Some(event) = rx.next().await {
                    match event {
                        ExperimentEvent::SurveySubmitted(record) => {
                            flow_signal.with_mut(|flow| flow.submit_survey(record));
                        }
                        ExperimentEvent::ButtonSelected(config) => {
                            flow_signal
                                .with_mut(|flow| flow.select_button(config, timing::now_ms()));
                            platform::scroll_to_top();
                        }
                        ExperimentEvent::ClickObserved => {
                            flow_signal.with_mut(|flow| flow.record_click());
                        }
                        ExperimentEvent::ScrollObserved { depth_px } => {
                            flow_signal.with_mut(|flow| flow.observe_scroll(depth_px));
                        }
                        ExperimentEvent::ProductChosen(product) => {
                            let outcome = flow_signal
                                .with_mut(|flow| flow.select_product(product, timing::now_ms()));
                            if matches!(outcome, SelectionOutcome::PartnerStarted(_)) {
                                platform::scroll_to_top();
                            }
                        }
                        ExperimentEvent::PreferenceSubmitted(preference) => {
                            let sealed = flow_signal.with_mut(|flow| {
                                flow.submit_preference(preference, timing::now_ms())
                            });
                            if let Some(run) = sealed {
                                platform::scroll_to_top();
                                let (kind, message) = deliver_run(&run, sink.as_ref()).await;
                                next_notice_id += 1;
                                notice_signal.set(Some(Notice {
                                    id: next_notice_id,
                                    kind,
                                    message,
                                }));
                                queue_dismiss(sender_slot.clone(), next_notice_id);
                            }
                        }
                        ExperimentEvent::EndRequested => {
                            let sealed =
                                flow_signal.with_mut(|flow| flow.end_early(timing::now_ms()));
                            if let Some(run) = sealed {
                                platform::scroll_to_top();
                                let (kind, message) = deliver_run(&run, sink.as_ref()).await;
                                next_notice_id += 1;
                                notice_signal.set(Some(Notice {
                                    id: next_notice_id,
                                    kind,
                                    message,
                                }));
                                queue_dismiss(sender_slot.clone(), next_notice_id);
                            }
                        }
                        ExperimentEvent::NoticeExpired { id } => {
                            notice_signal.with_mut(|slot| {
                                if slot.as_ref().is_some_and(|notice| notice.id == id) {
                                    *slot = None;
                                }
                            });
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    use_context_provider(|| EventBridge {
        sender: coroutine.tx(),
    });

    let phase = flow.with(|flow| flow.phase());
    let notice_view = notice().map(|notice| {
        let class = match notice.kind {
            NoticeKind::Info => "notice notice--info",
            NoticeKind::Error => "notice notice--error",
        };
        (class, notice.message)
    });

    let screen = match phase {
        ExperimentPhase::Survey => rsx! {
            SurveyScreen {}
        },
        ExperimentPhase::Landing => rsx! {
            LandingScreen {}
        },
        ExperimentPhase::Session(slot) => {
            let config = flow.with(|flow| flow.active_config());
            let products = flow.with(|flow| flow.active_products().to_vec());
            let slot_key = match slot {
                SessionSlot::First => "first",
                SessionSlot::Second => "second",
            };
            match config {
                Some(config) => rsx! {
                    SessionScreen {
                        key: "{slot_key}",
                        config,
                        slot,
                        products,
                    }
                },
                None => rsx! {},
            }
        }
        ExperimentPhase::PostSurvey => rsx! {
            PostSurveyScreen {}
        },
    };

    rsx! {
        section { class: "experiment",
            {screen}
            if let Some((notice_class, notice_message)) = notice_view {
                div { class: "{notice_class}", role: "status", "{notice_message}" }
            }
        }
    }
}

/// Assembles and delivers the report, then mirrors the row to the sink.
/// Always produces a user notice; sink trouble downgrades it to an error
/// without touching the already-delivered local artifact.
async fn deliver_run(run: &CompletedRun, sink: &dyn RecordSink) -> (NoticeKind, String) {
    let text = report::assemble(run);
    let name = report::filename(run);

    let (mut kind, mut message) = match download::deliver_text(&name, text).await {
        Ok(Some(path)) => (NoticeKind::Info, t!("notice-report-saved", path = path)),
        Ok(None) => (NoticeKind::Info, t!("notice-report-downloaded")),
        Err(err) => {
            tracing::warn!("report delivery failed: {err}");
            (NoticeKind::Error, t!("notice-report-failed"))
        }
    };

    let row = ExperimentRow::from_run(run);
    if let Err(err) = sink.create_record(&row).await {
        tracing::warn!(sink = sink.label(), "record upload failed: {err}");
        kind = NoticeKind::Error;
        message = format!("{message} {}", t!("notice-sink-failed"));
    }

    (kind, message)
}

fn queue_dismiss(
    sender_slot: Rc<RefCell<Option<UnboundedSender<ExperimentEvent>>>>,
    notice_id: u64,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(NOTICE_DISMISS_MS).await;
            let _ = sender.unbounded_send(ExperimentEvent::NoticeExpired { id: notice_id });
        });
    }
}

/// Runtime-free path into the event loop. Screens and raw listener
/// closures clone this and send without holding any Dioxus scope, which is
/// what lets the scroll observer fire from outside the framework.
#[derive(Clone)]
pub(super) struct EventBridge {
    sender: UnboundedSender<ExperimentEvent>,
}

impl EventBridge {
    pub(super) fn send(&self, event: ExperimentEvent) {
        let _ = self.sender.unbounded_send(event);
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Notice {
    id: u64,
    kind: NoticeKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub(super) enum ExperimentEvent {
    SurveySubmitted(SurveyRecord),
    ButtonSelected(ButtonConfig),
    ClickObserved,
    ScrollObserved { depth_px: f64 },
    ProductChosen(Product),
    PreferenceSubmitted(SitePreference),
    EndRequested,
    NoticeExpired { id: u64 },
}
