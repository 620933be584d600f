use dioxus::prelude::*;

use freight_quote_desk::{
    domain::{AppState, TraceEvent},
    infra::HyExpressClient,
};

use crate::ui::components::{
    toast::{push_toast, ToastKind, ToastMessage},
    trace_list::TraceList,
};

#[derive(Clone, Debug, PartialEq)]
enum TrackingView {
    Idle,
    Loading(String),
    Found(Vec<TraceEvent>),
    NotFound(String),
    Failed(String),
}

#[component]
pub fn TrackingPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut tracking_input = use_signal(String::new);
    let mut view = use_signal(|| TrackingView::Idle);

    let on_submit = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if matches!(view(), TrackingView::Loading(_)) {
                return;
            }
            let tracking_number = tracking_input().trim().to_string();
            if tracking_number.is_empty() {
                push_toast(toasts.clone(), ToastKind::Warning, "Enter a waybill number first.");
                return;
            }
            let settings = state.with(|st| st.settings.clone());
            let toasts = toasts.clone();

            view.set(TrackingView::Loading(tracking_number.clone()));
            let mut view = view.clone();
            spawn(async move {
                let outcome = match HyExpressClient::new(&settings) {
                    Ok(client) => client.query_tracking(&tracking_number).await,
                    Err(err) => Err(err),
                };

                match outcome {
                    Ok(events) if events.is_empty() => {
                        view.set(TrackingView::NotFound(tracking_number));
                        push_toast(toasts, ToastKind::Warning, "Waybill not found.");
                    }
                    Ok(events) => {
                        view.set(TrackingView::Found(events));
                        push_toast(toasts, ToastKind::Success, "Tracking loaded.");
                    }
                    Err(err) => {
                        let message = format!("Query failed: {err}");
                        view.set(TrackingView::Failed(message.clone()));
                        push_toast(toasts, ToastKind::Error, message);
                    }
                }
            });
        }
    };

    let loading = matches!(view(), TrackingView::Loading(_));

    rsx! {
        div { class: "page",
            section { class: "panel",
                h2 { class: "panel-title", "HY Express tracking" }
                form { class: "form-grid", onsubmit: on_submit,
                    div { class: "field wide",
                        label { class: "label", "Waybill number" }
                        input {
                            class: "input",
                            value: tracking_input(),
                            oninput: move |evt| tracking_input.set(evt.value()),
                        }
                    }
                    div { class: "form-actions",
                        button { class: "btn-primary", r#type: "submit", disabled: loading, "Track" }
                    }
                }
            }

            section { class: "panel",
                match view() {
                    TrackingView::Idle => rsx! {
                        p { class: "muted", "Enter a waybill number to see its checkpoints." }
                    },
                    TrackingView::Loading(number) => rsx! {
                        p { class: "muted", "Querying {number}…" }
                    },
                    TrackingView::Found(events) => rsx! {
                        p { class: "inline-success", "Query succeeded. Checkpoints:" }
                        TraceList { events }
                    },
                    TrackingView::NotFound(number) => rsx! {
                        p { class: "inline-warning", "No tracking information found for {number}." }
                    },
                    TrackingView::Failed(message) => rsx! {
                        p { class: "inline-error", "{message}" }
                    },
                }
            }
        }
    }
}
