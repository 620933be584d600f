use dioxus::prelude::*;

use freight_quote_desk::{
    domain::{country_name, list_countries, AppState},
    infra::HyExpressClient,
};

use crate::ui::components::{
    shipping_table::{ShippingRow, ShippingTable},
    toast::{push_toast, ToastKind, ToastMessage},
};

#[derive(Clone, Debug, PartialEq)]
enum FreightView {
    Idle,
    Loading,
    Loaded(Vec<ShippingRow>),
    Empty,
    Failed(String),
}

#[component]
pub fn FreightPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let default_code = list_countries()
        .first()
        .map(|(_, code)| code.to_string())
        .unwrap_or_default();
    let mut country = use_signal(move || default_code);
    let mut weight_input = use_signal(|| "1".to_string());
    let mut view = use_signal(|| FreightView::Idle);

    let on_query = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            if view() == FreightView::Loading {
                return;
            }
            let settings = state.with(|st| st.settings.clone());
            let country_code = country();
            let weight = weight_input().trim().to_string();
            let fee_decimals = settings.freight.fee_decimals;
            let toasts = toasts.clone();

            view.set(FreightView::Loading);
            let mut view = view.clone();
            spawn(async move {
                let outcome = match HyExpressClient::new(&settings) {
                    Ok(client) => client.query_freight(&country_code, &weight).await,
                    Err(err) => Err(err),
                };

                match outcome {
                    Ok(options) if options.is_empty() => {
                        view.set(FreightView::Empty);
                        push_toast(toasts, ToastKind::Warning, "No freight data returned.");
                    }
                    Ok(options) => {
                        let rows = options
                            .iter()
                            .map(|option| ShippingRow::from_option(option, fee_decimals))
                            .collect();
                        view.set(FreightView::Loaded(rows));
                        push_toast(toasts, ToastKind::Success, "Query succeeded.");
                    }
                    Err(err) => {
                        let message = format!("Query failed: {err}");
                        view.set(FreightView::Failed(message.clone()));
                        push_toast(toasts, ToastKind::Error, message);
                    }
                }
            });
        }
    };

    let loading = view() == FreightView::Loading;
    let selected = country();
    let selected_name = country_name(&selected).unwrap_or("-");

    rsx! {
        div { class: "page",
            section { class: "panel",
                h2 { class: "panel-title", "HY Express freight rates" }
                div { class: "form-grid",
                    div { class: "field",
                        label { class: "label", "Destination country" }
                        select {
                            class: "input",
                            value: "{selected}",
                            onchange: move |evt| country.set(evt.value()),
                            for (name, code) in list_countries().iter().copied() {
                                option { value: "{code}", selected: code == selected, "{name}" }
                            }
                        }
                    }
                    div { class: "field",
                        label { class: "label", "Parcel weight (kg)" }
                        input {
                            class: "input",
                            value: weight_input(),
                            oninput: move |evt| weight_input.set(evt.value()),
                        }
                    }
                    div { class: "form-actions",
                        button {
                            class: "btn-primary",
                            disabled: loading,
                            onclick: on_query,
                            if loading { "Querying…" } else { "Query rates" }
                        }
                    }
                }
            }

            section { class: "panel",
                match view() {
                    FreightView::Idle => rsx! {
                        p { class: "muted", "Pick a destination and weight, then query." }
                    },
                    FreightView::Loading => rsx! {
                        p { class: "muted", "Querying rates for {selected_name}…" }
                    },
                    FreightView::Loaded(rows) => rsx! {
                        p { class: "inline-success", "Query succeeded" }
                        ShippingTable { rows }
                    },
                    FreightView::Empty => rsx! {
                        p { class: "inline-warning", "No freight data available for this destination." }
                    },
                    FreightView::Failed(message) => rsx! {
                        p { class: "inline-error", "{message}" }
                    },
                }
            }
        }
    }
}
