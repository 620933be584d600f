use dioxus::{prelude::*, signals::Signal};

use freight_quote_desk::{
    domain::AppState,
    util::{
        assets,
        persistence::{load_settings, save_settings},
    },
};

use crate::ui::{
    components::toast::Toast,
    components::toast::ToastMessage,
    pages::{FreightPage, QuotePage, SettingsPage, TrackingPage},
    shell::Shell,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/quote")]
    Quote {},
    #[route("/freight")]
    Freight {},
    #[route("/tracking")]
    Tracking {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| AppState::new(load_settings()));
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Writes the current settings to disk. Returns the error text on failure.
pub fn persist_settings(state: &Signal<AppState>) -> Result<(), String> {
    let snapshot = state.with(|st| st.settings.clone());
    save_settings(&snapshot).map_err(|err| {
        tracing::warn!("failed to persist settings: {err}");
        format!("Failed to save settings: {err}")
    })
}

#[component]
pub fn Quote() -> Element {
    rsx! { Shell { QuotePage {} } }
}

#[component]
pub fn Freight() -> Element {
    rsx! { Shell { FreightPage {} } }
}

#[component]
pub fn Tracking() -> Element {
    rsx! { Shell { TrackingPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
