use dioxus::prelude::*;

use freight_quote_desk::{
    domain::AppState,
    util::version::{version_label, APP_NAME},
};

use crate::app::Route;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let (preset_name, exchange_rate) = state.with(|st| {
        (
            st.settings.preset.name(),
            st.settings.pricing.exchange_rate,
        )
    });

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                div { class: "brand",
                    span { class: "brand-icon", "📦" }
                    div {
                        h1 { "{APP_NAME}" }
                        p { class: "muted", "Quotes · freight rates · tracking" }
                    }
                }
                nav { class: "nav",
                    NavButton { active: matches!(current_route, Route::Quote {}), onclick: move |_| { nav.push(Route::Quote {}); }, label: "🧾 Quote" }
                    NavButton { active: matches!(current_route, Route::Freight {}), onclick: move |_| { nav.push(Route::Freight {}); }, label: "🚚 Freight" }
                    NavButton { active: matches!(current_route, Route::Tracking {}), onclick: move |_| { nav.push(Route::Tracking {}); }, label: "📍 Tracking" }
                    NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️" }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer",
                span { "Exchange rate: {exchange_rate} CNY/USD" }
                span { "{preset_name}" }
                span { "{version_label()}" }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-button active" } else { "nav-button" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
