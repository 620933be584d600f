use dioxus::prelude::*;

use freight_quote_desk::domain::TraceEvent;

#[component]
pub fn TraceList(events: Vec<TraceEvent>) -> Element {
    rsx! {
        ol { class: "trace-list",
            for event in events {
                li { class: "trace-item",
                    p { span { class: "label", "Time: " } "{event.occurred_at}" }
                    p { span { class: "label", "Location: " } "{event.location}" }
                    p { span { class: "label", "Status: " } "{event.description}" }
                }
            }
        }
    }
}
