use std::str::FromStr;

use dioxus::prelude::*;
use rust_decimal::Decimal;

use freight_quote_desk::domain::{compute_quote, format_amount, AppState, QuoteInput, QuoteResult};

use crate::ui::components::{
    kpi_card::KpiCard,
    toast::{push_toast, ToastKind, ToastMessage},
};

#[component]
pub fn QuotePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut cost_input = use_signal(String::new);
    let mut promotion_input = use_signal(String::new);
    let mut tariff_input = use_signal(String::new);
    let mut accessories_input = use_signal(String::new);
    let mut quantity_input = use_signal(String::new);
    let mut result = use_signal(|| None::<QuoteResult>);
    let mut form_error = use_signal(|| None::<String>);

    let policy = state.with(|st| st.settings.pricing.clone());
    let uses_tariff = policy.order.uses_tariff();

    let on_submit = {
        let toasts = toasts.clone();
        let policy = policy.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let parsed = build_input(
                &cost_input(),
                &promotion_input(),
                uses_tariff.then(|| tariff_input()).as_deref(),
                &accessories_input(),
                &quantity_input(),
            );

            match parsed {
                Ok(input) => {
                    let quote = compute_quote(&policy, &input);
                    tracing::debug!(?input, ?quote, "quote computed");
                    form_error.set(None);
                    result.set(Some(quote));
                }
                Err(message) => {
                    form_error.set(Some(message.clone()));
                    push_toast(toasts.clone(), ToastKind::Error, message);
                }
            }
        }
    };

    let on_clear = move |_| {
        cost_input.set(String::new());
        promotion_input.set(String::new());
        tariff_input.set(String::new());
        accessories_input.set(String::new());
        quantity_input.set(String::new());
        result.set(None);
        form_error.set(None);
    };

    rsx! {
        div { class: "page",
            section { class: "panel",
                h2 { class: "panel-title", "Quote calculator" }
                form { class: "form-grid", onsubmit: on_submit,
                    Field { label: "Purchase cost (CNY)", value: cost_input(), oninput: move |value| cost_input.set(value) }
                    Field { label: "Promotion (%)", value: promotion_input(), oninput: move |value| promotion_input.set(value) }
                    if uses_tariff {
                        Field { label: "Tariff (%)", value: tariff_input(), oninput: move |value| tariff_input.set(value) }
                    }
                    Field { label: "Accessories cost (CNY)", value: accessories_input(), oninput: move |value| accessories_input.set(value) }
                    Field { label: "Quantity", value: quantity_input(), oninput: move |value| quantity_input.set(value) }
                    div { class: "form-actions",
                        button { class: "btn-primary", r#type: "submit", "📊 Calculate" }
                        button { class: "btn-secondary", r#type: "button", onclick: on_clear, "Clear" }
                    }
                }
                if let Some(message) = form_error() {
                    p { class: "inline-error", "{message}" }
                }
            }

            match result() {
                Some(quote) => rsx! {
                    section { class: "panel",
                        h2 { class: "panel-title", "📈 Result" }
                        div { class: "result-grid",
                            for (title, value, exact) in result_cards(&quote) {
                                KpiCard { title, value, description: Some(exact) }
                            }
                        }
                    }
                },
                None => rsx! {
                    p { class: "muted", "Fill in the form and press Calculate." }
                },
            }
        }
    }
}

#[component]
fn Field(label: &'static str, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div { class: "field",
            label { class: "label", "{label}" }
            input {
                class: "input",
                inputmode: "decimal",
                placeholder: "0",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

/// Card contents per result field: title, 2-digit display value, exact value.
fn result_cards(quote: &QuoteResult) -> Vec<(String, String, String)> {
    quote
        .labelled()
        .into_iter()
        .map(|(label, value)| {
            (
                label.to_string(),
                format_amount(value, 2),
                format!("exact: {value}"),
            )
        })
        .collect()
}

/// Parses the form into a quote input. Percent fields are divided by 100;
/// blank fields count as zero.
fn build_input(
    cost: &str,
    promotion_pct: &str,
    tariff_pct: Option<&str>,
    accessories: &str,
    quantity: &str,
) -> Result<QuoteInput, String> {
    let hundred = Decimal::ONE_HUNDRED;
    Ok(QuoteInput {
        cost_price: parse_decimal("Purchase cost", cost)?,
        promotion_rate: parse_decimal("Promotion", promotion_pct)? / hundred,
        tariff_rate: tariff_pct
            .map(|text| parse_decimal("Tariff", text).map(|pct| pct / hundred))
            .transpose()?,
        accessories_cost: parse_decimal("Accessories cost", accessories)?,
        quantity: parse_decimal("Quantity", quantity)?,
    })
}

pub fn parse_decimal(label: &str, text: &str) -> Result<Decimal, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| format!("{label} must be a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_fields_are_converted_to_rates() {
        let input = build_input("1000", "5", Some("10"), "50", "10").unwrap();
        assert_eq!(input.promotion_rate, Decimal::new(5, 2));
        assert_eq!(input.tariff_rate, Some(Decimal::new(1, 1)));
        assert_eq!(input.quantity, Decimal::from(10));
    }

    #[test]
    fn blank_fields_default_to_zero_and_tariff_can_be_absent() {
        let input = build_input("", " ", None, "", "").unwrap();
        assert_eq!(input, QuoteInput::default());
    }

    #[test]
    fn garbage_is_reported_with_the_field_name() {
        let err = build_input("12", "abc", None, "0", "1").unwrap_err();
        assert_eq!(err, "Promotion must be a number");
    }

    #[test]
    fn result_cards_round_to_two_digits() {
        let quote = QuoteResult {
            total_cost: Decimal::new(138999, 4),
            unit_price_local: Decimal::new(99, 4),
            unit_price_foreign: Decimal::new(1449990, 4),
            total_price_foreign: Decimal::from(20),
            estimated_weight: Decimal::new(2, 1),
        };
        let values: Vec<String> = result_cards(&quote)
            .into_iter()
            .map(|(_, value, _)| value)
            .collect();
        assert_eq!(values, vec!["13.90", "0.01", "145.00", "20.00", "0.20"]);

        let (_, _, exact) = &result_cards(&quote)[0];
        assert_eq!(exact, "exact: 13.8999");
    }
}
