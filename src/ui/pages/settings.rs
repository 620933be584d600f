use dioxus::prelude::*;

use freight_quote_desk::domain::{AppState, Credentials, PolicyPreset, RateOrder, Settings};

use crate::{
    app::persist_settings,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        pages::quote::parse_decimal,
    },
};

#[derive(Clone, Debug, PartialEq)]
struct SettingsForm {
    preset: PolicyPreset,
    insurance_rate: String,
    profit_margin: String,
    exchange_rate: String,
    surcharge_factor: String,
    fee_decimals: String,
    endpoint: String,
    timeout_secs: String,
    app_token: String,
    app_key: String,
}

impl SettingsForm {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            preset: settings.preset,
            insurance_rate: settings.pricing.insurance_rate.to_string(),
            profit_margin: settings.pricing.profit_margin.to_string(),
            exchange_rate: settings.pricing.exchange_rate.to_string(),
            surcharge_factor: settings.freight.factor.to_string(),
            fee_decimals: settings.freight.fee_decimals.to_string(),
            endpoint: settings.provider.endpoint.clone(),
            timeout_secs: settings.provider.timeout_secs.to_string(),
            app_token: settings.provider.credentials.app_token.clone(),
            app_key: settings.provider.credentials.app_key.clone(),
        }
    }

    /// Applies the form on top of `current`. The rate order always follows the preset.
    fn apply(&self, current: &Settings) -> Result<Settings, String> {
        let mut next = current.clone();
        next.preset = self.preset;
        next.pricing.order = self.preset.pricing().order;
        next.pricing.insurance_rate = parse_decimal("Insurance rate", &self.insurance_rate)?;
        next.pricing.profit_margin = parse_decimal("Profit margin", &self.profit_margin)?;
        next.pricing.exchange_rate = parse_decimal("Exchange rate", &self.exchange_rate)?;
        next.freight.factor = parse_decimal("Surcharge factor", &self.surcharge_factor)?;
        next.freight.fee_decimals = self
            .fee_decimals
            .trim()
            .parse()
            .map_err(|_| "Fee decimals must be a whole number".to_string())?;
        next.provider.endpoint = self.endpoint.trim().to_string();
        next.provider.timeout_secs = self
            .timeout_secs
            .trim()
            .parse()
            .map_err(|_| "Timeout must be a whole number of seconds".to_string())?;
        if !current.provider.credentials_from_env {
            next.provider.credentials =
                Credentials::new(self.app_token.trim(), self.app_key.trim());
        }
        next.validate()?;
        Ok(next)
    }
}

/// Toast for a save attempt: the success notice, or a warning carrying the error.
fn save_notice(saved: Result<(), String>, kind: ToastKind, success: &str) -> (ToastKind, String) {
    match saved {
        Ok(()) => (kind, success.to_string()),
        Err(message) => (ToastKind::Warning, message),
    }
}

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| SettingsForm::from_settings(&st.settings));
    let credentials_from_env = state.with(|st| st.settings.provider.credentials_from_env);
    let mut form = use_signal(move || initial);

    let on_preset = move |evt: FormEvent| {
        if let Some(preset) = PolicyPreset::from_key(&evt.value()) {
            let current = form();
            let mut defaults = Settings::from_preset(preset);
            defaults.provider = state.with(|st| st.settings.provider.clone());
            let mut next = SettingsForm::from_settings(&defaults);
            next.endpoint = current.endpoint;
            next.timeout_secs = current.timeout_secs;
            next.app_token = current.app_token;
            next.app_key = current.app_key;
            form.set(next);
        }
    };

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let current = state.with(|st| st.settings.clone());
            match form().apply(&current) {
                Ok(next) => {
                    state.with_mut(|st| st.settings = next);
                    let (kind, message) = save_notice(
                        persist_settings(&state),
                        ToastKind::Success,
                        "Settings saved.",
                    );
                    push_toast(toasts.clone(), kind, message);
                }
                Err(message) => {
                    push_toast(toasts.clone(), ToastKind::Error, message);
                }
            }
        }
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let provider = state.with(|st| st.settings.provider.clone());
            let mut defaults = Settings::default();
            defaults.provider = provider;
            form.set(SettingsForm::from_settings(&defaults));
            state.with_mut(|st| st.settings = defaults);
            let (kind, message) = save_notice(
                persist_settings(&state),
                ToastKind::Info,
                "Restored default pricing parameters.",
            );
            push_toast(toasts.clone(), kind, message);
        }
    };

    let current = form();
    let order_note = match current.preset.pricing().order {
        RateOrder::FoldedFees => "Promotion and tariff are added to cost before the margin.",
        RateOrder::PostMarginPromotion => "Promotion scales the price after the margin; no tariff.",
    };

    rsx! {
        div { class: "page",
            section { class: "panel",
                h2 { class: "panel-title", "Pricing policy" }
                div { class: "form-grid",
                    div { class: "field wide",
                        label { class: "label", "Preset" }
                        select {
                            class: "input",
                            value: "{current.preset.key()}",
                            onchange: on_preset,
                            for preset in PolicyPreset::ALL {
                                option { value: "{preset.key()}", selected: preset == current.preset, "{preset.name()}" }
                            }
                        }
                        p { class: "muted small", "{order_note}" }
                    }
                    TextField { label: "Insurance rate", value: current.insurance_rate.clone(), oninput: move |value| form.with_mut(|f| f.insurance_rate = value) }
                    TextField { label: "Profit margin", value: current.profit_margin.clone(), oninput: move |value| form.with_mut(|f| f.profit_margin = value) }
                    TextField { label: "Exchange rate (CNY per USD)", value: current.exchange_rate.clone(), oninput: move |value| form.with_mut(|f| f.exchange_rate = value) }
                    TextField { label: "Freight surcharge factor", value: current.surcharge_factor.clone(), oninput: move |value| form.with_mut(|f| f.surcharge_factor = value) }
                    TextField { label: "Freight fee decimals", value: current.fee_decimals.clone(), oninput: move |value| form.with_mut(|f| f.fee_decimals = value) }
                }
            }

            section { class: "panel",
                h2 { class: "panel-title", "Provider" }
                div { class: "form-grid",
                    TextField { label: "Endpoint", value: current.endpoint.clone(), oninput: move |value| form.with_mut(|f| f.endpoint = value) }
                    TextField { label: "Timeout (seconds)", value: current.timeout_secs.clone(), oninput: move |value| form.with_mut(|f| f.timeout_secs = value) }
                    if credentials_from_env {
                        p { class: "muted small wide", "Credentials are provided by HY_APP_TOKEN / HY_APP_KEY and are not saved." }
                    } else {
                        SecretField { label: "App token", value: current.app_token.clone(), oninput: move |value| form.with_mut(|f| f.app_token = value) }
                        SecretField { label: "App key", value: current.app_key.clone(), oninput: move |value| form.with_mut(|f| f.app_key = value) }
                    }
                }
            }

            div { class: "form-actions",
                button { class: "btn-primary", onclick: on_apply, "Apply" }
                button { class: "btn-secondary", onclick: on_reset, "Reset Defaults" }
            }
        }
    }
}

#[component]
fn TextField(label: &'static str, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div { class: "field",
            label { class: "label", "{label}" }
            input {
                class: "input",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
fn SecretField(label: &'static str, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div { class: "field",
            label { class: "label", "{label}" }
            input {
                class: "input",
                r#type: "password",
                autocomplete: "off",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn form_applies_pricing_overrides() {
        let current = Settings::default();
        let mut form = SettingsForm::from_settings(&current);
        form.profit_margin = "0.5".to_string();
        form.app_token = " token ".to_string();
        form.app_key = "key".to_string();

        let next = form.apply(&current).unwrap();
        assert_eq!(next.pricing.profit_margin, Decimal::new(5, 1));
        assert_eq!(next.provider.credentials, Credentials::new("token", "key"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let current = Settings::default();
        let mut form = SettingsForm::from_settings(&current);
        form.exchange_rate = "0".to_string();
        assert!(form.apply(&current).is_err());

        let mut form = SettingsForm::from_settings(&current);
        form.timeout_secs = "soon".to_string();
        assert!(form.apply(&current).is_err());
    }

    #[test]
    fn environment_credentials_are_left_alone() {
        let mut current = Settings::default();
        current.provider.credentials = Credentials::new("env-token", "env-key");
        current.provider.credentials_from_env = true;
        let mut form = SettingsForm::from_settings(&current);
        form.app_token = String::new();

        let next = form.apply(&current).unwrap();
        assert_eq!(next.provider.credentials, current.provider.credentials);
    }

    #[test]
    fn preset_decides_the_rate_order() {
        let current = Settings::default();
        let mut form = SettingsForm::from_settings(&current);
        form.preset = PolicyPreset::Classic;
        let next = form.apply(&current).unwrap();
        assert_eq!(next.pricing.order, RateOrder::FoldedFees);
    }

    #[test]
    fn failed_save_turns_the_notice_into_a_warning() {
        let (kind, message) = save_notice(
            Err("Failed to save settings: read-only".to_string()),
            ToastKind::Info,
            "Restored default pricing parameters.",
        );
        assert_eq!(kind, ToastKind::Warning);
        assert_eq!(message, "Failed to save settings: read-only");

        let (kind, message) = save_notice(Ok(()), ToastKind::Info, "Restored.");
        assert_eq!(kind, ToastKind::Info);
        assert_eq!(message, "Restored.");
    }
}
