use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pricing::{FreightPricing, FreightSurcharge, PolicyPreset, PricingPolicy};

pub const DEFAULT_ENDPOINT: &str =
    "http://order.hy-express.com/webservice/PublicService.asmx/ServiceInterfaceUTF8";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

/// Everything the desk reads from `settings.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "SettingsFile")]
pub struct Settings {
    pub preset: PolicyPreset,
    pub pricing: PricingPolicy,
    pub freight: FreightSurcharge,
    pub provider: ProviderSettings,
}

/// On-disk shape. Missing pricing blocks come from the stored preset.
#[derive(Deserialize)]
struct SettingsFile {
    #[serde(default)]
    preset: PolicyPreset,
    pricing: Option<PricingPolicy>,
    freight: Option<FreightSurcharge>,
    #[serde(default)]
    provider: ProviderSettings,
}

impl From<SettingsFile> for Settings {
    fn from(file: SettingsFile) -> Self {
        let preset = file.preset;
        Self {
            preset,
            pricing: file.pricing.unwrap_or_else(|| preset.pricing()),
            freight: file.freight.unwrap_or_else(|| preset.freight_surcharge()),
            provider: file.provider,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(PolicyPreset::default())
    }
}

impl Settings {
    /// Defaults for a preset. Provider settings are left at their defaults.
    pub fn from_preset(preset: PolicyPreset) -> Self {
        Self {
            preset,
            pricing: preset.pricing(),
            freight: preset.freight_surcharge(),
            provider: ProviderSettings::default(),
        }
    }

    /// Switches the pricing constants to a preset, keeping provider settings.
    pub fn apply_preset(&mut self, preset: PolicyPreset) {
        self.preset = preset;
        self.pricing = preset.pricing();
        self.freight = preset.freight_surcharge();
    }

    pub fn freight_pricing(&self) -> FreightPricing {
        FreightPricing::new(self.pricing.exchange_rate, self.freight.clone())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.pricing.exchange_rate <= Decimal::ZERO {
            return Err("Exchange rate must be greater than zero".to_string());
        }
        if self.pricing.insurance_rate < Decimal::ZERO {
            return Err("Insurance rate cannot be negative".to_string());
        }
        if self.freight.factor <= Decimal::ZERO {
            return Err("Freight surcharge factor must be greater than zero".to_string());
        }
        if self.freight.fee_decimals > 8 {
            return Err("Freight fee decimals must be between 0 and 8".to_string());
        }
        if self.provider.timeout_secs == 0 {
            return Err("Request timeout must be at least one second".to_string());
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub credentials: Credentials,
    /// Set when credentials came from the environment; they are never written back.
    #[serde(skip)]
    pub credentials_from_env: bool,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            credentials: Credentials::default(),
            credentials_from_env: false,
        }
    }
}

/// Provider API credentials. `Debug` never prints the values.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub app_token: String,
    #[serde(default)]
    pub app_key: String,
}

impl Credentials {
    pub fn new(app_token: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_token: app_token.into(),
            app_key: app_key.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.app_token.trim().is_empty() && !self.app_key.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |value: &str| if value.is_empty() { "<unset>" } else { "***" };
        f.debug_struct("Credentials")
            .field("app_token", &mask(self.app_token.as_str()))
            .field("app_key", &mask(self.app_key.as_str()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::RateOrder;
    use rust_decimal_macros::dec;

    #[test]
    fn debug_output_hides_credentials() {
        let credentials = Credentials::new("token-123", "key-456");
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("token-123"));
        assert!(!rendered.contains("key-456"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn incomplete_credentials_are_detected() {
        assert!(!Credentials::default().is_complete());
        assert!(!Credentials::new("token", "  ").is_complete());
        assert!(Credentials::new("token", "key").is_complete());
    }

    #[test]
    fn applying_a_preset_keeps_provider_settings() {
        let mut settings = Settings::default();
        settings.provider.credentials = Credentials::new("t", "k");
        settings.apply_preset(PolicyPreset::Classic);

        assert_eq!(settings.pricing.order, RateOrder::FoldedFees);
        assert_eq!(settings.pricing.exchange_rate, dec!(7.2));
        assert_eq!(settings.freight.factor, dec!(1));
        assert!(settings.provider.credentials.is_complete());
    }

    #[test]
    fn validation_rejects_zero_exchange_rate() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());
        settings.pricing.exchange_rate = Decimal::ZERO;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn partial_settings_file_falls_back_to_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "provider": { "endpoint": "http://localhost/svc" } }"#)
                .expect("settings parse");
        assert_eq!(settings.preset, PolicyPreset::Revised);
        assert_eq!(settings.provider.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(settings.provider.endpoint, "http://localhost/svc");
        assert!(!settings.provider.credentials.is_complete());
    }

    #[test]
    fn stored_preset_supplies_missing_pricing_blocks() {
        let settings: Settings =
            serde_json::from_str(r#"{ "preset": "Classic" }"#).expect("settings parse");
        assert_eq!(settings.preset, PolicyPreset::Classic);
        assert_eq!(settings.pricing, PricingPolicy::classic());
        assert_eq!(settings.pricing.order, RateOrder::FoldedFees);
        assert_eq!(settings.freight, FreightSurcharge::none());
    }

    #[test]
    fn explicit_pricing_block_wins_over_preset() {
        let mut stored = Settings::from_preset(PolicyPreset::Classic);
        stored.pricing.profit_margin = dec!(0.5);
        let json = serde_json::to_string(&stored).expect("settings serialize");

        let loaded: Settings = serde_json::from_str(&json).expect("settings parse");
        assert_eq!(loaded, stored);
    }

    #[test]
    fn provider_block_without_endpoint_keeps_credentials() {
        let settings: Settings = serde_json::from_str(
            r#"{ "provider": { "credentials": { "app_token": "t", "app_key": "k" } } }"#,
        )
        .expect("settings parse");
        assert_eq!(settings.provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.provider.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(settings.provider.credentials, Credentials::new("t", "k"));
    }
}
