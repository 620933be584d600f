//! Thin asynchronous client for the HY Express public service endpoint.
//!
//! - One POST per call, form-encoded, no retries.
//! - Responses are decoded into explicit per-method record shapes.

use std::{str::FromStr, time::Duration};

use reqwest::{Client, Url};
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{Credentials, FreightPricing, Settings, ShippingOption, TraceEvent};

use super::{freight, tracking};

const USER_AGENT: &str = concat!("freight-quote-desk/", env!("CARGO_PKG_VERSION"));

pub const FREIGHT_METHOD: &str = "feetrail";
pub const TRACKING_METHOD: &str = "gettrack";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("provider credentials are not configured")]
    MissingCredentials,
    #[error("http request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed provider response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Parse(err.to_string())
    }
}

#[derive(Clone)]
pub struct HyExpressClient {
    http: Client,
    endpoint: Url,
    credentials: Credentials,
    fees: FreightPricing,
}

#[derive(Serialize)]
struct FreightParams<'a> {
    country_code: &'a str,
    weight: &'a str,
}

#[derive(Serialize)]
struct TrackingParams<'a> {
    tracking_number: &'a str,
}

/// Common response wrapper. A missing or `null` `data` means "no records".
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<Vec<T>>,
}

impl HyExpressClient {
    pub fn new(settings: &Settings) -> Result<Self, ProviderError> {
        let endpoint = Url::parse(&settings.provider.endpoint)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.provider.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint,
            credentials: settings.provider.credentials.clone(),
            fees: settings.freight_pricing(),
        })
    }

    /// Rate options for a destination, in provider order. An empty vector means
    /// the provider had nothing for this lane.
    pub async fn query_freight(
        &self,
        country_code: &str,
        weight: &str,
    ) -> Result<Vec<ShippingOption>, ProviderError> {
        let body = self
            .call(
                FREIGHT_METHOD,
                &FreightParams {
                    country_code,
                    weight,
                },
            )
            .await?;
        let options = freight::parse_freight(&body, &self.fees)?;
        info!(
            country_code,
            weight,
            count = options.len(),
            "freight query finished"
        );
        Ok(options)
    }

    /// Trace events for a waybill, flattened across shipments. An empty vector
    /// means the waybill was not found.
    pub async fn query_tracking(
        &self,
        tracking_number: &str,
    ) -> Result<Vec<TraceEvent>, ProviderError> {
        let body = self
            .call(TRACKING_METHOD, &TrackingParams { tracking_number })
            .await?;
        let events = tracking::parse_tracking(&body)?;
        info!(tracking_number, count = events.len(), "tracking query finished");
        Ok(events)
    }

    async fn call<P: Serialize>(&self, method: &str, params: &P) -> Result<String, ProviderError> {
        if !self.credentials.is_complete() {
            warn!(method, "provider call skipped: credentials missing");
            return Err(ProviderError::MissingCredentials);
        }

        let params_json = serde_json::to_string(params)?;
        debug!(method, params = %params_json, endpoint = %self.endpoint, "calling provider");

        let form = [
            ("appToken", self.credentials.app_token.as_str()),
            ("appKey", self.credentials.app_key.as_str()),
            ("serviceMethod", method),
            ("paramsJson", params_json.as_str()),
        ];

        let response = self
            .http
            .post(self.endpoint.clone())
            .form(&form)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| {
                warn!(method, "provider request failed: {err}");
                ProviderError::Transport(err)
            })?;

        Ok(response.text().await?)
    }
}

/// Decodes the envelope and returns the `data` records, empty when absent.
pub(crate) fn decode_records<T>(body: &str) -> Result<Vec<T>, ProviderError>
where
    T: DeserializeOwned,
{
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    Ok(envelope.data.unwrap_or_default())
}

/// Accepts a string, number, bool or null and yields text. Null becomes empty.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct LenientString;

    impl<'de> serde::de::Visitor<'de> for LenientString {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string, number or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(String::new())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(LenientString)
}

/// Accepts a JSON number or numeric string. Null becomes zero; other text fails.
pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct LenientDecimal;

    impl<'de> serde::de::Visitor<'de> for LenientDecimal {
        type Value = Decimal;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number or numeric string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            let trimmed = value.trim();
            Decimal::from_str(trimmed)
                .or_else(|_| Decimal::from_scientific(trimmed))
                .map_err(|_| E::custom(format!("not a number: {value:?}")))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Decimal::from(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Decimal::from(value))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            // Shortest round-trip text keeps 12.3 as 12.3 rather than its binary expansion.
            serde::de::Visitor::visit_str(self, &value.to_string())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Decimal::ZERO)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Decimal::ZERO)
        }
    }

    deserializer.deserialize_any(LenientDecimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_string")]
        text: String,
        #[serde(default, deserialize_with = "lenient_decimal")]
        amount: Decimal,
    }

    #[test]
    fn missing_or_null_data_means_no_records() {
        assert!(decode_records::<Probe>(r#"{}"#).unwrap().is_empty());
        assert!(decode_records::<Probe>(r#"{"data": null}"#).unwrap().is_empty());
        assert!(decode_records::<Probe>(r#"{"data": []}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_bodies_are_parse_errors() {
        assert!(matches!(
            decode_records::<Probe>("<html>busy</html>"),
            Err(ProviderError::Parse(_))
        ));
        assert!(matches!(
            decode_records::<Probe>(r#"{"data": {"text": "x"}}"#),
            Err(ProviderError::Parse(_))
        ));
        assert!(matches!(
            decode_records::<Probe>(r#"{"data": [1, 2]}"#),
            Err(ProviderError::Parse(_))
        ));
    }

    #[test]
    fn lenient_fields_accept_numbers_and_strings() {
        let records: Vec<Probe> = decode_records(
            r#"{"data": [
                {"text": 1.5, "amount": "12.30"},
                {"text": "abc", "amount": 12.3},
                {"text": null, "amount": null},
                {}
            ]}"#,
        )
        .unwrap();

        assert_eq!(records[0].text, "1.5");
        assert_eq!(records[0].amount, dec!(12.30));
        assert_eq!(records[1].text, "abc");
        assert_eq!(records[1].amount, dec!(12.3));
        assert_eq!(records[2].text, "");
        assert_eq!(records[2].amount, Decimal::ZERO);
        assert_eq!(records[3].amount, Decimal::ZERO);
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let result = decode_records::<Probe>(r#"{"data": [{"amount": "n/a"}]}"#);
        assert!(matches!(result, Err(ProviderError::Parse(_))));
    }

    #[test]
    fn invalid_endpoint_is_reported() {
        let mut settings = Settings::default();
        settings.provider.endpoint = "not a url".to_string();
        assert!(matches!(
            HyExpressClient::new(&settings),
            Err(ProviderError::InvalidUrl(_))
        ));
    }
}
