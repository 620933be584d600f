//! Quote pricing and the records exchanged with the provider live here.

pub mod app_state;
pub mod countries;
pub mod entities;
pub mod pricing;

pub use app_state::{AppState, Credentials, ProviderSettings, Settings};
pub use countries::{country_code, country_name, list_countries, Country};
pub use entities::{QuoteInput, QuoteResult, ShippingOption, TraceEvent};
pub use pricing::{
    compute_quote, format_amount, round_quote, FreightPricing, FreightSurcharge, PolicyPreset,
    PricingPolicy, RateOrder, QUOTE_DECIMALS, WEIGHT_PER_UNIT,
};
