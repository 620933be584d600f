mod freight;
pub mod provider;
mod tracking;

pub use provider::{HyExpressClient, ProviderError, FREIGHT_METHOD, TRACKING_METHOD};
