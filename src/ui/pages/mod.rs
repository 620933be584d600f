pub mod freight;
pub mod quote;
pub mod settings;
pub mod tracking;

pub use freight::FreightPage;
pub use quote::QuotePage;
pub use settings::SettingsPage;
pub use tracking::TrackingPage;
