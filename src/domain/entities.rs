use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One quote request, built fresh from the form on every submission.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteInput {
    /// Purchase cost per item, local currency.
    pub cost_price: Decimal,
    /// Fractional rate; negative for a discount.
    pub promotion_rate: Decimal,
    /// Fractional rate. Only the folded-fees order reads it.
    pub tariff_rate: Option<Decimal>,
    /// Accessories cost per item, local currency.
    pub accessories_cost: Decimal,
    /// Item count; may be fractional.
    pub quantity: Decimal,
}

impl Default for QuoteInput {
    fn default() -> Self {
        Self {
            cost_price: Decimal::ZERO,
            promotion_rate: Decimal::ZERO,
            tariff_rate: None,
            accessories_cost: Decimal::ZERO,
            quantity: Decimal::ZERO,
        }
    }
}

/// Output of the pricing engine. Every field is already rounded to
/// [`QUOTE_DECIMALS`](crate::domain::pricing::QUOTE_DECIMALS) digits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub total_cost: Decimal,
    pub unit_price_local: Decimal,
    pub unit_price_foreign: Decimal,
    pub total_price_foreign: Decimal,
    pub estimated_weight: Decimal,
}

impl QuoteResult {
    /// Label/value pairs in display order.
    pub fn labelled(&self) -> [(&'static str, Decimal); 5] {
        [
            ("Total purchase cost (CNY)", self.total_cost),
            ("Unit price (CNY)", self.unit_price_local),
            ("Unit price (USD)", self.unit_price_foreign),
            ("Total price (USD)", self.total_price_foreign),
            ("Estimated weight (kg)", self.estimated_weight),
        ]
    }
}

/// A rate option returned by the `feetrail` method.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub service_name: String,
    pub transit_time: String,
    /// Verbatim from the provider; may be numeric text.
    pub chargeable_weight: String,
    pub total_fee_local: Decimal,
    pub total_fee_foreign: Decimal,
}

/// A single tracking checkpoint. The provider's strings are passed through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub occurred_at: String,
    pub location: String,
    pub description: String,
}
