//! Quote pricing engine.
//!
//! - Two rate-application orders exist; both are selectable through [`PricingPolicy`].
//! - Every output is rounded with banker's rounding at computation time.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entities::{QuoteInput, QuoteResult};

/// Fractional digits kept on every quote field.
pub const QUOTE_DECIMALS: u32 = 4;

/// Shipping weight per item, kg.
pub const WEIGHT_PER_UNIT: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Rounding applied to quote fields and converted freight fees.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Where promotion (and tariff) enter the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateOrder {
    /// Promotion and tariff are cost-side addends folded in before the margin.
    FoldedFees,
    /// Promotion scales the margined price; no tariff term.
    PostMarginPromotion,
}

impl RateOrder {
    pub fn uses_tariff(&self) -> bool {
        matches!(self, RateOrder::FoldedFees)
    }
}

/// Named deployments of the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyPreset {
    /// Fees folded before margin; 3% insurance, 30% margin, 7.2 CNY/USD.
    Classic,
    /// Post-margin promotion; 3% insurance, 43% margin, 6.80 CNY/USD.
    #[default]
    Revised,
}

impl PolicyPreset {
    pub const ALL: [PolicyPreset; 2] = [PolicyPreset::Classic, PolicyPreset::Revised];

    pub fn name(&self) -> &'static str {
        match self {
            PolicyPreset::Classic => "Classic (fees folded before margin)",
            PolicyPreset::Revised => "Revised (promotion after margin)",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PolicyPreset::Classic => "classic",
            PolicyPreset::Revised => "revised",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.key() == key)
    }

    pub fn pricing(&self) -> PricingPolicy {
        match self {
            PolicyPreset::Classic => PricingPolicy::classic(),
            PolicyPreset::Revised => PricingPolicy::revised(),
        }
    }

    pub fn freight_surcharge(&self) -> FreightSurcharge {
        match self {
            PolicyPreset::Classic => FreightSurcharge::none(),
            PolicyPreset::Revised => FreightSurcharge::standard(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub order: RateOrder,
    pub insurance_rate: Decimal,
    pub profit_margin: Decimal,
    /// Local currency units per foreign unit.
    pub exchange_rate: Decimal,
}

impl PricingPolicy {
    pub fn classic() -> Self {
        Self {
            order: RateOrder::FoldedFees,
            insurance_rate: Decimal::new(3, 2),
            profit_margin: Decimal::new(30, 2),
            exchange_rate: Decimal::new(72, 1),
        }
    }

    pub fn revised() -> Self {
        Self {
            order: RateOrder::PostMarginPromotion,
            insurance_rate: Decimal::new(3, 2),
            profit_margin: Decimal::new(43, 2),
            exchange_rate: Decimal::new(680, 2),
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PolicyPreset::default().pricing()
    }
}

/// Computes a quote. Never fails: inputs are trusted and propagate through the
/// arithmetic unchanged, so a negative cost produces a negative quote.
pub fn compute_quote(policy: &PricingPolicy, input: &QuoteInput) -> QuoteResult {
    let cost = input.cost_price;
    let insurance_fee = cost * policy.insurance_rate;
    let margin_factor = Decimal::ONE + policy.profit_margin;

    let (total_cost, unit_price_local) = match policy.order {
        RateOrder::FoldedFees => {
            let promotion = cost * input.promotion_rate;
            let tariff = cost * input.tariff_rate.unwrap_or(Decimal::ZERO);
            let total_cost = cost + insurance_fee + promotion + tariff + input.accessories_cost;
            (total_cost, total_cost * margin_factor)
        }
        RateOrder::PostMarginPromotion => {
            if input.tariff_rate.is_some_and(|rate| !rate.is_zero()) {
                debug!("tariff rate ignored under post-margin promotion");
            }
            let total_cost = cost + insurance_fee + input.accessories_cost;
            let margined = total_cost * margin_factor;
            (total_cost, margined + margined * input.promotion_rate)
        }
    };

    // A zero rate would otherwise panic; settings validation keeps it positive.
    let unit_price_foreign = unit_price_local
        .checked_div(policy.exchange_rate)
        .unwrap_or(Decimal::ZERO);
    let total_price_foreign = if input.quantity > Decimal::ZERO {
        unit_price_foreign * input.quantity
    } else {
        Decimal::ZERO
    };
    let estimated_weight = input.quantity * WEIGHT_PER_UNIT;

    QuoteResult {
        total_cost: round_quote(total_cost),
        unit_price_local: round_quote(unit_price_local),
        unit_price_foreign: round_quote(unit_price_foreign),
        total_price_foreign: round_quote(total_price_foreign),
        estimated_weight: round_quote(estimated_weight),
    }
}

pub fn round_quote(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(QUOTE_DECIMALS, ROUNDING)
}

/// Renders an amount with exactly `decimals` digits, rounding rather than truncating.
pub fn format_amount(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, ROUNDING);
    format!("{rounded:.prec$}", prec = decimals as usize)
}

/// Freight fee conversion knobs kept in settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FreightSurcharge {
    pub factor: Decimal,
    pub fee_decimals: u32,
}

impl FreightSurcharge {
    pub fn none() -> Self {
        Self {
            factor: Decimal::ONE,
            fee_decimals: 2,
        }
    }

    pub fn standard() -> Self {
        Self {
            factor: Decimal::new(103, 2),
            fee_decimals: 3,
        }
    }
}

impl Default for FreightSurcharge {
    fn default() -> Self {
        PolicyPreset::default().freight_surcharge()
    }
}

/// Converts provider fees into the foreign currency.
#[derive(Clone, Debug, PartialEq)]
pub struct FreightPricing {
    pub exchange_rate: Decimal,
    pub surcharge: FreightSurcharge,
}

impl FreightPricing {
    pub fn new(exchange_rate: Decimal, surcharge: FreightSurcharge) -> Self {
        Self {
            exchange_rate,
            surcharge,
        }
    }

    pub fn foreign_fee(&self, local_fee: Decimal) -> Decimal {
        let converted = local_fee
            .checked_div(self.exchange_rate)
            .unwrap_or(Decimal::ZERO);
        (converted * self.surcharge.factor)
            .round_dp_with_strategy(self.surcharge.fee_decimals, ROUNDING)
    }
}
