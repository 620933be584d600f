//! `feetrail` response records.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{FreightPricing, ShippingOption};

use super::provider::{decode_records, lenient_decimal, lenient_string, ProviderError};

#[derive(Debug, Deserialize)]
struct FeeTrailDto {
    #[serde(rename = "ServiceCnName", default, deserialize_with = "lenient_string")]
    service_name: String,
    #[serde(rename = "Effectiveness", default, deserialize_with = "lenient_string")]
    effectiveness: String,
    #[serde(rename = "ChargeWeight", default, deserialize_with = "lenient_string")]
    charge_weight: String,
    #[serde(rename = "TotalFee", default, deserialize_with = "lenient_decimal")]
    total_fee: Decimal,
}

impl FeeTrailDto {
    fn into_option(self, fees: &FreightPricing) -> ShippingOption {
        ShippingOption {
            total_fee_foreign: fees.foreign_fee(self.total_fee),
            service_name: self.service_name,
            transit_time: self.effectiveness,
            chargeable_weight: self.charge_weight,
            total_fee_local: self.total_fee,
        }
    }
}

pub(crate) fn parse_freight(
    body: &str,
    fees: &FreightPricing,
) -> Result<Vec<ShippingOption>, ProviderError> {
    let records: Vec<FeeTrailDto> = decode_records(body)?;
    Ok(records
        .into_iter()
        .map(|record| record.into_option(fees))
        .collect())
}
