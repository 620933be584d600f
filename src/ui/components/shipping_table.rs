use dioxus::prelude::*;

use freight_quote_desk::domain::{format_amount, ShippingOption};

#[derive(Clone, Debug, PartialEq)]
pub struct ShippingRow {
    pub service: String,
    pub transit_time: String,
    pub chargeable_weight: String,
    pub fee_local: String,
    pub fee_foreign: String,
}

impl ShippingRow {
    pub fn from_option(option: &ShippingOption, fee_decimals: u32) -> Self {
        Self {
            service: option.service_name.clone(),
            transit_time: option.transit_time.clone(),
            chargeable_weight: option.chargeable_weight.clone(),
            fee_local: format_amount(option.total_fee_local, 2),
            fee_foreign: format_amount(option.total_fee_foreign, fee_decimals),
        }
    }
}

#[component]
pub fn ShippingTable(rows: Vec<ShippingRow>) -> Element {
    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { "Service" }
                    th { "Transit time" }
                    th { "Chargeable weight" }
                    th { class: "numeric", "Total fee (CNY)" }
                    th { class: "numeric", "Total fee (USD)" }
                }
            }
            tbody {
                for row in rows {
                    tr {
                        td { "{row.service}" }
                        td { "{row.transit_time}" }
                        td { "{row.chargeable_weight}" }
                        td { class: "numeric", "{row.fee_local}" }
                        td { class: "numeric", "{row.fee_foreign}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn option(local: rust_decimal::Decimal, foreign: rust_decimal::Decimal) -> ShippingOption {
        ShippingOption {
            service_name: "HY Air".to_string(),
            transit_time: "5-8".to_string(),
            chargeable_weight: "2.5".to_string(),
            total_fee_local: local,
            total_fee_foreign: foreign,
        }
    }

    #[test]
    fn fees_are_rounded_not_truncated() {
        let row = ShippingRow::from_option(&option(dec!(144.999), dec!(20.1376)), 2);
        assert_eq!(row.fee_local, "145.00");
        assert_eq!(row.fee_foreign, "20.14");
    }

    #[test]
    fn foreign_fee_uses_configured_digits() {
        let row = ShippingRow::from_option(&option(dec!(100), dec!(15.147)), 3);
        assert_eq!(row.fee_local, "100.00");
        assert_eq!(row.fee_foreign, "15.147");
        assert_eq!(row.service, "HY Air");
    }
}
