//! Response DTOs for pricing API endpoints.

use serde::Serialize;

use super::calculators::format_thb;
use super::models::{BaseSource, PriceBreakdown, PriceLine};

/// A line with its display amount
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    #[serde(flatten)]
    pub line: PriceLine,
    pub selected: bool,
    pub formatted: String,
}

/// Response for a price quote
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub base: i64,
    pub addons: i64,
    pub total: i64,
    pub base_per_person: i64,
    pub base_source: BaseSource,
    pub total_formatted: String,
    pub lines: Vec<QuoteLine>,
}

impl QuoteResponse {
    pub fn new(breakdown: PriceBreakdown, base_per_person: i64, base_source: BaseSource) -> Self {
        Self {
            base: breakdown.base,
            addons: breakdown.addons,
            total: breakdown.total,
            base_per_person,
            base_source,
            total_formatted: format_thb(breakdown.total),
            lines: breakdown
                .lines
                .into_iter()
                .map(|line| QuoteLine {
                    selected: line.is_selected(),
                    formatted: format_thb(line.amount),
                    line,
                })
                .collect(),
        }
    }
}
