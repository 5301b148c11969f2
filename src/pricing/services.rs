//! Base-rate resolution and quotes against the catalog.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::catalog::{Catalog, Location};
use crate::error::{AppError, Result};

use super::calculators::{calculate_price, round_whole, MAX_BASE_PER_PERSON};
use super::models::{BaseRate, BaseSource, Duration};
use super::requests::QuoteRequest;
use super::responses::QuoteResponse;

/// Per-person rate for a location and duration.
///
/// Uses the location's own price when it has one, otherwise the fixed
/// fallback for the duration.
pub fn resolve_base_rate(location: Option<&Location>, duration: Duration) -> BaseRate {
    match location.and_then(|l| l.price_per_person.get(duration)) {
        Some(price) if price >= 0 => BaseRate {
            base_per_person: price,
            base_source: BaseSource::Location,
        },
        _ => BaseRate {
            base_per_person: duration.fallback_rate(),
            base_source: BaseSource::Fallback,
        },
    }
}

/// Price a quote request.
///
/// An explicit `base_per_person` wins and must not exceed
/// `MAX_BASE_PER_PERSON`; otherwise the named location's rate (unknown
/// locations use the fallback rate).
pub fn quote(catalog: &Catalog, request: &QuoteRequest) -> Result<QuoteResponse> {
    let rate = match request.base_per_person {
        Some(explicit) => {
            let rounded = round_whole(explicit).max(Decimal::ZERO);
            let base_per_person = rounded
                .to_i64()
                .filter(|rate| *rate <= MAX_BASE_PER_PERSON)
                .ok_or_else(|| {
                    AppError::Validation(format!(
                        "basePerPerson must be at most {}",
                        MAX_BASE_PER_PERSON
                    ))
                })?;
            BaseRate {
                base_per_person,
                base_source: BaseSource::Explicit,
            }
        }
        None => {
            let location = request
                .location_id
                .as_deref()
                .and_then(|id| catalog.location(id));
            resolve_base_rate(location, request.duration)
        }
    };

    let breakdown = calculate_price(
        request.duration,
        Decimal::from(rate.base_per_person),
        request.party_size,
        request.addons,
    );

    Ok(QuoteResponse::new(
        breakdown,
        rate.base_per_person,
        rate.base_source,
    ))
}
