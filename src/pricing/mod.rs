//! Pricing engine for tour bookings.
//!
//! Computes the base and add-on totals shown on the booking form and
//! snapshotted with each booking. All amounts are whole Thai baht.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{
    calculate_price, format_thb, round_whole, whole_price, whole_price_f64, GUIDE_PER_PERSON,
    MAX_BASE_PER_PERSON, MAX_PARTY_SIZE, MEALS_PER_PERSON, MIN_PARTY_SIZE, PICKUP_PER_GROUP,
};
pub use models::{Addons, BaseRate, BaseSource, Duration, LineKind, PriceBreakdown, PriceLine};
pub use routes::router;
pub use services::{quote, resolve_base_rate};
