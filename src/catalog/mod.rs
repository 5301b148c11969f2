//! Tour catalog: tour types and the locations they run at.

pub mod defaults;
pub mod models;
pub mod normalize;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

pub use models::{Location, PricePerPerson, RawLocation, TourType};
pub use normalize::{normalize_location, sanitize_price};
pub use routes::{admin_router, router};
pub use services::{fetch_catalog, filter_locations, load_catalog, Catalog};
