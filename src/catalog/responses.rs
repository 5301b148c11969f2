//! Response DTOs for catalog endpoints.

use serde::Serialize;

use crate::config::StorageConfig;
use crate::storage::public_image_url;

use super::models::{Location, TourType};
use super::services::Catalog;

/// A location with its browser-fetchable image URL
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationView {
    #[serde(flatten)]
    pub location: Location,
    pub image_url: String,
}

impl LocationView {
    pub fn new(location: &Location, storage: &StorageConfig) -> Self {
        Self {
            image_url: public_image_url(storage, &location.image_path),
            location: location.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub tour_types: Vec<TourType>,
    pub locations: Vec<LocationView>,
}

impl CatalogResponse {
    pub fn new(catalog: &Catalog, storage: &StorageConfig) -> Self {
        Self {
            tour_types: catalog.tour_types.clone(),
            locations: catalog
                .locations
                .iter()
                .map(|l| LocationView::new(l, storage))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_view_flattens_location() {
        let storage = StorageConfig {
            public_url: Some("https://files.example.com".to_string()),
            bucket: "tour-images".to_string(),
        };
        let catalog = Catalog::defaults();
        let view = LocationView::new(&catalog.locations[0], &storage);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["id"], "phuket-cove");
        assert_eq!(
            json["imageUrl"],
            "https://files.example.com/storage/v1/object/public/tour-images/phuket-cove.jpg"
        );
        assert_eq!(json["availableDurations"], serde_json::json!(["full", "half"]));
    }
}
