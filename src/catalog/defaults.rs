//! Built-in catalog used when the store is empty or unreachable.

use super::models::{RawLocation, TourType};

fn tour_type(id: &str, label_th: &str, label_en: &str, description_th: &str, description_en: &str) -> TourType {
    TourType {
        id: id.to_string(),
        label_th: label_th.to_string(),
        label_en: label_en.to_string(),
        description_th: description_th.to_string(),
        description_en: description_en.to_string(),
    }
}

pub fn default_tour_types() -> Vec<TourType> {
    vec![
        tour_type(
            "islands",
            "เกาะและทะเล",
            "Islands & Sea",
            "ล่องเรือ ชมอ่าว น้ำใส หาดทรายขาว",
            "Boat rides, clear bays, and white sand beaches.",
        ),
        tour_type(
            "heritage",
            "วัฒนธรรมและเมืองเก่า",
            "Heritage & Old Town",
            "เดินชมย่านเก่า คาเฟ่ และชุมชนท้องถิ่น",
            "Walkable old town, cafés, and local communities.",
        ),
        tour_type(
            "adventure",
            "ผจญภัยและธรรมชาติ",
            "Adventure & Nature",
            "น้ำตก เส้นทางเขา และมุมมองพาโนรามา",
            "Waterfalls, forest trails, and panoramic viewpoints.",
        ),
    ]
}

fn location(
    id: &str,
    name_th: &str,
    name_en: &str,
    area_th: &str,
    area_en: &str,
    image_path: &str,
    highlights: [&str; 3],
) -> RawLocation {
    RawLocation {
        id: Some(id.to_string()),
        name_th: Some(name_th.to_string()),
        name_en: Some(name_en.to_string()),
        area_th: Some(area_th.to_string()),
        area_en: Some(area_en.to_string()),
        image_path: Some(image_path.to_string()),
        highlights: Some(highlights.iter().map(|h| h.to_string()).collect()),
        ..Default::default()
    }
}

/// Default locations carry no tour types, durations or prices, so they are
/// open to every tour type and both durations at the fallback rates.
pub fn default_locations() -> Vec<RawLocation> {
    vec![
        location(
            "phuket-cove",
            "อ่าวสวรรค์ ภูเก็ต",
            "Paradise Cove, Phuket",
            "ทะเลอันดามัน",
            "Andaman Sea",
            "phuket-cove.jpg",
            ["Snorkeling", "Hidden beach", "Sunset cruise"],
        ),
        location(
            "chiang-mai",
            "ดอยสูง เชียงใหม่",
            "Highland Chiang Mai",
            "ภาคเหนือ",
            "Northern Thailand",
            "chiang-mai-highland.jpg",
            ["Misty mornings", "Hill tribe market", "Tea tasting"],
        ),
        location(
            "ayutthaya",
            "อยุธยา เมืองมรดก",
            "Ayutthaya Heritage",
            "ภาคกลาง",
            "Central Thailand",
            "ayutthaya-heritage.jpg",
            ["Temple tour", "River cruise", "Local craft"],
        ),
        location(
            "krabi",
            "กระบี่ หน้าผาและหาดลับ",
            "Krabi Cliffs & Coves",
            "ทะเลใต้",
            "Southern Sea",
            "krabi-cliffs.jpg",
            ["Kayak", "Limestone cliffs", "Beach picnic"],
        ),
    ]
}
