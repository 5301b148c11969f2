//! Value types shared by the pricing engine, the catalog and bookings.

use serde::{Deserialize, Serialize};

/// Booking length category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Full,
    Half,
}

impl Duration {
    /// Both durations, in display order
    pub const ALL: [Duration; 2] = [Duration::Full, Duration::Half];

    /// Per-person rate used when a location has no valid price of its own
    pub fn fallback_rate(self) -> i64 {
        match self {
            Duration::Full => 2500,
            Duration::Half => 1500,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Duration::Full => "full",
            Duration::Half => "half",
        }
    }

    /// Parse the stored string form; anything else is not a duration.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "full" => Some(Duration::Full),
            "half" => Some(Duration::Half),
            _ => None,
        }
    }

    pub fn label_en(self) -> &'static str {
        match self {
            Duration::Full => "Full day",
            Duration::Half => "Half day",
        }
    }

    pub fn label_th(self) -> &'static str {
        match self {
            Duration::Full => "เต็มวัน",
            Duration::Half => "ครึ่งวัน",
        }
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional extras selected for a booking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Addons {
    pub guide: bool,
    pub meals: bool,
    pub pickup: bool,
}

/// Where the per-person base rate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseSource {
    Location,
    Fallback,
    /// Rate supplied with the quote request
    Explicit,
}

/// Resolved per-person base rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRate {
    pub base_per_person: i64,
    pub base_source: BaseSource,
}

/// Which part of the price a line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Location,
    Guide,
    Meals,
    Pickup,
}

/// A single display line of a price breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLine {
    pub kind: LineKind,
    pub label_th: String,
    pub label_en: String,
    pub amount: i64,
}

impl PriceLine {
    /// Zero-amount lines are rendered as "not selected"
    pub fn is_selected(&self) -> bool {
        self.amount != 0
    }
}

/// Computed price for a booking; recomputed on every input change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub base: i64,
    pub addons: i64,
    pub total: i64,
    pub lines: Vec<PriceLine>,
}
