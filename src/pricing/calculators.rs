//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no database access. Amounts are whole
//! Thai baht; there is no minor unit.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{Addons, Duration, LineKind, PriceBreakdown, PriceLine};

/// Guide add-on, charged per person
pub const GUIDE_PER_PERSON: i64 = 600;
/// Meals add-on, charged per person
pub const MEALS_PER_PERSON: i64 = 300;
/// Hotel pickup add-on, charged once per booking regardless of party size
pub const PICKUP_PER_GROUP: i64 = 800;

pub const MIN_PARTY_SIZE: i64 = 1;
pub const MAX_PARTY_SIZE: i64 = 20;
/// Upper bound for a per-person rate given directly in a quote request
pub const MAX_BASE_PER_PERSON: i64 = 1_000_000;

/// Round half up to the nearest whole unit (`floor(x + 0.5)`).
///
/// Midpoints always move toward positive infinity, so `-0.5` becomes `0`
/// rather than `-1`.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use tour_booking_web::pricing::round_whole;
///
/// assert_eq!(round_whole(dec!(2.5)), dec!(3));
/// assert_eq!(round_whole(dec!(2.49)), dec!(2));
/// assert_eq!(round_whole(dec!(-0.5)), dec!(0));
/// ```
pub fn round_whole(amount: Decimal) -> Decimal {
    amount
        .checked_add(Decimal::new(5, 1))
        .unwrap_or(amount)
        .floor()
}

/// Round a raw price and keep it only if it is a non-negative whole amount
/// that fits in an `i64`.
pub fn whole_price(amount: Decimal) -> Option<i64> {
    let rounded = round_whole(amount);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        return None;
    }
    rounded.to_i64()
}

/// Same as [`whole_price`] for a float; NaN and infinities are rejected.
pub fn whole_price_f64(amount: f64) -> Option<i64> {
    if !amount.is_finite() {
        return None;
    }
    Decimal::from_f64(amount).and_then(whole_price)
}

/// Calculate the price breakdown for a booking.
///
/// Never fails: a party size below one is treated as one and a negative base
/// rate as zero. Always returns four lines in fixed order (location rate,
/// guide, meals, pickup), including zero-amount lines.
pub fn calculate_price(
    duration: Duration,
    base_per_person: Decimal,
    party_size: i64,
    addons: Addons,
) -> PriceBreakdown {
    let party_size = party_size.max(MIN_PARTY_SIZE);
    let per_person = round_whole(base_per_person)
        .max(Decimal::ZERO)
        .to_i64()
        .unwrap_or(i64::MAX);

    let base = per_person.saturating_mul(party_size);
    let guide = if addons.guide {
        GUIDE_PER_PERSON.saturating_mul(party_size)
    } else {
        0
    };
    let meals = if addons.meals {
        MEALS_PER_PERSON.saturating_mul(party_size)
    } else {
        0
    };
    let pickup = if addons.pickup { PICKUP_PER_GROUP } else { 0 };
    let addons_total = guide.saturating_add(meals).saturating_add(pickup);

    PriceBreakdown {
        base,
        addons: addons_total,
        total: base.saturating_add(addons_total),
        lines: vec![
            PriceLine {
                kind: LineKind::Location,
                label_th: format!(
                    "ราคาสถานที่ {} x {} ท่าน",
                    duration.label_th(),
                    party_size
                ),
                label_en: format!("{} location rate x {} pax", duration.label_en(), party_size),
                amount: base,
            },
            PriceLine {
                kind: LineKind::Guide,
                label_th: "ไกด์มืออาชีพ".to_string(),
                label_en: "Professional guide".to_string(),
                amount: guide,
            },
            PriceLine {
                kind: LineKind::Meals,
                label_th: "อาหารกลางวัน".to_string(),
                label_en: "Lunch meals".to_string(),
                amount: meals,
            },
            PriceLine {
                kind: LineKind::Pickup,
                label_th: "รับ-ส่งโรงแรม (ต่อกลุ่ม)".to_string(),
                label_en: "Hotel pickup (per group)".to_string(),
                amount: pickup,
            },
        ],
    }
}

/// Format a whole-baht amount for display, e.g. `฿8,000`.
pub fn format_thb(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-฿{}", grouped)
    } else {
        format!("฿{}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn no_addons() -> Addons {
        Addons::default()
    }

    fn all_addons() -> Addons {
        Addons {
            guide: true,
            meals: true,
            pickup: true,
        }
    }

    // ==================== round_whole tests ====================

    #[test]
    fn test_round_whole_half_up() {
        assert_eq!(round_whole(dec!(2.5)), dec!(3));
        assert_eq!(round_whole(dec!(3.5)), dec!(4));
        assert_eq!(round_whole(dec!(1499.4)), dec!(1499));
        assert_eq!(round_whole(dec!(1499.5)), dec!(1500));
    }

    #[test]
    fn test_round_whole_negative_midpoint_moves_up() {
        assert_eq!(round_whole(dec!(-0.5)), dec!(0));
        assert_eq!(round_whole(dec!(-2.5)), dec!(-2));
        assert_eq!(round_whole(dec!(-2.6)), dec!(-3));
    }

    #[test]
    fn test_whole_price_rejects_negative() {
        assert_eq!(whole_price(dec!(-5)), None);
        assert_eq!(whole_price(dec!(-0.4)), Some(0));
        assert_eq!(whole_price(dec!(1800.6)), Some(1801));
    }

    #[test]
    fn test_whole_price_f64_rejects_non_finite() {
        assert_eq!(whole_price_f64(f64::NAN), None);
        assert_eq!(whole_price_f64(f64::INFINITY), None);
        assert_eq!(whole_price_f64(2200.0), Some(2200));
    }

    // ==================== calculate_price tests ====================

    #[test]
    fn test_full_day_two_people_no_addons() {
        let price = calculate_price(Duration::Full, dec!(2500), 2, no_addons());

        assert_eq!(price.base, 5000);
        assert_eq!(price.addons, 0);
        assert_eq!(price.total, 5000);
    }

    #[test]
    fn test_half_day_three_people_all_addons() {
        let price = calculate_price(Duration::Half, dec!(1500), 3, all_addons());

        assert_eq!(price.base, 4500);
        assert_eq!(price.lines[1].amount, 1800);
        assert_eq!(price.lines[2].amount, 900);
        assert_eq!(price.lines[3].amount, 800);
        assert_eq!(price.addons, 3500);
        assert_eq!(price.total, 8000);
    }

    #[test]
    fn test_pickup_is_flat_per_group() {
        let small = calculate_price(Duration::Full, dec!(0), 1, Addons { pickup: true, ..no_addons() });
        let large = calculate_price(Duration::Full, dec!(0), 20, Addons { pickup: true, ..no_addons() });

        assert_eq!(small.addons, PICKUP_PER_GROUP);
        assert_eq!(large.addons, PICKUP_PER_GROUP);
    }

    #[test]
    fn test_party_size_floor() {
        let zero = calculate_price(Duration::Full, dec!(2500), 0, all_addons());
        let negative = calculate_price(Duration::Full, dec!(2500), -4, all_addons());
        let one = calculate_price(Duration::Full, dec!(2500), 1, all_addons());

        assert_eq!(zero, one);
        assert_eq!(negative, one);
        assert_eq!(one.lines[0].label_en, "Full day location rate x 1 pax");
    }

    #[test]
    fn test_base_rate_rounded_and_clamped() {
        let rounded = calculate_price(Duration::Half, dec!(1499.5), 2, no_addons());
        assert_eq!(rounded.base, 3000);

        let negative = calculate_price(Duration::Half, dec!(-100), 2, no_addons());
        assert_eq!(negative.base, 0);
        assert_eq!(negative.total, 0);
    }

    #[test]
    fn test_total_is_base_plus_addons() {
        for party_size in MIN_PARTY_SIZE..=MAX_PARTY_SIZE {
            for duration in Duration::ALL {
                for addons in [no_addons(), all_addons(), Addons { meals: true, ..no_addons() }] {
                    let price = calculate_price(
                        duration,
                        Decimal::from(duration.fallback_rate()),
                        party_size,
                        addons,
                    );
                    assert_eq!(price.total, price.base + price.addons);
                }
            }
        }
    }

    #[test]
    fn test_lines_always_present_in_order() {
        let price = calculate_price(Duration::Half, dec!(1500), 2, no_addons());
        let kinds: Vec<LineKind> = price.lines.iter().map(|l| l.kind).collect();

        assert_eq!(
            kinds,
            vec![LineKind::Location, LineKind::Guide, LineKind::Meals, LineKind::Pickup]
        );
        assert!(price.lines[0].is_selected());
        assert!(!price.lines[1].is_selected());
        assert!(!price.lines[3].is_selected());
        assert_eq!(price.lines[3].label_en, "Hotel pickup (per group)");
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let a = calculate_price(Duration::Full, dec!(2750.2), 7, all_addons());
        let b = calculate_price(Duration::Full, dec!(2750.2), 7, all_addons());
        assert_eq!(a, b);
    }

    // ==================== format_thb tests ====================

    #[test]
    fn test_format_thb() {
        assert_eq!(format_thb(0), "฿0");
        assert_eq!(format_thb(800), "฿800");
        assert_eq!(format_thb(8000), "฿8,000");
        assert_eq!(format_thb(1234567), "฿1,234,567");
        assert_eq!(format_thb(-1500), "-฿1,500");
    }
}
