//! crates/booking_core/src/pricing.rs
//!
//! Turns a resolved stay and a room's pricing configuration into a price breakdown.

use crate::domain::{DayClassification, PriceBreakdown, PricingConfig, ResolvedStay};
use tracing::debug;

/// Computes stay prices. Stateless; every call is a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceCalculator;

impl PriceCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_total(&self, stay: &ResolvedStay, config: &PricingConfig) -> PriceBreakdown {
        let weekend_sum = weekend_sum(stay, config);
        let non_weekend_sum = nightly_sum(&stay.non_weekend_dates, config.non_weekend_date_price);
        let additional_guest_sum = additional_guest_sum(stay.total_nights, config);
        let night_sum = weekend_sum + non_weekend_sum;
        let total = night_sum + additional_guest_sum;
        let total_ex_vat = total - (config.vat_percent / 100.0 * total);

        let breakdown = PriceBreakdown {
            weekend_sum,
            non_weekend_sum,
            additional_guest_sum,
            night_sum,
            total,
            total_ex_vat,
        };
        debug!(?breakdown, "Calculated stay price");
        breakdown
    }
}

/// Full-weekend rooms are priced per weekend unit with the full-weekend discount;
/// otherwise each weekend night is priced on its own.
pub fn weekend_sum(stay: &ResolvedStay, config: &PricingConfig) -> f64 {
    if config.full_weekend_only {
        return stay.weekend_count
            * config.full_weekend_price
            * (1.0 - config.full_weekend_discount / 100.0);
    }
    nightly_sum(&stay.weekend_dates, config.weekend_date_price)
}

/// Sum of `price` over the nights, reduced by each night's discount.
pub fn nightly_sum(nights: &[DayClassification], price: f64) -> f64 {
    nights
        .iter()
        .map(|night| discounted_price(price, night.discount_percent))
        .sum()
}

fn discounted_price(price: f64, discount_percent: f64) -> f64 {
    if discount_percent > 0.0 {
        price - (discount_percent / 100.0 * price)
    } else {
        price
    }
}

/// Guests above the included count pay per guest, per night.
pub fn additional_guest_sum(night_count: i64, config: &PricingConfig) -> f64 {
    if config.guest_count <= config.default_guest_count {
        return 0.0;
    }
    let additional_guests = config.guest_count - config.default_guest_count;
    f64::from(additional_guests) * night_count.max(0) as f64 * config.additional_guest_price
}
