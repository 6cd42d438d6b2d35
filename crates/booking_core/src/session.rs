//! crates/booking_core/src/session.rs
//!
//! The form state of one booking flow: guest count, guest name and the chosen
//! dates, plus the quote built from them when the guest moves past the
//! date-entry step.

use crate::domain::{
    BookingSummary, DiscountDate, GuestControls, PricingConfig, ResolvedStay, RoomSettings,
};
use crate::pricing::PriceCalculator;
use crate::resolver::{has_disabled_date_in_range, DateRangeResolver};
use chrono::NaiveDate;
use tracing::debug;

/// Reasons a booking cannot move forward.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("A guest name is required")]
    MissingGuestName,
    #[error("Check-in and check-out dates are required")]
    MissingDates,
    #[error("The selected dates include a date that cannot be booked")]
    DisabledDateInRange,
    #[error("At least one guest is required")]
    NoGuests,
    #[error("{requested} guests exceeds the room maximum of {max}")]
    TooManyGuests { requested: u32, max: u32 },
}

/// One guest's progress through the booking form for a single room.
#[derive(Debug, Clone)]
pub struct BookingSession {
    settings: RoomSettings,
    resolver: DateRangeResolver,
    calculator: PriceCalculator,
    guest_count: u32,
    first_name: String,
    last_name: String,
    stay: Option<ResolvedStay>,
    disabled_date_in_range: bool,
}

impl BookingSession {
    /// Starts a booking with the room's included guest count, kept within `[1, maxGuests]`.
    pub fn new(settings: RoomSettings) -> Self {
        let included = settings.default_guests().max(1);
        let guest_count = settings
            .max_guests()
            .map_or(included, |max| included.min(max));
        Self {
            settings,
            resolver: DateRangeResolver::new(),
            calculator: PriceCalculator::new(),
            guest_count,
            first_name: String::new(),
            last_name: String::new(),
            stay: None,
            disabled_date_in_range: false,
        }
    }

    pub fn settings(&self) -> &RoomSettings {
        &self.settings
    }

    pub fn stay(&self) -> Option<&ResolvedStay> {
        self.stay.as_ref()
    }

    pub fn disabled_date_in_range(&self) -> bool {
        self.disabled_date_in_range
    }

    // --- Guests ---

    pub fn guest_count(&self) -> u32 {
        self.guest_count
    }

    pub fn set_guest_count(&mut self, requested: u32) -> Result<u32, BookingError> {
        if requested == 0 {
            return Err(BookingError::NoGuests);
        }
        if let Some(max) = self.settings.max_guests() {
            if requested > max {
                return Err(BookingError::TooManyGuests { requested, max });
            }
        }
        self.guest_count = requested;
        Ok(requested)
    }

    pub fn increase_guests(&mut self) -> Result<u32, BookingError> {
        self.set_guest_count(self.guest_count.saturating_add(1))
    }

    pub fn decrease_guests(&mut self) -> Result<u32, BookingError> {
        self.set_guest_count(self.guest_count.saturating_sub(1))
    }

    pub fn guest_controls(&self) -> GuestControls {
        GuestControls {
            can_increase: self
                .settings
                .max_guests()
                .map_or(true, |max| self.guest_count < max),
            can_decrease: self.guest_count > 1,
        }
    }

    pub fn set_first_name(&mut self, first_name: &str) {
        self.first_name = first_name.trim().to_string();
    }

    pub fn set_last_name(&mut self, last_name: &str) {
        self.last_name = last_name.trim().to_string();
    }

    /// "First Last", or whichever half has been entered.
    pub fn guest_full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            _ => self.last_name.clone(),
        }
    }

    // --- Dates ---

    /// Records a date selection, normalizing it against the room's rules.
    ///
    /// The disabled-date check runs on the dates as selected, before normalization.
    pub fn select_dates(
        &mut self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        today: NaiveDate,
    ) -> &ResolvedStay {
        self.disabled_date_in_range =
            has_disabled_date_in_range(check_in, check_out, &self.settings);
        let stay = self.resolver.resolve(check_in, check_out, &self.settings, today);
        self.stay.insert(stay)
    }

    /// Discount dates between `from` and `to` inclusive, for highlighting in a calendar view.
    pub fn discount_dates_in_view(&self, from: NaiveDate, to: NaiveDate) -> Vec<&DiscountDate> {
        self.settings
            .discount_dates
            .iter()
            .filter(|discount| discount.date >= from && discount.date <= to)
            .collect()
    }

    // --- Confirmation ---

    pub fn validate(&self) -> Result<(), BookingError> {
        if self.guest_full_name().is_empty() {
            return Err(BookingError::MissingGuestName);
        }
        if self.stay.is_none() {
            return Err(BookingError::MissingDates);
        }
        if self.disabled_date_in_range {
            return Err(BookingError::DisabledDateInRange);
        }
        Ok(())
    }

    /// Validates the form and prices the stay for the confirmation step.
    pub fn quote(&self) -> Result<BookingSummary, BookingError> {
        self.validate()?;
        let stay = self.stay.as_ref().ok_or(BookingError::MissingDates)?;

        let config = PricingConfig::from_settings(&self.settings, self.guest_count);
        let prices = self.calculator.calculate_total(stay, &config);
        let default_guest_count = self.settings.default_guests();

        let summary = BookingSummary {
            room_name: self.settings.room_name().to_string(),
            guest_full_name: self.guest_full_name(),
            selected_dates: stay.range().display(),
            default_guest_count,
            total_guests: self.guest_count,
            additional_guests: self.guest_count.saturating_sub(default_guest_count),
            total_nights: stay.total_nights,
            prices,
        };
        debug!(room = %summary.room_name, total = summary.prices.total, "Booking quoted");
        Ok(summary)
    }
}
