pub mod domain;
pub mod ports;
pub mod pricing;
pub mod resolver;
pub mod session;

pub use domain::{
    BookingSummary, DateRange, DayClassification, DiscountDate, GuestControls, PriceBreakdown,
    PricingConfig, ResolvedStay, RoomSettings, StayWarning,
};
pub use ports::{PortError, PortResult, RoomSettingsSource};
pub use pricing::PriceCalculator;
pub use resolver::{has_disabled_date_in_range, DateRangeResolver};
pub use session::{BookingError, BookingSession};
