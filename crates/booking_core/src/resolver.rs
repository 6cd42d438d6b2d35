//! crates/booking_core/src/resolver.rs
//!
//! Normalizes a selected check-in / check-out pair against a room's booking
//! rules and sorts every night of the resulting stay into weekend and
//! non-weekend nights.
//!
//! Normalization is a fixed pipeline of pure steps. Later steps can undo what
//! an earlier one fixed; the pipeline runs once and does not re-validate.

use crate::domain::{
    add_days, weekday_index, DateRange, DayClassification, ResolvedStay, RoomSettings,
    StayWarning, WeekdayIndex,
};
use chrono::NaiveDate;
use tracing::{debug, warn};

const SUNDAY: WeekdayIndex = 0;
const SATURDAY: WeekdayIndex = 6;

//=========================================================================================
// The Resolver
//=========================================================================================

/// Resolves raw date selections into stays.
///
/// Holds no settings of its own: the room configuration and the current date
/// are passed into every call, so one resolver can serve any number of rooms.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRangeResolver;

impl DateRangeResolver {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes the range and classifies every night of it.
    ///
    /// `check_out` may equal `check_in` to request a single night.
    pub fn resolve(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        settings: &RoomSettings,
        today: NaiveDate,
    ) -> ResolvedStay {
        let (range, warnings) = self.normalize(check_in, check_out, settings, today);
        let stay = classify_stay(range, settings, warnings);
        debug!(
            check_in = %stay.check_in_date,
            check_out = %stay.check_out_date,
            nights = stay.total_nights,
            weekend_count = stay.weekend_count,
            non_weekend_count = stay.non_weekend_count,
            "Resolved stay"
        );
        stay
    }

    /// Applies the booking rules, in order, without classifying nights.
    pub fn normalize(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        settings: &RoomSettings,
        today: NaiveDate,
    ) -> (DateRange, Vec<StayWarning>) {
        let range = DateRange::new(check_in, check_out);
        let range = shift_disabled_start(range, settings);
        let range = extend_single_day(range);
        let (range, warning) = align_full_weekend(range, settings, today);
        (range, warning.into_iter().collect())
    }
}

/// True when any day from check-in through check-out inclusive is a disabled date.
pub fn has_disabled_date_in_range(
    check_in: NaiveDate,
    check_out: NaiveDate,
    settings: &RoomSettings,
) -> bool {
    settings
        .disabled_dates
        .iter()
        .any(|disabled| *disabled >= check_in && *disabled <= check_out)
}

//=========================================================================================
// Normalization Steps
//=========================================================================================

/// A check-in on a disabled start day moves forward one day, and the stay
/// becomes a single night from the new check-in.
pub fn shift_disabled_start(range: DateRange, settings: &RoomSettings) -> DateRange {
    if !settings.is_disabled_start_day(range.check_in) {
        return range;
    }
    let check_in = add_days(range.check_in, 1);
    DateRange::new(check_in, add_days(check_in, 1))
}

/// A zero-night range becomes a single night.
pub fn extend_single_day(range: DateRange) -> DateRange {
    if range.check_in != range.check_out {
        return range;
    }
    DateRange::new(range.check_in, add_days(range.check_in, 1))
}

/// Full-weekend-only rooms: a Sunday check-in becomes Monday to Wednesday,
/// a Saturday check-in is pushed past the weekend unless today is the Friday
/// right before it, and a Saturday check-out is stretched to Sunday.
pub fn align_full_weekend(
    range: DateRange,
    settings: &RoomSettings,
    today: NaiveDate,
) -> (DateRange, Option<StayWarning>) {
    if !settings.full_weekend_only {
        return (range, None);
    }

    let mut range = range;
    let check_in_day = weekday_index(range.check_in);
    if check_in_day == SUNDAY {
        let check_in = add_days(range.check_in, 1);
        range = DateRange::new(check_in, add_days(check_in, 2));
    } else if check_in_day == SATURDAY && range.check_in.pred_opt() != Some(today) {
        let check_in = add_days(range.check_in, 2);
        range = DateRange::new(check_in, add_days(check_in, 1));
    }

    if weekday_index(range.check_out) != SATURDAY {
        return (range, None);
    }

    let moved_to = add_days(range.check_out, 1);
    warn!(
        from = %range.check_out,
        to = %moved_to,
        "Only full weekends can be selected. Check-out date adjusted to Sunday."
    );
    let warning = StayWarning::CheckOutMovedToSunday {
        from: range.check_out,
        to: moved_to,
    };
    (DateRange::new(range.check_in, moved_to), Some(warning))
}

//=========================================================================================
// Night Classification
//=========================================================================================

/// Whether `day` counts as a weekend night of a stay ending on `check_out`.
///
/// A check-out falling on the *first* configured weekend day is never a
/// weekend night; other configured weekend days are not consulted.
/// `resolve` only classifies the nights before check-out, so that branch is
/// unreachable from it; it applies to callers classifying the check-out day.
pub fn is_weekend_night(day: NaiveDate, check_out: NaiveDate, settings: &RoomSettings) -> bool {
    let check_out_is_first_weekend_day =
        day == check_out && settings.first_weekend_day() == Some(weekday_index(check_out));
    settings.is_weekend_day(day) && !check_out_is_first_weekend_day
}

/// The discount that applies to `day`; check-out never carries one.
///
/// As with `is_weekend_night`, the check-out branch is unreachable from `resolve`.
pub fn discount_for_night(day: NaiveDate, check_out: NaiveDate, settings: &RoomSettings) -> f64 {
    if day == check_out {
        return 0.0;
    }
    settings.discount_for(day)
}

fn classify_stay(
    range: DateRange,
    settings: &RoomSettings,
    warnings: Vec<StayWarning>,
) -> ResolvedStay {
    let mut weekend_dates = Vec::new();
    let mut non_weekend_dates = Vec::new();

    for day in range.nights() {
        let night = DayClassification {
            date: day,
            discount_percent: discount_for_night(day, range.check_out, settings),
        };
        if is_weekend_night(day, range.check_out, settings) {
            weekend_dates.push(night);
        } else {
            non_weekend_dates.push(night);
        }
    }

    ResolvedStay {
        check_in_date: range.check_in,
        check_out_date: range.check_out,
        total_nights: range.night_count(),
        weekend_count: weekend_dates.len() as f64 / settings.weekend_day_cardinality() as f64,
        non_weekend_count: non_weekend_dates.len(),
        weekend_dates,
        non_weekend_dates,
        warnings,
    }
}
