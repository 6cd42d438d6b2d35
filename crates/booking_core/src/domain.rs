//! crates/booking_core/src/domain.rs
//!
//! Defines the pure, core data structures for the booking engine.
//! Room settings arrive as loosely-shaped JSON, so every field is optional on
//! the wire and the neutral defaults are applied here, once, rather than at
//! each call site.

use chrono::{Datelike, Days, NaiveDate};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// `YYYY-MM-DD`, the format discount dates and night lists are keyed by.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
/// `MM/DD/YYYY`, the format the date picker uses for disabled dates and display.
pub const PICKER_DATE_FORMAT: &str = "%m/%d/%Y";

/// A weekday index where 0 is Sunday and 6 is Saturday.
pub type WeekdayIndex = u8;

/// Parses a calendar date in either of the two formats room settings use.
///
/// An ISO timestamp (`2024-06-05T00:00:00.000Z`) is accepted by its date part.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let iso_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(iso_part, ISO_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, PICKER_DATE_FORMAT))
        .ok()
}

/// Returns the weekday index of `date` (0 = Sunday .. 6 = Saturday).
pub fn weekday_index(date: NaiveDate) -> WeekdayIndex {
    date.weekday().num_days_from_sunday() as WeekdayIndex
}

/// Adds whole days to a date, saturating at the end of the supported calendar.
pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

//=========================================================================================
// Room Settings
//=========================================================================================

/// A specific calendar date with a percentage price reduction (0-100).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountDate {
    pub date: NaiveDate,
    #[serde(rename = "discount")]
    pub discount_percent: f64,
}

/// The availability, discount and pricing configuration of one room.
///
/// Loaded once per room selection and never mutated during a booking flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomSettings {
    #[serde(deserialize_with = "lenient_text")]
    pub room_name: Option<String>,
    /// Ordered; the first entry is consulted by the check-out special case.
    #[serde(deserialize_with = "lenient_weekdays")]
    pub weekend_days: Vec<WeekdayIndex>,
    #[serde(deserialize_with = "lenient_weekdays")]
    pub disabled_start_days: Vec<WeekdayIndex>,
    #[serde(deserialize_with = "lenient_dates")]
    pub disabled_dates: Vec<NaiveDate>,
    #[serde(deserialize_with = "lenient_flag")]
    pub full_weekend_only: bool,
    #[serde(deserialize_with = "lenient_discount_dates")]
    pub discount_dates: Vec<DiscountDate>,
    #[serde(deserialize_with = "lenient_number")]
    pub weekend_date_price: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub non_weekend_date_price: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub additional_guest_price: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub full_weekend_price: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub full_weekend_discount: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub default_guests: Option<u32>,
    #[serde(deserialize_with = "lenient_count")]
    pub max_guests: Option<u32>,
    #[serde(
        rename = "VATamount",
        alias = "vatPercent",
        deserialize_with = "lenient_number"
    )]
    pub vat_percent: Option<f64>,
}

impl RoomSettings {
    pub fn is_weekend_day(&self, date: NaiveDate) -> bool {
        self.weekend_days.contains(&weekday_index(date))
    }

    pub fn first_weekend_day(&self) -> Option<WeekdayIndex> {
        self.weekend_days.first().copied()
    }

    /// Number of configured weekend days, never less than one.
    pub fn weekend_day_cardinality(&self) -> usize {
        self.weekend_days.len().max(1)
    }

    pub fn is_disabled_start_day(&self, date: NaiveDate) -> bool {
        self.disabled_start_days.contains(&weekday_index(date))
    }

    /// The configured discount for a literal date, or 0 when none matches.
    /// The first matching entry wins.
    pub fn discount_for(&self, date: NaiveDate) -> f64 {
        self.discount_dates
            .iter()
            .find(|discount| discount.date == date)
            .map(|discount| discount.discount_percent)
            .unwrap_or(0.0)
    }

    pub fn room_name(&self) -> &str {
        self.room_name.as_deref().unwrap_or_default()
    }

    pub fn default_guests(&self) -> u32 {
        self.default_guests.unwrap_or(0)
    }

    /// The guest ceiling; `None` when unset or zero.
    pub fn max_guests(&self) -> Option<u32> {
        self.max_guests.filter(|max| *max > 0)
    }

    /// Names of the pricing fields a quote depends on that are absent.
    pub fn missing_pricing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_weekend_only {
            if self.full_weekend_price.is_none() {
                missing.push("fullWeekendPrice");
            }
        } else if self.weekend_date_price.is_none() {
            missing.push("weekendDatePrice");
        }
        if self.non_weekend_date_price.is_none() {
            missing.push("nonWeekendDatePrice");
        }
        if self.additional_guest_price.is_none() {
            missing.push("additionalGuestPrice");
        }
        if self.vat_percent.is_none() {
            missing.push("VATamount");
        }
        missing
    }
}

//=========================================================================================
// Lenient Settings Deserialization
//=========================================================================================
// A wrong-typed field degrades to its neutral default with a warning instead of
// rejecting the whole room. Numeric strings are accepted where numbers are expected.

/// Any JSON value, sorted into the shapes room settings care about.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<LooseValue>),
    Other(IgnoredAny),
}

impl LooseValue {
    fn as_number(&self) -> Option<f64> {
        let number = match self {
            Self::Number(number) => *number,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        number.is_finite().then_some(number)
    }

    fn as_whole_number(&self) -> Option<u32> {
        let number = self.as_number()?;
        let is_whole = number >= 0.0 && number.fract() == 0.0 && number <= f64::from(u32::MAX);
        is_whole.then_some(number as u32)
    }

    fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Number(number) => Some(*number != 0.0),
            Self::Text(text) => match text.trim() {
                "true" | "1" => Some(true),
                "false" | "0" | "" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Flag(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::List(_) => "array",
            Self::Other(_) => "object",
        }
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<LooseValue>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let number = raw.as_number();
    if number.is_none() {
        warn!(kind = raw.kind(), "Ignoring non-numeric value in room settings");
    }
    Ok(number)
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<LooseValue>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let count = raw.as_whole_number();
    if count.is_none() {
        warn!(kind = raw.kind(), "Ignoring invalid guest count in room settings");
    }
    Ok(count)
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<LooseValue>::deserialize(deserializer)? else {
        return Ok(false);
    };
    let flag = raw.as_flag();
    if flag.is_none() {
        warn!(
            kind = raw.kind(),
            "Ignoring invalid flag in room settings, treating it as false"
        );
    }
    Ok(flag.unwrap_or(false))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<LooseValue>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let text = raw.as_text();
    if text.is_none() {
        warn!(kind = raw.kind(), "Ignoring non-text value in room settings");
    }
    Ok(text)
}

/// The entries of a settings list; anything other than an array reads as empty.
fn loose_entries(raw: Option<LooseValue>, field: &'static str) -> Vec<LooseValue> {
    match raw {
        None => Vec::new(),
        Some(LooseValue::List(entries)) => entries,
        Some(other) => {
            warn!(
                field,
                kind = other.kind(),
                "Expected a list in room settings, treating it as empty"
            );
            Vec::new()
        }
    }
}

fn lenient_weekdays<'de, D>(deserializer: D) -> Result<Vec<WeekdayIndex>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(loose_entries(raw, "weekdays")
        .iter()
        .filter_map(|entry| {
            let weekday = entry
                .as_whole_number()
                .filter(|day| *day <= 6)
                .map(|day| day as WeekdayIndex);
            if weekday.is_none() {
                warn!(kind = entry.kind(), "Dropping invalid weekday from room settings");
            }
            weekday
        })
        .collect())
}

fn lenient_dates<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(loose_entries(raw, "disabledDates")
        .iter()
        .filter_map(|entry| {
            let parsed = match entry {
                LooseValue::Text(text) => parse_calendar_date(text),
                _ => None,
            };
            if parsed.is_none() {
                warn!(
                    kind = entry.kind(),
                    "Dropping unparseable disabled date from room settings"
                );
            }
            parsed
        })
        .collect())
}

#[derive(Deserialize)]
struct RawDiscountDate {
    #[serde(default)]
    date: Option<LooseValue>,
    #[serde(default)]
    discount: Option<LooseValue>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DiscountEntry {
    Entry(RawDiscountDate),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DiscountList {
    Entries(Vec<DiscountEntry>),
    Other(IgnoredAny),
}

fn lenient_discount_dates<'de, D>(deserializer: D) -> Result<Vec<DiscountDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Option::<DiscountList>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(DiscountList::Entries(entries)) => entries,
        Some(DiscountList::Other(_)) => {
            warn!("Expected a list of discount dates in room settings, treating it as empty");
            Vec::new()
        }
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| {
            let DiscountEntry::Entry(entry) = entry else {
                warn!("Dropping discount entry that is not an object");
                return None;
            };
            let date = match &entry.date {
                Some(LooseValue::Text(text)) => parse_calendar_date(text),
                _ => None,
            };
            let discount_percent = match &entry.discount {
                None => Some(0.0),
                Some(raw) => raw.as_number(),
            };
            match (date, discount_percent) {
                (Some(date), Some(discount_percent)) => Some(DiscountDate {
                    date,
                    discount_percent,
                }),
                _ => {
                    warn!("Dropping discount entry with unparseable date or discount");
                    None
                }
            }
        })
        .collect())
}

//=========================================================================================
// Date Range and Resolved Stay
//=========================================================================================

/// A check-in / check-out pair of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl DateRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Whole days between check-in and check-out.
    pub fn night_count(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Every night of the stay: check-in up to but excluding check-out.
    pub fn nights(&self) -> impl Iterator<Item = NaiveDate> {
        let check_in = self.check_in;
        (0..self.night_count().max(0) as u64).map(move |offset| add_days(check_in, offset))
    }

    /// `MM/DD/YYYY - MM/DD/YYYY`, as shown on the confirmation step.
    pub fn display(&self) -> String {
        format!(
            "{} - {}",
            self.check_in.format(PICKER_DATE_FORMAT),
            self.check_out.format(PICKER_DATE_FORMAT)
        )
    }
}

/// One night of a resolved stay with the discount that applies to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayClassification {
    pub date: NaiveDate,
    #[serde(rename = "discount")]
    pub discount_percent: f64,
}

/// A non-fatal policy signal raised while normalizing a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StayWarning {
    /// Full-weekend-only rooms cannot check out on a Saturday.
    CheckOutMovedToSunday { from: NaiveDate, to: NaiveDate },
}

/// The normalized stay with each night sorted into weekend and non-weekend nights.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStay {
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_nights: i64,
    /// Weekend nights divided by the number of configured weekend days.
    /// May be fractional when a stay covers part of a weekend block.
    pub weekend_count: f64,
    pub non_weekend_count: usize,
    pub weekend_dates: Vec<DayClassification>,
    pub non_weekend_dates: Vec<DayClassification>,
    pub warnings: Vec<StayWarning>,
}

impl ResolvedStay {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.check_in_date, self.check_out_date)
    }
}

//=========================================================================================
// Pricing
//=========================================================================================

/// Everything the price calculator needs besides the resolved stay.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    pub guest_count: u32,
    pub default_guest_count: u32,
    pub additional_guest_price: f64,
    pub full_weekend_only: bool,
    pub full_weekend_price: f64,
    pub full_weekend_discount: f64,
    pub weekend_date_price: f64,
    pub non_weekend_date_price: f64,
    pub vat_percent: f64,
}

impl PricingConfig {
    /// Builds the pricing input for a room and guest count.
    ///
    /// Absent prices become zero, and each one is reported with a warning since
    /// a silently free night is the expensive failure here.
    pub fn from_settings(settings: &RoomSettings, guest_count: u32) -> Self {
        for field in settings.missing_pricing_fields() {
            warn!(
                room = settings.room_name(),
                field, "Room settings are missing a pricing field, treating it as 0"
            );
        }

        Self {
            guest_count,
            default_guest_count: settings.default_guests(),
            additional_guest_price: settings.additional_guest_price.unwrap_or(0.0),
            full_weekend_only: settings.full_weekend_only,
            full_weekend_price: settings.full_weekend_price.unwrap_or(0.0),
            full_weekend_discount: settings.full_weekend_discount.unwrap_or(0.0),
            weekend_date_price: settings.weekend_date_price.unwrap_or(0.0),
            non_weekend_date_price: settings.non_weekend_date_price.unwrap_or(0.0),
            vat_percent: settings.vat_percent.unwrap_or(0.0),
        }
    }
}

/// The price of a stay, in the room's currency unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub weekend_sum: f64,
    pub non_weekend_sum: f64,
    pub additional_guest_sum: f64,
    pub night_sum: f64,
    pub total: f64,
    pub total_ex_vat: f64,
}

//=========================================================================================
// Booking Session Values
//=========================================================================================

/// Which guest-count controls are available at the current count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestControls {
    pub can_increase: bool,
    pub can_decrease: bool,
}

/// The data shown on the confirmation step of a booking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub room_name: String,
    pub guest_full_name: String,
    pub selected_dates: String,
    pub default_guest_count: u32,
    pub total_guests: u32,
    pub additional_guests: u32,
    pub total_nights: i64,
    pub prices: PriceBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_both_settings_date_formats() {
        assert_eq!(parse_calendar_date("2024-06-05"), Some(date(2024, 6, 5)));
        assert_eq!(parse_calendar_date("06/05/2024"), Some(date(2024, 6, 5)));
        assert_eq!(
            parse_calendar_date("2024-06-05T00:00:00.000Z"),
            Some(date(2024, 6, 5))
        );
        assert_eq!(parse_calendar_date("next tuesday"), None);
    }

    #[test]
    fn weekday_index_starts_on_sunday() {
        assert_eq!(weekday_index(date(2024, 6, 9)), 0);
        assert_eq!(weekday_index(date(2024, 6, 10)), 1);
        assert_eq!(weekday_index(date(2024, 6, 8)), 6);
    }

    #[test]
    fn deserializes_original_settings_shape() {
        let json = r#"{
            "roomName": "Lake House",
            "weekendDays": [5, 6],
            "disabledStartDays": [0],
            "disabledDates": ["06/12/2024", "not a date"],
            "fullWeekendOnly": false,
            "discountDates": [{"date": "2024-06-04", "discount": 15}, {"discount": 50}],
            "weekendDatePrice": 120,
            "nonWeekendDatePrice": 90.5,
            "additionalGuestPrice": 20,
            "defaultGuests": 2,
            "maxGuests": 6,
            "VATamount": 24
        }"#;
        let settings: RoomSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.room_name(), "Lake House");
        assert_eq!(settings.weekend_days, vec![5, 6]);
        assert_eq!(settings.disabled_dates, vec![date(2024, 6, 12)]);
        assert_eq!(settings.discount_dates.len(), 1);
        assert_eq!(settings.discount_for(date(2024, 6, 4)), 15.0);
        assert_eq!(settings.vat_percent, Some(24.0));
        assert_eq!(settings.max_guests(), Some(6));
    }

    #[test]
    fn absent_and_null_fields_fall_back_to_neutral_defaults() {
        let settings: RoomSettings =
            serde_json::from_str(r#"{"weekendDays": null, "fullWeekendOnly": null}"#).unwrap();

        assert!(settings.weekend_days.is_empty());
        assert!(!settings.full_weekend_only);
        assert_eq!(settings.weekend_day_cardinality(), 1);
        assert_eq!(settings.default_guests(), 0);
        assert_eq!(settings.max_guests(), None);
        assert_eq!(settings.room_name(), "");
    }

    #[test]
    fn numeric_strings_are_read_as_prices_and_counts() {
        let settings: RoomSettings = serde_json::from_str(
            r#"{"weekendDatePrice": "150", "VATamount": " 24 ", "defaultGuests": "2"}"#,
        )
        .unwrap();

        assert_eq!(settings.weekend_date_price, Some(150.0));
        assert_eq!(settings.vat_percent, Some(24.0));
        assert_eq!(settings.default_guests, Some(2));
    }

    #[test]
    fn unreadable_prices_and_counts_become_absent() {
        let settings: RoomSettings = serde_json::from_str(
            r#"{
                "nonWeekendDatePrice": "free",
                "additionalGuestPrice": [10],
                "fullWeekendPrice": {"amount": 300},
                "maxGuests": -1,
                "defaultGuests": 2.5,
                "roomName": 42
            }"#,
        )
        .unwrap();

        assert_eq!(settings.non_weekend_date_price, None);
        assert_eq!(settings.additional_guest_price, None);
        assert_eq!(settings.full_weekend_price, None);
        assert_eq!(settings.max_guests, None);
        assert_eq!(settings.default_guests, None);
        assert_eq!(settings.room_name(), "42");
    }

    #[test]
    fn weekday_lists_keep_only_readable_weekdays() {
        let settings: RoomSettings = serde_json::from_str(
            r#"{"weekendDays": [6, "0", 9, "x", null], "disabledStartDays": "0"}"#,
        )
        .unwrap();

        assert_eq!(settings.weekend_days, vec![6, 0]);
        assert!(settings.disabled_start_days.is_empty());
    }

    #[test]
    fn full_weekend_flag_accepts_numbers_and_strings() {
        let from_number: RoomSettings = serde_json::from_str(r#"{"fullWeekendOnly": 1}"#).unwrap();
        let from_text: RoomSettings =
            serde_json::from_str(r#"{"fullWeekendOnly": "true"}"#).unwrap();
        let unreadable: RoomSettings =
            serde_json::from_str(r#"{"fullWeekendOnly": "sometimes"}"#).unwrap();

        assert!(from_number.full_weekend_only);
        assert!(from_text.full_weekend_only);
        assert!(!unreadable.full_weekend_only);
    }

    #[test]
    fn unreadable_date_entries_are_dropped() {
        let settings: RoomSettings = serde_json::from_str(
            r#"{
                "disabledDates": ["06/12/2024", 20240613, null],
                "discountDates": [
                    {"date": "2024-06-04", "discount": "15"},
                    {"date": "2024-06-05", "discount": "lots"},
                    {"date": 20240606, "discount": 10},
                    "2024-06-07",
                    {"date": "2024-06-08"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(settings.disabled_dates, vec![date(2024, 6, 12)]);
        assert_eq!(
            settings.discount_dates,
            vec![
                DiscountDate {
                    date: date(2024, 6, 4),
                    discount_percent: 15.0,
                },
                DiscountDate {
                    date: date(2024, 6, 8),
                    discount_percent: 0.0,
                },
            ]
        );
    }

    #[test]
    fn non_list_date_fields_read_as_empty() {
        let settings: RoomSettings =
            serde_json::from_str(r#"{"disabledDates": "06/12/2024", "discountDates": {"a": 1}}"#)
                .unwrap();

        assert!(settings.disabled_dates.is_empty());
        assert!(settings.discount_dates.is_empty());
    }

    #[test]
    fn vat_percent_accepts_readable_alias() {
        let settings: RoomSettings = serde_json::from_str(r#"{"vatPercent": 10}"#).unwrap();
        assert_eq!(settings.vat_percent, Some(10.0));
    }

    #[test]
    fn reports_missing_pricing_fields_for_the_active_policy() {
        let nightly = RoomSettings {
            non_weekend_date_price: Some(100.0),
            vat_percent: Some(0.0),
            ..Default::default()
        };
        assert_eq!(
            nightly.missing_pricing_fields(),
            vec!["weekendDatePrice", "additionalGuestPrice"]
        );

        let full_weekend = RoomSettings {
            full_weekend_only: true,
            ..nightly
        };
        assert_eq!(
            full_weekend.missing_pricing_fields(),
            vec!["fullWeekendPrice", "additionalGuestPrice"]
        );
    }

    #[test]
    fn pricing_config_zeroes_absent_prices() {
        let settings = RoomSettings {
            weekend_date_price: Some(150.0),
            default_guests: Some(2),
            ..Default::default()
        };
        let config = PricingConfig::from_settings(&settings, 3);

        assert_eq!(config.guest_count, 3);
        assert_eq!(config.default_guest_count, 2);
        assert_eq!(config.weekend_date_price, 150.0);
        assert_eq!(config.non_weekend_date_price, 0.0);
        assert_eq!(config.vat_percent, 0.0);
    }

    #[test]
    fn date_range_iterates_nights() {
        let range = DateRange::new(date(2024, 6, 3), date(2024, 6, 5));

        assert_eq!(range.night_count(), 2);
        assert_eq!(
            range.nights().collect::<Vec<_>>(),
            vec![date(2024, 6, 3), date(2024, 6, 4)]
        );
        assert_eq!(range.display(), "06/03/2024 - 06/05/2024");
    }
}
