//! services/quote/src/quote.rs
//!
//! Runs one booking computation end to end: load the room, resolve the dates,
//! price the stay and assemble the confirmation summary.

use crate::error::QuoteError;
use booking_core::domain::parse_calendar_date;
use booking_core::{BookingSession, BookingSummary, ResolvedStay, RoomSettingsSource};
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

const DEFAULT_GUEST_NAME: &str = "Guest";

/// A parsed `quote` command line.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "quote", version)]
#[command(about = "Quotes a stay in one room from its settings file", long_about = None)]
pub struct QuoteRequest {
    /// Room id; its settings are read from `<SETTINGS_DIR>/<room_id>.json`
    pub room_id: String,

    /// Check-in date, `YYYY-MM-DD` or `MM/DD/YYYY`
    #[arg(value_parser = parse_date_arg)]
    pub check_in: NaiveDate,

    /// Check-out date, `YYYY-MM-DD` or `MM/DD/YYYY`
    #[arg(value_parser = parse_date_arg)]
    pub check_out: NaiveDate,

    /// Guest count; falls back to the room's included guest count
    pub guests: Option<u32>,

    /// Guest name as "First Last"
    #[arg(short = 'n', long = "name")]
    pub guest_name: Option<String>,
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(raw).ok_or_else(|| format!("'{}' is not a calendar date", raw))
}

/// The result of one quote, printed as JSON by the binary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    pub room_id: String,
    pub today: NaiveDate,
    pub stay: ResolvedStay,
    pub summary: BookingSummary,
}

/// Loads the requested room through `source` and quotes the stay.
pub async fn run_quote(
    source: &dyn RoomSettingsSource,
    request: &QuoteRequest,
    today: NaiveDate,
) -> Result<QuoteReport, QuoteError> {
    let settings = source.load_room_settings(&request.room_id).await?;
    info!(room_id = %request.room_id, "Room settings loaded");

    let mut session = BookingSession::new(settings);
    if let Some(guests) = request.guests {
        session.set_guest_count(guests)?;
    }

    let full_name = request.guest_name.as_deref().unwrap_or(DEFAULT_GUEST_NAME);
    let (first_name, last_name) = full_name.trim().split_once(' ').unwrap_or((full_name, ""));
    session.set_first_name(first_name);
    session.set_last_name(last_name);

    let stay = session
        .select_dates(request.check_in, request.check_out, today)
        .clone();
    for warning in &stay.warnings {
        warn!(?warning, "Selected dates were adjusted");
    }

    let summary = session.quote()?;
    info!(
        room_id = %request.room_id,
        nights = summary.total_nights,
        total = summary.prices.total,
        "Quote ready"
    );

    Ok(QuoteReport {
        room_id: request.room_id.clone(),
        today,
        stay,
        summary,
    })
}
