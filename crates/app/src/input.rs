//! Parsing of raw user input into domain values.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use hotelres_core::{DomainError, DomainResult, RoomNumber};
use hotelres_rooms::RoomType;

static ROOM_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}$").expect("room number pattern is a valid regex"));

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| DomainError::invalid_argument(format!("date {raw:?} is not YYYY-MM-DD: {e}")))
}

/// Parse a check-in/check-out pair, rejecting a check-in after the check-out.
pub fn parse_stay(check_in: &str, check_out: &str) -> DomainResult<(NaiveDate, NaiveDate)> {
    let check_in = parse_date(check_in)?;
    let check_out = parse_date(check_out)?;
    if check_in > check_out {
        return Err(DomainError::invalid_argument("check-in date must be same or before check-out date"));
    }
    Ok((check_in, check_out))
}

/// Room numbers entered by staff are exactly three digits.
pub fn validate_room_number(raw: &str) -> DomainResult<RoomNumber> {
    if !ROOM_NUMBER_PATTERN.is_match(raw) {
        return Err(DomainError::invalid_argument(format!(
            "room number must consist of exactly 3 digits, got {raw:?}"
        )));
    }
    Ok(RoomNumber::new(raw))
}

pub fn parse_price(raw: &str) -> DomainResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| DomainError::invalid_argument(format!("price {raw:?} is not a decimal number")))
}

pub fn parse_room_type(raw: &str) -> DomainResult<RoomType> {
    raw.trim().parse()
}
