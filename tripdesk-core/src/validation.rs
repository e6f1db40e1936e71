//! Field checks for the JSON bodies of the mutating endpoints.
//!
//! A field passes only when it is present, has the expected JSON type and is
//! not empty: numbers must be positive integers, strings must be non-empty.
//! Fields are checked in a fixed order and the first failure wins.

use serde_json::Value;
use tracing::debug;

use crate::{CoreError, CoreResult, NewBooking, SeatUpdate};

pub const PACKAGE_ID_MESSAGE: &str = "Package Id is required and should be a number.";
pub const CUSTOMER_NAME_MESSAGE: &str = "Customer name is required and should be a string.";
pub const BOOKING_DATE_MESSAGE: &str = "Booking date is required and should be a string.";
pub const SEATS_MESSAGE: &str = "Seats is required and should be a number.";
pub const SEATS_BOOKED_MESSAGE: &str = "Number of booked seats is required and should be a number.";

/// Check a `POST /bookings` body and extract its fields
pub fn validate_booking(body: &Value) -> CoreResult<NewBooking> {
    let package_id = positive_integer(body, "packageId", PACKAGE_ID_MESSAGE)?;
    let customer_name = non_empty_string(body, "customerName", CUSTOMER_NAME_MESSAGE)?;
    let booking_date = non_empty_string(body, "bookingDate", BOOKING_DATE_MESSAGE)?;
    let seats = seat_count(body, "seats", SEATS_MESSAGE)?;

    Ok(NewBooking {
        package_id,
        customer_name,
        booking_date,
        seats,
    })
}

/// Check a `POST /packages/update-seats` body and extract its fields
pub fn validate_seat_update(body: &Value) -> CoreResult<SeatUpdate> {
    let package_id = positive_integer(body, "packageId", PACKAGE_ID_MESSAGE)?;
    let seats_booked = seat_count(body, "seatsBooked", SEATS_BOOKED_MESSAGE)?;

    Ok(SeatUpdate {
        package_id,
        seats_booked,
    })
}

fn positive_integer(body: &Value, field: &str, message: &str) -> CoreResult<u64> {
    match body.get(field).and_then(whole_number) {
        Some(n) if n > 0 => Ok(n),
        _ => Err(rejected(field, message)),
    }
}

/// Integers, or floats with no fractional part such as `2.0`
fn whole_number(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
            .map(|f| f as u64)
    })
}

fn seat_count(body: &Value, field: &str, message: &str) -> CoreResult<u32> {
    let n = positive_integer(body, field, message)?;
    u32::try_from(n).map_err(|_| rejected(field, message))
}

fn non_empty_string(body: &Value, field: &str, message: &str) -> CoreResult<String> {
    match body.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(rejected(field, message)),
    }
}

fn rejected(field: &str, message: &str) -> CoreError {
    debug!(field, "validation rejected field");
    CoreError::Validation(message.to_string())
}
