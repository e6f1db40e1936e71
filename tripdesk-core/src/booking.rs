use serde::{Deserialize, Serialize};

/// A reservation of seats against a package.
/// `package_id` is not checked against the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: u64,
    pub package_id: u64,
    pub customer_name: String,
    pub booking_date: String,
    pub seats: u32,
}

/// Validated body of `POST /bookings`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub package_id: u64,
    pub customer_name: String,
    pub booking_date: String,
    pub seats: u32,
}

impl NewBooking {
    pub fn into_booking(self, booking_id: u64) -> Booking {
        Booking {
            booking_id,
            package_id: self.package_id,
            customer_name: self.customer_name,
            booking_date: self.booking_date,
            seats: self.seats,
        }
    }
}
