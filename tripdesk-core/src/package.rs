use serde::{Deserialize, Serialize};

/// A bookable offering with a destination and seat capacity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TravelPackage {
    pub package_id: u64,
    pub destination: String,
    pub price: f64,
    pub available_slots: u32,
}

impl TravelPackage {
    pub fn new(
        package_id: u64,
        destination: impl Into<String>,
        price: f64,
        available_slots: u32,
    ) -> Self {
        Self {
            package_id,
            destination: destination.into(),
            price,
            available_slots,
        }
    }

    /// Take `seats` off the available count, leaving the package untouched on failure
    pub fn book_seats(&mut self, seats: u32) -> Result<(), crate::CoreError> {
        let remaining = self.available_slots.checked_sub(seats).ok_or(
            crate::CoreError::InsufficientSeats {
                package_id: self.package_id,
                requested: seats,
                available: self.available_slots,
            },
        )?;
        self.available_slots = remaining;
        Ok(())
    }
}

/// Validated body of `POST /packages/update-seats`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatUpdate {
    pub package_id: u64,
    pub seats_booked: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    #[test]
    fn test_package_serializes_camel_case() {
        let package = TravelPackage::new(1, "Paris", 1500.0, 10);
        let value = serde_json::to_value(&package).unwrap();

        assert_eq!(value["packageId"], 1);
        assert_eq!(value["destination"], "Paris");
        assert_eq!(value["availableSlots"], 10);
    }

    #[test]
    fn test_book_seats() {
        let mut package = TravelPackage::new(1, "Paris", 1500.0, 10);

        package.book_seats(2).unwrap();
        assert_eq!(package.available_slots, 8);

        package.book_seats(8).unwrap();
        assert_eq!(package.available_slots, 0);
    }

    #[test]
    fn test_overbooking_keeps_seats() {
        let mut package = TravelPackage::new(3, "Tokyo", 2000.0, 5);

        let err = package.book_seats(6).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientSeats { package_id: 3, requested: 6, available: 5 }
        ));
        assert_eq!(package.available_slots, 5);
    }
}
