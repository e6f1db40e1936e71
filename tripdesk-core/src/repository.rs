use async_trait::async_trait;

use crate::{Booking, CoreResult, NewBooking, SeatUpdate, TravelPackage};

/// Data access for packages and bookings
#[async_trait]
pub trait TravelRepository: Send + Sync {
    /// All packages in insertion order
    async fn get_all_travel_packages(&self) -> CoreResult<Vec<TravelPackage>>;

    /// Case-sensitive exact match on destination
    async fn get_package_by_destination(
        &self,
        destination: &str,
    ) -> CoreResult<Option<TravelPackage>>;

    /// Store a booking under a freshly assigned id
    async fn add_booking(&self, booking: NewBooking) -> CoreResult<Booking>;

    /// Decrement the available seats of a package
    async fn update_package(&self, update: SeatUpdate) -> CoreResult<TravelPackage>;

    /// All bookings for a package in creation order
    async fn get_all_bookings_by_package_id(&self, package_id: u64) -> CoreResult<Vec<Booking>>;
}
