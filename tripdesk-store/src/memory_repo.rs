use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::info;
use tripdesk_core::repository::TravelRepository;
use tripdesk_core::{Booking, CoreError, CoreResult, NewBooking, SeatUpdate, TravelPackage};

use crate::seed::SeedData;

struct Collections {
    packages: Vec<TravelPackage>,
    bookings: Vec<Booking>,
    /// `None` once the id space is used up
    next_booking_id: Option<u64>,
}

/// Process-lifetime store for packages and bookings.
/// Every operation holds the lock for its whole read or mutation.
pub struct InMemoryTravelRepository {
    inner: RwLock<Collections>,
}

impl InMemoryTravelRepository {
    pub fn new() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }

    pub fn with_data(packages: Vec<TravelPackage>, bookings: Vec<Booking>) -> Self {
        let next_booking_id = bookings
            .iter()
            .map(|b| b.booking_id)
            .max()
            .unwrap_or(0)
            .checked_add(1);
        Self {
            inner: RwLock::new(Collections {
                packages,
                bookings,
                next_booking_id,
            }),
        }
    }

    pub fn from_seed(seed: SeedData) -> Self {
        info!(
            packages = seed.packages.len(),
            bookings = seed.bookings.len(),
            "Seeding in-memory store"
        );
        Self::with_data(seed.packages, seed.bookings)
    }
}

impl Default for InMemoryTravelRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TravelRepository for InMemoryTravelRepository {
    async fn get_all_travel_packages(&self) -> CoreResult<Vec<TravelPackage>> {
        Ok(self.inner.read().packages.clone())
    }

    async fn get_package_by_destination(
        &self,
        destination: &str,
    ) -> CoreResult<Option<TravelPackage>> {
        let inner = self.inner.read();
        Ok(inner
            .packages
            .iter()
            .find(|p| p.destination == destination)
            .cloned())
    }

    async fn add_booking(&self, booking: NewBooking) -> CoreResult<Booking> {
        let mut inner = self.inner.write();

        let booking_id = inner
            .next_booking_id
            .ok_or_else(|| CoreError::Internal("booking id space exhausted".to_string()))?;
        inner.next_booking_id = booking_id.checked_add(1);

        let booking = booking.into_booking(booking_id);
        inner.bookings.push(booking.clone());

        info!(
            booking_id,
            package_id = booking.package_id,
            seats = booking.seats,
            "Booking created"
        );
        Ok(booking)
    }

    async fn update_package(&self, update: SeatUpdate) -> CoreResult<TravelPackage> {
        let mut inner = self.inner.write();

        let package = inner
            .packages
            .iter_mut()
            .find(|p| p.package_id == update.package_id)
            .ok_or(CoreError::PackageNotFound(update.package_id))?;

        package.book_seats(update.seats_booked)?;

        info!(
            package_id = package.package_id,
            seats_booked = update.seats_booked,
            available_slots = package.available_slots,
            "Package seats updated"
        );
        Ok(package.clone())
    }

    async fn get_all_bookings_by_package_id(&self, package_id: u64) -> CoreResult<Vec<Booking>> {
        let inner = self.inner.read();
        Ok(inner
            .bookings
            .iter()
            .filter(|b| b.package_id == package_id)
            .cloned()
            .collect())
    }
}
