pub mod package;
pub mod booking;
pub mod validation;
pub mod repository;

pub use package::{TravelPackage, SeatUpdate};
pub use booking::{Booking, NewBooking};
pub use repository::TravelRepository;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),
    #[error("Travel package not found: {0}")]
    PackageNotFound(u64),
    #[error("Insufficient seats on package {package_id}: requested {requested}, available {available}")]
    InsufficientSeats {
        package_id: u64,
        requested: u32,
        available: u32,
    },
    #[error("Seed data error: {0}")]
    Seed(String),
    #[error("Internal service error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
