use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use tripdesk_core::{Booking, CoreError, CoreResult, TravelPackage};

use crate::app_config::CatalogConfig;

/// Initial contents of the store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    pub packages: Vec<TravelPackage>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl SeedData {
    /// Built-in demo catalog
    pub fn demo() -> Self {
        let packages = vec![
            TravelPackage::new(1, "Paris", 1500.0, 10),
            TravelPackage::new(2, "Rome", 1200.0, 15),
            TravelPackage::new(3, "Tokyo", 2000.0, 5),
            TravelPackage::new(4, "New York", 1700.0, 8),
            TravelPackage::new(5, "Dubai", 1100.0, 10),
            TravelPackage::new(6, "Sydney", 2500.0, 12),
            TravelPackage::new(7, "Cape Town", 1800.0, 8),
            TravelPackage::new(8, "Bangkok", 1300.0, 15),
            TravelPackage::new(9, "Barcelona", 1400.0, 10),
            TravelPackage::new(10, "Amsterdam", 1250.0, 12),
        ];

        let bookings = vec![Booking {
            booking_id: 1,
            package_id: 1,
            customer_name: "Anjali Seth".to_string(),
            booking_date: "2024-12-01".to_string(),
            seats: 2,
        }];

        Self { packages, bookings }
    }

    /// Read a JSON seed file of the form `{ "packages": [...], "bookings": [...] }`
    pub async fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CoreError::Seed(format!("cannot read {}: {}", path.display(), e)))?;

        serde_json::from_str(&raw)
            .map_err(|e| CoreError::Seed(format!("invalid seed file {}: {}", path.display(), e)))
    }

    /// Pick the seed source named by the catalog settings
    pub async fn load(catalog: &CatalogConfig) -> CoreResult<Self> {
        match (&catalog.seed_file, catalog.seed_demo) {
            (Some(path), _) => {
                info!("Loading catalog seed from {}", path);
                Self::from_path(path).await
            }
            (None, true) => Ok(Self::demo()),
            (None, false) => Ok(Self::default()),
        }
    }
}
