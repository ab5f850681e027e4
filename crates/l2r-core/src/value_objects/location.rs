//! Geographic location

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A validated latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting out-of-range or non-finite values
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if valid {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            })
        }
    }
}

/// A position with an optional human-readable address
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub coordinates: Coordinates,
    pub address: Option<String>,
}

impl Location {
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            address: None,
        }
    }

    /// Attach a reverse-geocoded address; blank addresses are dropped
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        let address = address.into();
        self.address = (!address.trim().is_empty()).then_some(address);
        self
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.coordinates.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.coordinates.longitude
    }
}
