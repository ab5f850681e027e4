//! Device traits - location and image acquisition
//!
//! Both sit behind OS permission prompts. Implementations return
//! `DomainError::PermissionDenied` when the user refuses; callers decide
//! whether the feature is optional.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::value_objects::{DeviceCapability, ImageData, Location};

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Current position, resolving permission prompts first
    async fn current_location(&self) -> Result<Location, DomainError>;
}

#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Let the user pick or take a photo; `Ok(None)` when they cancel
    async fn pick_image(&self) -> Result<Option<ImageData>, DomainError>;
}

/// Location provider for a fixed position (headless clients, tests)
#[derive(Debug, Clone)]
pub struct FixedLocation(pub Location);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_location(&self) -> Result<Location, DomainError> {
        Ok(self.0.clone())
    }
}

/// Location provider whose permission is always refused
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

#[async_trait]
impl LocationProvider for DeniedLocation {
    async fn current_location(&self) -> Result<Location, DomainError> {
        Err(DomainError::PermissionDenied(DeviceCapability::Location))
    }
}

/// Image source that never yields an image
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImage;

#[async_trait]
impl ImageSource for NoImage {
    async fn pick_image(&self) -> Result<Option<ImageData>, DomainError> {
        Ok(None)
    }
}
