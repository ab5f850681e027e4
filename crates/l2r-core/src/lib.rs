//! # l2r-core
//!
//! Domain layer containing entities, value objects, the donation lifecycle rules,
//! and the gateway/device traits the outer layers implement.
//! This crate has zero dependencies on infrastructure (HTTP, storage, devices).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    sort_by_urgency, AdminStats, Donation, Feedback, FeedbackType, FoodRequest, NewDonation,
    NewFeedback, NewFoodRequest, NewQualityCheck, QualityCheck, User,
};
pub use error::{DomainError, ErrorKind};
pub use traits::{
    AdminGateway, AuthGateway, AuthResponse, Credentials, DeniedLocation, DonationGateway,
    FeedbackGateway, FixedLocation, GatewayResult, ImageSource, LocationProvider, NoImage,
    QualityCheckGateway, Registration, RequestGateway,
};
pub use value_objects::{
    parse_timestamp, Capabilities, Coordinates, DeviceCapability, DonationId, DonationStatus,
    ExpiryStatus, FeedbackId, ImageData, Location, OverallQuality, PackagingStatus, Quantity,
    Rating, RequestId, RequestStatus, SmellStatus, Urgency, UserId, UserType,
};
