//! Value objects - immutable types that represent domain concepts

mod capabilities;
mod device;
mod donation_status;
mod ids;
mod image;
mod location;
mod quality;
mod quantity;
mod rating;
mod request_status;
mod timestamp;
mod urgency;
mod user_type;

pub use capabilities::Capabilities;
pub use device::DeviceCapability;
pub use donation_status::DonationStatus;
pub use ids::{DonationId, FeedbackId, RequestId, UserId};
pub use image::ImageData;
pub use location::{Coordinates, Location};
pub use quality::{ExpiryStatus, OverallQuality, PackagingStatus, SmellStatus};
pub use quantity::Quantity;
pub use rating::Rating;
pub use request_status::RequestStatus;
pub use timestamp::parse_timestamp;
pub use urgency::Urgency;
pub use user_type::UserType;
