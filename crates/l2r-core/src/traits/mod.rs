//! Ports - the interfaces the outer layers implement

mod device;
mod gateways;

pub use device::{DeniedLocation, FixedLocation, ImageSource, LocationProvider, NoImage};
pub use gateways::{
    AdminGateway, AuthGateway, AuthResponse, Credentials, DonationGateway, FeedbackGateway,
    GatewayResult, QualityCheckGateway, Registration, RequestGateway,
};
