//! Wire models - serde structs mirroring the REST API's camelCase JSON

mod auth;
mod datetime;
mod donation;
mod feedback;
mod request;
mod stats;

pub use auth::{AuthResponseModel, LoginBody, RegisterBody, UserModel};
pub use donation::{DonationCreateBody, DonationModel, LocationModel, QualityCheckBody};
pub use feedback::{FeedbackCreateBody, FeedbackModel};
pub use request::{FoodRequestCreateBody, FoodRequestModel};
pub use stats::AdminStatsModel;
