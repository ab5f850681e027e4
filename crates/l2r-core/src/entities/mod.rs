//! Domain entities - core business objects

mod donation;
mod feedback;
mod food_request;
mod quality_check;
mod stats;
mod user;

pub use donation::{Donation, NewDonation};
pub use feedback::{Feedback, FeedbackType, NewFeedback};
pub use food_request::{sort_by_urgency, FoodRequest, NewFoodRequest};
pub use quality_check::{NewQualityCheck, QualityCheck};
pub use stats::AdminStats;
pub use user::User;
