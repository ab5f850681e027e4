//! Wire model <-> domain mappers
//!
//! - `TryFrom<Model> for Entity`: decode responses, rejecting payloads that
//!   break domain invariants with `DomainError::Decode`
//! - `*Body::from_*`: borrow domain payloads as request bodies

mod donation;
mod feedback;
mod request;
mod stats;
mod user;

pub use donation::{donation_status_from_wire, location_from_wire};
pub use user::auth_response_from_wire;

use l2r_core::DomainError;

fn decode_error(what: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::Decode(format!("{what}: {err}"))
}
