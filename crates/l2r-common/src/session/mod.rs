//! Session state
//!
//! The current bearer token and user live in a [`SessionHandle`] that is
//! injected explicitly into the HTTP client and the services. A
//! [`SessionStore`] persists it between launches.

mod handle;
mod store;

pub use handle::{AuthToken, SessionContext, SessionHandle};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
