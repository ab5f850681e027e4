//! # l2r-common
//!
//! Shared utilities including configuration, error handling, the session
//! handle and its stores, and telemetry.

pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{ApiConfig, AppSettings, ClientConfig, ConfigError, Environment, SessionConfig};
pub use error::{AppError, AppResult};
pub use session::{
    AuthToken, FileSessionStore, MemorySessionStore, SessionContext, SessionHandle, SessionStore,
};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
