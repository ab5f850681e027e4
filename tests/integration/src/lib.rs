//! Integration test utilities for left2right
//!
//! Runs the client stack end to end against an in-process mock of the
//! REST backend.


pub use fixtures::*;
pub use helpers::*;
