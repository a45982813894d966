//! HTTP service implementation.
//!
//! ## Structure
//!
//! - [`handler`] - the single endpoint (`random_numbers`).

pub mod handler;
