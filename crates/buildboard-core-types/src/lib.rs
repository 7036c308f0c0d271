//! Core types shared across buildboard crates
//!
//! This crate provides foundational types used by the error, logging and
//! bot layers:
//!
//! - **Correlation types**: RequestId, RequestContext for per-interaction tracing
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction of the bot token
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{RequestContext, RequestId};
pub use sensitive::Sensitive;
