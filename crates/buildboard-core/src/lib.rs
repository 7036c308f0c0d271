//! buildboard core - domain model, error facility and input rules
//!
//! This crate provides the pieces shared by the store and the bot:
//! - `NewBuild` / `BuildRecord` / `BuildListing` models
//! - `BuildError` taxonomy with stable `ExErrorKind` codes
//! - Hero roster allow-list and build code normalization
//! - Structured logging facility (`init`, `log_op_*` macros, test capture)

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod validation;

// Re-export commonly used types
pub use errors::{BuildError, ExError, ExErrorKind, Result};
pub use model::{BuildListing, BuildRecord, NewBuild};
