//! buildboard store - SQLite persistence for build records
//!
//! Provides:
//! - Idempotent schema initialization from embedded SQL
//! - `SqliteRepo`: statement-level operations over a borrowed connection
//! - `BuildStore`: connection-per-operation handle used by the bot
//!
//! The store enforces code uniqueness and owner-scoped deletion only. Hero
//! allow-listing and code shape are the caller's precondition; see
//! `buildboard_core::validation`.

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;
pub mod store;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
pub use store::BuildStore;
