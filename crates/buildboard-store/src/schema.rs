//! Embedded schema
//!
//! The `builds` table is created on first run and never altered afterwards.
//! Applying the schema is idempotent, so it runs on every start.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

/// Schema SQL, embedded at compile time
pub const BUILDS_SCHEMA: &str = include_str!("../schema/001_builds.sql");

/// Ensure the builds table and its index exist
pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch(BUILDS_SCHEMA)
        .map_err(from_rusqlite("initialize"))
}
