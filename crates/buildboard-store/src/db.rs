//! Database connection management
//!
//! Every store operation opens its own connection through `open` and drops
//! it when done; nothing here is shared between operations.

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// How long a connection waits on another writer's lock before failing
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open and configure a SQLite database at the given path
///
/// Creates missing parent directories so a fresh `--db-path` works on the
/// first run.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
    }

    let conn = Connection::open(path).map_err(from_rusqlite("open"))?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite("open"))?;
    configure(&conn)?;
    Ok(conn)
}

/// Apply per-connection settings
pub fn configure(conn: &Connection) -> Result<()> {
    conn.busy_timeout(BUSY_TIMEOUT)
        .map_err(from_rusqlite("configure"))?;

    // WAL lets readers proceed while a write is in flight; in-memory
    // databases report "memory" instead
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))
        .map_err(from_rusqlite("configure"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connections_wait_on_locks() {
        let conn = open_in_memory().unwrap();

        let timeout_ms: i64 = conn
            .pragma_query_value(None, "busy_timeout", |row| row.get(0))
            .unwrap();

        assert_eq!(timeout_ms, 5000);
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("builds.db");

        open(&path).unwrap();

        assert!(path.exists());
    }
}
