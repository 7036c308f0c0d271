//! Connection-per-operation store handle
//!
//! `BuildStore` only remembers where the database lives. Each call opens a
//! fresh connection, runs one `SqliteRepo` operation and drops it, so
//! concurrent interactions contend only inside SQLite's own locking.
//!
//! All methods block; async callers should run them on a blocking pool.

use crate::errors::Result;
use crate::repo::SqliteRepo;
use crate::{db, schema};
use buildboard_core::model::{BuildListing, BuildRecord, NewBuild};
use buildboard_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Handle to the on-disk build table
#[derive(Debug, Clone)]
pub struct BuildStore {
    db_path: PathBuf,
}

impl BuildStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection> {
        db::open(&self.db_path)
    }

    /// Create the database file and table if absent
    ///
    /// Safe to call on every start.
    pub fn initialize(&self) -> Result<()> {
        let started = Instant::now();
        log_op_start!("initialize", db_path = %self.db_path.display());

        let result = self.connect().and_then(|conn| schema::initialize(&conn));
        match &result {
            Ok(()) => {
                log_op_end!("initialize", duration_ms = elapsed_ms(started));
            }
            Err(err) => {
                log_op_error!("initialize", err, duration_ms = elapsed_ms(started));
            }
        }
        result
    }

    /// Persist a new build
    ///
    /// # Errors
    /// `DuplicateCode` if the code is taken, `Storage` for anything else.
    pub fn insert(&self, build: &NewBuild) -> Result<()> {
        let started = Instant::now();
        log_op_start!(
            "insert",
            hero_name = %build.name,
            build_code = %build.code,
            owner_id = %build.owner_id
        );

        let result = self
            .connect()
            .and_then(|conn| SqliteRepo::insert(&conn, build));
        match &result {
            Ok(()) => {
                log_op_end!(
                    "insert",
                    duration_ms = elapsed_ms(started),
                    build_code = %build.code
                );
            }
            Err(err) => {
                log_op_error!(
                    "insert",
                    err,
                    duration_ms = elapsed_ms(started),
                    build_code = %build.code
                );
            }
        }
        result
    }

    /// All builds registered for `name`, newest first
    ///
    /// An unknown name yields an empty list, not an error.
    pub fn query_by_name(&self, name: &str) -> Result<Vec<BuildListing>> {
        let started = Instant::now();
        log_op_start!("query_by_name", hero_name = %name);

        let result = self
            .connect()
            .and_then(|conn| SqliteRepo::query_by_name(&conn, name));
        match &result {
            Ok(rows) => {
                log_op_end!(
                    "query_by_name",
                    duration_ms = elapsed_ms(started),
                    row_count = rows.len()
                );
            }
            Err(err) => {
                log_op_error!("query_by_name", err, duration_ms = elapsed_ms(started));
            }
        }
        result
    }

    /// Delete the build with `code` if `requester_id` owns it
    ///
    /// # Errors
    /// `NotFound` if no such code, `NotOwner` if someone else registered it.
    pub fn delete_by_code(&self, code: &str, requester_id: &str) -> Result<()> {
        let started = Instant::now();
        log_op_start!(
            "delete_by_code",
            build_code = %code,
            owner_id = %requester_id
        );

        let result = self
            .connect()
            .and_then(|mut conn| SqliteRepo::delete_by_code(&mut conn, code, requester_id));
        match &result {
            Ok(()) => {
                log_op_end!(
                    "delete_by_code",
                    duration_ms = elapsed_ms(started),
                    build_code = %code
                );
            }
            Err(err) => {
                log_op_error!(
                    "delete_by_code",
                    err,
                    duration_ms = elapsed_ms(started),
                    build_code = %code
                );
            }
        }
        result
    }

    /// Look up a single record by code
    pub fn get_by_code(&self, code: &str) -> Result<Option<BuildRecord>> {
        let conn = self.connect()?;
        SqliteRepo::get_by_code(&conn, code)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
