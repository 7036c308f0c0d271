//! SQLite repository implementation
//!
//! Statement-level operations on a borrowed connection. `BuildStore` owns
//! connection lifetimes; these functions never open or cache one.

use crate::errors::{from_rusqlite, insert_error, Result};
use buildboard_core::errors::BuildError;
use buildboard_core::model::{BuildListing, BuildRecord, NewBuild};
use rusqlite::{Connection, OptionalExtension, TransactionBehavior};

/// SQLite repository for build records
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a new build
    ///
    /// Uniqueness of `code` is left entirely to the UNIQUE constraint so
    /// that two concurrent inserts of the same code cannot both succeed.
    /// `id` and `created_at` are assigned by the engine.
    pub fn insert(conn: &Connection, build: &NewBuild) -> Result<()> {
        conn.execute(
            "INSERT INTO builds (name, code, description, owner_id, owner_display_name)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                build.name,
                build.code,
                build.description,
                build.owner_id,
                build.owner_display_name,
            ],
        )
        .map_err(|e| insert_error(&build.code, e))?;

        Ok(())
    }

    /// List builds for a hero, newest first
    ///
    /// `name` is compared with exact, case-sensitive equality. Rows sharing
    /// a `created_at` second are ordered by `id` descending, i.e. the later
    /// insert comes first.
    pub fn query_by_name(conn: &Connection, name: &str) -> Result<Vec<BuildListing>> {
        let mut stmt = conn
            .prepare(
                "SELECT code, COALESCE(description, ''), owner_display_name, created_at
                 FROM builds
                 WHERE name = ?1
                 ORDER BY created_at DESC, id DESC",
            )
            .map_err(from_rusqlite("query_by_name"))?;

        let rows = stmt
            .query_map([name], |row| {
                Ok(BuildListing {
                    code: row.get(0)?,
                    description: row.get(1)?,
                    owner_display_name: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })
            .map_err(from_rusqlite("query_by_name"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite("query_by_name"))?;

        Ok(rows)
    }

    /// Fetch the full record for a code, if any
    pub fn get_by_code(conn: &Connection, code: &str) -> Result<Option<BuildRecord>> {
        conn.query_row(
            "SELECT id, name, code, COALESCE(description, ''), owner_id, owner_display_name, created_at
             FROM builds
             WHERE code = ?1",
            [code],
            |row| {
                Ok(BuildRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    code: row.get(2)?,
                    description: row.get(3)?,
                    owner_id: row.get(4)?,
                    owner_display_name: row.get(5)?,
                    created_at: row.get(6)?,
                })
            },
        )
        .optional()
        .map_err(from_rusqlite("get_by_code"))
    }

    /// Delete a build if `requester_id` owns it
    ///
    /// The ownership check and the delete are one conditional statement, so
    /// no other writer can slip in between them. Only when nothing was
    /// deleted does a follow-up read, inside the same immediate transaction,
    /// decide between `NotFound` and `NotOwner`.
    pub fn delete_by_code(conn: &mut Connection, code: &str, requester_id: &str) -> Result<()> {
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(from_rusqlite("delete_by_code"))?;

        let deleted = tx
            .execute(
                "DELETE FROM builds WHERE code = ?1 AND owner_id = ?2",
                [code, requester_id],
            )
            .map_err(from_rusqlite("delete_by_code"))?;

        if deleted == 0 {
            let exists = tx
                .query_row("SELECT 1 FROM builds WHERE code = ?1", [code], |_| Ok(()))
                .optional()
                .map_err(from_rusqlite("delete_by_code"))?
                .is_some();

            return Err(if exists {
                BuildError::NotOwner {
                    code: code.to_string(),
                }
            } else {
                BuildError::NotFound {
                    code: code.to_string(),
                }
            });
        }

        tx.commit().map_err(from_rusqlite("delete_by_code"))?;
        Ok(())
    }
}
