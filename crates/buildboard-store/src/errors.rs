//! Error handling for buildboard-store
//!
//! Maps rusqlite and I/O failures onto `BuildError`. Classification uses the
//! SQLite extended result code, never the error message text.

use buildboard_core::errors::BuildError;
use rusqlite::ErrorCode;

/// Result type alias using BuildError
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build a mapper from rusqlite::Error to a storage error for `op`
pub fn from_rusqlite(op: &'static str) -> impl Fn(rusqlite::Error) -> BuildError {
    move |err| BuildError::Storage {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Map an insert failure, turning a UNIQUE violation into `DuplicateCode`
///
/// `code` is the only UNIQUE column besides the autoincrement key, so any
/// unique violation on insert means the code is taken.
pub fn insert_error(code: &str, err: rusqlite::Error) -> BuildError {
    if is_unique_violation(&err) {
        BuildError::DuplicateCode {
            code: code.to_string(),
        }
    } else {
        from_rusqlite("insert")(err)
    }
}

/// True when the engine rejected a write because of a UNIQUE constraint
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        }
        _ => false,
    }
}

/// Create an IO error
pub fn io_error(op: &str, err: std::io::Error) -> BuildError {
    BuildError::Io {
        op: op.to_string(),
        message: err.to_string(),
    }
}
