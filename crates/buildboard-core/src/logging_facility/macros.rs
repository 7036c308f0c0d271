//! Canonical logging macros
//!
//! Every store operation and command handler brackets its work with these so
//! that `op`, `event` and `duration_ms` are always present under the same keys.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use buildboard_core::log_op_start;
/// log_op_start!("insert");
/// log_op_start!("insert", build_code = "AB12C");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use buildboard_core::log_op_end;
/// log_op_end!("query_by_name", duration_ms = 3);
/// log_op_end!("query_by_name", duration_ms = 3, row_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError`, including `&BuildError`.
/// Ownership and lookup failures are expected outcomes and log at `warn`;
/// storage and I/O failures log at `error`.
///
/// # Example
///
/// ```
/// # use buildboard_core::{log_op_error, BuildError};
/// let err = BuildError::NotFound { code: "AB12C".to_string() };
/// log_op_error!("delete_by_code", &err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::{ExError, ExErrorKind};
        let ex_err: ExError = $err.into();
        match ex_err.kind() {
            ExErrorKind::Persistence | ExErrorKind::Io | ExErrorKind::Internal => {
                tracing::error!(
                    component = module_path!(),
                    op = $op,
                    event = $crate::logging_facility::schema::EVENT_END_ERROR,
                    duration_ms = $duration,
                    err_kind = ?ex_err.kind(),
                    err_code = ex_err.code(),
                    err_message = ex_err.message(),
                    $($field)*
                );
            }
            _ => {
                tracing::warn!(
                    component = module_path!(),
                    op = $op,
                    event = $crate::logging_facility::schema::EVENT_END_ERROR,
                    duration_ms = $duration,
                    err_kind = ?ex_err.kind(),
                    err_code = ex_err.code(),
                    $($field)*
                );
            }
        }
    }};
}
