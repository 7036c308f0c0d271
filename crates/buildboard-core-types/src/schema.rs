//! Canonical schema constants for structured logging
//!
//! These constants keep field names consistent between the store, the
//! command handlers and the log assertions in tests.

// Canonical field keys emitted by the log_op_* macros
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Build record identifiers
pub const FIELD_BUILD_CODE: &str = "build_code";

// Collection sizes
pub const FIELD_ROW_COUNT: &str = "row_count";

// Error fields
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
