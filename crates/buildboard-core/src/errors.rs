use thiserror::Error;

/// Result type alias using BuildError
pub type Result<T> = std::result::Result<T, BuildError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code. Handlers branch on the kind, never
/// on the text of a message, so wording changes in the storage engine cannot
/// change which reply a user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Caller-side shape or allow-list failure, raised before the store is touched
    InvalidInput,
    /// The build code is already registered
    DuplicateCode,
    /// No build with the given code exists
    NotFound,
    /// The build exists but belongs to someone else
    NotOwner,

    // Integration/IO
    Io,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::DuplicateCode => "ERR_DUPLICATE_CODE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::NotOwner => "ERR_NOT_OWNER",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Flattened view of a `BuildError` used by the logging macros: a kind, the
/// operation it happened in, the build code involved and a message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    build_code: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            build_code: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add build code context
    pub fn with_build_code(mut self, code: impl Into<String>) -> Self {
        self.build_code = Some(code.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn build_code(&self) -> Option<&str> {
        self.build_code.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(code) = &self.build_code {
            write!(f, " (build_code: {})", code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for build registry operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Input rejected by the command layer before reaching the store
    #[error("Invalid input: {reason}")]
    Validation { reason: String },

    /// Another build already uses this code
    #[error("Build code already registered: {code}")]
    DuplicateCode { code: String },

    /// No build uses this code
    #[error("Build code not found: {code}")]
    NotFound { code: String },

    /// Requester is not the owner of the build
    #[error("Build {code} is owned by another user")]
    NotOwner { code: String },

    /// Any failure reported by the storage engine
    #[error("Storage error in {op}: {message}")]
    Storage { op: String, message: String },

    /// Filesystem failure while preparing the database location
    #[error("I/O error in {op}: {message}")]
    Io { op: String, message: String },
}

impl BuildError {
    /// Classify this error into its stable kind
    pub fn kind(&self) -> ExErrorKind {
        match self {
            BuildError::Validation { .. } => ExErrorKind::InvalidInput,
            BuildError::DuplicateCode { .. } => ExErrorKind::DuplicateCode,
            BuildError::NotFound { .. } => ExErrorKind::NotFound,
            BuildError::NotOwner { .. } => ExErrorKind::NotOwner,
            BuildError::Storage { .. } => ExErrorKind::Persistence,
            BuildError::Io { .. } => ExErrorKind::Io,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl From<BuildError> for ExError {
    fn from(err: BuildError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            BuildError::Validation { .. } => ExError::new(kind).with_message(message),
            BuildError::DuplicateCode { code }
            | BuildError::NotFound { code }
            | BuildError::NotOwner { code } => ExError::new(kind)
                .with_build_code(code)
                .with_message(message),
            BuildError::Storage { op, .. } | BuildError::Io { op, .. } => {
                ExError::new(kind).with_op(op).with_message(message)
            }
        }
    }
}

impl From<&BuildError> for ExError {
    fn from(err: &BuildError) -> Self {
        err.clone().into()
    }
}
