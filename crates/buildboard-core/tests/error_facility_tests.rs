use buildboard_core::errors::{BuildError, ExError, ExErrorKind};

#[test]
fn test_duplicate_code_verifiable_by_kind() {
    let err = BuildError::DuplicateCode {
        code: "AB12C".to_string(),
    };

    assert_eq!(err.kind(), ExErrorKind::DuplicateCode);
    assert_eq!(err.code(), "ERR_DUPLICATE_CODE");

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.build_code(), Some("AB12C"));
}

#[test]
fn test_not_owner_distinct_from_not_found() {
    let not_owner = BuildError::NotOwner {
        code: "AB12C".to_string(),
    };
    let not_found = BuildError::NotFound {
        code: "AB12C".to_string(),
    };

    assert_eq!(not_owner.kind(), ExErrorKind::NotOwner);
    assert_eq!(not_found.kind(), ExErrorKind::NotFound);
    assert_ne!(not_owner.kind(), not_found.kind());
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::DuplicateCode, "ERR_DUPLICATE_CODE"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::NotOwner, "ERR_NOT_OWNER"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_storage_message_does_not_affect_kind() {
    // Message text mentioning a unique constraint must not turn a generic
    // storage failure into a duplicate.
    let err = BuildError::Storage {
        op: "insert".to_string(),
        message: "UNIQUE constraint failed: builds.code".to_string(),
    };
    assert_eq!(err.kind(), ExErrorKind::Persistence);
}

#[test]
fn test_validation_maps_to_invalid_input() {
    let err = BuildError::Validation {
        reason: "unknown hero 'Hero1'".to_string(),
    };
    let ex_err: ExError = (&err).into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert!(ex_err.message().contains("Hero1"));
}
