use std::error::Error;

use album_store::RepositoryError;

// The not-found kind must stay distinguishable from the other failure paths,
// since callers match on it after a delete
#[test]
fn test_not_found_is_a_distinct_kind() {
    let err = RepositoryError::NotFound {
        id: 42,
        source: sqlx::Error::RowNotFound,
    };

    assert!(matches!(err, RepositoryError::NotFound { id: 42, .. }));
    assert!(err.to_string().contains("42"));
}

// Every error message names the operation that failed
#[test]
fn test_messages_name_the_failed_operation() {
    let cases = [
        (RepositoryError::Query(sqlx::Error::RowNotFound), "query"),
        (RepositoryError::RowDecode(sqlx::Error::RowNotFound), "decode"),
        (RepositoryError::Insert(sqlx::Error::RowNotFound), "insert"),
        (RepositoryError::Update(sqlx::Error::RowNotFound), "update"),
        (RepositoryError::Delete(sqlx::Error::RowNotFound), "delete"),
    ];

    for (err, operation) in cases {
        assert!(
            err.to_string().contains(operation),
            "message {:?} should mention {:?}",
            err.to_string(),
            operation
        );
    }
}

// The driver error is preserved as the source for callers that need it
#[test]
fn test_source_error_is_preserved() {
    let err = RepositoryError::NotFound {
        id: 7,
        source: sqlx::Error::RowNotFound,
    };

    let source = err.source().expect("not-found error should carry a source");
    assert!(matches!(
        source.downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::RowNotFound)
    ));
}
