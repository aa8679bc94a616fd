use thiserror::Error;

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Failures surfaced by the album repository, one kind per operation path.
///
/// `NotFound` covers both "no row matched the id" and "a row matched but
/// could not be decoded"; the sqlx source is kept for callers that need to
/// tell them apart.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to query albums")]
    Query(#[source] sqlx::Error),

    #[error("failed to decode album row")]
    RowDecode(#[source] sqlx::Error),

    #[error("no album with id {id}, or its row could not be decoded")]
    NotFound {
        id: i64,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to insert album")]
    Insert(#[source] sqlx::Error),

    #[error("failed to update album")]
    Update(#[source] sqlx::Error),

    #[error("failed to delete album")]
    Delete(#[source] sqlx::Error),
}
