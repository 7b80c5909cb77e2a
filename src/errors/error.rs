use crate::errors::{repository::RepositoryError, service::ServiceError};
use serde::Serialize;

/// Outward shape of a failed operation. `status` is a stable discriminator so
/// a client can tell "resubmit with fresh data" (version_conflict) from "fix
/// the request" (bad_request) from "nothing to act on" (not_found) without
/// parsing the message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        let status = match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => "not_found",
                RepositoryError::AlreadyExists(_) => "already_exists",
                RepositoryError::Conflict(_) => "conflict",
                RepositoryError::InsufficientStock { .. } => "insufficient_stock",
                RepositoryError::VersionConflict { .. } => "version_conflict",
                RepositoryError::Custom(_) => "internal",
            },
            ServiceError::Validation(_) => "bad_request",
            ServiceError::Internal(_) | ServiceError::Custom(_) => "internal",
        };

        Self {
            status: status.to_string(),
            message: err.to_string(),
        }
    }
}
