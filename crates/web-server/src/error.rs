use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DbError;
use profile_client::ProfileError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
    #[error("Profile API error: {0}")]
    Profile(#[from] ProfileError),
    #[error("A token is required. Please provide it in the Authorization header.")]
    MissingCredential,
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Caller mistakes keep their specific message; infrastructure failures are
/// logged in full here and leave with a redacted, generic message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(DbError::Validation(message)) => (StatusCode::BAD_REQUEST, message),
            AppError::Database(DbError::NotFound) => (
                StatusCode::NOT_FOUND,
                "The requested record was not found.".to_string(),
            ),
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::Profile(err @ ProfileError::MissingToken) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::Profile(err @ ProfileError::InvalidToken) => {
                (StatusCode::UNAUTHORIZED, err.to_string())
            }
            AppError::Profile(err @ ProfileError::Forbidden) => {
                (StatusCode::FORBIDDEN, err.to_string())
            }
            AppError::Profile(profile_err) => {
                tracing::error!(error = ?profile_err, "Profile API error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch user profile information".to_string(),
                )
            }
            AppError::MissingCredential => (
                StatusCode::UNAUTHORIZED,
                "A token is required. Please provide it in the Authorization header.".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn database_errors_map_onto_the_taxonomy() {
        assert_eq!(
            status_of(AppError::Database(DbError::Validation("bad".into()))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Database(DbError::NotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::Database(DbError::ConnectionConfig("x".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn profile_errors_map_onto_the_taxonomy() {
        assert_eq!(
            status_of(AppError::Profile(ProfileError::MissingToken)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Profile(ProfileError::InvalidToken)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::Profile(ProfileError::Forbidden)),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::Profile(ProfileError::Upstream {
                status: 502,
                message: "bad gateway".into()
            })),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status_of(AppError::MissingCredential), StatusCode::UNAUTHORIZED);
    }
}
