use axum::http::StatusCode;
use thiserror::Error;

/// Failures talking to the sheet endpoint.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint returned {0}")]
    Status(StatusCode),

    #[error("endpoint rejected update: {0}")]
    Rejected(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("no registry entry for zone '{0}'")]
    UnregisteredZone(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown zone '{0}'")]
    ZoneNotFound(String),

    #[error("zone '{0}' already exists")]
    DuplicateZone(String),

    #[error("zone '{0}' has no registry entry and no cells were supplied")]
    UnregisteredZone(String),

    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Sync(#[from] SyncError),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        let status = match &err {
            SessionError::ZoneNotFound(_) => StatusCode::NOT_FOUND,
            SessionError::DuplicateZone(_) => StatusCode::CONFLICT,
            SessionError::UnregisteredZone(_) | SessionError::Invalid(_) => {
                StatusCode::BAD_REQUEST
            }
            SessionError::Sync(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_errors_map_to_statuses() {
        let cases = [
            (SessionError::ZoneNotFound("X".into()), StatusCode::NOT_FOUND),
            (SessionError::DuplicateZone("Red".into()), StatusCode::CONFLICT),
            (SessionError::UnregisteredZone("X".into()), StatusCode::BAD_REQUEST),
            (SessionError::Invalid("bad".into()), StatusCode::BAD_REQUEST),
            (
                SessionError::Sync(SyncError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status, status);
        }
    }
}
