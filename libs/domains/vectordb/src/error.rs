use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub const DATABASE_ALREADY_EXISTS: &str = "database already exists";
pub const DATABASE_NOT_FOUND: &str = "database not found";
pub const COLLECTION_ALREADY_EXISTS: &str = "collection already exists";
pub const COLLECTION_NOT_FOUND: &str = "collection not found";
pub const POINT_NOT_FOUND: &str = "point not found";

/// Coarse classification used by callers that only need to branch on the
/// failure class, not the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Internal,
}

#[derive(Debug, Error)]
pub enum VectorDbError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

pub type VectorDbResult<T> = Result<T, VectorDbError>;

impl VectorDbError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>, source: Option<BoxError>) -> Self {
        Self::Internal {
            message: message.into(),
            source,
        }
    }

    pub fn database_not_found() -> Self {
        Self::not_found(DATABASE_NOT_FOUND)
    }

    pub fn collection_not_found() -> Self {
        Self::not_found(COLLECTION_NOT_FOUND)
    }

    pub fn point_not_found() -> Self {
        Self::not_found(POINT_NOT_FOUND)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// The bare message, without the kind prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) | Self::NotFound(message) => message,
            Self::Internal { message, .. } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl From<VectorDbError> for tonic::Status {
    fn from(err: VectorDbError) -> Self {
        match err.kind() {
            ErrorKind::Validation => tonic::Status::invalid_argument(err.message()),
            ErrorKind::NotFound => tonic::Status::not_found(err.message()),
            ErrorKind::Internal => {
                tracing::error!(error = ?err, "internal vector database error");
                tonic::Status::internal(err.message())
            }
        }
    }
}

/// Convert VectorDbError to AppError for standardized error responses
impl From<VectorDbError> for AppError {
    fn from(err: VectorDbError) -> Self {
        match err {
            VectorDbError::Validation(message) => AppError::BadRequest(message),
            VectorDbError::NotFound(message) => AppError::NotFound(message),
            VectorDbError::Internal { message, source } => {
                if let Some(source) = source {
                    tracing::error!(error = %source, "{}", message);
                }
                AppError::InternalServerError(message)
            }
        }
    }
}

impl IntoResponse for VectorDbError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
