use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::templates::error_page;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A create/update/delete that was rolled back. The message is the one
    /// shown to the person who submitted the form.
    #[error("An error occurred. {} could not be {}.", mutation_target(.entity, .subject), .action)]
    Mutation {
        entity: &'static str,
        subject: String,
        action: &'static str,
        #[source]
        source: Box<AppError>,
    },

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn mutation_target(entity: &str, subject: &str) -> String {
    if subject.trim().is_empty() {
        entity.to_string()
    } else {
        format!("{} {}", entity, subject)
    }
}

impl AppError {
    pub fn not_found(entity: &str, id: i32) -> Self {
        Self::NotFound(format!("{} {} not found", entity, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Wrap a failed mutation with the entity and attempted action.
    /// `NotFound` passes through untouched so it keeps its own page.
    pub fn mutation(
        entity: &'static str,
        subject: impl Into<String>,
        action: &'static str,
        source: AppError,
    ) -> Self {
        match source {
            Self::NotFound(_) => source,
            source => Self::Mutation {
                entity,
                subject: subject.into(),
                action,
                source: Box::new(source),
            },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Mutation { source, .. } => source.status_code(),
            Self::Database(_)
            | Self::Serialization(_)
            | Self::Internal(_)
            | Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to a client. Store and serialization details
    /// stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) => "Database error occurred".to_string(),
            Self::Serialization(_) => "Data processing error".to_string(),
            Self::NotFound(msg) | Self::Validation(msg) => msg.clone(),
            Self::Mutation { .. } => self.to_string(),
            Self::Internal(msg) => msg.clone(),
            Self::Other(_) => "An unexpected error occurred".to_string(),
        }
    }

    /// The underlying reason for a wrapped mutation failure, when it is
    /// something the client can act on.
    pub fn public_details(&self) -> Option<String> {
        match self {
            Self::Mutation { source, .. } => match source.as_ref() {
                Self::Validation(msg) => Some(msg.clone()),
                other => Some(other.public_message()),
            },
            _ => None,
        }
    }

    fn log(&self) {
        match self {
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::Serialization(e) => tracing::error!("Serialization error: {}", e),
            Self::NotFound(msg) => tracing::debug!("Not found: {}", msg),
            Self::Validation(msg) => tracing::warn!("Validation failed: {}", msg),
            Self::Mutation {
                entity,
                subject,
                action,
                source,
            } => {
                if source.status_code().is_server_error() {
                    tracing::error!(entity, subject = %subject, action, error = %source, "Mutation failed");
                } else {
                    tracing::warn!(entity, subject = %subject, action, error = %source, "Mutation rejected");
                }
            }
            Self::Internal(msg) => tracing::error!("Internal error: {}", msg),
            Self::Other(e) => tracing::error!("Unexpected error: {:#}", e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let body = Json(json!({
            "error": self.public_message(),
            "details": self.public_details().unwrap_or_else(|| self.to_string()),
        }));

        (self.status_code(), body).into_response()
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::NotFound(format!("No record at this address: {}", rejection.body_text()))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Error for the HTML routes: same taxonomy, rendered as a page.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<sea_orm::DbErr> for PageError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self(AppError::from(err))
    }
}

impl From<PathRejection> for PageError {
    fn from(rejection: PathRejection) -> Self {
        Self(AppError::from(rejection))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let err = self.0;
        err.log();

        let status = err.status_code();
        let markup = error_page(status, &err.public_message(), err.public_details().as_deref());
        (status, Html(markup.into_string())).into_response()
    }
}

pub type PageResult<T> = std::result::Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_status_follows_source() {
        let rejected = AppError::mutation(
            "Venue",
            "The Musical Hop",
            "listed",
            AppError::validation("seeking_talent must be a boolean"),
        );
        assert_eq!(rejected.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            rejected.public_message(),
            "An error occurred. Venue The Musical Hop could not be listed."
        );
        assert_eq!(
            rejected.public_details().as_deref(),
            Some("seeking_talent must be a boolean")
        );

        let failed = AppError::mutation(
            "Show",
            "",
            "listed",
            AppError::Database(sea_orm::DbErr::Custom("connection reset".to_string())),
        );
        assert_eq!(failed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(failed.public_details().as_deref(), Some("Database error occurred"));
    }

    #[test]
    fn test_mutation_keeps_not_found() {
        let err = AppError::mutation(
            "Artist",
            "Guns N Petals",
            "updated",
            AppError::not_found("Artist", 4),
        );
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
