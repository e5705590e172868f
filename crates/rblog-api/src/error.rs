//! # ApiError
//!
//! Bridges `rblog_core::AppError` into HTTP responses. NotFound and hidden
//! posts share the same 404 page; an unauthorized hit on a gated route
//! bounces to the login form instead of erroring.

use actix_web::http::header::LOCATION;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use rblog_core::error::AppError;
use rblog_ui::ErrorTemplate;
use thiserror::Error;

#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] pub AppError);

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError(AppError::Internal(err.to_string()))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            AppError::NotFound(_, _) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::SEE_OTHER,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Unauthorized(_) = self.0 {
            return HttpResponse::SeeOther()
                .insert_header((LOCATION, "/auth/login/"))
                .finish();
        }

        let status = self.status_code();
        // Internal details stay in the log, not on the page
        let message = match &self.0 {
            AppError::Internal(details) => {
                log::error!("internal error: {details}");
                "Something went wrong on our side.".to_string()
            }
            other => other.to_string(),
        };

        let html = ErrorTemplate {
            status: status.as_u16(),
            message: &message,
            title: "Error",
            current_user: None,
        }
        .render()
        .unwrap_or_else(|_| message.clone());

        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(html)
    }
}

/// Shorthand for "this id doesn't resolve to anything you may see".
pub fn not_found(kind: &str, id: impl ToString) -> ApiError {
    ApiError(AppError::NotFound(kind.to_string(), id.to_string()))
}
