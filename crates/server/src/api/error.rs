//! 请求边界上的错误类型。
//!
//! 校验类错误返回 400 并展示原因；存储错误只记录日志，对客户端返回通用提示。

use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sgpa_api_types::ErrorResponse;
use sgpa_core::domain::DomainError;
use thiserror::Error;
use tracing::error;

use super::view;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No subject data was received. Please enter at least one subject.")]
    NoSubjects,

    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("An unexpected error occurred. Please try again later.")]
    Store(#[source] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoSubjects | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NoSubjects => "NO_SUBJECTS",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Store(_) => "INTERNAL_ERROR",
        }
    }

    /// 记录存储错误的完整原因链。
    fn log(&self) {
        if let AppError::Store(source) = self {
            error!(error = %format!("{source:#}"), "store operation failed");
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        if err.is_no_subjects() {
            AppError::NoSubjects
        } else {
            AppError::Validation(err.to_string())
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Store(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let body = Html(view::error_page(&self.to_string()));
        (self.status(), body).into_response()
    }
}

/// JSON 接口使用的错误包装。
#[derive(Debug)]
pub struct JsonError(pub AppError);

impl From<AppError> for JsonError {
    fn from(err: AppError) -> Self {
        JsonError(err)
    }
}

impl From<anyhow::Error> for JsonError {
    fn from(err: anyhow::Error) -> Self {
        JsonError(AppError::Store(err))
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        let JsonError(err) = self;
        err.log();
        let body = Json(ErrorResponse {
            code: err.code().to_string(),
            message: err.to_string(),
        });
        (err.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use axum::http::StatusCode;
    use sgpa_core::domain::DomainError;

    #[test]
    fn no_subjects_maps_to_bad_request() {
        let err = AppError::from(DomainError::NoSubjects);

        assert!(matches!(err, AppError::NoSubjects));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_credit_keeps_its_message() {
        let err = AppError::from(DomainError::InvalidCredit {
            row: 1,
            value: "x".to_string(),
            max: 10,
        });

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("invalid credit 'x'"));
    }

    #[test]
    fn overlong_field_is_bad_request() {
        let err = AppError::from(DomainError::FieldTooLong {
            field: "name",
            max: 100,
        });

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn store_errors_hide_their_cause() {
        let err = AppError::from(anyhow::anyhow!("connection refused to 10.0.0.5:3306"));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_string().contains("10.0.0.5"));
    }
}
