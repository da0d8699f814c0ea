use axum::{
    Json,
    response::{IntoResponse, Response},
};
use blogcore::error::{
    TransitionError,
    ValueError,
};
use blogctrl::error::{
    CtrlError,
    PlatformError,
};
use http::status::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize)]
pub enum AppError {
    #[error("400 Bad Request")]
    BadRequest,
    #[error("403 Forbidden")]
    Forbidden,
    #[error("404 Not Found")]
    NotFound,
    #[error("409 Conflict")]
    Conflict,

    #[error("500 Internal Server Error")]
    InternalServerError,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict => StatusCode::CONFLICT,
            AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StatusCode> for AppError {
    // Only convert into status known to AppError
    fn from(value: StatusCode) -> Self {
        match value {
            StatusCode::BAD_REQUEST => AppError::BadRequest,
            StatusCode::FORBIDDEN => AppError::Forbidden,
            StatusCode::NOT_FOUND => AppError::NotFound,
            StatusCode::CONFLICT => AppError::Conflict,
            _ => AppError::InternalServerError,
        }
    }
}

impl From<PlatformError> for AppError {
    fn from(e: PlatformError) -> Self {
        match e {
            PlatformError::CtrlError(CtrlError::NotFound(..)) => AppError::NotFound,
            PlatformError::CtrlError(CtrlError::Invalid(..)) => AppError::BadRequest,
            PlatformError::CtrlError(CtrlError::Conflict(_)) => AppError::Conflict,
            PlatformError::TransitionError(TransitionError::UnknownTransition(_)) =>
                AppError::BadRequest,
            PlatformError::TransitionError(TransitionError::TransitionNotAllowed { .. }) =>
                AppError::Forbidden,
            PlatformError::ValueError(ValueError::Unsupported(_)) => AppError::BadRequest,
            e => {
                log::error!("{e}");
                AppError::InternalServerError
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody { detail: self.to_string() };
        (self.status_code(), Json(body)).into_response()
    }
}
