use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use fliptable_engine::{MarketApiError, SettlementError};
use thiserror::Error;

use crate::data_objects::JsonResponse;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("Could not read request body: {0}")]
    InvalidRequestBody(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("The data was not found. {0}")]
    NoRecordFound(String),
    /// The wallet provider refused the transfer. The provider's response body is passed back to the caller as is.
    #[error("{body}")]
    SettlementRejected { status: u16, body: String },
    #[error("Settlement failed. {0}")]
    SettlementFailed(String),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::SettlementRejected { .. } => StatusCode::BAD_REQUEST,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SettlementFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::to_string(&JsonResponse::error(self)).unwrap_or_default())
    }
}

impl From<MarketApiError> for ServerError {
    fn from(e: MarketApiError) -> Self {
        Self::NoRecordFound(e.to_string())
    }
}

impl From<SettlementError> for ServerError {
    fn from(e: SettlementError) -> Self {
        match e {
            SettlementError::Rejected { status, body } => Self::SettlementRejected { status, body },
            SettlementError::Transport(_) | SettlementError::Configuration(_) => Self::SettlementFailed(e.to_string()),
        }
    }
}
