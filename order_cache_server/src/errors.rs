use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use order_cache_engine::{stream::PublishError, traits::StoreError, QueryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("The durable store is unavailable. {0}")]
    StoreError(#[from] StoreError),
    #[error("Could not read request body: {0}")]
    InvalidRequestBody(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
    #[error("Invalid request. {0}")]
    InvalidIdentifier(String),
    #[error("The data was not found. {0}")]
    NoRecordFound(String),
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),
    #[error("Orders are not being accepted right now. {0}")]
    IngestionUnavailable(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::UnknownChannel(_) => StatusCode::NOT_FOUND,
            Self::IngestionUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

impl From<QueryError> for ServerError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::InvalidIdentifier(msg) => Self::InvalidIdentifier(msg),
            QueryError::NotFound(order_id) => Self::NoRecordFound(format!("Order {order_id} is not cached")),
        }
    }
}

impl From<PublishError> for ServerError {
    fn from(e: PublishError) -> Self {
        Self::IngestionUnavailable(e.to_string())
    }
}
