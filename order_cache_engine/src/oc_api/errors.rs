use thiserror::Error;

use crate::db_types::OrderId;

/// The only errors that leave the cache and reach a requester.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid order id. {0}")]
    InvalidIdentifier(String),
    #[error("Order {0} was not found")]
    NotFound(OrderId),
}
