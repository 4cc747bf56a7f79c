use std::{fmt::Display, str::FromStr, sync::Arc};

use log::*;

use crate::{
    cache::OrderCache,
    db_types::{Order, OrderId},
    oc_api::errors::QueryError,
};

/// Longest identifier accepted from a requester.
pub const MAX_ORDER_ID_LENGTH: usize = 256;

/// Which identifiers requesters may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdFormat {
    /// Decimal integers only. `"007"` and `"7"` refer to the same order.
    #[default]
    Numeric,
    /// Any token of printable, non-whitespace characters.
    Any,
}

impl FromStr for IdFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numeric" => Ok(Self::Numeric),
            "any" => Ok(Self::Any),
            _ => Err(format!("'{s}' is not an id format. Use 'numeric' or 'any'.")),
        }
    }
}

impl Display for IdFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Any => write!(f, "any"),
        }
    }
}

impl IdFormat {
    /// Validates a raw identifier from a request and converts it to the key used in the cache.
    pub fn parse(&self, raw: Option<&str>) -> Result<OrderId, QueryError> {
        let raw = raw.ok_or_else(|| QueryError::InvalidIdentifier("No order id was supplied".into()))?;
        if raw.trim().is_empty() {
            return Err(QueryError::InvalidIdentifier("The order id is empty".into()));
        }
        if raw.len() > MAX_ORDER_ID_LENGTH {
            return Err(QueryError::InvalidIdentifier(format!(
                "The order id is longer than {MAX_ORDER_ID_LENGTH} bytes"
            )));
        }
        match self {
            Self::Numeric => raw
                .parse::<i64>()
                .map(|n| OrderId(n.to_string()))
                .map_err(|e| QueryError::InvalidIdentifier(format!("'{raw}' is not a numeric order id. {e}"))),
            Self::Any => {
                if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
                    Err(QueryError::InvalidIdentifier(format!("'{}' contains illegal characters", raw.escape_debug())))
                } else {
                    Ok(OrderId(raw.to_string()))
                }
            },
        }
    }
}

/// `QueryApi` is the read side of the cache: a synchronous lookup that only ever touches memory.
#[derive(Debug, Clone)]
pub struct QueryApi {
    cache: OrderCache,
    id_format: IdFormat,
}

impl QueryApi {
    pub fn new(cache: OrderCache) -> Self {
        Self { cache, id_format: IdFormat::default() }
    }

    pub fn with_id_format(mut self, id_format: IdFormat) -> Self {
        self.id_format = id_format;
        self
    }

    pub fn id_format(&self) -> IdFormat {
        self.id_format
    }

    /// Looks up an order from a raw request parameter.
    ///
    /// Returns [`QueryError::InvalidIdentifier`] if the parameter is missing or does not match the configured
    /// [`IdFormat`], and [`QueryError::NotFound`] if the order is not cached.
    pub fn lookup(&self, raw: Option<&str>) -> Result<Arc<Order>, QueryError> {
        let order_id = self.id_format.parse(raw).map_err(|e| {
            debug!("🔎️ Rejected lookup. {e}");
            e
        })?;
        self.lookup_id(&order_id)
    }

    /// Looks up an order by an already validated id.
    pub fn lookup_id(&self, order_id: &OrderId) -> Result<Arc<Order>, QueryError> {
        trace!("🔎️ Looking up order {order_id}");
        self.cache.get(order_id).ok_or_else(|| QueryError::NotFound(order_id.clone()))
    }
}
