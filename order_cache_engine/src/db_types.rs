use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Type;
use thiserror::Error;

//--------------------------------------        OrderId        ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl FromStr for OrderId {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An order id must contain at least one non-whitespace character.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

//--------------------------------------     DeliveryInfo      ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryInfo {
    pub name: String,
    pub phone: String,
    pub zip: String,
    pub city: String,
    pub address: String,
    pub region: String,
    pub email: String,
}

//--------------------------------------      PaymentInfo      ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentInfo {
    pub transaction: String,
    pub request_id: String,
    pub currency: String,
    pub provider: String,
    pub amount: i64,
    /// Unix epoch (seconds) of the payment
    pub payment_dt: i64,
    pub bank: String,
    pub delivery_cost: i64,
    pub goods_total: i64,
    pub custom_fee: i64,
}

//--------------------------------------         Item          ---------------------------------------------------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub chrt_id: i64,
    pub track_number: String,
    pub price: i64,
    pub rid: String,
    pub name: String,
    pub sale: i64,
    pub size: String,
    pub total_price: i64,
    pub nm_id: i64,
    pub brand: String,
    pub status: i64,
}

//--------------------------------------         Order         ---------------------------------------------------------
/// The canonical order record.
///
/// Orders are never patched. A newer version of an order replaces the old one wholesale, keyed by `order_uid`.
/// `items` keeps the order in which the line items were received.
///
/// Fields missing from a document take their zero value (`date_created` falls back to the Unix epoch). Only
/// `order_uid` is mandatory, and that is enforced by [`Order::from_payload`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub order_uid: OrderId,
    pub track_number: String,
    pub entry: String,
    pub delivery: DeliveryInfo,
    pub payment: PaymentInfo,
    pub items: Vec<Item>,
    pub locale: String,
    pub internal_signature: String,
    pub customer_id: String,
    pub delivery_service: String,
    pub shardkey: String,
    pub sm_id: i64,
    pub date_created: DateTime<Utc>,
    pub oof_shard: String,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Payload is not valid UTF-8. {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("Payload is not a valid order document. {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Order document has an empty order_uid")]
    MissingOrderId,
}

#[derive(Debug, Error)]
#[error("Could not serialize order {order_id}. {source}")]
pub struct EncodeError {
    pub order_id: OrderId,
    #[source]
    pub source: serde_json::Error,
}

impl Order {
    pub fn order_id(&self) -> &OrderId {
        &self.order_uid
    }

    /// Decodes an order from its canonical JSON encoding. This is used for both inbound messages and persisted rows.
    pub fn from_payload(payload: &[u8]) -> Result<Self, DecodeError> {
        let text = std::str::from_utf8(payload)?;
        let order = serde_json::from_str::<Order>(text)?;
        if order.order_uid.is_blank() {
            return Err(DecodeError::MissingOrderId);
        }
        Ok(order)
    }

    /// Produces the canonical JSON encoding of this order.
    pub fn to_payload(&self) -> Result<String, EncodeError> {
        serde_json::to_string(self).map_err(|source| EncodeError { order_id: self.order_uid.clone(), source })
    }
}

//--------------------------------------      StoredOrder      ---------------------------------------------------------
/// A single row from the durable store. Rows are append-only, so the same `order_id` can appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StoredOrder {
    pub order_id: OrderId,
    pub payload: String,
}

impl StoredOrder {
    pub fn new<S: Into<String>>(order_id: OrderId, payload: S) -> Self {
        Self { order_id, payload: payload.into() }
    }
}
