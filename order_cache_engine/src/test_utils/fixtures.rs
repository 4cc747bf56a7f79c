//! Canned order documents. This file has no crate imports so that integration tests can include it directly.

pub const SAMPLE_ORDER_UID: &str = "b563feb7b2b84b6test";

/// A complete, valid order document with two line items.
pub fn sample_order_json(order_uid: &str) -> String {
    sample_order_with_customer(order_uid, "test")
}

/// Same as [`sample_order_json`], but lets tests tell two versions of the same order apart by `customer_id`.
pub fn sample_order_with_customer(order_uid: &str, customer_id: &str) -> String {
    format!(
        r#"{{
  "order_uid": "{order_uid}",
  "track_number": "WBILMTESTTRACK",
  "entry": "WBIL",
  "delivery": {{
    "name": "Test Testov",
    "phone": "+9720000000",
    "zip": "2639809",
    "city": "Kiryat Mozkin",
    "address": "Ploshad Mira 15",
    "region": "Kraiot",
    "email": "test@gmail.com"
  }},
  "payment": {{
    "transaction": "{order_uid}",
    "request_id": "",
    "currency": "USD",
    "provider": "wbpay",
    "amount": 1817,
    "payment_dt": 1637907727,
    "bank": "alpha",
    "delivery_cost": 1500,
    "goods_total": 317,
    "custom_fee": 0
  }},
  "items": [
    {{
      "chrt_id": 9934930,
      "track_number": "WBILMTESTTRACK",
      "price": 453,
      "rid": "ab4219087a764ae0btest",
      "name": "Mascaras",
      "sale": 30,
      "size": "0",
      "total_price": 317,
      "nm_id": 2389212,
      "brand": "Vivienne Sabo",
      "status": 202
    }},
    {{
      "chrt_id": 9934931,
      "track_number": "WBILMTESTTRACK",
      "price": 120,
      "rid": "ab4219087a764ae0btest2",
      "name": "Lip balm",
      "sale": 0,
      "size": "0",
      "total_price": 120,
      "nm_id": 2389213,
      "brand": "Vivienne Sabo",
      "status": 202
    }}
  ],
  "locale": "en",
  "internal_signature": "",
  "customer_id": "{customer_id}",
  "delivery_service": "meest",
  "shardkey": "9",
  "sm_id": 99,
  "date_created": "2021-11-26T06:22:19Z",
  "oof_shard": "1"
}}"#
    )
}
