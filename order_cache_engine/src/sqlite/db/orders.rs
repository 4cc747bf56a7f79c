use log::{debug, trace};
use sqlx::SqliteConnection;

use crate::{
    db_types::{OrderId, StoredOrder},
    traits::StoreError,
};

/// Appends a serialized order to the `orders` table using the given connection. This is not atomic. You can embed
/// this call inside a transaction if you need to ensure atomicity, and pass `&mut *tx` as the connection argument.
///
/// No uniqueness check is made on `order_id`. Returns the row id of the new entry.
pub async fn insert_order(
    order_id: &OrderId,
    payload: &str,
    conn: &mut SqliteConnection,
) -> Result<i64, StoreError> {
    let id: i64 = sqlx::query_scalar("INSERT INTO orders (order_id, payload) VALUES ($1, $2) RETURNING id;")
        .bind(order_id)
        .bind(payload)
        .fetch_one(conn)
        .await?;
    trace!("🗃️ Order {order_id} stored as row {id}");
    Ok(id)
}

/// Fetches every row in the `orders` table, oldest first.
pub async fn fetch_all_orders(conn: &mut SqliteConnection) -> Result<Vec<StoredOrder>, StoreError> {
    let rows = sqlx::query_as::<_, StoredOrder>("SELECT order_id, payload FROM orders ORDER BY id ASC;")
        .fetch_all(conn)
        .await?;
    debug!("🗃️ Fetched {} stored order rows", rows.len());
    Ok(rows)
}

/// Counts the stored rows for `order_id`. Duplicates are expected, since the table is append-only.
pub async fn count_rows_for_order(order_id: &OrderId, conn: &mut SqliteConnection) -> Result<i64, StoreError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE order_id = $1;")
        .bind(order_id)
        .fetch_one(conn)
        .await?;
    Ok(count)
}
