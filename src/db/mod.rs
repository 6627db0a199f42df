use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::*;

// ── Categories ────────────────────────────────────────────────────────────────

pub async fn fetch_all_categories(pool: &PgPool) -> AppResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, created_at FROM categories ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}

/// Inserts a category with the trimmed name after a case-insensitive
/// duplicate check. The unique index on LOWER(name) backstops the check
/// against concurrent creates.
pub async fn insert_category(pool: &PgPool, name: &str) -> AppResult<Category> {
    let existing: Option<Category> = sqlx::query_as(
        "SELECT id, name, created_at FROM categories WHERE LOWER(name) = LOWER($1)",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    if let Some(category) = existing {
        return Err(AppError::Conflict(format!(
            "category '{}' already exists",
            category.name
        )));
    }

    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name) VALUES ($1) RETURNING id, name, created_at",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(category)
}

// ── Inventory ─────────────────────────────────────────────────────────────────

pub async fn fetch_all_inventory(pool: &PgPool) -> AppResult<Vec<InventoryItemWithNames>> {
    let items = sqlx::query_as::<_, InventoryItemWithNames>(
        r#"
        SELECT i.id, i.name, i.quantity, i.price_cents, i.category_id,
               i.threshold_quantity, i.unit_of_measurement, i.supplier_id,
               c.name AS category_name, s.name AS supplier_name
        FROM inventory i
        INNER JOIN categories c ON c.id = i.category_id
        LEFT JOIN suppliers s ON s.id = i.supplier_id
        ORDER BY i.name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(items)
}

#[derive(sqlx::FromRow)]
struct UpsertedRow {
    #[sqlx(flatten)]
    item: InventoryItem,
    inserted: bool,
}

/// Single-statement insert-or-increment keyed on (LOWER(name), category_id).
/// A fresh key inserts the row as supplied; an existing key adds the incoming
/// quantity to the stored one and leaves every other field untouched. The
/// conflict target must match the `inventory_name_category_ci` index.
pub async fn upsert_inventory_item(
    pool: &PgPool,
    payload: &UpsertInventoryItem,
) -> AppResult<(InventoryItem, UpsertOutcome)> {
    let row = sqlx::query_as::<_, UpsertedRow>(
        r#"
        INSERT INTO inventory
            (name, quantity, price_cents, category_id,
             threshold_quantity, unit_of_measurement, supplier_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT ((LOWER(name)), category_id) DO UPDATE
            SET quantity   = inventory.quantity + EXCLUDED.quantity,
                updated_at = NOW()
        RETURNING id, name, quantity, price_cents, category_id,
                  threshold_quantity, unit_of_measurement, supplier_id,
                  created_at, updated_at,
                  (xmax = 0) AS inserted
        "#,
    )
    .bind(payload.storage_name())
    .bind(payload.quantity)
    .bind(payload.price_cents)
    .bind(payload.category_id)
    .bind(payload.threshold_quantity)
    .bind(&payload.unit_of_measurement)
    .bind(payload.supplier_id)
    .fetch_one(pool)
    .await?;

    let outcome = if row.inserted {
        UpsertOutcome::Created
    } else {
        UpsertOutcome::Updated
    };

    Ok((row.item, outcome))
}

// ── Orders ────────────────────────────────────────────────────────────────────

/// Creates the order header and all line items inside one transaction.
/// Any failure returns before `commit`, and the dropped `Transaction` rolls
/// back and releases its connection, so partial orders are never visible.
pub async fn create_order(pool: &PgPool, payload: &CreateOrder) -> AppResult<Order> {
    let mut tx = pool.begin().await?;

    let order = sqlx::query_as::<_, Order>(
        "INSERT INTO orders (supplier_id) VALUES ($1) RETURNING id, supplier_id, created_at",
    )
    .bind(payload.supplier_id)
    .fetch_one(&mut *tx)
    .await?;

    // Lines go in request order; the first failure aborts the whole order.
    for line in &payload.items {
        sqlx::query(
            "INSERT INTO order_items (order_id, inventory_id, quantity) VALUES ($1, $2, $3)",
        )
        .bind(order.id)
        .bind(line.inventory_id)
        .bind(line.quantity)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(order)
}

// ── Suppliers ─────────────────────────────────────────────────────────────────

pub async fn fetch_all_suppliers(pool: &PgPool) -> AppResult<Vec<Supplier>> {
    let suppliers = sqlx::query_as::<_, Supplier>(
        "SELECT id, name, contact_email, created_at FROM suppliers ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(suppliers)
}
