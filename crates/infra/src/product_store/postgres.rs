//! Postgres-backed product store.

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use catalogd_core::ProductId;
use catalogd_products::{NewProduct, Product, ProductPatch};

use super::r#trait::{ProductStore, StoreError};

/// Product store backed by a single PostgreSQL table.
///
/// Pooling, planning and transaction semantics belong to sqlx/Postgres; this
/// type only maps rows and classifies errors. "Not found" on targeted
/// mutations comes from typed signals (`RETURNING` + `fetch_optional`,
/// `rows_affected`), never from inspecting engine error codes.
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a small pool to `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Create the products table when it does not exist yet.
    ///
    /// `BIGSERIAL` assigns fresh positive ids and never reuses a value after
    /// deletion.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id          BIGSERIAL PRIMARY KEY,
                title       TEXT NOT NULL,
                description TEXT NOT NULL,
                price       DOUBLE PRECISION NOT NULL,
                featured    BOOLEAN NOT NULL DEFAULT FALSE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Remove every product row. Used by the seed binary; the sequence keeps
    /// advancing, so cleared ids are not reused.
    pub async fn clear(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM products").execute(&self.pool).await?;
        Ok(())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::RowNotFound,
            other => StoreError::Backend(other.to_string()),
        }
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, StoreError> {
    Ok(Product {
        id: ProductId::new(row.try_get("id")?),
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        featured: row.try_get("featured")?,
    })
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, price, featured
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(product_from_row).collect()
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, price, featured
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(product_from_row).transpose()
    }

    async fn insert(&self, record: NewProduct) -> Result<Product, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO products (title, description, price, featured)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, price, featured
            "#,
        )
        .bind(&record.title)
        .bind(&record.description)
        .bind(record.price)
        .bind(record.featured)
        .fetch_one(&self.pool)
        .await?;

        product_from_row(&row)
    }

    async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, StoreError> {
        // Single parameterized statement; absent patch fields fall back to
        // the stored value via COALESCE.
        let row = sqlx::query(
            r#"
            UPDATE products
            SET title       = COALESCE($2, title),
                description = COALESCE($3, description),
                price       = COALESCE($4, price),
                featured    = COALESCE($5, featured)
            WHERE id = $1
            RETURNING id, title, description, price, featured
            "#,
        )
        .bind(id.as_i64())
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.price)
        .bind(patch.featured)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::RowNotFound)?;

        product_from_row(&row)
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::RowNotFound);
        }
        Ok(())
    }
}
