//! # Product Repository
//!
//! Database operations for catalog products.
//!
//! ## Listing Filters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 How Product Filtering Works                         │
//! │                                                                     │
//! │  GET /api/products/?category=domestic-hardwoods&wood_type=hardwood  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ProductFilter { category: Some("domestic-hardwoods"),              │
//! │                  wood_type: Some("hardwood") }                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SELECT ... FROM products p JOIN categories c ...                   │
//! │  WHERE c.slug = ?1 AND p.wood_type = ?2                             │
//! │                                                                     │
//! │  Unknown slug or wood type simply matches zero rows: the filter     │
//! │  values are bound verbatim, so a bad value yields [] rather than    │
//! │  an error.                                                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every read joins `categories` to carry the derived `category_name`.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use lumberyard_core::{NewProduct, Product};

/// Joined SELECT used by every product read.
const PRODUCT_SELECT: &str = r#"
SELECT
    p.id,
    p.name,
    p.slug,
    p.category_id,
    c.name AS category_name,
    p.wood_type,
    p.description,
    p.price_cents,
    p.unit,
    p.stock,
    p.image,
    p.is_featured,
    p.created_at,
    p.updated_at
FROM products p
INNER JOIN categories c ON c.id = p.category_id
"#;

/// Optional equality predicates for product listings.
///
/// Both filters compose with logical AND. Values are matched verbatim;
/// an unknown category slug or wood type yields an empty result, not an
/// error.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Category slug to match.
    pub category: Option<String>,
    /// Wood type (`hardwood` / `softwood` / `exotic`) to match.
    pub wood_type: Option<String>,
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// // List with filters
/// let filter = ProductFilter { category: Some("softwoods".into()), ..Default::default() };
/// let results = repo.list(&filter).await?;
///
/// // Get by ID
/// let product = repo.get_by_id("uuid-here").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists products, narrowed by the optional filters.
    pub async fn list(&self, filter: &ProductFilter) -> DbResult<Vec<Product>> {
        debug!(
            category = filter.category.as_deref(),
            wood_type = filter.wood_type.as_deref(),
            "Listing products"
        );

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(PRODUCT_SELECT);

        let mut has_where = false;
        if let Some(slug) = &filter.category {
            qb.push(" WHERE c.slug = ").push_bind(slug);
            has_where = true;
        }
        if let Some(wood_type) = &filter.wood_type {
            qb.push(if has_where { " AND " } else { " WHERE " });
            qb.push("p.wood_type = ").push_bind(wood_type);
        }
        qb.push(" ORDER BY p.rowid");

        let products = qb
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listing returned products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let query = format!("{PRODUCT_SELECT} WHERE p.id = ?1");

        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Gets a product by its slug.
    pub async fn get_by_slug(&self, slug: &str) -> DbResult<Option<Product>> {
        let query = format!("{PRODUCT_SELECT} WHERE p.slug = ?1");

        let product = sqlx::query_as::<_, Product>(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Inserts a new product and returns the stored row (with the joined
    /// category name).
    ///
    /// ## Returns
    /// * `Ok(Product)` - Inserted product
    /// * `Err(DbError::UniqueViolation)` - Slug already exists
    /// * `Err(DbError::ForeignKeyViolation)` - Category doesn't exist
    pub async fn insert(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(slug = %product.slug, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (
                id, name, slug, category_id, wood_type, description,
                price_cents, unit, stock, image, is_featured,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.slug)
        .bind(&product.category_id)
        .bind(product.wood_type)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.unit)
        .bind(product.stock)
        .bind(&product.image)
        .bind(product.is_featured)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        // Re-read to pick up the joined category name
        self.get_by_id(&product.id)
            .await?
            .ok_or_else(|| DbError::not_found("Product", &product.id))
    }

    /// Updates an existing product and returns the stored row.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Updated product
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(id = %product.id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                slug = ?3,
                category_id = ?4,
                wood_type = ?5,
                description = ?6,
                price_cents = ?7,
                unit = ?8,
                stock = ?9,
                image = ?10,
                is_featured = ?11,
                updated_at = ?12
            WHERE id = ?1
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.slug)
        .bind(&product.category_id)
        .bind(product.wood_type)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.unit)
        .bind(product.stock)
        .bind(&product.image)
        .bind(product.is_featured)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", &product.id));
        }

        self.get_by_id(&product.id)
            .await?
            .ok_or_else(|| DbError::not_found("Product", &product.id))
    }

    /// Deletes a product.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new product ID.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
