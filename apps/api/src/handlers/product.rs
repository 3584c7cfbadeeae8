//! Product resource handlers.
//!
//! Listing supports two optional query parameters, `category` (a category
//! slug) and `wood_type`, composed with AND. Unknown values match nothing
//! and produce `200 []`, never an error: the storefront probes filters
//! freely.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Deserializer};
use tracing::{info, instrument};
use uuid::Uuid;

use lumberyard_core::validation::{validate_name, validate_price, validate_slug};
use lumberyard_core::{Money, NewProduct, WoodType, DEFAULT_UNIT};
use lumberyard_db::ProductFilter;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Query parameters for product listing. Unknown extra parameters are
/// ignored, mirroring typical querystring handling.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub wood_type: Option<String>,
}

/// Body for product creation.
///
/// `category` carries the owning category id, matching the serialized
/// output shape.
#[derive(Debug, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub slug: String,
    #[serde(rename = "category")]
    pub category_id: String,
    pub wood_type: WoodType,
    #[serde(default)]
    pub description: String,
    pub price: Money,
    pub unit: Option<String>,
    pub stock: Option<i64>,
    pub image: Option<String>,
    pub is_featured: Option<bool>,
}

/// Body for product updates; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(rename = "category")]
    pub category_id: Option<String>,
    pub wood_type: Option<WoodType>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub unit: Option<String>,
    pub stock: Option<i64>,
    /// `"image": null` clears the image; an absent field leaves it alone.
    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,
    pub is_featured: Option<bool>,
}

/// Wraps any present value (including JSON `null`) in `Some`, so an absent
/// field (the serde default, `None`) stays distinguishable from an explicit
/// null.
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[instrument(name = "handler::list_products", skip(state))]
pub async fn list_products(
    state: web::Data<AppState>,
    query: web::Query<ProductListQuery>,
) -> Result<HttpResponse> {
    let query = query.into_inner();
    let filter = ProductFilter {
        category: query.category,
        wood_type: query.wood_type,
    };

    let products = state.db.products().list(&filter).await?;
    Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::create_product", skip_all)]
pub async fn create_product(
    state: web::Data<AppState>,
    body: web::Json<ProductInput>,
) -> Result<HttpResponse> {
    let input = body.into_inner();
    validate_name(&input.name)?;
    validate_slug(&input.slug)?;
    validate_price(input.price)?;

    let now = Utc::now();
    let draft = NewProduct {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        slug: input.slug,
        category_id: input.category_id,
        wood_type: input.wood_type,
        description: input.description,
        price: input.price,
        unit: input.unit.unwrap_or_else(|| DEFAULT_UNIT.to_string()),
        stock: input.stock.unwrap_or(0),
        image: input.image,
        is_featured: input.is_featured.unwrap_or(false),
        created_at: now,
        updated_at: now,
    };

    let product = state.db.products().insert(&draft).await?;
    info!(slug = %product.slug, "Product created");

    Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::get_product", skip(state))]
pub async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    let product = state
        .db
        .products()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Product {id} not found")))?;

    Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::update_product", skip(state, body))]
pub async fn update_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ProductPatch>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let patch = body.into_inner();

    let stored = state
        .db
        .products()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Product {id} not found")))?;

    let mut draft = NewProduct::from(stored);

    if let Some(name) = patch.name {
        validate_name(&name)?;
        draft.name = name;
    }
    if let Some(slug) = patch.slug {
        validate_slug(&slug)?;
        draft.slug = slug;
    }
    if let Some(category_id) = patch.category_id {
        draft.category_id = category_id;
    }
    if let Some(wood_type) = patch.wood_type {
        draft.wood_type = wood_type;
    }
    if let Some(description) = patch.description {
        draft.description = description;
    }
    if let Some(price) = patch.price {
        validate_price(price)?;
        draft.price = price;
    }
    if let Some(unit) = patch.unit {
        draft.unit = unit;
    }
    if let Some(stock) = patch.stock {
        draft.stock = stock;
    }
    if let Some(image) = patch.image {
        draft.image = image;
    }
    if let Some(is_featured) = patch.is_featured {
        draft.is_featured = is_featured;
    }
    draft.updated_at = Utc::now();

    let product = state.db.products().update(&draft).await?;

    Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(state))]
pub async fn delete_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    state.db.products().delete(&id).await?;
    info!(id = %id, "Product deleted");

    Ok(HttpResponse::NoContent().finish())
}
