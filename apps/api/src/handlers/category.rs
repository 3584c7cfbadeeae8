//! Category resource handlers.
//!
//! Plain CRUD, no filters. Deleting a category cascades to its products.
//! Destructive and irreversible, enforced at the schema level.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use lumberyard_core::validation::{validate_name, validate_slug};
use lumberyard_core::Category;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Body for category creation.
#[derive(Debug, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

/// Body for category updates; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

#[instrument(name = "handler::list_categories", skip_all)]
pub async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse> {
    let categories = state.db.categories().list().await?;
    Ok(HttpResponse::Ok().json(categories))
}

#[instrument(name = "handler::create_category", skip_all)]
pub async fn create_category(
    state: web::Data<AppState>,
    body: web::Json<CategoryInput>,
) -> Result<HttpResponse> {
    let input = body.into_inner();
    validate_name(&input.name)?;
    validate_slug(&input.slug)?;

    let category = Category {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        slug: input.slug,
        description: input.description,
        created_at: Utc::now(),
    };

    state.db.categories().insert(&category).await?;
    info!(slug = %category.slug, "Category created");

    Ok(HttpResponse::Created().json(category))
}

#[instrument(name = "handler::get_category", skip(state))]
pub async fn get_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    let category = state
        .db
        .categories()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Category {id} not found")))?;

    Ok(HttpResponse::Ok().json(category))
}

#[instrument(name = "handler::update_category", skip(state, body))]
pub async fn update_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CategoryPatch>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let patch = body.into_inner();

    let mut category = state
        .db
        .categories()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Category {id} not found")))?;

    if let Some(name) = patch.name {
        validate_name(&name)?;
        category.name = name;
    }
    if let Some(slug) = patch.slug {
        validate_slug(&slug)?;
        category.slug = slug;
    }
    if let Some(description) = patch.description {
        category.description = description;
    }

    state.db.categories().update(&category).await?;

    Ok(HttpResponse::Ok().json(category))
}

#[instrument(name = "handler::delete_category", skip(state))]
pub async fn delete_category(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    state.db.categories().delete(&id).await?;
    info!(id = %id, "Category deleted (products cascaded)");

    Ok(HttpResponse::NoContent().finish())
}
