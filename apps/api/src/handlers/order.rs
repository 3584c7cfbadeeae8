//! Order snapshot resource handlers.
//!
//! Intended usage is create-then-read: the storefront posts a snapshot of
//! the cart with its already-computed totals at checkout, then reads the
//! returned `reference` back to the customer. Nothing here computes or
//! verifies totals.
//!
//! `id`, `reference` and `created_at` are server-assigned on create and
//! ignored on update.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use lumberyard_core::validation::validate_currency;
use lumberyard_core::Money;
use lumberyard_db::repository::order::build_snapshot;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Body for snapshot creation. Totals arrive pre-computed.
#[derive(Debug, Deserialize)]
pub struct OrderInput {
    pub payload: serde_json::Value,
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
    pub currency: Option<String>,
}

/// Body for snapshot updates; absent fields are left unchanged.
/// `reference` and `created_at` cannot be supplied at all.
#[derive(Debug, Deserialize)]
pub struct OrderPatch {
    pub payload: Option<serde_json::Value>,
    pub subtotal: Option<Money>,
    pub shipping: Option<Money>,
    pub tax: Option<Money>,
    pub total: Option<Money>,
    pub currency: Option<String>,
}

#[instrument(name = "handler::list_orders", skip_all)]
pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse> {
    let snapshots = state.db.orders().list().await?;
    Ok(HttpResponse::Ok().json(snapshots))
}

#[instrument(name = "handler::create_order", skip_all)]
pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<OrderInput>,
) -> Result<HttpResponse> {
    let input = body.into_inner();
    if let Some(currency) = &input.currency {
        validate_currency(currency)?;
    }

    let snapshot = build_snapshot(
        input.payload,
        input.subtotal,
        input.shipping,
        input.tax,
        input.total,
        input.currency,
    );

    state.db.orders().insert(&snapshot).await?;
    info!(reference = %snapshot.reference, "Order snapshot recorded");

    Ok(HttpResponse::Created().json(snapshot))
}

#[instrument(name = "handler::get_order", skip(state))]
pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    let snapshot = state
        .db
        .orders()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {id} not found")))?;

    Ok(HttpResponse::Ok().json(snapshot))
}

#[instrument(name = "handler::update_order", skip(state, body))]
pub async fn update_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<OrderPatch>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let patch = body.into_inner();

    let mut snapshot = state
        .db
        .orders()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {id} not found")))?;

    if let Some(payload) = patch.payload {
        snapshot.payload = payload;
    }
    if let Some(subtotal) = patch.subtotal {
        snapshot.subtotal = subtotal;
    }
    if let Some(shipping) = patch.shipping {
        snapshot.shipping = shipping;
    }
    if let Some(tax) = patch.tax {
        snapshot.tax = tax;
    }
    if let Some(total) = patch.total {
        snapshot.total = total;
    }
    if let Some(currency) = patch.currency {
        validate_currency(&currency)?;
        snapshot.currency = currency;
    }

    state.db.orders().update(&snapshot).await?;

    Ok(HttpResponse::Ok().json(snapshot))
}

#[instrument(name = "handler::delete_order", skip(state))]
pub async fn delete_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    state.db.orders().delete(&id).await?;
    info!(id = %id, "Order snapshot deleted");

    Ok(HttpResponse::NoContent().finish())
}
