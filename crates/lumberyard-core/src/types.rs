//! # Domain Types
//!
//! Core entities of the Lumberyard catalog.
//!
//! ## Entity Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐ 1    * ┌─────────────────┐                    │
//! │  │    Category     │────────│     Product     │                    │
//! │  │  ─────────────  │cascade │  ─────────────  │                    │
//! │  │  id (UUID)      │ delete │  id (UUID)      │                    │
//! │  │  slug (unique)  │        │  slug (unique)  │                    │
//! │  │  name           │        │  wood_type      │                    │
//! │  └─────────────────┘        │  price (Money)  │                    │
//! │                             └─────────────────┘                    │
//! │                                                                     │
//! │  ┌─────────────────┐        ┌─────────────────┐                    │
//! │  │  OrderSnapshot  │        │    WoodType     │                    │
//! │  │  ─────────────  │        │  ─────────────  │                    │
//! │  │  reference UUID │        │  Hardwood       │                    │
//! │  │  payload (JSON) │        │  Softwood       │                    │
//! │  │  totals (Money) │        │  Exotic         │                    │
//! │  └─────────────────┘        └─────────────────┘                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Categories and products have:
//! - `id`: UUID v4 - immutable, used for relations
//! - `slug`: URL-safe business key - human-readable, unique

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Wood Type
// =============================================================================

/// Classification of a lumber product.
///
/// Stored and serialized as lowercase text (`"hardwood"` etc.), both in the
/// database and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum WoodType {
    /// Deciduous species: oak, walnut, maple, cherry...
    Hardwood,
    /// Coniferous species: pine, cedar, fir...
    Softwood,
    /// Imported specialty species: teak, purpleheart, zebrawood...
    Exotic,
}

impl WoodType {
    /// The lowercase wire/database representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            WoodType::Hardwood => "hardwood",
            WoodType::Softwood => "softwood",
            WoodType::Exotic => "exotic",
        }
    }
}

impl fmt::Display for WoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WoodType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hardwood" => Ok(WoodType::Hardwood),
            "softwood" => Ok(WoodType::Softwood),
            "exotic" => Ok(WoodType::Exotic),
            _ => Err(()),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category (e.g. "Domestic Hardwoods").
///
/// `created_at` is persisted but intentionally not serialized: the public
/// category representation is `{id, name, slug, description}`.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// URL-safe unique business key.
    pub slug: String,

    /// Free-text description (may be empty).
    pub description: String,

    /// When the category was created.
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product as read back from the store.
///
/// This is the read model: `category_name` is derived from a join and is
/// read-only. Writes go through [`NewProduct`].
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// URL-safe unique business key.
    pub slug: String,

    /// Owning category id. Serialized as `category` to match the public API.
    #[serde(rename = "category")]
    pub category_id: String,

    /// Owning category name (join, read-only).
    pub category_name: String,

    /// Lumber classification.
    pub wood_type: WoodType,

    /// Free-text description.
    pub description: String,

    /// Price per unit, decimal string on the wire.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "price_cents"))]
    pub price: Money,

    /// Unit of sale, defaults to "per board foot".
    pub unit: String,

    /// Stock on hand. Not reserved or decremented anywhere; informational.
    pub stock: i64,

    /// Image reference under the products media path, if any.
    pub image: Option<String>,

    /// Whether the storefront features this product.
    pub is_featured: bool,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated. Persisted, not serialized.
    #[serde(skip_serializing)]
    pub updated_at: DateTime<Utc>,
}

/// A product as written to the store (no derived fields).
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub category_id: String,
    pub wood_type: WoodType,
    pub description: String,
    pub price: Money,
    pub unit: String,
    pub stock: i64,
    pub image: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for NewProduct {
    /// Strips the derived fields, yielding the writable columns.
    fn from(p: Product) -> Self {
        NewProduct {
            id: p.id,
            name: p.name,
            slug: p.slug,
            category_id: p.category_id,
            wood_type: p.wood_type,
            description: p.description,
            price: p.price,
            unit: p.unit,
            stock: p.stock,
            image: p.image,
            is_featured: p.is_featured,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

// =============================================================================
// Order Snapshot
// =============================================================================

/// An immutable record of a completed checkout's computed totals.
///
/// The caller supplies already-computed decimals; nothing here recomputes
/// them. `id`, `reference` and `created_at` are server-assigned at creation
/// and never change afterwards.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderSnapshot {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Public order reference (UUID v4), unique and immutable.
    pub reference: String,

    /// Opaque cart/checkout document. No schema is enforced.
    #[cfg_attr(feature = "sqlx", sqlx(json))]
    pub payload: serde_json::Value,

    /// Items total as computed by the caller.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "subtotal_cents"))]
    pub subtotal: Money,

    /// Shipping charge as computed by the caller.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "shipping_cents"))]
    pub shipping: Money,

    /// Tax as computed by the caller.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "tax_cents"))]
    pub tax: Money,

    /// Grand total as computed by the caller.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "total_cents"))]
    pub total: Money,

    /// ISO currency code, defaults to "USD".
    pub currency: String,

    /// When the snapshot was recorded.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wood_type_roundtrip() {
        for wt in [WoodType::Hardwood, WoodType::Softwood, WoodType::Exotic] {
            assert_eq!(wt.as_str().parse::<WoodType>().unwrap(), wt);
        }
    }

    #[test]
    fn test_wood_type_rejects_unknown() {
        assert!("plywood".parse::<WoodType>().is_err());
        assert!("Hardwood".parse::<WoodType>().is_err());
    }

    #[test]
    fn test_wood_type_serde_lowercase() {
        let json = serde_json::to_string(&WoodType::Exotic).unwrap();
        assert_eq!(json, "\"exotic\"");

        let parsed: WoodType = serde_json::from_str("\"softwood\"").unwrap();
        assert_eq!(parsed, WoodType::Softwood);
    }

    #[test]
    fn test_category_serialization_hides_created_at() {
        let category = Category {
            id: "c1".into(),
            name: "Domestic Hardwoods".into(),
            slug: "domestic-hardwoods".into(),
            description: String::new(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&category).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("slug"));
        assert!(!obj.contains_key("created_at"));
    }

    #[test]
    fn test_product_serialization_shape() {
        let product = Product {
            id: "p1".into(),
            name: "Black Walnut Slab".into(),
            slug: "black-walnut-slab".into(),
            category_id: "c1".into(),
            category_name: "Domestic Hardwoods".into(),
            wood_type: WoodType::Hardwood,
            description: "Kiln dried.".into(),
            price: Money::from_cents(12550),
            unit: "per board foot".into(),
            stock: 14,
            image: None,
            is_featured: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&product).unwrap();
        let obj = value.as_object().unwrap();

        // `category_id` goes out as `category`, price as a decimal string
        assert_eq!(obj["category"], "c1");
        assert_eq!(obj["category_name"], "Domestic Hardwoods");
        assert_eq!(obj["price"], "125.50");
        assert_eq!(obj["wood_type"], "hardwood");
        assert!(!obj.contains_key("category_id"));
        assert!(!obj.contains_key("updated_at"));
        assert!(obj.contains_key("created_at"));
    }
}
