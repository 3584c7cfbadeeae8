//! # Seed Data Generator
//!
//! Populates the database with demo categories and products for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p lumberyard-db --bin seed
//!
//! # Specify database path
//! cargo run -p lumberyard-db --bin seed -- --db ./data/lumberyard.db
//! ```
//!
//! ## Generated Data
//! One category per product family, each with a handful of boards/slabs:
//! - Domestic Hardwoods (oak, walnut, maple, cherry)
//! - Softwoods (pine, cedar, fir)
//! - Exotic Imports (teak, purpleheart, zebrawood)

use std::env;

use chrono::Utc;
use tracing::info;

use lumberyard_core::{Money, NewProduct, WoodType, DEFAULT_UNIT};
use lumberyard_db::repository::category::build_category;
use lumberyard_db::repository::product::generate_product_id;
use lumberyard_db::{Database, DbConfig};

/// (category name, slug, description, products)
/// Product tuple: (name, slug, wood type, price, stock, featured)
type ProductSpec = (&'static str, &'static str, WoodType, &'static str, i64, bool);

const SEED_CATALOG: &[(&str, &str, &str, &[ProductSpec])] = &[
    (
        "Domestic Hardwoods",
        "domestic-hardwoods",
        "Kiln-dried North American hardwood boards.",
        &[
            ("Red Oak 4/4", "red-oak-4-4", WoodType::Hardwood, "6.25", 120, true),
            ("Black Walnut 8/4", "black-walnut-8-4", WoodType::Hardwood, "14.90", 45, true),
            ("Hard Maple 4/4", "hard-maple-4-4", WoodType::Hardwood, "7.10", 80, false),
            ("Cherry 5/4", "cherry-5-4", WoodType::Hardwood, "9.45", 60, false),
        ],
    ),
    (
        "Softwoods",
        "softwoods",
        "Construction and outdoor-grade softwood stock.",
        &[
            ("Eastern White Pine", "eastern-white-pine", WoodType::Softwood, "3.15", 200, false),
            ("Western Red Cedar", "western-red-cedar", WoodType::Softwood, "5.60", 150, true),
            ("Douglas Fir", "douglas-fir", WoodType::Softwood, "4.05", 175, false),
        ],
    ),
    (
        "Exotic Imports",
        "exotic-imports",
        "Specialty species imported in small quantities.",
        &[
            ("Burmese Teak", "burmese-teak", WoodType::Exotic, "38.00", 12, true),
            ("Purpleheart", "purpleheart", WoodType::Exotic, "16.75", 25, false),
            ("Zebrawood", "zebrawood", WoodType::Exotic, "24.50", 8, false),
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let db_path = parse_db_path().unwrap_or_else(|| "./data/lumberyard.db".to_string());

    info!(path = %db_path, "Seeding database");
    let db = Database::new(DbConfig::new(&db_path)).await?;

    let mut products_created = 0usize;

    for (name, slug, description, products) in SEED_CATALOG {
        let category = build_category(name, slug, description);
        db.categories().insert(&category).await?;

        for (p_name, p_slug, wood_type, price, stock, featured) in *products {
            let now = Utc::now();
            let product = NewProduct {
                id: generate_product_id(),
                name: p_name.to_string(),
                slug: p_slug.to_string(),
                category_id: category.id.clone(),
                wood_type: *wood_type,
                description: format!("{p_name}, sold {DEFAULT_UNIT}."),
                price: price.parse::<Money>()?,
                unit: DEFAULT_UNIT.to_string(),
                stock: *stock,
                image: Some(format!("products/{p_slug}.jpg")),
                is_featured: *featured,
                created_at: now,
                updated_at: now,
            };
            db.products().insert(&product).await?;
            products_created += 1;
        }

        info!(category = %slug, "Category seeded");
    }

    info!(
        categories = SEED_CATALOG.len(),
        products = products_created,
        "Seed complete"
    );

    db.close().await;
    Ok(())
}

/// Parses `--db <path>` from the command line.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1))
        .cloned()
}
