//! # Seed Data Generator
//!
//! Populates the database with the default admin account and a set of
//! sample products for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p stockroom-db --bin seed
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//! ```

use std::env;

use stockroom_core::{Money, ProductDraft, DEFAULT_LOW_STOCK_THRESHOLD};
use stockroom_db::{Database, DbConfig, DEFAULT_ADMIN_USERNAME};

/// Sample products: (name, category, price cents, quantity, threshold).
const SAMPLE_PRODUCTS: &[(&str, &str, i64, i64, i64)] = &[
    ("Claw Hammer", "Tools", 1299, 24, 5),
    ("Phillips Screwdriver", "Tools", 499, 60, 15),
    ("Flathead Screwdriver", "Tools", 499, 55, 15),
    ("Adjustable Wrench", "Tools", 1599, 18, 5),
    ("Tape Measure 5m", "Tools", 899, 32, 10),
    ("Wood Screws 100pk", "Fasteners", 649, 120, 30),
    ("Drywall Anchors 50pk", "Fasteners", 749, 80, 20),
    ("Finishing Nails 200pk", "Fasteners", 549, 95, 20),
    ("Duct Tape", "Supplies", 399, 48, 12),
    ("Super Glue", "Supplies", 299, 70, 20),
    ("Sandpaper Assorted", "Supplies", 579, 40, 10),
    ("Safety Glasses", "Safety", 799, 25, 8),
    ("Work Gloves", "Safety", 1099, 36, 10),
    ("LED Work Light", "Electrical", 2499, 12, 4),
    ("Extension Cord 10m", "Electrical", 1899, 15, 5),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Repositories log through tracing; make that visible here
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./stockroom_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./stockroom_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database (runs migrations)
    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected, migrations applied");

    // Ensure the default admin account
    let created = db.bootstrap().await?;
    if created {
        println!("✓ Default admin '{}' created", DEFAULT_ADMIN_USERNAME);
    } else {
        println!("✓ Default admin '{}' already present", DEFAULT_ADMIN_USERNAME);
    }

    // Check existing products
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Insert sample products
    println!();
    println!("Inserting sample products...");

    for &(name, category, cents, quantity, threshold) in SAMPLE_PRODUCTS {
        let draft = ProductDraft {
            name: name.to_string(),
            category: Some(category.to_string()),
            price_cents: Money::from_cents(cents),
            quantity,
            low_stock_threshold: if threshold > 0 {
                threshold
            } else {
                DEFAULT_LOW_STOCK_THRESHOLD
            },
        };
        let product = db.products().insert(&draft).await?;
        println!(
            "  [{}] {} - {} (qty {})",
            product.id,
            product.name,
            product.price(),
            product.quantity
        );
    }

    println!();
    println!("✓ Seeded {} products", SAMPLE_PRODUCTS.len());

    db.close().await;
    Ok(())
}
