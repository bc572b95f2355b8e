// Shared fixtures for the integration tests: an in-memory SQLite database
// with the full schema and helpers that seed the lookup tables directly.
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use filament_profiles::{
    auth::Actor,
    db::{self, DbPool},
    entities::{
        filament, filament_brand, filament_material, filament_profile, printer, printer_brand,
        user::{self, Role},
    },
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, Set};
use uuid::Uuid;

pub async fn setup_db() -> DbPool {
    // A single connection: every connection to `sqlite::memory:` is its own database.
    let db = db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to connect to test database");
    db::ensure_schema(&db)
        .await
        .expect("Failed to create test schema");
    db
}

pub fn actor(user: &user::Model) -> Actor {
    Actor {
        user_id: user.id,
        role: user.role,
    }
}

/// Fixed base time so submission order is deterministic.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

pub fn minutes_after_base(minutes: i64) -> DateTime<Utc> {
    base_time() + Duration::minutes(minutes)
}

pub async fn insert_user(db: &DbPool, email: &str, role: Role) -> user::Model {
    let mut row = user::ActiveModel::new();
    row.name = Set(Some(email.split('@').next().unwrap_or(email).to_string()));
    row.email = Set(Some(email.to_string()));
    row.role = Set(role);
    row.insert(db).await.expect("Failed to insert user")
}

pub async fn insert_brand(db: &DbPool, name: &str) -> i32 {
    filament_brand::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert filament brand")
    .brand_id
}

pub async fn insert_material(db: &DbPool, name: &str) -> i32 {
    filament_material::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert filament material")
    .material_id
}

pub async fn insert_filament(db: &DbPool, brand_id: Option<i32>, material_id: Option<i32>) -> Uuid {
    let mut row = filament::ActiveModel::new();
    row.brand_id = Set(brand_id);
    row.material_id = Set(material_id);
    row.color = Set(Some("Galaxy Black".to_string()));
    row.diameter = Set(Some(Decimal::new(175, 2)));
    row.cost_per_kg = Set(Some(Decimal::new(2499, 2)));
    row.insert(db).await.expect("Failed to insert filament").filament_id
}

pub async fn insert_printer(db: &DbPool, brand: &str, model: &str) -> Uuid {
    let brand_id = printer_brand::ActiveModel {
        name: Set(brand.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert printer brand")
    .brand_id;

    let mut row = printer::ActiveModel::new();
    row.brand_id = Set(Some(brand_id));
    row.model_name = Set(model.to_string());
    row.insert(db).await.expect("Failed to insert printer").printer_id
}

/// Inserts a profile directly, bypassing the mutation service.
pub async fn insert_profile(
    db: &DbPool,
    owner: &user::Model,
    filament_id: Uuid,
    printer_id: Option<Uuid>,
    name: &str,
    submitted: DateTime<Utc>,
) -> Uuid {
    let mut row = filament_profile::ActiveModel::new();
    row.user_id = Set(Some(owner.id));
    row.filament_id = Set(Some(filament_id));
    row.printer_id = Set(printer_id);
    row.filament_profile_name = Set(name.to_string());
    row.submission_date = Set(Some(submitted));
    row.insert(db)
        .await
        .expect("Failed to insert filament profile")
        .filament_profile_id
}
