use crate::db::DbPool;
use crate::entities::{filament, filament_brand, filament_material, filament_profile, printer, printer_brand};
use crate::error::ServiceError;
use crate::models::{ProfilePage, ProfileView};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr};
use sea_orm::{
    Condition, ConnectionTrait, DbBackend, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use uuid::Uuid;

/// Rows per listing page.
pub const PAGE_SIZE: u64 = 5;

/// Largest offset the database drivers accept; offsets bind as signed 64-bit.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

#[derive(Debug, FromQueryResult)]
struct ProfileRow {
    filament_profile_id: Uuid,
    filament_profile_name: String,
    brand_name: String,
    material_name: String,
    color: Option<String>,
    diameter: Option<Decimal>,
    spool_weight: Option<Decimal>,
    filament_density: Option<Decimal>,
    cost_per_kg: Option<Decimal>,
    printer_id: Option<Uuid>,
    printer_brand_name: Option<String>,
    printer_model_name: Option<String>,
    community_rating: Option<Decimal>,
    submission_date: Option<DateTime<Utc>>,
}

impl ProfileRow {
    /// Read-path fallbacks: a missing rating reads as 0 and a missing
    /// submission date as `now`. Neither is written back.
    fn into_view(self, now: DateTime<Utc>) -> ProfileView {
        ProfileView {
            filament_profile_id: self.filament_profile_id,
            filament_profile_name: self.filament_profile_name,
            brand_name: self.brand_name,
            material_name: self.material_name,
            color: self.color,
            diameter: to_f64(self.diameter),
            spool_weight: to_f64(self.spool_weight),
            filament_density: to_f64(self.filament_density),
            cost_per_kg: to_f64(self.cost_per_kg),
            printer_id: self.printer_id,
            printer_brand_name: self.printer_brand_name,
            printer_model_name: self.printer_model_name,
            community_rating: to_f64(self.community_rating).unwrap_or(0.0),
            created_at: self.submission_date.unwrap_or(now),
        }
    }
}

fn to_f64(value: Option<Decimal>) -> Option<f64> {
    value.and_then(|d| d.to_f64())
}

/// Lowercases `term` the way the backend's `lower()` does. SQLite folds
/// ASCII letters only, so on SQLite non-ASCII letters match case-sensitively.
fn fold_case(term: &str, backend: DbBackend) -> String {
    match backend {
        DbBackend::Sqlite => term.to_ascii_lowercase(),
        _ => term.to_lowercase(),
    }
}

/// Escapes LIKE metacharacters so the search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Read side of the profile catalogue.
#[derive(Clone)]
pub struct ProfileQueries {
    db: DbPool,
}

impl ProfileQueries {
    pub fn new(db: DbPool) -> Self {
        ProfileQueries { db }
    }

    /// One page of profiles, oldest submission first.
    ///
    /// Profiles whose filament, brand or material cannot be resolved are not
    /// listed. A non-empty `search` keeps rows whose brand or material name
    /// contains it, ignoring case (ASCII letters only on SQLite).
    /// `next_offset` is set whenever the page is full, so the page after an
    /// exact multiple of `PAGE_SIZE` is empty. Offsets above `MAX_OFFSET` are
    /// rejected.
    pub async fn list_profiles(&self, search: &str, offset: u64) -> Result<ProfilePage, ServiceError> {
        if offset > MAX_OFFSET {
            return Err(ServiceError::field(
                "offset",
                format!("must be at most {}", MAX_OFFSET),
            ));
        }

        let search = fold_case(search.trim(), self.db.get_database_backend());
        let query = Self::joined(&search);

        let total = query.clone().count(&self.db).await.map_err(|e| {
            log::error!("Error counting filament profiles: {:?}", e);
            ServiceError::Storage("Failed to load filament profiles")
        })?;

        let rows = query
            .order_by_asc(filament_profile::Column::SubmissionDate)
            .order_by_asc(filament_profile::Column::FilamentProfileId)
            .offset(offset)
            .limit(PAGE_SIZE)
            .into_model::<ProfileRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                log::error!("Error loading filament profiles: {:?}", e);
                ServiceError::Storage("Failed to load filament profiles")
            })?;

        let now = Utc::now();
        let profiles: Vec<ProfileView> = rows.into_iter().map(|row| row.into_view(now)).collect();
        let next_offset = if profiles.len() as u64 == PAGE_SIZE {
            offset
                .checked_add(PAGE_SIZE)
                .filter(|next| *next <= MAX_OFFSET)
        } else {
            None
        };

        Ok(ProfilePage {
            profiles,
            next_offset,
            total,
        })
    }

    /// `search` must already be trimmed and case-folded.
    fn joined(search: &str) -> Select<filament_profile::Entity> {
        let query = filament_profile::Entity::find()
            .select_only()
            .column(filament_profile::Column::FilamentProfileId)
            .column(filament_profile::Column::FilamentProfileName)
            .column_as(filament_brand::Column::Name, "brand_name")
            .column_as(filament_material::Column::Name, "material_name")
            .column(filament::Column::Color)
            .column(filament::Column::Diameter)
            .column(filament::Column::SpoolWeight)
            .column(filament::Column::FilamentDensity)
            .column(filament::Column::CostPerKg)
            .column(filament_profile::Column::PrinterId)
            .column_as(printer_brand::Column::Name, "printer_brand_name")
            .column_as(printer::Column::ModelName, "printer_model_name")
            .column(filament_profile::Column::CommunityRating)
            .column(filament_profile::Column::SubmissionDate)
            .join(JoinType::InnerJoin, filament_profile::Relation::Filament.def())
            .join(JoinType::InnerJoin, filament::Relation::FilamentBrand.def())
            .join(JoinType::InnerJoin, filament::Relation::FilamentMaterial.def())
            .join(JoinType::LeftJoin, filament_profile::Relation::Printer.def())
            .join(JoinType::LeftJoin, printer::Relation::PrinterBrand.def());

        if search.is_empty() {
            return query;
        }

        let pattern = format!("%{}%", escape_like(search));
        query.filter(
            Condition::any()
                .add(lower_contains(
                    (filament_brand::Entity, filament_brand::Column::Name),
                    &pattern,
                ))
                .add(lower_contains(
                    (filament_material::Entity, filament_material::Column::Name),
                    &pattern,
                )),
        )
    }
}

/// `lower(column) LIKE pattern`, with `\` as the escape character.
fn lower_contains<C: IntoColumnRef>(column: C, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}
