use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// A physical filament: one brand, one material and its spool properties.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "filaments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub filament_id: Uuid,
    pub brand_id: Option<i32>,
    pub material_id: Option<i32>,
    pub color: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((4, 2)))")]
    pub diameter: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub spool_weight: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub filament_density: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))")]
    pub cost_per_kg: Option<Decimal>,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::filament_brand::Entity",
        from = "Column::BrandId",
        to = "super::filament_brand::Column::BrandId",
        on_delete = "Cascade"
    )]
    FilamentBrand,
    #[sea_orm(
        belongs_to = "super::filament_material::Entity",
        from = "Column::MaterialId",
        to = "super::filament_material::Column::MaterialId",
        on_delete = "Cascade"
    )]
    FilamentMaterial,
    #[sea_orm(has_many = "super::filament_profile::Entity")]
    FilamentProfiles,
}

impl Related<super::filament_brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilamentBrand.def()
    }
}

impl Related<super::filament_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilamentMaterial.def()
    }
}

impl Related<super::filament_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilamentProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            filament_id: Set(Uuid::new_v4()),
            created_at: Set(Some(chrono::Utc::now())),
            ..ActiveModelTrait::default()
        }
    }
}
