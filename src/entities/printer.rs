use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "printers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub printer_id: Uuid,
    pub brand_id: Option<i32>,
    pub model_name: String,
    pub extruder_type: Option<String>,
    pub bed_type: Option<String>,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::printer_brand::Entity",
        from = "Column::BrandId",
        to = "super::printer_brand::Column::BrandId",
        on_delete = "Cascade"
    )]
    PrinterBrand,
    #[sea_orm(has_many = "super::filament_profile::Entity")]
    FilamentProfiles,
}

impl Related<super::printer_brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrinterBrand.def()
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
            printer_id: Set(Uuid::new_v4()),
            created_at: Set(Some(chrono::Utc::now())),
            ..ActiveModelTrait::default()
        }
    }
}
