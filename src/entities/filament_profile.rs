use sea_orm::entity::prelude::*;
use sea_orm::Set;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum SourceSlicer {
    #[sea_orm(string_value = "Bambu Studio")]
    #[serde(rename = "Bambu Studio")]
    BambuStudio,
    #[sea_orm(string_value = "PrusaSlicer")]
    PrusaSlicer,
    #[sea_orm(string_value = "Cura")]
    Cura,
    #[sea_orm(string_value = "OrcaSlicer")]
    OrcaSlicer,
    #[sea_orm(string_value = "Other")]
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum InfillPattern {
    #[sea_orm(string_value = "Grid")]
    Grid,
    #[sea_orm(string_value = "Gyroid")]
    Gyroid,
    #[sea_orm(string_value = "Honeycomb")]
    Honeycomb,
    #[sea_orm(string_value = "Cubic")]
    Cubic,
    #[sea_orm(string_value = "Other")]
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum SupportType {
    #[sea_orm(string_value = "Tree")]
    Tree,
    #[sea_orm(string_value = "Grid")]
    Grid,
    #[sea_orm(string_value = "None")]
    None,
}

/// Free-form labels, stored as a JSON list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Tags(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "filament_profiles")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub filament_profile_id: Uuid,
    pub user_id: Option<Uuid>,
    pub filament_id: Option<Uuid>,
    pub printer_id: Option<Uuid>,
    pub filament_profile_name: String,
    pub submission_date: Option<DateTimeUtc>,
    pub cloned_from_profile_id: Option<Uuid>,
    pub source_slicer: Option<SourceSlicer>,
    pub slicer_version: Option<String>,
    pub custom_notes: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((3, 2)))")]
    pub community_rating: Option<Decimal>,

    // General print settings
    #[sea_orm(column_type = "Decimal(Some((4, 2)))")]
    pub layer_height: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((4, 2)))")]
    pub wall_thickness: Option<Decimal>,
    pub top_bottom_layers: Option<i32>,
    pub infill_density: Option<i32>,
    pub infill_pattern: Option<InfillPattern>,

    // Temperatures
    pub nozzle_temp: Option<i32>,
    pub bed_temp: Option<i32>,
    pub chamber_temp: Option<i32>,

    // Speed and flow
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub print_speed: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub wall_speed: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub infill_speed: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub travel_speed: Option<Decimal>,
    pub flow_rate: Option<i32>,

    // Cooling
    pub fan_speed: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub min_layer_time: Option<Decimal>,

    // Retraction
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub retraction_distance: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub retraction_speed: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub z_hop: Option<Decimal>,

    // Supports
    pub supports_enabled: Option<bool>,
    pub support_type: Option<SupportType>,
    pub support_density: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((4, 2)))")]
    pub support_z_distance: Option<Decimal>,

    pub gcode_link: Option<String>,
    pub profile_link: Option<String>,
    pub tags: Option<Tags>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::filament::Entity",
        from = "Column::FilamentId",
        to = "super::filament::Column::FilamentId",
        on_delete = "Cascade"
    )]
    Filament,
    #[sea_orm(
        belongs_to = "super::printer::Entity",
        from = "Column::PrinterId",
        to = "super::printer::Column::PrinterId",
        on_delete = "Cascade"
    )]
    Printer,
    #[sea_orm(has_many = "super::profile_like::Entity")]
    ProfileLikes,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::filament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Filament.def()
    }
}

impl Related<super::printer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Printer.def()
    }
}

impl Related<super::profile_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProfileLikes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            filament_profile_id: Set(Uuid::new_v4()),
            submission_date: Set(Some(chrono::Utc::now())),
            community_rating: Set(Some(Decimal::ZERO)),
            supports_enabled: Set(Some(false)),
            ..ActiveModelTrait::default()
        }
    }
}
