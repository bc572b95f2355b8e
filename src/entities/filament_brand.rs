use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "filament_brands")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub brand_id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::filament::Entity")]
    Filaments,
}

impl Related<super::filament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Filaments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
