use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "profile_likes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub like_id: Uuid,
    pub user_id: Option<Uuid>,
    pub profile_id: Option<Uuid>,
    pub liked_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::filament_profile::Entity",
        from = "Column::ProfileId",
        to = "super::filament_profile::Column::FilamentProfileId",
        on_delete = "Cascade"
    )]
    FilamentProfile,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::filament_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilamentProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            like_id: Set(Uuid::new_v4()),
            liked_at: Set(Some(chrono::Utc::now())),
            ..ActiveModelTrait::default()
        }
    }
}
