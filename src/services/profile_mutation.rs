use crate::auth::CurrentUser;
use crate::db::DbPool;
use crate::entities::{filament, filament_profile, profile_like};
use crate::error::{FieldError, ServiceError};
use crate::models::{retain_known_columns, SlicerSettings};
use crate::services::revalidate::{Revalidator, LISTING_PATH};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter,
    QuerySelect, Set, SqlErr,
};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Input of [`ProfileMutations::create_profile`]. Required fields are
/// optional here so that their absence is reported as a validation error.
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub user_id: Option<Uuid>,
    pub filament_id: Option<Uuid>,
    pub printer_id: Option<Uuid>,
    pub filament_profile_name: Option<String>,
    pub cloned_from_profile_id: Option<Uuid>,
    /// Partial settings map keyed by column name (`nozzleTemp`, ...).
    /// Keys that are not settings are dropped.
    pub slicer_settings: Map<String, Value>,
}

/// Write side of the profile catalogue. Every successful mutation marks the
/// listing stale.
#[derive(Clone)]
pub struct ProfileMutations {
    db: DbPool,
    revalidator: Revalidator,
}

impl ProfileMutations {
    pub fn new(db: DbPool, revalidator: Revalidator) -> Self {
        ProfileMutations { db, revalidator }
    }

    pub async fn create_profile(
        &self,
        current_user: &impl CurrentUser,
        input: NewProfile,
    ) -> Result<filament_profile::Model, ServiceError> {
        let actor = current_user.current_user().ok_or(ServiceError::Unauthorized)?;

        let name = input
            .filament_profile_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned);

        let (user_id, filament_id, name) = match (input.user_id, input.filament_id, name) {
            (Some(user_id), Some(filament_id), Some(name)) => (user_id, filament_id, name),
            (user_id, filament_id, name) => {
                let mut errors = Vec::new();
                if user_id.is_none() {
                    errors.push(FieldError::new("userId", "is required"));
                }
                if filament_id.is_none() {
                    errors.push(FieldError::new("filamentId", "is required"));
                }
                if name.is_none() {
                    errors.push(FieldError::new("filamentProfileName", "is required"));
                }
                return Err(ServiceError::Validation(errors));
            }
        };

        if !actor.may_act_for(user_id) {
            log::warn!(
                "User {} tried to create a filament profile for user {}",
                actor.user_id,
                user_id
            );
            return Err(ServiceError::Forbidden);
        }

        let settings = SlicerSettings::from_map(retain_known_columns(input.slicer_settings))
            .map_err(ServiceError::Validation)?;
        let errors = settings.validate();
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let mut row = filament_profile::ActiveModel::new();
        row.user_id = Set(Some(user_id));
        row.filament_id = Set(Some(filament_id));
        row.printer_id = Set(input.printer_id);
        row.filament_profile_name = Set(name);
        row.cloned_from_profile_id = Set(input.cloned_from_profile_id);
        settings.apply(&mut row);

        let profile = row.insert(&self.db).await.map_err(|e| {
            log::error!("Error adding filament profile: {:?}", e);
            ServiceError::Storage("Failed to add filament profile")
        })?;

        log::info!(
            "Created filament profile {} for user {}",
            profile.filament_profile_id,
            user_id
        );
        self.revalidator.revalidate_path(LISTING_PATH);
        Ok(profile)
    }

    /// Deletes the filament identified by `id`.
    ///
    /// The id is a *filament* id: the filament row is removed and the cascade
    /// removes every profile that references it, not only the one the caller
    /// clicked. Non-admins may do this only when they own all of those
    /// profiles.
    pub async fn delete_profile(
        &self,
        current_user: &impl CurrentUser,
        id: Option<Uuid>,
    ) -> Result<(), ServiceError> {
        let actor = current_user.current_user().ok_or(ServiceError::Unauthorized)?;
        let id = id.ok_or_else(|| ServiceError::field("id", "is required"))?;

        if !actor.is_admin() {
            let owners: Vec<Option<Uuid>> = filament_profile::Entity::find()
                .select_only()
                .column(filament_profile::Column::UserId)
                .filter(filament_profile::Column::FilamentId.eq(id))
                .into_tuple()
                .all(&self.db)
                .await
                .map_err(|e| {
                    log::error!("Error loading owners of filament {}: {:?}", id, e);
                    ServiceError::Storage("Failed to delete filament profile")
                })?;

            if owners.is_empty() || owners.iter().any(|owner| *owner != Some(actor.user_id)) {
                log::warn!("User {} may not delete filament {}", actor.user_id, id);
                return Err(ServiceError::Forbidden);
            }
        }

        let result = filament::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                log::error!("Error deleting filament {}: {:?}", id, e);
                ServiceError::Storage("Failed to delete filament profile")
            })?;

        log::info!(
            "Deleted filament {} ({} row(s)) with its profiles",
            id,
            result.rows_affected
        );
        self.revalidator.revalidate_path(LISTING_PATH);
        Ok(())
    }

    /// Records a like of `profile_id` by the current user. Returns `false`
    /// when the profile was already liked.
    pub async fn like_profile(
        &self,
        current_user: &impl CurrentUser,
        profile_id: Uuid,
    ) -> Result<bool, ServiceError> {
        let actor = current_user.current_user().ok_or(ServiceError::Unauthorized)?;

        let profile = filament_profile::Entity::find_by_id(profile_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                log::error!("Database error checking profile existence: {:?}", e);
                ServiceError::Storage("Failed to like filament profile")
            })?;

        if profile.is_none() {
            return Err(ServiceError::NotFound("Filament profile"));
        }

        let mut like = profile_like::ActiveModel::new();
        like.user_id = Set(Some(actor.user_id));
        like.profile_id = Set(Some(profile_id));

        match profile_like::Entity::insert(like).exec(&self.db).await {
            Ok(_) => {
                self.revalidator.revalidate_path(LISTING_PATH);
                Ok(true)
            }
            // One like per user and profile is enforced by a unique index.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(false)
            }
            Err(e) => {
                log::error!("Database error inserting like: {:?}", e);
                Err(ServiceError::Storage("Failed to like filament profile"))
            }
        }
    }

    /// Removes the current user's like of `profile_id`. Returns whether a
    /// like existed.
    pub async fn unlike_profile(
        &self,
        current_user: &impl CurrentUser,
        profile_id: Uuid,
    ) -> Result<bool, ServiceError> {
        let actor = current_user.current_user().ok_or(ServiceError::Unauthorized)?;

        let result = profile_like::Entity::delete_many()
            .filter(
                Condition::all()
                    .add(profile_like::Column::ProfileId.eq(profile_id))
                    .add(profile_like::Column::UserId.eq(actor.user_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| {
                log::error!("Database error removing like: {:?}", e);
                ServiceError::Storage("Failed to unlike filament profile")
            })?;

        let removed = result.rows_affected > 0;
        if removed {
            self.revalidator.revalidate_path(LISTING_PATH);
        }
        Ok(removed)
    }
}
