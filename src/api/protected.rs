use crate::auth::AuthenticatedUser;
use crate::db::DbPool;
use crate::entities::user;
use crate::error::ServiceError;
use crate::models::UserResponse;
use actix_web::{web, HttpResponse, Result as ActixResult};
use sea_orm::EntityTrait;

#[utoipa::path(
    get,
    path = "/protected/me",
    responses(
        (status = 200, description = "The signed-in user", body = UserResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "protected"
)]
pub async fn me(user: AuthenticatedUser, pool: web::Data<DbPool>) -> ActixResult<HttpResponse> {
    let found = user::Entity::find_by_id(user.user_id)
        .one(pool.get_ref())
        .await
        .map_err(|e| {
            log::error!("Database error loading user {}: {:?}", user.user_id, e);
            ServiceError::Storage("Internal server error")
        })?
        .ok_or(ServiceError::NotFound("User"))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(found)))
}
