use crate::auth::AuthenticatedUser;
use crate::error::ServiceError;
use crate::models::{LikeResponse, ProfileQuery};
use crate::services::profile_form::parse_uuid;
use crate::services::{parse_profile_form, ProfileMutations, ProfileQueries};
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde_json::json;
use std::collections::HashMap;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/profiles",
    params(
        ("q" = Option<String>, Query, description = "Brand or material name fragment, case-insensitive"),
        ("offset" = Option<u64>, Query, description = "Rows to skip (default: 0, at most 9223372036854775807)")
    ),
    responses(
        (status = 200, description = "One page of filament profiles", body = ProfilePage),
        (status = 400, description = "Offset out of range")
    ),
    tag = "profiles"
)]
pub async fn list_profiles(
    queries: web::Data<ProfileQueries>,
    query: web::Query<ProfileQuery>,
) -> ActixResult<HttpResponse> {
    let search = query.q.as_deref().unwrap_or("");
    let offset = query.offset.unwrap_or(0);

    let page = queries.list_profiles(search, offset).await?;
    Ok(HttpResponse::Ok().json(page))
}

#[utoipa::path(
    post,
    path = "/api/profiles",
    request_body(
        content = HashMap<String, String>,
        content_type = "application/x-www-form-urlencoded",
        description = "userId, filamentId, filamentProfileName, optional printerId, clonedFromProfileId and slicer settings"
    ),
    responses(
        (status = 201, description = "Filament profile created"),
        (status = 400, description = "Missing or invalid fields"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Profile owner is not the caller")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "profiles"
)]
pub async fn create_profile(
    user: Option<AuthenticatedUser>,
    mutations: web::Data<ProfileMutations>,
    form: web::Form<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    let input = parse_profile_form(&form)?;
    let profile = mutations.create_profile(&user, input).await?;
    Ok(HttpResponse::Created().json(profile))
}

#[utoipa::path(
    post,
    path = "/api/profiles/delete",
    request_body(
        content = HashMap<String, String>,
        content_type = "application/x-www-form-urlencoded",
        description = "id: the filament id; every profile of that filament is removed"
    ),
    responses(
        (status = 200, description = "Filament and its profiles deleted"),
        (status = 400, description = "Missing or invalid id"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller does not own every affected profile")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "profiles"
)]
pub async fn delete_profile(
    user: Option<AuthenticatedUser>,
    mutations: web::Data<ProfileMutations>,
    form: web::Form<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    let mut errors = Vec::new();
    let id = parse_uuid(&form, "id", &mut errors);
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors).into());
    }

    mutations.delete_profile(&user, id).await?;
    Ok(HttpResponse::Ok().json(json!({"message": "Filament profile deleted"})))
}

#[utoipa::path(
    post,
    path = "/api/profiles/{profile_id}/like",
    params(("profile_id" = Uuid, Path, description = "Filament profile ID")),
    responses(
        (status = 200, description = "Profile liked", body = LikeResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "profiles"
)]
pub async fn like_profile(
    path: web::Path<Uuid>,
    user: Option<AuthenticatedUser>,
    mutations: web::Data<ProfileMutations>,
) -> ActixResult<HttpResponse> {
    let profile_id = path.into_inner();
    let newly_liked = mutations.like_profile(&user, profile_id).await?;

    Ok(HttpResponse::Ok().json(LikeResponse {
        profile_id,
        liked: true,
        message: if newly_liked { "Profile liked" } else { "Already liked" }.to_string(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/profiles/{profile_id}/like",
    params(("profile_id" = Uuid, Path, description = "Filament profile ID")),
    responses(
        (status = 200, description = "Profile unliked", body = LikeResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "profiles"
)]
pub async fn unlike_profile(
    path: web::Path<Uuid>,
    user: Option<AuthenticatedUser>,
    mutations: web::Data<ProfileMutations>,
) -> ActixResult<HttpResponse> {
    let profile_id = path.into_inner();
    let removed = mutations.unlike_profile(&user, profile_id).await?;

    Ok(HttpResponse::Ok().json(LikeResponse {
        profile_id,
        liked: false,
        message: if removed { "Profile unliked" } else { "Not liked" }.to_string(),
    }))
}
