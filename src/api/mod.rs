pub mod auth;
pub mod profile;
pub mod protected;

use crate::auth::require_session;
use crate::error::FieldError;
use crate::models::{
    AuthResponse, LikeResponse, LoginRequest, ProfilePage, ProfileQuery, ProfileView,
    SignupRequest, UserResponse,
};
use actix_web::{middleware::from_fn, web};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth endpoints
        auth::signup,
        auth::login,
        // Profile endpoints
        profile::list_profiles,
        profile::create_profile,
        profile::delete_profile,
        profile::like_profile,
        profile::unlike_profile,
        // Session-guarded endpoints
        protected::me,
    ),
    components(schemas(
        // Auth schemas
        SignupRequest,
        LoginRequest,
        AuthResponse,
        UserResponse,
        // Profile schemas
        ProfileView,
        ProfilePage,
        ProfileQuery,
        LikeResponse,
        FieldError,
    )),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "profiles", description = "Filament profile catalogue"),
        (name = "protected", description = "Endpoints that require a session"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

use utoipa::Modify;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

/// Route table shared by the server and the integration tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(auth::signup))
                    .route("/login", web::post().to(auth::login)),
            )
            .service(
                web::scope("/profiles")
                    .route("", web::get().to(profile::list_profiles))
                    .route("", web::post().to(profile::create_profile))
                    .route("/delete", web::post().to(profile::delete_profile))
                    .route("/{profile_id}/like", web::post().to(profile::like_profile))
                    .route("/{profile_id}/like", web::delete().to(profile::unlike_profile)),
            ),
    )
    .service(
        web::scope("/protected")
            .wrap(from_fn(require_session))
            .route("/me", web::get().to(protected::me)),
    );
}
