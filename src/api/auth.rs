use crate::auth::{hash_password, verify_password, Claims};
use crate::config::Config;
use crate::db::DbPool;
use crate::entities::user;
use crate::error::{FieldError, ServiceError};
use crate::models::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
use actix_web::{web, HttpResponse, Result as ActixResult};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait, QueryFilter, Set};
use serde_json::json;

const MIN_PASSWORD_LEN: usize = 8;

fn validate_signup(req: &SignupRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if req.name.trim().is_empty() {
        errors.push(FieldError::new("name", "is required"));
    }

    let email = req.email.trim();
    let well_formed = email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.'))
        .unwrap_or(false);
    if !well_formed {
        errors.push(FieldError::new("email", "must be a valid email address"));
    }

    if req.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            format!("must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }

    errors
}

async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<user::Model>, ServiceError> {
    user::Entity::find()
        .filter(Expr::expr(Func::lower(Expr::col(user::Column::Email))).eq(email.trim().to_lowercase()))
        .one(pool)
        .await
        .map_err(|e| {
            log::error!("Database error looking up user: {:?}", e);
            ServiceError::Storage("Internal server error")
        })
}

fn issue_token(user: &user::Model, config: &Config) -> Result<String, ServiceError> {
    Claims::for_user(user, config.jwt.expiration_hours)
        .sign(&config.jwt.secret)
        .map_err(|e| {
            log::error!("Failed to sign session token: {:?}", e);
            ServiceError::Storage("Internal server error")
        })
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created successfully", body = AuthResponse),
        (status = 400, description = "Bad request"),
        (status = 409, description = "User already exists")
    ),
    tag = "auth"
)]
pub async fn signup(
    req: web::Json<SignupRequest>,
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
) -> ActixResult<HttpResponse> {
    let errors = validate_signup(&req);
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors).into());
    }

    if find_by_email(pool.get_ref(), &req.email).await?.is_some() {
        return Ok(HttpResponse::Conflict().json(json!({
            "error": "User with this email already exists"
        })));
    }

    let password_hash = hash_password(&req.password).map_err(|e| {
        log::error!("{:?}", e);
        ServiceError::Storage("Internal server error")
    })?;

    let mut new_user = user::ActiveModel::new();
    new_user.name = Set(Some(req.name.trim().to_string()));
    new_user.email = Set(Some(req.email.trim().to_string()));
    new_user.password_hash = Set(Some(password_hash));

    let user = new_user.insert(pool.get_ref()).await.map_err(|e| {
        log::error!("Database error creating user: {:?}", e);
        ServiceError::Storage("Internal server error")
    })?;

    log::info!("Signed up user {}", user.id);
    let token = issue_token(&user, &config)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 404, description = "User not found")
    ),
    tag = "auth"
)]
pub async fn login(
    req: web::Json<LoginRequest>,
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
) -> ActixResult<HttpResponse> {
    let user = match find_by_email(pool.get_ref(), &req.email).await? {
        Some(u) => u,
        None => {
            return Ok(HttpResponse::NotFound().json(json!({
                "error": "User not found"
            })));
        }
    };

    // Accounts created through an external provider have no password.
    let is_valid = match &user.password_hash {
        Some(hash) => verify_password(&req.password, hash).unwrap_or_else(|e| {
            log::warn!("Could not verify password of user {}: {:?}", user.id, e);
            false
        }),
        None => false,
    };

    if !is_valid {
        return Ok(HttpResponse::Unauthorized().json(json!({
            "error": "Invalid credentials"
        })));
    }

    let token = issue_token(&user, &config)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}
