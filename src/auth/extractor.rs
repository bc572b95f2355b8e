use crate::auth::{Actor, Claims, CurrentUser};
use crate::config::Config;
use crate::entities::user::Role;
use actix_web::{web, Error, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Reads and verifies the bearer token of `req`, if any.
    pub fn from_bearer(req: &HttpRequest) -> Option<Self> {
        let header_str = req.headers().get("Authorization")?.to_str().ok()?;
        let token = header_str.strip_prefix("Bearer ")?;
        let config = req.app_data::<web::Data<Config>>()?;

        match Claims::verify(token, &config.jwt.secret) {
            Ok(claims) => Some(AuthenticatedUser {
                user_id: claims.user_id()?,
                email: claims.email,
                role: claims.role,
            }),
            Err(e) => {
                log::debug!("Rejected session token: {:?}", e);
                None
            }
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(AuthenticatedUser::from_bearer(req).ok_or_else(|| {
            actix_web::error::ErrorUnauthorized("Missing or invalid authorization header")
        }))
    }
}

impl CurrentUser for AuthenticatedUser {
    fn current_user(&self) -> Option<Actor> {
        Some(Actor {
            user_id: self.user_id,
            role: self.role,
        })
    }
}
