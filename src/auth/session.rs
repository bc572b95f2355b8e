use crate::auth::AuthenticatedUser;
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{Error, HttpResponse};
use serde_json::json;

/// Guards a scope: requests without a valid session token are answered with
/// 401 before reaching any handler. Only token presence and validity are
/// checked here; per-operation authorization belongs to the services.
pub async fn require_session<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    if AuthenticatedUser::from_bearer(req.request()).is_none() {
        log::debug!("No session for protected path {}", req.path());
        let (req, _payload) = req.into_parts();
        let res = HttpResponse::Unauthorized()
            .json(json!({"error": "Authentication required"}))
            .map_into_right_body();
        return Ok(ServiceResponse::new(req, res));
    }

    next.call(req).await.map(ServiceResponse::map_into_left_body)
}
