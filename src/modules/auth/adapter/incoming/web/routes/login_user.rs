use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::auth::application::use_cases::login_user::LoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Access and refresh tokens"),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account deactivated"),
    ),
    tag = "auth"
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .login_user_use_case
        .execute(&req.email, &req.password)
        .await
    {
        Ok(tokens) => ApiResponse::success(tokens),
        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(LoginError::AccountInactive) => {
            ApiResponse::forbidden("ACCOUNT_INACTIVE", "Account is deactivated")
        }
        Err(e) => {
            tracing::error!("login failed: {e}");
            ApiResponse::internal_error()
        }
    }
}
