use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::auth::application::use_cases::refresh_token::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "New access token"),
        (status = 401, description = "Invalid or expired refresh token"),
    ),
    tag = "auth"
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .refresh_token_use_case
        .execute(&req.refresh_token)
        .await
    {
        Ok(access_token) => ApiResponse::success(RefreshTokenResponse { access_token }),
        Err(RefreshTokenError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid or expired refresh token")
        }
        Err(RefreshTokenError::GenerationFailed(e)) => {
            tracing::error!("token generation failed: {e}");
            ApiResponse::internal_error()
        }
    }
}
