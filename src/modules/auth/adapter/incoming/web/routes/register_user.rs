use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::auth::application::use_cases::register_user::{
    RegisterUserData, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(serde::Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub city: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created"),
        (status = 400, description = "Invalid email or weak password"),
        (status = 409, description = "Email already registered"),
    ),
    tag = "auth"
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let result = data
        .register_user_use_case
        .execute(RegisterUserData {
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            phone: req.phone,
            city: req.city,
        })
        .await;

    match result {
        Ok(profile) => ApiResponse::created(profile),
        Err(RegisterUserError::InvalidEmail) => {
            ApiResponse::bad_request("INVALID_EMAIL", "Email address is not valid")
        }
        Err(RegisterUserError::WeakPassword) => ApiResponse::bad_request(
            "WEAK_PASSWORD",
            "Password must be at least 8 characters long",
        ),
        Err(RegisterUserError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_TAKEN", "Email already registered")
        }
        Err(RegisterUserError::HashingFailed(e)) => {
            tracing::error!("password hashing failed: {e}");
            ApiResponse::internal_error()
        }
        Err(RegisterUserError::RepositoryError(e)) => {
            tracing::error!("registration repository error: {e}");
            ApiResponse::internal_error()
        }
    }
}
