use actix_web::{delete, get, patch, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::ports::outgoing::user_repository::UpdateProfileData;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
}

#[get("/api/users")]
pub async fn list_users_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_users_use_case.list(&user.subject()).await {
        Ok(users) => ApiResponse::success(users),
        Err(e) => e.to_response(),
    }
}

#[get("/api/users/{id}")]
pub async fn get_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_users_use_case
        .get(&user.subject(), path.into_inner())
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => e.to_response(),
    }
}

#[patch("/api/users/{id}")]
pub async fn update_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let update = UpdateProfileData {
        first_name: req.first_name,
        last_name: req.last_name,
        phone: req.phone,
        city: req.city,
    };

    match data
        .update_user_use_case
        .execute(&user.subject(), path.into_inner(), update)
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => e.to_response(),
    }
}

/// Deactivates the account; payment history stays intact.
#[delete("/api/users/{id}")]
pub async fn deactivate_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .deactivate_user_use_case
        .execute(&user.subject(), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => e.to_response(),
    }
}
