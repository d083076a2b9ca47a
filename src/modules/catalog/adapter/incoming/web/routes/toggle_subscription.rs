use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ToggleSubscriptionRequest {
    pub course_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ToggleSubscriptionResponse {
    pub message: String,
    pub course_id: Uuid,
    pub is_subscribed: bool,
}

#[utoipa::path(
    post,
    path = "/api/subscriptions/toggle",
    request_body = ToggleSubscriptionRequest,
    responses(
        (status = 201, description = "Subscription added", body = ToggleSubscriptionResponse),
        (status = 200, description = "Subscription removed", body = ToggleSubscriptionResponse),
        (status = 400, description = "course_id missing"),
        (status = 404, description = "Course not found"),
    ),
    tag = "subscriptions"
)]
#[post("/api/subscriptions/toggle")]
pub async fn toggle_subscription_handler(
    user: AuthenticatedUser,
    req: web::Json<ToggleSubscriptionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(course_id) = req.course_id else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "course_id is required");
    };

    match data
        .toggle_subscription_use_case
        .execute(user.user_id, course_id)
        .await
    {
        Ok(result) if result.is_subscribed => HttpResponse::Created().json(
            ToggleSubscriptionResponse {
                message: "Subscribed to course".to_string(),
                course_id: result.course_id,
                is_subscribed: true,
            },
        ),
        Ok(result) => HttpResponse::Ok().json(ToggleSubscriptionResponse {
            message: "Unsubscribed from course".to_string(),
            course_id: result.course_id,
            is_subscribed: false,
        }),
        Err(e) => e.to_response(),
    }
}
