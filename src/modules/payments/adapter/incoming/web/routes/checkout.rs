use actix_web::{post, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::payments::application::use_cases::initiate_checkout::CheckoutInput;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    /// Course being paid for.
    pub course: Option<Uuid>,
    pub amount: Decimal,
}

#[utoipa::path(
    post,
    path = "/api/payments/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 201, description = "Pending payment with checkout_url"),
        (status = 400, description = "Missing course or non-positive amount"),
        (status = 404, description = "Course not found"),
        (status = 502, description = "Payment provider unavailable"),
    ),
    tag = "payments"
)]
#[post("/api/payments/checkout")]
pub async fn checkout_handler(
    user: AuthenticatedUser,
    req: web::Json<CheckoutRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .initiate_checkout_use_case
        .execute(
            user.user_id,
            CheckoutInput {
                course_id: req.course,
                amount: req.amount,
            },
        )
        .await
    {
        Ok(payment) => HttpResponse::Created().json(payment),
        Err(e) => e.to_response(),
    }
}
