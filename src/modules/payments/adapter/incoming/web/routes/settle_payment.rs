use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::payments::application::domain::PaymentStatus;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SettlePaymentRequest {
    pub status: PaymentStatus,
}

/// Staff-only guarded transition (`pending -> paid | failed`). A payment
/// already past the expected state answers 409 instead of moving.
#[patch("/api/payments/{id}")]
pub async fn settle_payment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<SettlePaymentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .settle_payment_use_case
        .execute(&user.subject(), path.into_inner(), req.status)
        .await
    {
        Ok(payment) => ApiResponse::success(payment),
        Err(e) => e.to_response(),
    }
}
