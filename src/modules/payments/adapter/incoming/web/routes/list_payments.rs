use actix_web::{get, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::payments::application::domain::PaymentMethod;
use crate::modules::payments::application::ports::outgoing::payment_repository::PaymentOrdering;
use crate::modules::payments::application::use_cases::list_payments::PaymentQuery;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ListPaymentsParams {
    pub course: Option<Uuid>,
    pub lesson: Option<Uuid>,
    pub method: Option<String>,
    /// `paid_at`, `-paid_at`, `amount` or `-amount`; default `-paid_at`.
    pub ordering: Option<String>,
}

fn parse_ordering(value: Option<&str>) -> PaymentOrdering {
    match value {
        Some("paid_at") => PaymentOrdering::PaidAtAsc,
        Some("amount") => PaymentOrdering::AmountAsc,
        Some("-amount") => PaymentOrdering::AmountDesc,
        _ => PaymentOrdering::PaidAtDesc,
    }
}

#[get("/api/payments")]
pub async fn list_payments_handler(
    user: AuthenticatedUser,
    params: web::Query<ListPaymentsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let method = match params.method.as_deref() {
        None => None,
        Some(raw) => match PaymentMethod::parse(raw) {
            Some(method) => Some(method),
            None => {
                return ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    "method must be one of cash, transfer, stripe",
                );
            }
        },
    };

    let query = PaymentQuery {
        course_id: params.course,
        lesson_id: params.lesson,
        method,
        ordering: parse_ordering(params.ordering.as_deref()),
    };

    match data
        .list_payments_use_case
        .execute(&user.subject(), query)
        .await
    {
        Ok(payments) => ApiResponse::success(payments),
        Err(e) => e.to_response(),
    }
}
