use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::catalog::application::ports::outgoing::course_repository::UpdateCourseData;
use crate::modules::catalog::application::use_cases::create_course::CreateCourseInput;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub price: Decimal,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

#[get("/api/courses")]
pub async fn list_courses_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_courses_use_case.list(&user.subject()).await {
        Ok(courses) => ApiResponse::success(courses),
        Err(e) => e.to_response(),
    }
}

/// Detail is open to anonymous readers; `is_subscribed` is derived from
/// the caller when one is present.
#[get("/api/courses/{id}")]
pub async fn get_course_handler(
    user: Option<AuthenticatedUser>,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let subject = user.map(|u| u.subject());

    match data
        .fetch_courses_use_case
        .detail(subject.as_ref(), path.into_inner())
        .await
    {
        Ok(detail) => ApiResponse::success(detail),
        Err(e) => e.to_response(),
    }
}

#[post("/api/courses")]
pub async fn create_course_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateCourseRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data
        .create_course_use_case
        .execute(
            &user.subject(),
            CreateCourseInput {
                name: req.name,
                description: req.description,
                price: req.price,
            },
        )
        .await
    {
        Ok(course) => HttpResponse::Created().json(course),
        Err(e) => e.to_response(),
    }
}

#[patch("/api/courses/{id}")]
pub async fn update_course_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCourseRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = path.into_inner();
    let req = req.into_inner();
    let update = UpdateCourseData {
        name: req.name,
        description: req.description,
        price: req.price,
    };

    match data
        .update_course_use_case
        .execute(&user.subject(), course_id, update)
        .await
    {
        Ok(course) => {
            // Fan-out happens off the request path; the dispatcher applies
            // its own rate limit.
            let notifier = data.course_update_notifier.clone();
            tokio::spawn(async move {
                if let Err(e) = notifier.notify(course_id).await {
                    tracing::warn!("course update notification failed: {e:?}");
                }
            });

            ApiResponse::success(course)
        }
        Err(e) => e.to_response(),
    }
}

#[delete("/api/courses/{id}")]
pub async fn delete_course_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .delete_course_use_case
        .execute(&user.subject(), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => e.to_response(),
    }
}
