use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::catalog::application::ports::outgoing::lesson_repository::UpdateLessonData;
use crate::modules::catalog::application::use_cases::create_lesson::CreateLessonInput;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateLessonRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub video_url: String,
    /// Course the lesson belongs to.
    pub course: Uuid,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateLessonRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
}

#[get("/api/lessons")]
pub async fn list_lessons_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_lessons_use_case.list(&user.subject()).await {
        Ok(lessons) => ApiResponse::success(lessons),
        Err(e) => e.to_response(),
    }
}

#[get("/api/lessons/{id}")]
pub async fn get_lesson_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_lessons_use_case
        .get(&user.subject(), path.into_inner())
        .await
    {
        Ok(lesson) => ApiResponse::success(lesson),
        Err(e) => e.to_response(),
    }
}

#[post("/api/lessons")]
pub async fn create_lesson_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateLessonRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data
        .create_lesson_use_case
        .execute(
            &user.subject(),
            CreateLessonInput {
                name: req.name,
                description: req.description,
                video_url: req.video_url,
                course_id: req.course,
            },
        )
        .await
    {
        Ok(lesson) => HttpResponse::Created().json(lesson),
        Err(e) => e.to_response(),
    }
}

#[patch("/api/lessons/{id}")]
pub async fn update_lesson_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateLessonRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let update = UpdateLessonData {
        name: req.name,
        description: req.description,
        video_url: req.video_url,
    };

    match data
        .update_lesson_use_case
        .execute(&user.subject(), path.into_inner(), update)
        .await
    {
        Ok(lesson) => ApiResponse::success(lesson),
        Err(e) => e.to_response(),
    }
}

#[delete("/api/lessons/{id}")]
pub async fn delete_lesson_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .delete_lesson_use_case
        .execute(&user.subject(), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => e.to_response(),
    }
}
