use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::{self, Subject};
use crate::modules::catalog::application::domain::Lesson;
use crate::modules::catalog::application::ports::outgoing::lesson_repository::LessonRepository;
use crate::shared::error::CoreError;

/// An interface for lesson listing and lookup
#[async_trait]
pub trait IFetchLessonsUseCase: Send + Sync {
    async fn list(&self, subject: &Subject) -> Result<Vec<Lesson>, CoreError>;

    async fn get(&self, subject: &Subject, lesson_id: Uuid) -> Result<Lesson, CoreError>;
}

pub struct FetchLessonsUseCase<L>
where
    L: LessonRepository,
{
    lesson_repository: L,
}

impl<L> FetchLessonsUseCase<L>
where
    L: LessonRepository,
{
    pub fn new(lesson_repository: L) -> Self {
        Self { lesson_repository }
    }
}

#[async_trait]
impl<L> IFetchLessonsUseCase for FetchLessonsUseCase<L>
where
    L: LessonRepository + Send + Sync,
{
    async fn list(&self, subject: &Subject) -> Result<Vec<Lesson>, CoreError> {
        let lessons = if access::policy::can_view_all(subject) {
            self.lesson_repository.list_all().await
        } else {
            self.lesson_repository.list_owned_by(subject.id).await
        };

        lessons.map_err(|e| e.into_core("Lesson"))
    }

    async fn get(&self, subject: &Subject, lesson_id: Uuid) -> Result<Lesson, CoreError> {
        let lesson = self
            .lesson_repository
            .find_by_id(lesson_id)
            .await
            .map_err(|e| e.into_core("Lesson"))?
            .ok_or(CoreError::NotFound("Lesson"))?;

        if !access::policy::can_read(subject, lesson.owner_id) {
            return Err(CoreError::permission_denied(
                "You can only view your own lessons",
            ));
        }

        Ok(lesson)
    }
}
