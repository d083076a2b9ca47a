use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::{self, Action, Subject};
use crate::modules::catalog::application::ports::outgoing::lesson_repository::LessonRepository;
use crate::shared::error::CoreError;

/// An interface for lesson deletion
#[async_trait]
pub trait IDeleteLessonUseCase: Send + Sync {
    async fn execute(&self, subject: &Subject, lesson_id: Uuid) -> Result<(), CoreError>;
}

pub struct DeleteLessonUseCase<L>
where
    L: LessonRepository,
{
    lesson_repository: L,
}

impl<L> DeleteLessonUseCase<L>
where
    L: LessonRepository,
{
    pub fn new(lesson_repository: L) -> Self {
        Self { lesson_repository }
    }
}

#[async_trait]
impl<L> IDeleteLessonUseCase for DeleteLessonUseCase<L>
where
    L: LessonRepository + Send + Sync,
{
    async fn execute(&self, subject: &Subject, lesson_id: Uuid) -> Result<(), CoreError> {
        let lesson = self
            .lesson_repository
            .find_by_id(lesson_id)
            .await
            .map_err(|e| e.into_core("Lesson"))?
            .ok_or(CoreError::NotFound("Lesson"))?;

        access::policy::authorize_content(subject, Action::Delete, lesson.owner_id)?;

        self.lesson_repository
            .delete(lesson_id)
            .await
            .map_err(|e| e.into_core("Lesson"))
    }
}
