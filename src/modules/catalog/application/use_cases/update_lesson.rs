use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::{self, Action, Subject};
use crate::modules::catalog::application::domain::video_url::validate_video_url;
use crate::modules::catalog::application::domain::Lesson;
use crate::modules::catalog::application::ports::outgoing::lesson_repository::{
    LessonRepository, UpdateLessonData,
};
use crate::shared::error::CoreError;

/// An interface for lesson updates
#[async_trait]
pub trait IUpdateLessonUseCase: Send + Sync {
    async fn execute(
        &self,
        subject: &Subject,
        lesson_id: Uuid,
        data: UpdateLessonData,
    ) -> Result<Lesson, CoreError>;
}

pub struct UpdateLessonUseCase<L>
where
    L: LessonRepository,
{
    lesson_repository: L,
}

impl<L> UpdateLessonUseCase<L>
where
    L: LessonRepository,
{
    pub fn new(lesson_repository: L) -> Self {
        Self { lesson_repository }
    }
}

#[async_trait]
impl<L> IUpdateLessonUseCase for UpdateLessonUseCase<L>
where
    L: LessonRepository + Send + Sync,
{
    async fn execute(
        &self,
        subject: &Subject,
        lesson_id: Uuid,
        data: UpdateLessonData,
    ) -> Result<Lesson, CoreError> {
        let lesson = self
            .lesson_repository
            .find_by_id(lesson_id)
            .await
            .map_err(|e| e.into_core("Lesson"))?
            .ok_or(CoreError::NotFound("Lesson"))?;

        access::policy::authorize_content(subject, Action::Update, lesson.owner_id)?;

        if let Some(video_url) = &data.video_url {
            validate_video_url(video_url)?;
        }
        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(CoreError::validation("Lesson name cannot be empty"));
            }
        }

        self.lesson_repository
            .update(lesson_id, data)
            .await
            .map_err(|e| e.into_core("Lesson"))
    }
}
