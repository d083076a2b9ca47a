use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::{self, Action, Subject};
use crate::modules::catalog::application::domain::video_url::validate_video_url;
use crate::modules::catalog::application::domain::Lesson;
use crate::modules::catalog::application::ports::outgoing::course_repository::CourseRepository;
use crate::modules::catalog::application::ports::outgoing::lesson_repository::{
    CreateLessonData, LessonRepository,
};
use crate::shared::error::CoreError;

#[derive(Debug, Clone)]
pub struct CreateLessonInput {
    pub name: String,
    pub description: String,
    pub video_url: String,
    pub course_id: Uuid,
}

/// An interface for lesson creation
#[async_trait]
pub trait ICreateLessonUseCase: Send + Sync {
    async fn execute(
        &self,
        subject: &Subject,
        input: CreateLessonInput,
    ) -> Result<Lesson, CoreError>;
}

pub struct CreateLessonUseCase<L, C>
where
    L: LessonRepository,
    C: CourseRepository,
{
    lesson_repository: L,
    course_repository: C,
}

impl<L, C> CreateLessonUseCase<L, C>
where
    L: LessonRepository,
    C: CourseRepository,
{
    pub fn new(lesson_repository: L, course_repository: C) -> Self {
        Self {
            lesson_repository,
            course_repository,
        }
    }
}

#[async_trait]
impl<L, C> ICreateLessonUseCase for CreateLessonUseCase<L, C>
where
    L: LessonRepository + Send + Sync,
    C: CourseRepository + Send + Sync,
{
    async fn execute(
        &self,
        subject: &Subject,
        input: CreateLessonInput,
    ) -> Result<Lesson, CoreError> {
        access::policy::authorize_content(subject, Action::Create, None)?;

        if input.name.trim().is_empty() {
            return Err(CoreError::validation("Lesson name cannot be empty"));
        }
        validate_video_url(&input.video_url)?;

        let course = self
            .course_repository
            .find_by_id(input.course_id)
            .await
            .map_err(|e| e.into_core("Course"))?;
        if course.is_none() {
            return Err(CoreError::NotFound("Course"));
        }

        self.lesson_repository
            .create(CreateLessonData {
                name: input.name,
                description: input.description,
                video_url: input.video_url,
                course_id: input.course_id,
                owner_id: Some(subject.id),
            })
            .await
            .map_err(|e| e.into_core("Lesson"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::application::use_cases::test_mocks::{
        course, InMemoryCourseRepo, InMemoryLessonRepo,
    };

    fn input(course_id: Uuid) -> CreateLessonInput {
        CreateLessonInput {
            name: "New lesson".to_string(),
            description: "text".to_string(),
            video_url: "https://www.youtube.com/watch?v=abc123".to_string(),
            course_id,
        }
    }

    fn regular(id: Uuid) -> Subject {
        Subject {
            id,
            is_staff: false,
            is_moderator: false,
        }
    }

    #[tokio::test]
    async fn test_create_lesson_as_user_allowed() {
        let me = Uuid::new_v4();
        let c = course(Some(me));
        let course_id = c.id;
        let use_case =
            CreateLessonUseCase::new(InMemoryLessonRepo::default(), InMemoryCourseRepo::with(vec![c]));

        let lesson = use_case.execute(&regular(me), input(course_id)).await.unwrap();
        assert_eq!(lesson.owner_id, Some(me));
        assert_eq!(lesson.course_id, course_id);
    }

    #[tokio::test]
    async fn test_create_lesson_as_moderator_forbidden() {
        let c = course(None);
        let course_id = c.id;
        let use_case =
            CreateLessonUseCase::new(InMemoryLessonRepo::default(), InMemoryCourseRepo::with(vec![c]));

        let moderator = Subject {
            id: Uuid::new_v4(),
            is_staff: false,
            is_moderator: true,
        };
        let result = use_case.execute(&moderator, input(course_id)).await;
        assert!(matches!(result, Err(CoreError::PermissionDenied(_))));
        assert!(use_case.lesson_repository.lessons.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_lesson_unknown_course() {
        let use_case =
            CreateLessonUseCase::new(InMemoryLessonRepo::default(), InMemoryCourseRepo::default());

        let result = use_case
            .execute(&regular(Uuid::new_v4()), input(Uuid::new_v4()))
            .await;
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_lesson_bad_video_url() {
        let c = course(None);
        let course_id = c.id;
        let use_case =
            CreateLessonUseCase::new(InMemoryLessonRepo::default(), InMemoryCourseRepo::with(vec![c]));

        let result = use_case
            .execute(
                &regular(Uuid::new_v4()),
                CreateLessonInput {
                    video_url: "https://vimeo.com/123".to_string(),
                    ..input(course_id)
                },
            )
            .await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }
}
