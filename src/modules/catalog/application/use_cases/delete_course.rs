use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::{self, Action, Subject};
use crate::modules::catalog::application::ports::outgoing::course_repository::CourseRepository;
use crate::shared::error::CoreError;

/// An interface for course deletion
#[async_trait]
pub trait IDeleteCourseUseCase: Send + Sync {
    async fn execute(&self, subject: &Subject, course_id: Uuid) -> Result<(), CoreError>;
}

pub struct DeleteCourseUseCase<C>
where
    C: CourseRepository,
{
    course_repository: C,
}

impl<C> DeleteCourseUseCase<C>
where
    C: CourseRepository,
{
    pub fn new(course_repository: C) -> Self {
        Self { course_repository }
    }
}

#[async_trait]
impl<C> IDeleteCourseUseCase for DeleteCourseUseCase<C>
where
    C: CourseRepository + Send + Sync,
{
    async fn execute(&self, subject: &Subject, course_id: Uuid) -> Result<(), CoreError> {
        let course = self
            .course_repository
            .find_by_id(course_id)
            .await
            .map_err(|e| e.into_core("Course"))?
            .ok_or(CoreError::NotFound("Course"))?;

        access::policy::authorize_content(subject, Action::Delete, course.owner_id)?;

        // Payments and subscriptions keep the course alive; the storage
        // layer's RESTRICT constraints surface as Conflict.
        self.course_repository
            .delete(course_id)
            .await
            .map_err(|e| e.into_core("Course"))
    }
}
