use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::access::{self, Action, Subject};
use crate::modules::catalog::application::domain::Course;
use crate::modules::catalog::application::ports::outgoing::course_repository::{
    CourseRepository, UpdateCourseData,
};
use crate::shared::error::CoreError;

/// An interface for course updates
#[async_trait]
pub trait IUpdateCourseUseCase: Send + Sync {
    async fn execute(
        &self,
        subject: &Subject,
        course_id: Uuid,
        data: UpdateCourseData,
    ) -> Result<Course, CoreError>;
}

pub struct UpdateCourseUseCase<C>
where
    C: CourseRepository,
{
    course_repository: C,
}

impl<C> UpdateCourseUseCase<C>
where
    C: CourseRepository,
{
    pub fn new(course_repository: C) -> Self {
        Self { course_repository }
    }
}

#[async_trait]
impl<C> IUpdateCourseUseCase for UpdateCourseUseCase<C>
where
    C: CourseRepository + Send + Sync,
{
    async fn execute(
        &self,
        subject: &Subject,
        course_id: Uuid,
        data: UpdateCourseData,
    ) -> Result<Course, CoreError> {
        let course = self
            .course_repository
            .find_by_id(course_id)
            .await
            .map_err(|e| e.into_core("Course"))?
            .ok_or(CoreError::NotFound("Course"))?;

        access::policy::authorize_content(subject, Action::Update, course.owner_id)?;

        if let Some(price) = data.price {
            if price < Decimal::ZERO {
                return Err(CoreError::validation("Price cannot be negative"));
            }
        }
        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(CoreError::validation("Course name cannot be empty"));
            }
        }

        self.course_repository
            .update(course_id, data)
            .await
            .map_err(|e| e.into_core("Course"))
    }
}
