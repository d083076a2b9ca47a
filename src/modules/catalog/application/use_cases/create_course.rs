use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::modules::access::{self, Action, Subject};
use crate::modules::catalog::application::domain::Course;
use crate::modules::catalog::application::ports::outgoing::course_repository::{
    CourseRepository, CreateCourseData,
};
use crate::shared::error::CoreError;

#[derive(Debug, Clone)]
pub struct CreateCourseInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

/// An interface for course creation
#[async_trait]
pub trait ICreateCourseUseCase: Send + Sync {
    async fn execute(
        &self,
        subject: &Subject,
        input: CreateCourseInput,
    ) -> Result<Course, CoreError>;
}

pub struct CreateCourseUseCase<C>
where
    C: CourseRepository,
{
    course_repository: C,
}

impl<C> CreateCourseUseCase<C>
where
    C: CourseRepository,
{
    pub fn new(course_repository: C) -> Self {
        Self { course_repository }
    }
}

#[async_trait]
impl<C> ICreateCourseUseCase for CreateCourseUseCase<C>
where
    C: CourseRepository + Send + Sync,
{
    async fn execute(
        &self,
        subject: &Subject,
        input: CreateCourseInput,
    ) -> Result<Course, CoreError> {
        access::policy::authorize_content(subject, Action::Create, None)?;

        if input.name.trim().is_empty() {
            return Err(CoreError::validation("Course name cannot be empty"));
        }
        if input.price < Decimal::ZERO {
            return Err(CoreError::validation("Price cannot be negative"));
        }

        self.course_repository
            .create(CreateCourseData {
                name: input.name,
                description: input.description,
                price: input.price,
                owner_id: Some(subject.id),
            })
            .await
            .map_err(|e| e.into_core("Course"))
    }
}
