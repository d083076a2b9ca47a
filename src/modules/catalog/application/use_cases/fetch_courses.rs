use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::access::{self, Subject};
use crate::modules::catalog::application::domain::{Course, CourseDetail};
use crate::modules::catalog::application::ports::outgoing::course_repository::CourseRepository;
use crate::modules::catalog::application::ports::outgoing::subscription_store::SubscriptionStore;
use crate::shared::error::CoreError;

/// An interface for course listing and detail
#[async_trait]
pub trait IFetchCoursesUseCase: Send + Sync {
    async fn list(&self, subject: &Subject) -> Result<Vec<Course>, CoreError>;

    /// Detail is readable anonymously; `is_subscribed` is derived for the
    /// requesting user and false without one.
    async fn detail(
        &self,
        subject: Option<&Subject>,
        course_id: Uuid,
    ) -> Result<CourseDetail, CoreError>;
}

pub struct FetchCoursesUseCase<C, S>
where
    C: CourseRepository,
    S: SubscriptionStore,
{
    course_repository: C,
    subscription_store: S,
}

impl<C, S> FetchCoursesUseCase<C, S>
where
    C: CourseRepository,
    S: SubscriptionStore,
{
    pub fn new(course_repository: C, subscription_store: S) -> Self {
        Self {
            course_repository,
            subscription_store,
        }
    }
}

#[async_trait]
impl<C, S> IFetchCoursesUseCase for FetchCoursesUseCase<C, S>
where
    C: CourseRepository + Send + Sync,
    S: SubscriptionStore + Send + Sync,
{
    async fn list(&self, subject: &Subject) -> Result<Vec<Course>, CoreError> {
        let courses = if access::policy::can_view_all(subject) {
            self.course_repository.list_all().await
        } else {
            self.course_repository.list_owned_by(subject.id).await
        };

        courses.map_err(|e| e.into_core("Course"))
    }

    async fn detail(
        &self,
        subject: Option<&Subject>,
        course_id: Uuid,
    ) -> Result<CourseDetail, CoreError> {
        let course = self
            .course_repository
            .find_by_id(course_id)
            .await
            .map_err(|e| e.into_core("Course"))?
            .ok_or(CoreError::NotFound("Course"))?;

        let lessons_count = self
            .course_repository
            .lessons_count(course_id)
            .await
            .map_err(|e| e.into_core("Course"))?;

        let is_subscribed = match subject {
            Some(subject) => self
                .subscription_store
                .is_subscribed(subject.id, course_id)
                .await
                .map_err(CoreError::from)?,
            None => false,
        };

        Ok(CourseDetail {
            course,
            lessons_count,
            is_subscribed,
        })
    }
}
