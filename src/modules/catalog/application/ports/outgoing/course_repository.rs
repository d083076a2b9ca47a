use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::catalog::application::domain::Course;
use crate::shared::error::CoreError;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogRepositoryError {
    NotFound,
    /// Delete blocked by payments or subscriptions still pointing here.
    HasDependents,
    DatabaseError(String),
}

impl CatalogRepositoryError {
    pub fn into_core(self, entity: &'static str) -> CoreError {
        match self {
            CatalogRepositoryError::NotFound => CoreError::NotFound(entity),
            CatalogRepositoryError::HasDependents => CoreError::conflict(
                "Cannot delete: payments or subscriptions reference this record",
            ),
            CatalogRepositoryError::DatabaseError(msg) => CoreError::Repository(msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseData {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub owner_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCourseData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, data: CreateCourseData) -> Result<Course, CatalogRepositoryError>;

    async fn find_by_id(&self, course_id: Uuid)
        -> Result<Option<Course>, CatalogRepositoryError>;

    async fn list_all(&self) -> Result<Vec<Course>, CatalogRepositoryError>;

    async fn list_owned_by(&self, owner_id: Uuid) -> Result<Vec<Course>, CatalogRepositoryError>;

    async fn update(
        &self,
        course_id: Uuid,
        data: UpdateCourseData,
    ) -> Result<Course, CatalogRepositoryError>;

    async fn delete(&self, course_id: Uuid) -> Result<(), CatalogRepositoryError>;

    async fn lessons_count(&self, course_id: Uuid) -> Result<u64, CatalogRepositoryError>;
}
