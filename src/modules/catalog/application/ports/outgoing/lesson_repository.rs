use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::application::domain::Lesson;

use super::course_repository::CatalogRepositoryError;

#[derive(Debug, Clone)]
pub struct CreateLessonData {
    pub name: String,
    pub description: String,
    pub video_url: String,
    pub course_id: Uuid,
    pub owner_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLessonData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
}

#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn create(&self, data: CreateLessonData) -> Result<Lesson, CatalogRepositoryError>;

    async fn find_by_id(&self, lesson_id: Uuid)
        -> Result<Option<Lesson>, CatalogRepositoryError>;

    async fn list_all(&self) -> Result<Vec<Lesson>, CatalogRepositoryError>;

    async fn list_owned_by(&self, owner_id: Uuid) -> Result<Vec<Lesson>, CatalogRepositoryError>;

    async fn update(
        &self,
        lesson_id: Uuid,
        data: UpdateLessonData,
    ) -> Result<Lesson, CatalogRepositoryError>;

    async fn delete(&self, lesson_id: Uuid) -> Result<(), CatalogRepositoryError>;
}
