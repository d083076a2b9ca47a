use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::application::domain::Lesson;
use crate::modules::catalog::application::ports::outgoing::course_repository::CatalogRepositoryError;
use crate::modules::catalog::application::ports::outgoing::lesson_repository::{
    CreateLessonData, LessonRepository, UpdateLessonData,
};

use super::sea_orm_entity::lessons::{
    ActiveModel as LessonActiveModel, Column as LessonColumn, Entity as LessonEntity,
    Model as LessonModel,
};

#[derive(Clone, Debug)]
pub struct LessonRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LessonRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_lesson(model: LessonModel) -> Lesson {
        Lesson {
            id: model.id,
            name: model.name,
            description: model.description,
            video_url: model.video_url,
            course_id: model.course_id,
            owner_id: model.owner_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }

    fn map_db_err(e: sea_orm::DbErr) -> CatalogRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23503") || err_str.contains("foreign key constraint") {
            return CatalogRepositoryError::HasDependents;
        }
        CatalogRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl LessonRepository for LessonRepositoryPostgres {
    async fn create(&self, data: CreateLessonData) -> Result<Lesson, CatalogRepositoryError> {
        let active_lesson = LessonActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            video_url: Set(data.video_url),
            course_id: Set(data.course_id),
            owner_id: Set(data.owner_id),
            ..Default::default()
        };

        let inserted = active_lesson
            .insert(&*self.db)
            .await
            .map_err(|e| CatalogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_lesson(inserted))
    }

    async fn find_by_id(
        &self,
        lesson_id: Uuid,
    ) -> Result<Option<Lesson>, CatalogRepositoryError> {
        let found = LessonEntity::find_by_id(lesson_id)
            .one(&*self.db)
            .await
            .map_err(|e| CatalogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.map(Self::map_to_lesson))
    }

    async fn list_all(&self) -> Result<Vec<Lesson>, CatalogRepositoryError> {
        let lessons = LessonEntity::find()
            .order_by_asc(LessonColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| CatalogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(lessons.into_iter().map(Self::map_to_lesson).collect())
    }

    async fn list_owned_by(&self, owner_id: Uuid) -> Result<Vec<Lesson>, CatalogRepositoryError> {
        let lessons = LessonEntity::find()
            .filter(LessonColumn::OwnerId.eq(owner_id))
            .order_by_asc(LessonColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| CatalogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(lessons.into_iter().map(Self::map_to_lesson).collect())
    }

    async fn update(
        &self,
        lesson_id: Uuid,
        data: UpdateLessonData,
    ) -> Result<Lesson, CatalogRepositoryError> {
        let lesson = LessonEntity::find_by_id(lesson_id)
            .one(&*self.db)
            .await
            .map_err(|e| CatalogRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(CatalogRepositoryError::NotFound)?;

        let mut active_lesson: LessonActiveModel = lesson.into();
        if let Some(name) = data.name {
            active_lesson.name = Set(name);
        }
        if let Some(description) = data.description {
            active_lesson.description = Set(description);
        }
        if let Some(video_url) = data.video_url {
            active_lesson.video_url = Set(video_url);
        }

        let updated = active_lesson
            .update(&*self.db)
            .await
            .map_err(|e| CatalogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_lesson(updated))
    }

    async fn delete(&self, lesson_id: Uuid) -> Result<(), CatalogRepositoryError> {
        let result = LessonEntity::delete_by_id(lesson_id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CatalogRepositoryError::NotFound);
        }

        Ok(())
    }
}
