use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::application::domain::Course;
use crate::modules::catalog::application::ports::outgoing::course_repository::{
    CatalogRepositoryError, CourseRepository, CreateCourseData, UpdateCourseData,
};

use super::sea_orm_entity::courses::{
    ActiveModel as CourseActiveModel, Column as CourseColumn, Entity as CourseEntity,
    Model as CourseModel,
};
use super::sea_orm_entity::lessons::{Column as LessonColumn, Entity as LessonEntity};

#[derive(Clone, Debug)]
pub struct CourseRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub(crate) fn map_to_course(model: CourseModel) -> Course {
        Course {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            owner_id: model.owner_id,
            last_notification_sent: model.last_notification_sent.map(Into::into),
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
impl CourseRepository for CourseRepositoryPostgres {
    async fn create(&self, data: CreateCourseData) -> Result<Course, CatalogRepositoryError> {
        let active_course = CourseActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            price: Set(data.price),
            owner_id: Set(data.owner_id),
            last_notification_sent: Set(None),
            ..Default::default()
        };

        let inserted = active_course
            .insert(&*self.db)
            .await
            .map_err(|e| CatalogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_course(inserted))
    }

    async fn find_by_id(
        &self,
        course_id: Uuid,
    ) -> Result<Option<Course>, CatalogRepositoryError> {
        let found = CourseEntity::find_by_id(course_id)
            .one(&*self.db)
            .await
            .map_err(|e| CatalogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.map(Self::map_to_course))
    }

    async fn list_all(&self) -> Result<Vec<Course>, CatalogRepositoryError> {
        let courses = CourseEntity::find()
            .order_by_asc(CourseColumn::Name)
            .all(&*self.db)
            .await
            .map_err(|e| CatalogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(courses.into_iter().map(Self::map_to_course).collect())
    }

    async fn list_owned_by(&self, owner_id: Uuid) -> Result<Vec<Course>, CatalogRepositoryError> {
        let courses = CourseEntity::find()
            .filter(CourseColumn::OwnerId.eq(owner_id))
            .order_by_asc(CourseColumn::Name)
            .all(&*self.db)
            .await
            .map_err(|e| CatalogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(courses.into_iter().map(Self::map_to_course).collect())
    }

    async fn update(
        &self,
        course_id: Uuid,
        data: UpdateCourseData,
    ) -> Result<Course, CatalogRepositoryError> {
        let course = CourseEntity::find_by_id(course_id)
            .one(&*self.db)
            .await
            .map_err(|e| CatalogRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(CatalogRepositoryError::NotFound)?;

        let mut active_course: CourseActiveModel = course.into();
        if let Some(name) = data.name {
            active_course.name = Set(name);
        }
        if let Some(description) = data.description {
            active_course.description = Set(description);
        }
        if let Some(price) = data.price {
            active_course.price = Set(price);
        }

        let updated = active_course
            .update(&*self.db)
            .await
            .map_err(|e| CatalogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_course(updated))
    }

    async fn delete(&self, course_id: Uuid) -> Result<(), CatalogRepositoryError> {
        // RESTRICT foreign keys on payments and subscriptions veto the
        // delete; that veto surfaces as HasDependents.
        let result = CourseEntity::delete_by_id(course_id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CatalogRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn lessons_count(&self, course_id: Uuid) -> Result<u64, CatalogRepositoryError> {
        LessonEntity::find()
            .filter(LessonColumn::CourseId.eq(course_id))
            .count(&*self.db)
            .await
            .map_err(|e| CatalogRepositoryError::DatabaseError(e.to_string()))
    }
}
