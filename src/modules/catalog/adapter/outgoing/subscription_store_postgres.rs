use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::application::ports::outgoing::subscription_store::{
    SubscriptionStore, SubscriptionStoreError, ToggleOutcome,
};

use super::sea_orm_entity::courses::Entity as CourseEntity;
use super::sea_orm_entity::subscriptions::{
    ActiveModel as SubscriptionActiveModel, Column as SubscriptionColumn,
    Entity as SubscriptionEntity,
};

#[derive(Clone, Debug)]
pub struct SubscriptionStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl SubscriptionStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> SubscriptionStoreError {
        SubscriptionStoreError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl SubscriptionStore for SubscriptionStorePostgres {
    async fn toggle(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<ToggleOutcome, SubscriptionStoreError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        // The course row lock serializes concurrent toggles for the same
        // pair; the (user_id, course_id) unique index backstops duplicates
        // regardless.
        let course = CourseEntity::find_by_id(course_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(Self::map_db_err)?;

        if course.is_none() {
            return Err(SubscriptionStoreError::CourseNotFound);
        }

        let existing = SubscriptionEntity::find()
            .filter(SubscriptionColumn::UserId.eq(user_id))
            .filter(SubscriptionColumn::CourseId.eq(course_id))
            .one(&txn)
            .await
            .map_err(Self::map_db_err)?;

        let outcome = match existing {
            Some(subscription) => {
                subscription.delete(&txn).await.map_err(Self::map_db_err)?;
                ToggleOutcome::Removed
            }
            None => {
                let active = SubscriptionActiveModel {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    course_id: Set(course_id),
                    ..Default::default()
                };
                active.insert(&txn).await.map_err(Self::map_db_err)?;
                ToggleOutcome::Created
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(outcome)
    }

    async fn is_subscribed(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<bool, SubscriptionStoreError> {
        let existing = SubscriptionEntity::find()
            .filter(SubscriptionColumn::UserId.eq(user_id))
            .filter(SubscriptionColumn::CourseId.eq(course_id))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(existing.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::sea_orm_entity::courses::Model as CourseModel;
    use super::super::sea_orm_entity::subscriptions::Model as SubscriptionModel;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn course_model(id: Uuid) -> CourseModel {
        let now = Utc::now().fixed_offset();
        CourseModel {
            id,
            name: "Course 1".to_string(),
            description: "Desc".to_string(),
            price: Decimal::ZERO,
            owner_id: None,
            last_notification_sent: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn subscription_model(user_id: Uuid, course_id: Uuid) -> SubscriptionModel {
        SubscriptionModel {
            id: Uuid::new_v4(),
            user_id,
            course_id,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_toggle_removes_existing_subscription() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(course_id)]])
            .append_query_results(vec![vec![subscription_model(user_id, course_id)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let store = SubscriptionStorePostgres::new(Arc::new(db));

        let outcome = store.toggle(user_id, course_id).await.unwrap();
        assert_eq!(outcome, ToggleOutcome::Removed);
    }

    #[tokio::test]
    async fn test_toggle_creates_when_absent() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![course_model(course_id)]])
            .append_query_results(vec![Vec::<SubscriptionModel>::new()])
            .append_query_results(vec![vec![subscription_model(user_id, course_id)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();

        let store = SubscriptionStorePostgres::new(Arc::new(db));

        let outcome = store.toggle(user_id, course_id).await.unwrap();
        assert_eq!(outcome, ToggleOutcome::Created);
    }

    #[tokio::test]
    async fn test_toggle_unknown_course() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<CourseModel>::new()])
            .into_connection();

        let store = SubscriptionStorePostgres::new(Arc::new(db));

        let result = store.toggle(Uuid::new_v4(), Uuid::new_v4()).await;
        assert_eq!(result, Err(SubscriptionStoreError::CourseNotFound));
    }

    #[tokio::test]
    async fn test_is_subscribed_reflects_row_existence() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![subscription_model(user_id, course_id)]])
            .append_query_results(vec![Vec::<SubscriptionModel>::new()])
            .into_connection();

        let store = SubscriptionStorePostgres::new(Arc::new(db));

        assert!(store.is_subscribed(user_id, course_id).await.unwrap());
        assert!(!store.is_subscribed(user_id, course_id).await.unwrap());
    }
}
