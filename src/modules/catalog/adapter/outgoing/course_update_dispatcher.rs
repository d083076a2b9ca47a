use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, TransactionTrait,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::modules::catalog::application::ports::outgoing::course_update_notifier::{
    CourseUpdateNotifier, NotifyError, NotifyOutcome,
};
use crate::modules::email::application::ports::outgoing::EmailSender;

use super::sea_orm_entity::courses::{
    Column as CourseColumn, Entity as CourseEntity,
};
use super::sea_orm_entity::subscriptions::{
    Column as SubscriptionColumn, Entity as SubscriptionEntity,
};

/// Repeated triggers inside this window collapse into one email.
const NOTIFICATION_WINDOW_HOURS: i64 = 4;

pub struct CourseUpdateDispatcher {
    db: Arc<DatabaseConnection>,
    email_sender: Arc<dyn EmailSender>,
}

impl CourseUpdateDispatcher {
    pub fn new(db: Arc<DatabaseConnection>, email_sender: Arc<dyn EmailSender>) -> Self {
        Self { db, email_sender }
    }

    fn map_db_err(e: sea_orm::DbErr) -> NotifyError {
        NotifyError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl CourseUpdateNotifier for CourseUpdateDispatcher {
    async fn notify(&self, course_id: Uuid) -> Result<NotifyOutcome, NotifyError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        // The exclusive row lock makes read-check-send-stamp one critical
        // section; two workers cannot both pass the window check. The lock
        // is held across the send so the stamp lands only after delivery.
        let course = CourseEntity::find_by_id(course_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(Self::map_db_err)?;

        let Some(course) = course else {
            // Deleted between enqueue and execution; nothing to do.
            return Ok(NotifyOutcome::CourseVanished);
        };

        let now = Utc::now();
        if let Some(last_sent) = course.last_notification_sent {
            let last_sent: chrono::DateTime<Utc> = last_sent.into();
            if last_sent > now - Duration::hours(NOTIFICATION_WINDOW_HOURS) {
                return Ok(NotifyOutcome::Suppressed);
            }
        }

        let subscriptions = SubscriptionEntity::find()
            .filter(SubscriptionColumn::CourseId.eq(course_id))
            .all(&txn)
            .await
            .map_err(Self::map_db_err)?;

        let subscriber_ids: Vec<Uuid> = subscriptions.iter().map(|s| s.user_id).collect();

        let mut recipients: BTreeSet<String> = BTreeSet::new();
        if !subscriber_ids.is_empty() {
            let users = UserEntity::find()
                .filter(UserColumn::Id.is_in(subscriber_ids))
                .all(&txn)
                .await
                .map_err(Self::map_db_err)?;

            recipients.extend(
                users
                    .into_iter()
                    .map(|u| u.email)
                    .filter(|email| !email.is_empty()),
            );
        }

        let recipients: Vec<String> = recipients.into_iter().collect();

        if !recipients.is_empty() {
            let subject = format!("Course \"{}\" updated", course.name);
            let body = format!("The course \"{}\" has new updates.", course.name);

            // A transport failure aborts the transaction: no stamp, so the
            // next trigger retries the whole batch.
            self.email_sender
                .send_batch(&recipients, &subject, &body)
                .await
                .map_err(NotifyError::EmailTransport)?;
        }

        CourseEntity::update_many()
            .col_expr(
                CourseColumn::LastNotificationSent,
                Expr::value(Some(now)),
            )
            .filter(CourseColumn::Id.eq(course_id))
            .exec(&txn)
            .await
            .map_err(Self::map_db_err)?;

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(NotifyOutcome::Sent {
            recipients: recipients.len(),
        })
    }
}
