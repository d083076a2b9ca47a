use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::payments::application::domain::{Payment, PaymentMethod, PaymentStatus};
use crate::modules::payments::application::ports::outgoing::payment_repository::{
    PaymentFilter, PaymentOrdering, PaymentRepository, PaymentRepositoryError,
};

use super::sea_orm_entity::payments::{
    ActiveModel as PaymentActiveModel, Column as PaymentColumn, Entity as PaymentEntity,
    Model as PaymentModel,
};

#[derive(Clone, Debug)]
pub struct PaymentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PaymentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_payment(model: PaymentModel) -> Result<Payment, PaymentRepositoryError> {
        let method = PaymentMethod::parse(&model.method).ok_or_else(|| {
            PaymentRepositoryError::DatabaseError(format!(
                "unknown payment method in row: {}",
                model.method
            ))
        })?;
        let status = PaymentStatus::parse(&model.status).ok_or_else(|| {
            PaymentRepositoryError::DatabaseError(format!(
                "unknown payment status in row: {}",
                model.status
            ))
        })?;

        Ok(Payment {
            id: model.id,
            user_id: model.user_id,
            course_id: model.course_id,
            lesson_id: model.lesson_id,
            amount: model.amount,
            method,
            status,
            provider_session_id: model.provider_session_id,
            checkout_url: model.checkout_url,
            paid_at: model.paid_at.into(),
        })
    }

    async fn fetch(&self, payment_id: Uuid) -> Result<Payment, PaymentRepositoryError> {
        let model = PaymentEntity::find_by_id(payment_id)
            .one(&*self.db)
            .await
            .map_err(|e| PaymentRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(PaymentRepositoryError::NotFound)?;

        Self::map_to_payment(model)
    }
}

#[async_trait]
impl PaymentRepository for PaymentRepositoryPostgres {
    async fn create_pending_checkout(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        amount: Decimal,
    ) -> Result<Payment, PaymentRepositoryError> {
        let active_payment = PaymentActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            course_id: Set(Some(course_id)),
            lesson_id: Set(None),
            amount: Set(amount),
            method: Set(PaymentMethod::Stripe.as_str().to_string()),
            status: Set(PaymentStatus::Pending.as_str().to_string()),
            provider_session_id: Set(None),
            checkout_url: Set(None),
            ..Default::default()
        };

        let inserted = active_payment
            .insert(&*self.db)
            .await
            .map_err(|e| PaymentRepositoryError::DatabaseError(e.to_string()))?;

        Self::map_to_payment(inserted)
    }

    async fn attach_checkout_session(
        &self,
        payment_id: Uuid,
        session_id: &str,
        checkout_url: &str,
    ) -> Result<Payment, PaymentRepositoryError> {
        // Conditional write: only a pending row without a session yet takes
        // the update. A second attach hits zero rows and conflicts.
        let result = PaymentEntity::update_many()
            .col_expr(
                PaymentColumn::ProviderSessionId,
                Expr::value(Some(session_id.to_string())),
            )
            .col_expr(
                PaymentColumn::CheckoutUrl,
                Expr::value(Some(checkout_url.to_string())),
            )
            .filter(PaymentColumn::Id.eq(payment_id))
            .filter(PaymentColumn::Status.eq(PaymentStatus::Pending.as_str()))
            .filter(PaymentColumn::ProviderSessionId.is_null())
            .exec(&*self.db)
            .await
            .map_err(|e| PaymentRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(PaymentRepositoryError::StateConflict);
        }

        self.fetch(payment_id).await
    }

    async fn advance_status(
        &self,
        payment_id: Uuid,
        from: PaymentStatus,
        to: PaymentStatus,
    ) -> Result<Payment, PaymentRepositoryError> {
        let result = PaymentEntity::update_many()
            .col_expr(PaymentColumn::Status, Expr::value(to.as_str()))
            .filter(PaymentColumn::Id.eq(payment_id))
            .filter(PaymentColumn::Status.eq(from.as_str()))
            .exec(&*self.db)
            .await
            .map_err(|e| PaymentRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(PaymentRepositoryError::StateConflict);
        }

        self.fetch(payment_id).await
    }

    async fn list(&self, filter: PaymentFilter) -> Result<Vec<Payment>, PaymentRepositoryError> {
        let mut query = PaymentEntity::find();

        if let Some(user_id) = filter.user_id {
            query = query.filter(PaymentColumn::UserId.eq(user_id));
        }
        if let Some(course_id) = filter.course_id {
            query = query.filter(PaymentColumn::CourseId.eq(course_id));
        }
        if let Some(lesson_id) = filter.lesson_id {
            query = query.filter(PaymentColumn::LessonId.eq(lesson_id));
        }
        if let Some(method) = filter.method {
            query = query.filter(PaymentColumn::Method.eq(method.as_str()));
        }

        query = match filter.ordering {
            PaymentOrdering::PaidAtDesc => query.order_by_desc(PaymentColumn::PaidAt),
            PaymentOrdering::PaidAtAsc => query.order_by_asc(PaymentColumn::PaidAt),
            PaymentOrdering::AmountDesc => query.order_by_desc(PaymentColumn::Amount),
            PaymentOrdering::AmountAsc => query.order_by_asc(PaymentColumn::Amount),
        };

        let models = query
            .all(&*self.db)
            .await
            .map_err(|e| PaymentRepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::map_to_payment).collect()
    }
}
