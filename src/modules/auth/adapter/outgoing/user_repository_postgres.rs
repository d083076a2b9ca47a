use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::User;
use crate::modules::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UpdateProfileData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> User {
        User {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            first_name: model.first_name,
            last_name: model.last_name,
            phone: model.phone,
            city: model.city,
            is_staff: model.is_staff,
            is_moderator: model.is_moderator,
            is_active: model.is_active,
            last_login: model.last_login.map(Into::into),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }

    fn map_db_err(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::EmailAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            phone: Set(data.phone),
            city: Set(data.city),
            is_staff: Set(false),
            is_moderator: Set(false),
            is_active: Set(true),
            last_login: Set(None),
            ..Default::default()
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(Self::map_to_user(inserted))
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        let found = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.map(Self::map_to_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let found = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.map(Self::map_to_user))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let users = UserEntity::find()
            .order_by_asc(UserColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(users.into_iter().map(Self::map_to_user).collect())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<User, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        if let Some(first_name) = data.first_name {
            active_user.first_name = Set(first_name);
        }
        if let Some(last_name) = data.last_name {
            active_user.last_name = Set(last_name);
        }
        if let Some(phone) = data.phone {
            active_user.phone = Set(Some(phone));
        }
        if let Some(city) = data.city {
            active_user.city = Set(Some(city));
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_user(updated))
    }

    async fn set_last_login(
        &self,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let touched = UserEntity::update_many()
            .col_expr(UserColumn::LastLogin, Expr::value(Some(at)))
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if touched.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }

    async fn deactivate(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.is_active = Set(false);

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn deactivate_stale(&self, cutoff: Duration) -> Result<u64, UserRepositoryError> {
        let threshold = Utc::now() - cutoff;

        // Single bulk update: already-inactive rows never qualify, which is
        // what makes repeated runs a no-op.
        let result = UserEntity::update_many()
            .col_expr(UserColumn::IsActive, Expr::value(false))
            .filter(UserColumn::IsActive.eq(true))
            .filter(
                Condition::any()
                    .add(UserColumn::LastLogin.lt(threshold))
                    .add(UserColumn::LastLogin.is_null()),
            )
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected)
    }
}
