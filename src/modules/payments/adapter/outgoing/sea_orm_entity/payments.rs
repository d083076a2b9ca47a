use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Option<Uuid>,
    pub lesson_id: Option<Uuid>,
    pub amount: Decimal,
    pub method: String,
    pub status: String,
    pub provider_session_id: Option<String>,
    pub checkout_url: Option<String>,
    pub paid_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::catalog::adapter::outgoing::sea_orm_entity::courses::Entity",
        from = "Column::CourseId",
        to = "crate::modules::catalog::adapter::outgoing::sea_orm_entity::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}
