pub mod course_repository_postgres;
pub mod course_update_dispatcher;
pub mod lesson_repository_postgres;
pub mod sea_orm_entity;
pub mod subscription_store_postgres;
