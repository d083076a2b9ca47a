pub mod payment_repository_postgres;
pub mod sea_orm_entity;
pub mod stripe_gateway;
