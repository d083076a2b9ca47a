pub use sea_orm_migration::prelude::*;

mod m20260310_091500_create_users_table;
mod m20260310_114500_create_courses_table;
mod m20260310_121000_create_lessons_table;
mod m20260311_101500_create_subscriptions_table;
mod m20260311_154500_create_payments_table;
mod m20260405_120000_add_course_notification_timestamp;
mod m20260407_143000_add_payment_checkout_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260310_091500_create_users_table::Migration),
            Box::new(m20260310_114500_create_courses_table::Migration),
            Box::new(m20260310_121000_create_lessons_table::Migration),
            Box::new(m20260311_101500_create_subscriptions_table::Migration),
            Box::new(m20260311_154500_create_payments_table::Migration),
            Box::new(m20260405_120000_add_course_notification_timestamp::Migration),
            Box::new(m20260407_143000_add_payment_checkout_columns::Migration),
        ]
    }
}
