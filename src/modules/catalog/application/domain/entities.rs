use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub owner_id: Option<Uuid>,
    #[serde(skip)]
    pub last_notification_sent: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Lesson {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub video_url: String,
    pub course_id: Uuid,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detail view of a course, enriched per requesting user.
/// `is_subscribed` is always false for anonymous callers.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub lessons_count: u64,
    pub is_subscribed: bool,
}
