pub mod courses;
pub mod lessons;
pub mod toggle_subscription;

pub use courses::{
    create_course_handler, delete_course_handler, get_course_handler, list_courses_handler,
    update_course_handler,
};
pub use lessons::{
    create_lesson_handler, delete_lesson_handler, get_lesson_handler, list_lessons_handler,
    update_lesson_handler,
};
pub use toggle_subscription::toggle_subscription_handler;

pub use courses::{CreateCourseRequest, UpdateCourseRequest};
pub use lessons::{CreateLessonRequest, UpdateLessonRequest};
pub use toggle_subscription::{ToggleSubscriptionRequest, ToggleSubscriptionResponse};
