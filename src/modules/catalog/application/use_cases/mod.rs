pub mod create_course;
pub mod create_lesson;
pub mod delete_course;
pub mod delete_lesson;
pub mod fetch_courses;
pub mod fetch_lessons;
pub mod toggle_subscription;
pub mod update_course;
pub mod update_lesson;
