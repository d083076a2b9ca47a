pub mod entities;
pub mod video_url;

pub use entities::{Course, CourseDetail, Lesson};
