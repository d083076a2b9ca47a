pub mod entities;

pub use entities::{User, UserProfile};
