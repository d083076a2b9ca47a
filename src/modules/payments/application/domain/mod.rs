pub mod entities;
pub mod money;

pub use entities::{Payment, PaymentMethod, PaymentStatus};
