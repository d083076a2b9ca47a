pub mod checkout_gateway;
pub mod payment_repository;

pub use checkout_gateway::{CheckoutGateway, CheckoutGatewayError};
pub use payment_repository::{
    PaymentFilter, PaymentOrdering, PaymentRepository, PaymentRepositoryError,
};
