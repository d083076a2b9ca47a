pub mod initiate_checkout;
pub mod list_payments;
pub mod settle_payment;
