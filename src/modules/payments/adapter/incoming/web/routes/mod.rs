pub mod checkout;
pub mod list_payments;
pub mod settle_payment;

pub use checkout::checkout_handler;
pub use list_payments::list_payments_handler;
pub use settle_payment::settle_payment_handler;

pub use checkout::CheckoutRequest;
pub use settle_payment::SettlePaymentRequest;
