use async_trait::async_trait;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutGatewayError {
    /// Amount does not convert cleanly to the provider's minor units.
    InvalidAmount,
    /// Transport failure or non-success response from the provider.
    Upstream(String),
}

/// Thin client for the external checkout provider. Two calls: register a
/// priced line item, then open a session the payer is redirected to.
/// Swapped for a fake in tests; nothing else in the crate talks to the
/// provider.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn register_priced_item(
        &self,
        name: &str,
        amount: Decimal,
        currency: &str,
    ) -> Result<String, CheckoutGatewayError>;

    /// Returns `(session_id, checkout_url)`.
    async fn open_checkout_session(
        &self,
        item_reference: &str,
        success_url: &str,
        cancel_url: &str,
    ) -> Result<(String, String), CheckoutGatewayError>;
}
