use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::payments::application::domain::money::to_minor_units;
use crate::modules::payments::application::ports::outgoing::checkout_gateway::{
    CheckoutGateway, CheckoutGatewayError,
};

const STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Thin wrapper over Stripe's form-encoded REST API: product -> price ->
/// checkout session. No SDK; two endpoints and a bearer key.
pub struct StripeCheckoutGateway {
    http: reqwest::Client,
    secret_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct StripeObject {
    id: String,
}

#[derive(Deserialize)]
struct StripeSession {
    id: String,
    url: String,
}

impl StripeCheckoutGateway {
    pub fn new(secret_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key,
            base_url: STRIPE_API_BASE.to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var("STRIPE_SECRET_KEY").expect("STRIPE_SECRET_KEY not set"))
    }

    /// Point the client at a non-default API host (test doubles).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    async fn post_form<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        form: &[(&str, String)],
    ) -> Result<T, CheckoutGatewayError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.secret_key)
            .form(form)
            .send()
            .await
            .map_err(|e| CheckoutGatewayError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CheckoutGatewayError::Upstream(format!(
                "stripe returned {status}: {body}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CheckoutGatewayError::Upstream(e.to_string()))
    }
}

#[async_trait]
impl CheckoutGateway for StripeCheckoutGateway {
    async fn register_priced_item(
        &self,
        name: &str,
        amount: Decimal,
        currency: &str,
    ) -> Result<String, CheckoutGatewayError> {
        let unit_amount =
            to_minor_units(amount).map_err(|_| CheckoutGatewayError::InvalidAmount)?;

        let product: StripeObject = self
            .post_form("/v1/products", &[("name", name.to_string())])
            .await?;

        let price: StripeObject = self
            .post_form(
                "/v1/prices",
                &[
                    ("unit_amount", unit_amount.to_string()),
                    ("currency", currency.to_string()),
                    ("product", product.id),
                ],
            )
            .await?;

        Ok(price.id)
    }

    async fn open_checkout_session(
        &self,
        item_reference: &str,
        success_url: &str,
        cancel_url: &str,
    ) -> Result<(String, String), CheckoutGatewayError> {
        let session: StripeSession = self
            .post_form(
                "/v1/checkout/sessions",
                &[
                    ("mode", "payment".to_string()),
                    ("line_items[0][price]", item_reference.to_string()),
                    ("line_items[0][quantity]", "1".to_string()),
                    ("success_url", success_url.to_string()),
                    ("cancel_url", cancel_url.to_string()),
                ],
            )
            .await?;

        Ok((session.id, session.url))
    }
}
