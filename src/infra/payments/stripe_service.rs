use crate::domain::ports::{PaymentIntent, PaymentService};
use crate::error::AppError;
use async_trait::async_trait;
use tracing::{error, info};

/// Thin client for the Stripe payment-intents API. Only the two calls the
/// booking flow needs: create an intent and read one back.
pub struct HttpStripeService {
    client: reqwest::Client,
    api_url: String,
    secret_key: String,
}

impl HttpStripeService {
    pub fn new(api_url: String, secret_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            secret_key,
        }
    }
}

#[async_trait]
impl PaymentService for HttpStripeService {
    async fn create_intent(&self, amount_cents: i64, currency: &str, booking_id: &str) -> Result<PaymentIntent, AppError> {
        let params = [
            ("amount", amount_cents.to_string()),
            ("currency", currency.to_string()),
            ("metadata[booking_id]", booking_id.to_string()),
        ];

        let response = self.client
            .post(format!("{}/payment_intents", self.api_url))
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::Dependency(format!("payment processor unreachable: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Payment intent creation failed ({}): {}", status, body);
            return Err(AppError::Dependency(format!("payment intent creation failed: {status}")));
        }

        let intent: PaymentIntent = response.json().await
            .map_err(|e| AppError::Dependency(format!("invalid processor response: {e}")))?;

        info!("Payment intent created: {}", intent.id);
        Ok(intent)
    }

    async fn retrieve_intent(&self, intent_id: &str) -> Result<PaymentIntent, AppError> {
        let response = self.client
            .get(format!("{}/payment_intents/{}", self.api_url, intent_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| AppError::Dependency(format!("payment processor unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Dependency(format!(
                "payment intent lookup failed: {}",
                response.status()
            )));
        }

        response.json().await
            .map_err(|e| AppError::Dependency(format!("invalid processor response: {e}")))
    }
}
