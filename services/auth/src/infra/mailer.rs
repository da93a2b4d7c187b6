use serde::Serialize;

use crate::domain::repository::MailerPort;
use crate::error::AuthServiceError;

/// Mail API client. One POST per message; a failed dispatch surfaces
/// immediately as a delivery error. No retry, no queueing.
#[derive(Clone)]
pub struct HttpMailer {
    pub client: reqwest::Client,
    pub api_url: String,
    pub api_key: String,
    pub from_address: String,
}

#[derive(Serialize)]
struct SendPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

impl MailerPort for HttpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), AuthServiceError> {
        let payload = SendPayload {
            from: &self.from_address,
            to: [to],
            subject,
            text: body,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "mail API unreachable");
                AuthServiceError::Delivery
            })?;

        if !response.status().is_success() {
            tracing::error!(status = %response.status(), "mail API rejected message");
            return Err(AuthServiceError::Delivery);
        }
        Ok(())
    }
}
