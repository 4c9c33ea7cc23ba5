//! HTTP client for the relay send endpoint.

use url::Url;

use crate::error::{Error, Result};
use crate::payload::{SendRequest, TemplateParams};

/// Hosted endpoint of the relay service.
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Client for the transactional mail relay.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl RelayClient {
    /// Creates a client against the hosted relay endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in endpoint fails to parse.
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Creates a client against a custom endpoint, e.g. a local stub.
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not a valid URL.
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// Returns the endpoint this client talks to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one templated message through the relay.
    ///
    /// Single-shot: the relay either accepts the request or the error is
    /// returned as-is, with no retry. The argument order mirrors the
    /// relay's own API: service, template, parameters, public key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failure and [`Error::Rejected`]
    /// when the relay answers with a non-success status.
    pub async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
        public_key: &str,
    ) -> Result<()> {
        let body = SendRequest {
            service_id,
            template_id,
            user_id: public_key,
            template_params: params,
        };

        tracing::debug!(endpoint = %self.endpoint, service_id, template_id, "dispatching send request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::rejected(code, body));
        }

        Ok(())
    }
}
