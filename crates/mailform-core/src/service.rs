//! Delivery seam over the relay client.

use std::future::Future;

use mailform_relay::{RelayClient, TemplateParams};

use crate::config::DeliveryConfig;
use crate::form::ContactForm;

/// Display name of the site owner, folded into every payload.
pub const OWNER_NAME: &str = "iago bruno";
/// Contact address of the site owner, folded into every payload.
pub const OWNER_EMAIL: &str = "iago.silva6969@gmail.com";

/// The external delivery collaborator.
///
/// The controller dispatches exactly one send per accepted attempt and
/// treats the result as final: no retry, no cancellation, no timeout beyond
/// what the relay itself enforces.
pub trait Relay {
    /// Delivers one templated message.
    fn deliver(
        &self,
        config: &DeliveryConfig,
        params: &TemplateParams,
    ) -> impl Future<Output = Result<(), mailform_relay::Error>>;
}

impl Relay for RelayClient {
    async fn deliver(
        &self,
        config: &DeliveryConfig,
        params: &TemplateParams,
    ) -> Result<(), mailform_relay::Error> {
        self.send(
            &config.service_id,
            &config.template_id,
            params,
            &config.public_key,
        )
        .await
    }
}

/// Builds the template parameters for the current form values.
///
/// The visitor's fields travel next to the fixed owner identity so a single
/// mail template can address both parties.
#[must_use]
pub fn template_params(form: &ContactForm) -> TemplateParams {
    TemplateParams {
        user_name: form.name.clone(),
        user_email: form.email.clone(),
        user_message: form.message.clone(),
        my_name: OWNER_NAME.to_string(),
        my_email: OWNER_EMAIL.to_string(),
    }
}
