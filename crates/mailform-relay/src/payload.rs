//! Payload types for the relay send endpoint.

use serde::Serialize;

/// Template parameters delivered to the relay.
///
/// The relay substitutes these into the configured mail template. The field
/// names are part of the wire contract and must match the template
/// placeholders exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    /// Name entered by the visitor.
    pub user_name: String,
    /// Reply-to address entered by the visitor.
    pub user_email: String,
    /// Message body entered by the visitor.
    pub user_message: String,
    /// Display name of the site owner receiving the message.
    pub my_name: String,
    /// Contact address of the site owner receiving the message.
    pub my_email: String,
}

/// JSON body of a send request.
#[derive(Debug, Serialize)]
pub(crate) struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}
