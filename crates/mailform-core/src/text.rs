//! Fixed user-facing strings.
//!
//! The site speaks Portuguese; these literals are part of the product copy
//! and are not routed through a translation layer.

/// Prompt shown when any field is blank.
pub const MSG_FILL_ALL_FIELDS: &str = "Por favor, preencha todos os campos antes de enviar.";

/// Shown when the delivery configuration cannot be resolved.
pub const MSG_CONFIG_MISSING: &str =
    "A configuração de envio está ausente. Verifique suas variáveis de ambiente.";

/// Shown after a successful delivery.
pub const MSG_THANKS: &str = "Obrigado. Entrarei em contato assim que possível.";

/// Shown when the relay rejects the message or the network fails.
pub const MSG_SEND_FAILED: &str = "Ah, algo deu errado. Por favor, tente novamente.";
