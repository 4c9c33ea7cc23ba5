//! Delivery configuration resolution.

/// Environment variable naming the relay service to use.
pub const SERVICE_ID_VAR: &str = "MAILFORM_SERVICE_ID";
/// Environment variable naming the mail template.
pub const TEMPLATE_ID_VAR: &str = "MAILFORM_TEMPLATE_ID";
/// Environment variable holding the relay public key.
pub const PUBLIC_KEY_VAR: &str = "MAILFORM_PUBLIC_KEY";

/// Error resolving the delivery configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is absent or blank.
    #[error("missing delivery configuration: {0}")]
    Missing(&'static str),
}

/// Credentials required by the external mail relay.
///
/// Resolved from the process environment at submission time, never cached:
/// a running deployment recovers from a missing variable on the next
/// attempt without restarting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// Relay service identifier.
    pub service_id: String,
    /// Mail template identifier.
    pub template_id: String,
    /// Relay public key.
    pub public_key: String,
}

impl DeliveryConfig {
    /// Resolves the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first variable that is
    /// absent or blank. Partial configuration is treated as fully invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves the configuration through an arbitrary lookup.
    ///
    /// [`from_env`](Self::from_env) delegates here; tests supply a closure
    /// instead of mutating the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first variable the
    /// lookup does not produce a non-blank value for.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        Ok(Self {
            service_id: require(SERVICE_ID_VAR)?,
            template_id: require(TEMPLATE_ID_VAR)?,
            public_key: require(PUBLIC_KEY_VAR)?,
        })
    }
}
