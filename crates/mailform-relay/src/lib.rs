//! # mailform-relay
//!
//! HTTP client for the transactional mail relay behind the portfolio
//! contact form.
//!
//! The relay owns the actual mail delivery: it receives a templated send
//! request, substitutes the parameters into a preconfigured template and
//! forwards the result to the site owner's inbox. This crate only speaks
//! the relay's wire format.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailform_relay::{RelayClient, TemplateParams};
//!
//! # async fn run() -> mailform_relay::Result<()> {
//! let client = RelayClient::new()?;
//! let params = TemplateParams {
//!     user_name: "Ana".into(),
//!     user_email: "ana@example.com".into(),
//!     user_message: "Olá!".into(),
//!     my_name: "iago bruno".into(),
//!     my_email: "iago.silva6969@gmail.com".into(),
//! };
//!
//! client.send("service_x", "template_y", &params, "public_key").await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod payload;

pub use client::{DEFAULT_ENDPOINT, RelayClient};
pub use error::{Error, Result};
pub use payload::TemplateParams;
