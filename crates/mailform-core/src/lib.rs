//! # mailform-core
//!
//! Core logic for the portfolio contact form:
//!
//! - Form field state and validation
//! - Delivery configuration resolution
//! - The submission state machine
//! - Single-slot transient notifications with a side-channel cue
//!
//! The rendering layer owns no pipeline state: it reads the controller's
//! accessors (form values, in-flight flag, current notification) and feeds
//! events back in.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cue;
pub mod form;
pub mod notification;
pub mod service;
mod submission;
pub mod text;
pub mod validation;

pub use config::{ConfigError, DeliveryConfig};
pub use cue::{Cue, SystemCue};
pub use form::{ContactForm, Field};
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use service::{OWNER_EMAIL, OWNER_NAME, Relay, template_params};
pub use submission::{BeginSubmit, Dispatch, SubmissionController, SubmitOutcome};
pub use validation::{ValidationError, validate};
