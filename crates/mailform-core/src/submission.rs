//! The submission state machine.
//!
//! One controller owns every piece of mutable pipeline state: the form
//! values, the in-flight flag and the notification slot. The asynchronous
//! send is the only suspension point, and it is externally owned — the
//! controller hands out a [`Dispatch`] and expects the send result back
//! through [`SubmissionController::settle`].

use mailform_relay::TemplateParams;
use tracing::{error, info, warn};

use crate::config::DeliveryConfig;
use crate::cue::Cue;
use crate::form::{ContactForm, Field};
use crate::notification::{Notification, NotificationCenter, NotificationKind};
use crate::service::{self, Relay};
use crate::text;
use crate::validation::validate;

/// How a submit attempt settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A previous attempt is still in flight; nothing was dispatched.
    Rejected,
    /// A field was blank; the attempt never left the client.
    Invalid,
    /// The delivery configuration could not be resolved.
    MissingConfig,
    /// The relay accepted the message.
    Delivered,
    /// The relay rejected the message or the network failed.
    Failed,
}

/// An attempt that passed validation and the configuration check.
///
/// Carries everything the external send needs, snapshotted at submit time:
/// edits made to the form while the send is pending do not leak into the
/// outgoing payload.
#[derive(Debug)]
pub struct Dispatch {
    /// Resolved relay credentials.
    pub config: DeliveryConfig,
    /// Snapshotted payload.
    pub params: TemplateParams,
}

/// Result of [`SubmissionController::begin_submit`].
#[derive(Debug)]
pub enum BeginSubmit {
    /// The attempt reached the sending phase; perform the send and feed the
    /// result to [`SubmissionController::settle`].
    Dispatch(Dispatch),
    /// The attempt settled before anything was sent.
    Settled(SubmitOutcome),
}

/// Orchestrates validation, configuration check, send and outcome.
#[derive(Debug)]
pub struct SubmissionController<C> {
    form: ContactForm,
    in_flight: bool,
    notifications: NotificationCenter,
    cue: C,
}

impl<C: Cue> SubmissionController<C> {
    /// Creates a controller with an empty form.
    #[must_use]
    pub fn new(cue: C) -> Self {
        Self {
            form: ContactForm::new(),
            in_flight: false,
            notifications: NotificationCenter::new(),
            cue,
        }
    }

    /// Current form values, for controlled inputs.
    #[must_use]
    pub const fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Whether a submit attempt is awaiting settlement.
    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// The current notification, for the rendering boundary.
    #[must_use]
    pub const fn notification(&self) -> &Notification {
        self.notifications.current()
    }

    /// Replaces the value of one form field.
    ///
    /// Typing stays possible while a send is pending; only submission is
    /// locked by the in-flight flag.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Hides the current notification.
    pub fn dismiss(&mut self) {
        self.notifications.dismiss();
    }

    /// Runs the pre-send phases of a submit attempt against the process
    /// environment.
    pub fn begin_submit(&mut self) -> BeginSubmit {
        self.begin_submit_with(|name| std::env::var(name).ok())
    }

    /// Runs the pre-send phases with an arbitrary configuration lookup.
    ///
    /// Validation failures and missing configuration settle the attempt
    /// right here: the matching notification is shown and the in-flight
    /// flag ends up false (it is never raised at all on the validation
    /// path, so a fast client-side failure shows no loading state). A
    /// [`BeginSubmit::Dispatch`] return means the controller is now in
    /// flight and expects exactly one [`settle`](Self::settle) call with
    /// the send result.
    pub fn begin_submit_with(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> BeginSubmit {
        if self.in_flight {
            warn!("submit ignored, a previous attempt is still in flight");
            return BeginSubmit::Settled(SubmitOutcome::Rejected);
        }

        if let Err(reason) = validate(&self.form) {
            info!(%reason, "submission rejected by validation");
            self.announce(NotificationKind::Error, text::MSG_FILL_ALL_FIELDS);
            return BeginSubmit::Settled(SubmitOutcome::Invalid);
        }

        self.in_flight = true;

        let config = match DeliveryConfig::from_lookup(lookup) {
            Ok(config) => config,
            Err(reason) => {
                self.in_flight = false;
                error!(%reason, "submission aborted");
                self.announce(NotificationKind::Error, text::MSG_CONFIG_MISSING);
                return BeginSubmit::Settled(SubmitOutcome::MissingConfig);
            }
        };

        BeginSubmit::Dispatch(Dispatch {
            config,
            params: service::template_params(&self.form),
        })
    }

    /// Records the result of the external send and settles the attempt.
    ///
    /// On success the form is cleared for the next visitor; on failure the
    /// input is preserved so the visitor can resubmit without retyping.
    pub fn settle(&mut self, result: Result<(), mailform_relay::Error>) -> SubmitOutcome {
        self.in_flight = false;

        match result {
            Ok(()) => {
                info!("message delivered");
                self.form.reset();
                self.announce(NotificationKind::Success, text::MSG_THANKS);
                SubmitOutcome::Delivered
            }
            Err(reason) => {
                error!(%reason, "delivery failed");
                self.announce(NotificationKind::Error, text::MSG_SEND_FAILED);
                SubmitOutcome::Failed
            }
        }
    }

    /// Runs a whole submit attempt against the process environment.
    pub async fn submit<R: Relay>(&mut self, relay: &R) -> SubmitOutcome {
        self.submit_with(relay, |name| std::env::var(name).ok()).await
    }

    /// Runs a whole submit attempt with an arbitrary configuration lookup.
    ///
    /// Every path settles with a notification; no error escapes as a fault.
    /// The returned outcome is observability for the caller, not control
    /// flow it has to handle.
    pub async fn submit_with<R: Relay>(
        &mut self,
        relay: &R,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> SubmitOutcome {
        match self.begin_submit_with(lookup) {
            BeginSubmit::Settled(outcome) => outcome,
            BeginSubmit::Dispatch(dispatch) => {
                let result = relay.deliver(&dispatch.config, &dispatch.params).await;
                self.settle(result)
            }
        }
    }

    fn announce(&mut self, kind: NotificationKind, message: &str) {
        self.cue.notify();
        self.notifications.show(kind, message);
    }
}
