//! End-to-end tests for the submission pipeline.

#![allow(clippy::unwrap_used)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use mailform_core::config::{PUBLIC_KEY_VAR, SERVICE_ID_VAR, TEMPLATE_ID_VAR};
use mailform_core::{
    BeginSubmit, ContactForm, Cue, DeliveryConfig, Field, NotificationKind, OWNER_EMAIL,
    OWNER_NAME, Relay, SubmissionController, SubmitOutcome, text,
};
use mailform_relay::TemplateParams;

/// Cue double counting how often it fired.
#[derive(Debug, Clone, Default)]
struct CountingCue(Rc<Cell<u32>>);

impl CountingCue {
    fn fired(&self) -> u32 {
        self.0.get()
    }
}

impl Cue for CountingCue {
    fn notify(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Relay double recording payloads and returning a scripted result.
#[derive(Debug, Default)]
struct FakeRelay {
    fail: bool,
    sent: RefCell<Vec<(DeliveryConfig, TemplateParams)>>,
}

impl FakeRelay {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl Relay for FakeRelay {
    async fn deliver(
        &self,
        config: &DeliveryConfig,
        params: &TemplateParams,
    ) -> Result<(), mailform_relay::Error> {
        self.sent.borrow_mut().push((config.clone(), params.clone()));
        if self.fail {
            Err(mailform_relay::Error::rejected(502, "bad gateway"))
        } else {
            Ok(())
        }
    }
}

fn full_env(name: &str) -> Option<String> {
    match name {
        SERVICE_ID_VAR => Some("service_demo".into()),
        TEMPLATE_ID_VAR => Some("template_demo".into()),
        PUBLIC_KEY_VAR => Some("public_demo".into()),
        _ => None,
    }
}

fn controller() -> (SubmissionController<CountingCue>, CountingCue) {
    let cue = CountingCue::default();
    (SubmissionController::new(cue.clone()), cue)
}

fn fill_valid(controller: &mut SubmissionController<CountingCue>) {
    controller.set_field(Field::Name, "Ana");
    controller.set_field(Field::Email, "ana@x.com");
    controller.set_field(Field::Message, "Hi");
}

#[tokio::test]
async fn blank_field_settles_without_ever_flying() {
    let (mut controller, cue) = controller();
    controller.set_field(Field::Name, "Ana");
    controller.set_field(Field::Email, " ");
    controller.set_field(Field::Message, "Hi");
    let relay = FakeRelay::default();

    let outcome = controller.submit_with(&relay, full_env).await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert!(!controller.in_flight());
    assert_eq!(controller.form().name, "Ana");
    assert_eq!(controller.form().email, " ");
    assert_eq!(controller.form().message, "Hi");
    assert!(controller.notification().open);
    assert_eq!(controller.notification().kind, NotificationKind::Error);
    assert_eq!(controller.notification().message, text::MSG_FILL_ALL_FIELDS);
    assert_eq!(cue.fired(), 1);
    assert!(relay.sent.borrow().is_empty());
}

#[test]
fn validation_failure_never_raises_the_flight_flag() {
    let (mut controller, _cue) = controller();

    let begin = controller.begin_submit_with(full_env);

    assert!(matches!(
        begin,
        BeginSubmit::Settled(SubmitOutcome::Invalid)
    ));
    assert!(!controller.in_flight());
}

#[tokio::test]
async fn missing_config_settles_with_the_config_message() {
    let (mut controller, cue) = controller();
    fill_valid(&mut controller);
    let relay = FakeRelay::default();

    let outcome = controller
        .submit_with(&relay, |name| {
            if name == TEMPLATE_ID_VAR {
                None
            } else {
                full_env(name)
            }
        })
        .await;

    assert_eq!(outcome, SubmitOutcome::MissingConfig);
    assert!(!controller.in_flight());
    assert_eq!(controller.form().name, "Ana");
    assert_eq!(controller.notification().kind, NotificationKind::Error);
    assert_eq!(controller.notification().message, text::MSG_CONFIG_MISSING);
    assert_eq!(cue.fired(), 1);
    assert!(relay.sent.borrow().is_empty());
}

#[tokio::test]
async fn successful_delivery_resets_the_form() {
    let (mut controller, cue) = controller();
    fill_valid(&mut controller);
    let relay = FakeRelay::default();

    let outcome = controller.submit_with(&relay, full_env).await;

    assert_eq!(outcome, SubmitOutcome::Delivered);
    assert!(!controller.in_flight());
    assert_eq!(*controller.form(), ContactForm::new());
    assert!(controller.notification().open);
    assert_eq!(controller.notification().kind, NotificationKind::Success);
    assert_eq!(controller.notification().message, text::MSG_THANKS);
    assert_eq!(cue.fired(), 1);

    let sent = relay.sent.borrow();
    assert_eq!(sent.len(), 1);
    let (config, params) = &sent[0];
    assert_eq!(config.service_id, "service_demo");
    assert_eq!(config.template_id, "template_demo");
    assert_eq!(config.public_key, "public_demo");
    assert_eq!(params.user_name, "Ana");
    assert_eq!(params.user_email, "ana@x.com");
    assert_eq!(params.user_message, "Hi");
    assert_eq!(params.my_name, OWNER_NAME);
    assert_eq!(params.my_email, OWNER_EMAIL);
}

#[tokio::test]
async fn failed_delivery_preserves_the_input() {
    let (mut controller, cue) = controller();
    fill_valid(&mut controller);
    let relay = FakeRelay::failing();

    let outcome = controller.submit_with(&relay, full_env).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(!controller.in_flight());
    assert_eq!(controller.form().name, "Ana");
    assert_eq!(controller.form().email, "ana@x.com");
    assert_eq!(controller.form().message, "Hi");
    assert_eq!(controller.notification().kind, NotificationKind::Error);
    assert_eq!(controller.notification().message, text::MSG_SEND_FAILED);
    assert_eq!(cue.fired(), 1);
    assert_eq!(relay.sent.borrow().len(), 1);
}

#[test]
fn a_second_submit_while_in_flight_is_rejected() {
    let (mut controller, _cue) = controller();
    fill_valid(&mut controller);

    let first = controller.begin_submit_with(full_env);
    let dispatch = match first {
        BeginSubmit::Dispatch(dispatch) => dispatch,
        BeginSubmit::Settled(outcome) => panic!("first attempt settled early: {outcome:?}"),
    };
    assert!(controller.in_flight());

    let second = controller.begin_submit_with(full_env);
    assert!(matches!(
        second,
        BeginSubmit::Settled(SubmitOutcome::Rejected)
    ));
    assert!(controller.in_flight());

    let outcome = controller.settle(Ok(()));
    assert_eq!(outcome, SubmitOutcome::Delivered);
    assert!(!controller.in_flight());
    assert_eq!(dispatch.params.user_name, "Ana");
}

#[test]
fn edits_during_flight_do_not_leak_into_the_payload() {
    let (mut controller, _cue) = controller();
    fill_valid(&mut controller);

    let dispatch = match controller.begin_submit_with(full_env) {
        BeginSubmit::Dispatch(dispatch) => dispatch,
        BeginSubmit::Settled(outcome) => panic!("attempt settled early: {outcome:?}"),
    };

    controller.set_field(Field::Message, "edited mid-flight");

    assert_eq!(dispatch.params.user_message, "Hi");

    controller.settle(Ok(()));
    assert_eq!(*controller.form(), ContactForm::new());
}

#[test]
fn dismiss_is_idempotent_through_the_controller() {
    let (mut controller, _cue) = controller();

    controller.begin_submit_with(full_env);
    assert!(controller.notification().open);

    controller.dismiss();
    controller.dismiss();

    assert!(!controller.notification().open);
    assert_eq!(controller.notification().message, text::MSG_FILL_ALL_FIELDS);
}

#[tokio::test]
async fn a_new_outcome_replaces_the_previous_notification() {
    let (mut controller, cue) = controller();
    let relay = FakeRelay::default();

    controller.submit_with(&relay, full_env).await;
    assert_eq!(controller.notification().message, text::MSG_FILL_ALL_FIELDS);

    fill_valid(&mut controller);
    controller.submit_with(&relay, full_env).await;

    assert_eq!(controller.notification().message, text::MSG_THANKS);
    assert_eq!(cue.fired(), 2);
}
