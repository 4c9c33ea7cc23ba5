//! `mailform` - terminal shell for the portfolio contact form.
//!
//! The shell is a thin rendering collaborator: it owns no pipeline state,
//! it only renders what the controller exposes (field values, the in-flight
//! flag, the current notification) and feeds events back in.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use std::io::Write as _;

use anyhow::Context as _;
use mailform_core::{
    BeginSubmit, Field, Notification, NotificationKind, Relay as _, SubmissionController,
    SubmitOutcome, SystemCue,
};
use mailform_relay::RelayClient;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable overriding the relay endpoint (e.g. a local stub).
const RELAY_URL_VAR: &str = "MAILFORM_RELAY_URL";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailform=debug,mailform_relay=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mailform");

    let relay = relay_from_env()?;
    let mut controller = SubmissionController::new(SystemCue);
    let stdin = std::io::stdin();

    println!("Entre em contato.");

    'visit: loop {
        let Some(name) = prompt(&stdin, "Nome: ")? else {
            break;
        };
        controller.set_field(Field::Name, name);

        let Some(email) = prompt(&stdin, "Email: ")? else {
            break;
        };
        controller.set_field(Field::Email, email);

        let Some(message) = prompt(&stdin, "Mensagem: ")? else {
            break;
        };
        controller.set_field(Field::Message, message);

        loop {
            let outcome = match controller.begin_submit() {
                BeginSubmit::Dispatch(dispatch) => {
                    // stands in for the relabeled submit control
                    println!("Enviando...");
                    let result = relay.deliver(&dispatch.config, &dispatch.params).await;
                    controller.settle(result)
                }
                BeginSubmit::Settled(outcome) => outcome,
            };
            debug!(?outcome, "attempt settled");

            render(controller.notification());
            if prompt(&stdin, "Pressione Enter para fechar a notificação.")?.is_none() {
                break 'visit;
            }
            controller.dismiss();

            // the input survives a delivery failure, so offer a resend
            // without retyping
            if outcome == SubmitOutcome::Failed {
                match prompt(&stdin, "Tentar novamente com a mesma mensagem? [s/N] ")? {
                    Some(answer) if answer.eq_ignore_ascii_case("s") => continue,
                    Some(_) => break,
                    None => break 'visit,
                }
            }
            break;
        }

        match prompt(&stdin, "Enviar outra mensagem? [s/N] ")? {
            Some(answer) if answer.eq_ignore_ascii_case("s") => {}
            _ => break,
        }
    }

    Ok(())
}

/// Builds the relay client, honoring the endpoint override.
fn relay_from_env() -> anyhow::Result<RelayClient> {
    match std::env::var(RELAY_URL_VAR) {
        Ok(url) => RelayClient::with_endpoint(&url)
            .with_context(|| format!("invalid relay endpoint in {RELAY_URL_VAR}")),
        Err(_) => RelayClient::new().context("invalid built-in relay endpoint"),
    }
}

/// Prints the current notification, if one is open.
fn render(notification: &Notification) {
    if !notification.open {
        return;
    }

    let tag = match notification.kind {
        NotificationKind::Success => "sucesso",
        NotificationKind::Error => "erro",
    };
    println!("[{tag}] {}", notification.message);
}

/// Reads one trimmed line from the terminal; `None` means end of input.
fn prompt(stdin: &std::io::Stdin, label: &str) -> anyhow::Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush().context("stdout unavailable")?;

    let mut line = String::new();
    let read = stdin.read_line(&mut line).context("stdin unavailable")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
