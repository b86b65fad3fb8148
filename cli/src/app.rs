//! Wires the login form handler to the terminal and summarizes the run

use std::fmt;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::AsyncBufRead;

use lf_core::{FieldAccessor, HttpClientTrait, LoggerTrait, LoginFormHandler, LoginHandlerConfig, Outcome};
use lf_infra::form::{ChannelForm, TextInput};
use lf_shared::config::FormConfig;

use crate::terminal::TerminalForm;

/// How the form is driven
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Fill both inputs, fire one submission, close the form
    OneShot { email: String, password: String },
    /// Read form commands line by line from the input
    Interactive,
}

/// Outcomes of every submission made while the form was open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<Outcome>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// At least one submission was made and every one succeeded
    pub fn all_succeeded(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(Outcome::is_success)
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.all_succeeded() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} submission(s), {} successful",
            self.outcomes.len(),
            self.succeeded()
        )
    }
}

/// Attach a handler to a fresh form and drive it until it closes
///
/// # Arguments
///
/// * `form_config` - Selector, input ids, trigger event and endpoint
/// * `http_client` - Client the login requests go through
/// * `logger` - Logger receiving one entry per submission
/// * `mode` - One-shot credentials or interactive commands
/// * `input` - Command lines for interactive mode
pub async fn run_form<H, L, R>(
    form_config: &FormConfig,
    http_client: Arc<H>,
    logger: Arc<L>,
    mode: Mode,
    input: R,
) -> anyhow::Result<RunSummary>
where
    H: HttpClientTrait + 'static,
    L: LoggerTrait + 'static,
    R: AsyncBufRead + Unpin,
{
    let email = Arc::new(TextInput::new(form_config.email_field.as_str()));
    let password = Arc::new(TextInput::new(form_config.password_field.as_str()));

    let handler = Arc::new(LoginFormHandler::new(
        email.clone(),
        password.clone(),
        http_client,
        logger,
        LoginHandlerConfig::from(form_config),
    ));
    let submit_event = handler.config().event_type.clone();

    let (form, handle) = ChannelForm::new(form_config.selector.as_str());
    let listener = tokio::spawn(handler.attach(form));

    match mode {
        Mode::OneShot {
            email: email_value,
            password: password_value,
        } => {
            email.set_value(email_value);
            password.set_value(password_value);
            handle.dispatch(submit_event.as_str()).await;
            drop(handle);
        }
        Mode::Interactive => {
            eprintln!(
                "Type `{} <value>`, `{} <value>`, then `submit`. End input or `quit` to exit.",
                email.id(),
                password.id()
            );
            let terminal = TerminalForm {
                email: &email,
                password: &password,
                handle,
                submit_event: &submit_event,
            };
            terminal.run(input).await.context("reading form input")?;
        }
    }

    let outcomes = listener.await.context("login form listener stopped")?;
    Ok(RunSummary { outcomes })
}
