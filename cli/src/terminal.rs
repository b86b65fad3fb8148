//! Line-oriented terminal front end for the login form
//!
//! Each input line is one action on the form:
//! - `email <value>` / `password <value>` type into an input
//! - `submit` fires the configured submission event
//! - `quit` or end of input closes the form
//! - anything else fires an event with that name

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use lf_infra::form::{FormHandle, TextInput};

/// One parsed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Fire(String),
    Close,
    Nothing,
}

pub fn parse_command(line: &str) -> FormCommand {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };

    match word {
        "email" => FormCommand::SetEmail(rest.to_string()),
        "password" => FormCommand::SetPassword(rest.to_string()),
        "submit" if rest.is_empty() => FormCommand::Submit,
        "quit" if rest.is_empty() => FormCommand::Close,
        _ if line.trim().is_empty() => FormCommand::Nothing,
        _ => FormCommand::Fire(line.trim().to_string()),
    }
}

/// Inputs and form the terminal drives
pub struct TerminalForm<'a> {
    pub email: &'a TextInput,
    pub password: &'a TextInput,
    pub handle: FormHandle,
    pub submit_event: &'a str,
}

impl TerminalForm<'_> {
    /// Apply lines from `input` until it ends or `quit` is read
    ///
    /// Each fired event is handled by the form's listener before the next
    /// line is read. Returns the number of events fired. Stops early once
    /// the listener is gone. The form handle is dropped on return, which
    /// closes the form.
    pub async fn run<R: AsyncBufRead + Unpin>(self, input: R) -> std::io::Result<usize> {
        let mut lines = input.lines();
        let mut fired = 0;

        while let Some(line) = lines.next_line().await? {
            let event_type = match parse_command(&line) {
                FormCommand::SetEmail(value) => {
                    self.email.set_value(value);
                    continue;
                }
                FormCommand::SetPassword(value) => {
                    self.password.set_value(value);
                    continue;
                }
                FormCommand::Submit => self.submit_event.to_string(),
                FormCommand::Fire(event_type) => {
                    tracing::debug!(event_type = %event_type, "Firing form event");
                    event_type
                }
                FormCommand::Close => break,
                FormCommand::Nothing => continue,
            };

            if self.handle.is_closed() {
                warn!("Form listener stopped, ignoring remaining input");
                break;
            }
            self.handle.dispatch(event_type).await;
            fired += 1;
        }

        Ok(fired)
    }
}
