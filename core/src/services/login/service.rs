//! Main login form handler implementation

use std::sync::Arc;
use tokio::task::JoinSet;

use lf_shared::masking::mask_email;

use crate::domain::{Credentials, HttpRequest, Outcome, SubmitEvent};

use super::config::LoginHandlerConfig;
use super::traits::{FieldAccessor, FormElementTrait, HttpClientTrait, LoggerTrait};

/// Login form handler bridging a form submission to one login request
pub struct LoginFormHandler<F, H, L>
where
    F: FieldAccessor,
    H: HttpClientTrait,
    L: LoggerTrait,
{
    /// Input holding the email address
    email_field: Arc<F>,
    /// Input holding the password
    password_field: Arc<F>,
    /// Client the login request is sent through
    http_client: Arc<H>,
    /// Logger every outcome is reported to
    logger: Arc<L>,
    /// Handler configuration
    config: LoginHandlerConfig,
}

impl<F, H, L> LoginFormHandler<F, H, L>
where
    F: FieldAccessor,
    H: HttpClientTrait,
    L: LoggerTrait,
{
    /// Create a new login form handler
    ///
    /// # Arguments
    ///
    /// * `email_field` - Input the email is read from
    /// * `password_field` - Input the password is read from
    /// * `http_client` - Client used for the login request
    /// * `logger` - Logger receiving one entry per attempt
    /// * `config` - Trigger event type and endpoint
    pub fn new(
        email_field: Arc<F>,
        password_field: Arc<F>,
        http_client: Arc<H>,
        logger: Arc<L>,
        config: LoginHandlerConfig,
    ) -> Self {
        Self {
            email_field,
            password_field,
            http_client,
            logger,
            config,
        }
    }

    pub fn config(&self) -> &LoginHandlerConfig {
        &self.config
    }

    /// Read both inputs as they are right now
    pub fn read_credentials(&self) -> Credentials {
        Credentials::new(self.email_field.value(), self.password_field.value())
    }

    /// Post the credentials to the login endpoint and report the outcome
    ///
    /// Exactly one request is attempted. Every outcome, including failures,
    /// is logged once and returned; nothing is propagated as an error.
    pub async fn submit(&self, credentials: Credentials) -> Outcome {
        let request = match HttpRequest::post_json(&self.config.endpoint, &credentials) {
            Ok(request) => request,
            Err(e) => return self.report(Outcome::TransportFailure { detail: e.to_string() }),
        };

        tracing::debug!(
            email = %mask_email(&credentials.email),
            endpoint = %self.config.endpoint,
            "Submitting login request"
        );

        let outcome = match self.http_client.send(request).await {
            Ok(response) => Outcome::from_status(response.status),
            Err(e) => Outcome::TransportFailure { detail: e.to_string() },
        };

        self.report(outcome)
    }

    /// Handle one event fired on the form
    ///
    /// Returns `None` without touching the event when it is not the
    /// configured submission trigger.
    pub async fn handle_event(&self, event: &SubmitEvent) -> Option<Outcome> {
        let credentials = self.accept(event)?;
        Some(self.submit(credentials).await)
    }

    /// Cancel the default action and capture the inputs for a trigger event
    fn accept(&self, event: &SubmitEvent) -> Option<Credentials> {
        if event.event_type() != self.config.event_type {
            tracing::trace!(event_type = event.event_type(), "Ignoring non-submit event");
            return None;
        }

        event.prevent_default();
        Some(self.read_credentials())
    }

    fn report(&self, outcome: Outcome) -> Outcome {
        self.logger.log(outcome.log_level(), &outcome.to_string());
        outcome
    }
}

impl<F, H, L> LoginFormHandler<F, H, L>
where
    F: FieldAccessor + 'static,
    H: HttpClientTrait + 'static,
    L: LoggerTrait + 'static,
{
    /// Listen on a form until it stops emitting events
    ///
    /// Each trigger event is cancelled and its credentials read before the
    /// form is told the event was handled, then the request runs as its own
    /// task. Submissions are not serialized:
    /// a second trigger while a request is pending starts a second request.
    /// Once the form closes, all in-flight requests are awaited and their
    /// outcomes returned in completion order.
    pub async fn attach<E: FormElementTrait>(self: Arc<Self>, mut form: E) -> Vec<Outcome> {
        tracing::info!(
            selector = form.selector(),
            event_type = %self.config.event_type,
            "Login form handler attached"
        );

        let mut in_flight = JoinSet::new();

        while let Some(event) = form.next_event().await {
            let accepted = self.accept(&event);
            form.event_handled();

            let Some(credentials) = accepted else {
                continue;
            };

            let handler = Arc::clone(&self);
            in_flight.spawn(async move { handler.submit(credentials).await });
        }

        let mut outcomes = Vec::with_capacity(in_flight.len());
        while let Some(joined) = in_flight.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => tracing::error!(error = %e, "Login submission task did not finish"),
            }
        }

        tracing::info!(
            selector = form.selector(),
            submissions = outcomes.len(),
            "Login form closed"
        );

        outcomes
    }
}
