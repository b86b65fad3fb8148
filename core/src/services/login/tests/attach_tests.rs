//! Tests for listening on a form and overlapping submissions

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Barrier;

use crate::domain::{HttpRequest, HttpResponse, LogLevel, Outcome, SubmitEvent};
use crate::errors::TransportError;
use crate::services::login::traits::{FieldAccessor, FormElementTrait, HttpClientTrait};
use crate::services::login::{LoginFormHandler, LoginHandlerConfig};

use super::mocks::{MockField, MockForm, MockHttpClient, MockLogger};

// Client that only answers once `parties` requests are in flight together
struct RendezvousHttpClient {
    barrier: Barrier,
}

#[async_trait]
impl HttpClientTrait for RendezvousHttpClient {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.barrier.wait().await;
        Ok(HttpResponse::new(200))
    }
}

// Form whose user types a new email as soon as each event is handed back
struct TypingForm {
    events: VecDeque<SubmitEvent>,
    email: Arc<MockField>,
    typed_next: VecDeque<&'static str>,
}

#[async_trait]
impl FormElementTrait for TypingForm {
    fn selector(&self) -> &str {
        ".login"
    }

    async fn next_event(&mut self) -> Option<SubmitEvent> {
        self.events.pop_front()
    }

    fn event_handled(&mut self) {
        if let Some(value) = self.typed_next.pop_front() {
            self.email.set(value);
        }
    }
}

#[tokio::test]
async fn test_attach_reads_inputs_before_handing_event_back() {
    let email = Arc::new(MockField::new("email", "first@b.com"));
    let http = Arc::new(MockHttpClient::with_status(200));
    let handler = Arc::new(LoginFormHandler::new(
        email.clone(),
        Arc::new(MockField::new("password", "secret")),
        http.clone(),
        Arc::new(MockLogger::default()),
        LoginHandlerConfig::default(),
    ));

    let form = TypingForm {
        events: VecDeque::from(vec![
            SubmitEvent::new("submit"),
            SubmitEvent::new("keydown"),
            SubmitEvent::new("submit"),
        ]),
        email: email.clone(),
        typed_next: VecDeque::from(vec!["second@b.com", "second@b.com", "third@b.com"]),
    };

    let outcomes = handler.attach(form).await;
    assert_eq!(outcomes.len(), 2);

    let mut emails: Vec<String> = http
        .sent()
        .iter()
        .map(|request| {
            let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
            body["email"].as_str().unwrap().to_string()
        })
        .collect();
    emails.sort();
    assert_eq!(emails, vec!["first@b.com", "second@b.com"]);
    assert_eq!(email.value(), "third@b.com");
}

#[tokio::test]
async fn test_attach_prevents_default_for_every_trigger() {
    let http = Arc::new(MockHttpClient::with_status(401));
    let logger = Arc::new(MockLogger::default());
    let handler = Arc::new(LoginFormHandler::new(
        Arc::new(MockField::new("email", "a@b.com")),
        Arc::new(MockField::new("password", "secret")),
        http.clone(),
        logger.clone(),
        LoginHandlerConfig::default(),
    ));

    let first = SubmitEvent::new("submit");
    let ignored = SubmitEvent::new("keydown");
    let second = SubmitEvent::new("submit");
    let form = MockForm::new(vec![first.clone(), ignored.clone(), second.clone()]);

    let outcomes = handler.attach(form).await;

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| *o == Outcome::Rejected { status: 401 }));
    assert!(first.is_default_prevented());
    assert!(second.is_default_prevented());
    assert!(!ignored.is_default_prevented());
    assert_eq!(http.sent().len(), 2);
    assert_eq!(logger.count(LogLevel::Error), 2);
}

#[tokio::test]
async fn test_attach_with_no_events_sends_nothing() {
    let http = Arc::new(MockHttpClient::with_status(200));
    let handler = Arc::new(LoginFormHandler::new(
        Arc::new(MockField::new("email", "")),
        Arc::new(MockField::new("password", "")),
        http.clone(),
        Arc::new(MockLogger::default()),
        LoginHandlerConfig::default(),
    ));

    let outcomes = handler.attach(MockForm::new(Vec::new())).await;

    assert!(outcomes.is_empty());
    assert!(http.sent().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_overlapping_submissions_are_in_flight_together() {
    let logger = Arc::new(MockLogger::default());
    let handler = Arc::new(LoginFormHandler::new(
        Arc::new(MockField::new("email", "a@b.com")),
        Arc::new(MockField::new("password", "secret")),
        Arc::new(RendezvousHttpClient {
            barrier: Barrier::new(3),
        }),
        logger.clone(),
        LoginHandlerConfig::default(),
    ));

    let form = MockForm::new(vec![
        SubmitEvent::new("submit"),
        SubmitEvent::new("submit"),
        SubmitEvent::new("submit"),
    ]);

    // Three requests only complete if none waits for another to finish.
    let outcomes = tokio::time::timeout(Duration::from_secs(5), handler.attach(form))
        .await
        .expect("submissions should not be serialized");

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(Outcome::is_success));
    assert_eq!(logger.count(LogLevel::Info), 3);
}
