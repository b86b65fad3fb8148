//! Example walking the login form through all three outcomes without a server
//!
//! Run with: cargo run -p lf_infra --example mock_login_demo

use std::sync::Arc;

use lf_infra::form::{ChannelForm, TextInput};
use lf_infra::http::MockHttpClient;
use lf_infra::logging::{RecordingLogger, TracingLogger};
use lf_infra::{LoggerTrait, LoginFormHandler, LoginHandlerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let email = Arc::new(TextInput::with_value("email", "a@b.com"));
    let password = Arc::new(TextInput::with_value("password", "secret"));
    let logger = RecordingLogger::new();

    println!("\n=== Accepted and rejected logins ===");
    let http = MockHttpClient::with_status(200);
    let handler = LoginFormHandler::new(
        email.clone(),
        password.clone(),
        Arc::new(http.clone()),
        Arc::new(logger.clone()),
        LoginHandlerConfig::default(),
    );

    let submit = lf_infra::SubmitEvent::new("submit");
    let outcome = handler.handle_event(&submit).await;
    println!("200 -> {:?} (default prevented: {})", outcome, submit.is_default_prevented());

    http.set_status(401);
    password.set_value("wrong");
    let outcome = handler.handle_event(&lf_infra::SubmitEvent::new("submit")).await;
    println!("401 -> {:?}", outcome);

    println!("\n=== Transport failure through a form ===");
    let handler = Arc::new(LoginFormHandler::new(
        email,
        password,
        Arc::new(MockHttpClient::failing("connection reset by peer")),
        Arc::new(TracingLogger::new()),
        LoginHandlerConfig::default(),
    ));

    let (form, handle) = ChannelForm::new(".login");
    let listener = tokio::spawn(handler.attach(form));
    let event = handle.dispatch("submit").await;
    println!("default prevented on return: {}", event.is_default_prevented());
    drop(handle);
    for outcome in listener.await? {
        println!("-> {}", outcome);
    }

    println!("\n=== Recorded log entries ===");
    for entry in logger.entries() {
        println!("[{}] {}", entry.level, entry.message);
    }

    TracingLogger::new().log(lf_infra::LogLevel::Info, "Demo finished");
    Ok(())
}
