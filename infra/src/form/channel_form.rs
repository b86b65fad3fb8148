//! Form element fed through a channel
//!
//! `ChannelForm` is handed to the login form handler; the paired
//! `FormHandle` fires events on it. Firing an event waits until the
//! listener has handled it, so inputs changed afterwards never reach that
//! submission. The form closes once every handle has been dropped.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use lf_core::{FormElementTrait, SubmitEvent};

/// An event in transit, with the dispatcher waiting on `handled`
#[derive(Debug)]
struct Dispatched {
    event: SubmitEvent,
    handled: oneshot::Sender<()>,
}

/// Form element whose events arrive over an unbounded channel
#[derive(Debug)]
pub struct ChannelForm {
    selector: String,
    events: mpsc::UnboundedReceiver<Dispatched>,
    pending: Option<oneshot::Sender<()>>,
}

/// Fires events on a `ChannelForm`
#[derive(Debug, Clone)]
pub struct FormHandle {
    events: mpsc::UnboundedSender<Dispatched>,
}

impl ChannelForm {
    /// Create a form identified by `selector` and a handle to drive it
    pub fn new(selector: impl Into<String>) -> (Self, FormHandle) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let form = Self {
            selector: selector.into(),
            events: receiver,
            pending: None,
        };
        (form, FormHandle { events: sender })
    }
}

#[async_trait]
impl FormElementTrait for ChannelForm {
    fn selector(&self) -> &str {
        &self.selector
    }

    async fn next_event(&mut self) -> Option<SubmitEvent> {
        // A listener asking for more is done with the previous event
        self.event_handled();

        let dispatched = self.events.recv().await?;
        self.pending = Some(dispatched.handled);
        Some(dispatched.event)
    }

    fn event_handled(&mut self) {
        if let Some(handled) = self.pending.take() {
            let _ = handled.send(());
        }
    }
}

impl FormHandle {
    /// Fire an event of `event_type` on the form
    ///
    /// Resolves once the listener has handled the event, or straight away if
    /// the form is gone. The returned event shares its default-prevented flag
    /// with the one the listener received.
    pub async fn dispatch(&self, event_type: impl Into<String>) -> SubmitEvent {
        let event = SubmitEvent::new(event_type);
        let (handled, done) = oneshot::channel();

        let dispatched = Dispatched {
            event: event.clone(),
            handled,
        };
        if self.events.send(dispatched).is_err() {
            warn!(event_type = event.event_type(), "Form is closed, event dropped");
            return event;
        }

        // Err means the form was dropped without handling it
        let _ = done.await;
        event
    }

    /// True once the listening side is gone
    pub fn is_closed(&self) -> bool {
        self.events.is_closed()
    }
}
