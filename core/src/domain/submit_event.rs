use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A submission-intent event fired on a form element
///
/// Clones share the default-prevented flag, so whoever dispatched the event
/// can check afterwards whether the handler cancelled the default action.
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    event_type: String,
    default_prevented: Arc<AtomicBool>,
}

impl SubmitEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            default_prevented: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Cancel the default navigation/reload for this event
    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::SeqCst);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prevent_default_visible_through_clone() {
        let event = SubmitEvent::new("submit");
        let dispatched = event.clone();
        assert!(!event.is_default_prevented());

        dispatched.prevent_default();
        assert!(event.is_default_prevented());
        assert_eq!(event.event_type(), "submit");
    }
}
