//! In-process event dispatch.
//!
//! The admin UI parts communicate through named events rather than direct
//! calls; the delete workflow only ever emits one, fired after an attachment
//! was removed so that listings of the parent record refresh.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Emitted after an attachment was deleted; payload is the parent path.
pub const ATTACHMENTS_CHANGED: &str = "lektor-attachments-changed";

/// One dispatched event.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub name: String,
    pub payload: Value,
    pub timestamp: DateTime<Utc>,
}

impl Event {
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            name: name.into(),
            payload,
            timestamp: Utc::now(),
        }
    }
}

pub type EventHandler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Synchronous pub/sub bus: handlers are invoked inline on emit, in
/// registration order.
#[derive(Default)]
pub struct EventBus {
    handlers: RwLock<HashMap<String, Vec<EventHandler>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, event_name: &str, handler: EventHandler) {
        let mut handlers = self.handlers.write().expect("event handler lock poisoned");
        handlers
            .entry(event_name.to_string())
            .or_default()
            .push(handler);
        debug!("Registered handler for event: {}", event_name);
    }

    pub fn emit(&self, event: Event) {
        let handlers = self.handlers.read().expect("event handler lock poisoned");
        match handlers.get(&event.name) {
            Some(registered) => {
                for handler in registered {
                    handler(&event);
                }
            }
            None => debug!("No handlers for event: {}", event.name),
        }
    }
}
