use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use parking_lot::RwLock;

use super::event::DomainEvent;
use super::handler::{same_handler, SharedHandler};
use crate::metrics::Metrics;

// ============================================================================
// Event Dispatcher - In-process, synchronous fan-out
// ============================================================================
//
// Registry: event type identifier -> handlers in registration order.
//
// Delivery rules:
// 1. `notify` runs every handler on the caller's thread, one after another
// 2. All handlers receive the same `&E`
// 3. The first handler error aborts delivery and is returned unmodified
// 4. No handlers for a type is a normal condition, not an error
//
// `notify` iterates a snapshot of the handler list taken under the read lock,
// so handlers may register/unregister (or notify again) without deadlocking.
// Such changes apply from the next `notify` on.
//
// ============================================================================

/// Snapshot of the registry: event type -> ordered handlers.
pub type HandlerRegistry<E> = HashMap<String, Vec<SharedHandler<E>>>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Event type identifier cannot be empty")]
    EmptyEventType,
}

pub struct EventDispatcher<E> {
    handlers: RwLock<HandlerRegistry<E>>,
    metrics: Option<Arc<Metrics>>,
}

impl<E: DomainEvent> EventDispatcher<E> {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            metrics: None,
        }
    }

    /// Dispatcher that reports to the given Prometheus metrics
    pub fn with_metrics(metrics: Arc<Metrics>) -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            metrics: Some(metrics),
        }
    }

    /// Append `handler` to the handlers of `event_type`.
    ///
    /// Registering the same handler twice is allowed and yields two
    /// deliveries per event.
    pub fn register(
        &self,
        event_type: impl Into<String>,
        handler: SharedHandler<E>,
    ) -> Result<(), DispatchError> {
        let event_type = event_type.into();
        if event_type.is_empty() {
            return Err(DispatchError::EmptyEventType);
        }

        tracing::debug!(
            event_type = %event_type,
            handler = %handler.name(),
            "Registering event handler"
        );

        self.handlers.write().entry(event_type).or_default().push(handler);
        if let Some(metrics) = &self.metrics {
            metrics.handlers_registered(1);
        }
        Ok(())
    }

    /// Remove the first registration of this exact handler instance.
    /// Unknown types and handlers are ignored.
    pub fn unregister(&self, event_type: &str, handler: &SharedHandler<E>) {
        let mut handlers = self.handlers.write();

        let Some(list) = handlers.get_mut(event_type) else {
            return;
        };
        let Some(index) = list.iter().position(|h| same_handler(h, handler)) else {
            return;
        };

        list.remove(index);
        if list.is_empty() {
            handlers.remove(event_type);
        }

        tracing::debug!(
            event_type = %event_type,
            handler = %handler.name(),
            "Unregistered event handler"
        );
        if let Some(metrics) = &self.metrics {
            metrics.handlers_unregistered(1);
        }
    }

    /// Drop every registration. The dispatcher stays usable.
    pub fn unregister_all(&self) {
        let mut handlers = self.handlers.write();
        let removed: usize = handlers.values().map(Vec::len).sum();
        handlers.clear();
        tracing::debug!(removed, "Cleared all event handlers");
        if let Some(metrics) = &self.metrics {
            metrics.handlers_unregistered(removed);
        }
    }

    /// Deliver `event` to every handler registered for its type, in order.
    pub fn notify(&self, event: &E) -> Result<()> {
        let event_type = event.event_type();
        let handlers = self.handlers_for(event_type);

        if handlers.is_empty() {
            tracing::trace!(event_type = %event_type, "No handlers registered for event");
            self.record_dispatch(event_type, 0, None);
            return Ok(());
        }

        tracing::debug!(
            event_type = %event_type,
            handlers = handlers.len(),
            occurred_at = %event.data_time_occurred(),
            "Dispatching event"
        );

        let start = Instant::now();
        for (position, handler) in handlers.iter().enumerate() {
            let result = handler.handle(event);
            if let Some(metrics) = &self.metrics {
                metrics.record_handler(event_type, handler.name(), result.is_ok());
            }

            if let Err(e) = result {
                tracing::error!(
                    error = %e,
                    event_type = %event_type,
                    handler = %handler.name(),
                    position,
                    skipped = handlers.len() - position - 1,
                    "Event handler failed, aborting dispatch"
                );
                self.record_dispatch(event_type, handlers.len(), Some(start));
                return Err(e);
            }
        }

        self.record_dispatch(event_type, handlers.len(), Some(start));
        tracing::debug!(event_type = %event_type, "Event dispatched");
        Ok(())
    }

    /// Copy of the whole registry, for verifying wiring.
    pub fn get_event_handlers(&self) -> HandlerRegistry<E> {
        self.handlers.read().clone()
    }

    /// Handlers for one event type, in registration order.
    pub fn handlers_for(&self, event_type: &str) -> Vec<SharedHandler<E>> {
        self.handlers
            .read()
            .get(event_type)
            .cloned()
            .unwrap_or_default()
    }

    pub fn handler_count(&self, event_type: &str) -> usize {
        self.handlers.read().get(event_type).map_or(0, Vec::len)
    }

    pub fn has_handlers(&self, event_type: &str) -> bool {
        self.handler_count(event_type) > 0
    }

    fn record_dispatch(&self, event_type: &str, handler_count: usize, start: Option<Instant>) {
        if let Some(metrics) = &self.metrics {
            let elapsed = start.map_or(0.0, |s| s.elapsed().as_secs_f64());
            metrics.record_dispatch(event_type, handler_count, elapsed);
        }
    }
}

impl<E: DomainEvent> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}
