// ============================================================================
// Domain Event Infrastructure
// ============================================================================
//
// Generic, in-process publish/subscribe for domain events.
// Domain-specific events and handlers live in src/domain/
//
// ============================================================================

mod dispatcher;
mod event;
mod handler;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::{DispatchError, EventDispatcher, HandlerRegistry};
pub use event::{serialize_event, DomainEvent};
pub use handler::{same_handler, EventHandler, SharedHandler};
