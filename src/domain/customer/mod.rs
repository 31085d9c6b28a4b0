// ============================================================================
// Customer Domain
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (Address)
// - Events (CustomerCreatedEvent, AddressUpdatedEvent)
// - Errors (CustomerError enum)
// - Entity (Customer, the event producer)
// - Handlers (logging consumers)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod errors;
pub mod entity;
pub mod handlers;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use errors::*;
pub use entity::*;
pub use handlers::{SendLogHandler, SendLogOneHandler, SendLogTwoHandler};
