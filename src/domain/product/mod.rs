// ============================================================================
// Product Domain
// ============================================================================
//
// - Events (ProductCreatedEvent)
// - Errors (ProductError enum)
// - Entity (Product, the event producer)
// - Handlers (e-mail notification consumer)
//
// ============================================================================

pub mod events;
pub mod errors;
pub mod entity;
pub mod handlers;

// Re-export for convenience
pub use events::*;
pub use errors::*;
pub use entity::*;
pub use handlers::SendEmailWhenProductIsCreatedHandler;
