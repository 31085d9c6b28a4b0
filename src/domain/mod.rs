// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Entities that announce their state changes, the events they announce, and
// the handlers the application wires to those events.
// Each entity has its own subdirectory with:
// - Value objects
// - Events
// - Errors
// - Entity implementation
// - Event handlers
//
// Nothing here knows which handlers are registered; producers only receive
// an `EventDispatcher<ShopEvent>`.
//
// ============================================================================

pub mod customer;
pub mod product;
pub(crate) mod event;

pub use event::ShopEvent;
