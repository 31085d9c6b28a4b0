// ============================================================================
// Shop Events
// ============================================================================
//
// E-commerce domain model (customer, product) announcing state changes
// through a synchronous, in-process event dispatcher.
//
// - events/   - Generic dispatcher, event and handler capabilities
// - domain/   - Entities, their events and the handlers wired to them
// - metrics/  - Prometheus instrumentation for dispatch
//
// ============================================================================

pub mod domain;
pub mod events;
pub mod metrics;
