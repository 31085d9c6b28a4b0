use std::sync::Arc;

use anyhow::Result;

// ============================================================================
// Event Handler Capability
// ============================================================================

/// Consumer of events of type `E`.
///
/// Handlers are owned by the composition root and shared with the dispatcher
/// as `Arc<dyn EventHandler<E>>`. They should treat the event as read-only;
/// any side effect (logging, e-mail, ...) is their own business.
pub trait EventHandler<E>: Send + Sync {
    /// React to an event. An error aborts the rest of the dispatch and is
    /// returned to whoever called `notify`.
    fn handle(&self, event: &E) -> Result<()>;

    /// Name used in log lines and metric labels.
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Shared handle to a registered handler.
pub type SharedHandler<E> = Arc<dyn EventHandler<E>>;

/// Whether two handles point at the same handler instance.
///
/// Only the data address is compared; vtable pointers for the same type can
/// differ between codegen units.
pub fn same_handler<E>(a: &SharedHandler<E>, b: &SharedHandler<E>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

fn short_type_name(full: &str) -> &str {
    // Keep generic arguments intact, strip the module path.
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
