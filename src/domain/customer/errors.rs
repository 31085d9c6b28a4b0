// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer id is required")]
    EmptyId,

    #[error("Customer name is required")]
    EmptyName,

    #[error("Invalid address: {0}")]
    InvalidAddress(&'static str),

    #[error("Address is mandatory to activate a customer")]
    AddressRequired,
}
