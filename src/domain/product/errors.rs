// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product id is required")]
    EmptyId,

    #[error("Product name is required")]
    EmptyName,

    #[error("Price must be a non-negative number, got {0}")]
    InvalidPrice(f64),
}
