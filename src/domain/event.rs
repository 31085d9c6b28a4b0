use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::{DomainEvent, EventHandler};
use super::customer::{AddressUpdatedEvent, CustomerCreatedEvent};
use super::product::ProductCreatedEvent;

// ============================================================================
// Shop Events - every event the domain can announce
// ============================================================================

/// Union type for all shop events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShopEvent {
    #[serde(rename = "CustomerCreatedEvent")]
    CustomerCreated(CustomerCreatedEvent),
    #[serde(rename = "AddressUpdatedEvent")]
    AddressUpdated(AddressUpdatedEvent),
    #[serde(rename = "ProductCreatedEvent")]
    ProductCreated(ProductCreatedEvent),
}

impl DomainEvent for ShopEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ShopEvent::CustomerCreated(_) => CustomerCreatedEvent::EVENT_TYPE,
            ShopEvent::AddressUpdated(_) => AddressUpdatedEvent::EVENT_TYPE,
            ShopEvent::ProductCreated(_) => ProductCreatedEvent::EVENT_TYPE,
        }
    }

    fn data_time_occurred(&self) -> DateTime<Utc> {
        match self {
            ShopEvent::CustomerCreated(e) => e.data_time_occurred,
            ShopEvent::AddressUpdated(e) => e.data_time_occurred,
            ShopEvent::ProductCreated(e) => e.data_time_occurred,
        }
    }
}

impl From<CustomerCreatedEvent> for ShopEvent {
    fn from(event: CustomerCreatedEvent) -> Self {
        ShopEvent::CustomerCreated(event)
    }
}

impl From<AddressUpdatedEvent> for ShopEvent {
    fn from(event: AddressUpdatedEvent) -> Self {
        ShopEvent::AddressUpdated(event)
    }
}

impl From<ProductCreatedEvent> for ShopEvent {
    fn from(event: ProductCreatedEvent) -> Self {
        ShopEvent::ProductCreated(event)
    }
}

/// Fallback for a handler wired to an event type it does not understand.
pub(crate) fn ignore(handler: &dyn EventHandler<ShopEvent>, event: &ShopEvent) -> anyhow::Result<()> {
    tracing::warn!(
        handler = %handler.name(),
        event_type = %event.event_type(),
        "Handler received an event it does not understand, ignoring"
    );
    Ok(())
}
