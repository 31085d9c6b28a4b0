use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Product Domain Events
// ============================================================================

/// A product was added to the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreatedEvent {
    pub data_time_occurred: DateTime<Utc>,
    pub event_data: ProductCreatedData,
}

impl ProductCreatedEvent {
    pub const EVENT_TYPE: &'static str = "ProductCreatedEvent";

    pub fn new(event_data: ProductCreatedData) -> Self {
        Self {
            data_time_occurred: Utc::now(),
            event_data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreatedData {
    pub id: String,
    pub name: String,
    pub price: f64,
}
