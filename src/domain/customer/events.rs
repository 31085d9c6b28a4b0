use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::Address;

// ============================================================================
// Customer Domain Events
// ============================================================================

/// A customer was created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatedEvent {
    pub data_time_occurred: DateTime<Utc>,
    pub event_data: CustomerCreatedData,
}

impl CustomerCreatedEvent {
    pub const EVENT_TYPE: &'static str = "CustomerCreatedEvent";

    pub fn new(event_data: CustomerCreatedData) -> Self {
        Self {
            data_time_occurred: Utc::now(),
            event_data,
        }
    }
}

/// Snapshot of the customer at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatedData {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub address: Option<Address>,
    pub active: bool,
    pub reward_points: u32,
}

/// A customer's address was changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdatedEvent {
    pub data_time_occurred: DateTime<Utc>,
    pub event_data: AddressUpdatedData,
}

impl AddressUpdatedEvent {
    pub const EVENT_TYPE: &'static str = "AddressUpdatedEvent";

    pub fn new(event_data: AddressUpdatedData) -> Self {
        Self {
            data_time_occurred: Utc::now(),
            event_data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressUpdatedData {
    pub id: String,
    pub name: String,
    /// Rendered as `"Street, 321, Zip, City"`.
    pub address: String,
}
