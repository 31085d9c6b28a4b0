use anyhow::Result;

use crate::domain::ShopEvent;
use crate::events::EventDispatcher;
use super::errors::CustomerError;
use super::events::{AddressUpdatedData, AddressUpdatedEvent, CustomerCreatedData, CustomerCreatedEvent};
use super::value_objects::Address;

// ============================================================================
// Customer Entity
// ============================================================================
//
// Announces its state changes through the dispatcher it is handed:
// - create          -> CustomerCreatedEvent
// - change_address  -> AddressUpdatedEvent
//
// The entity never knows who listens.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u32,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Build a customer and announce it with a `CustomerCreatedEvent`.
    pub fn create(
        id: impl Into<String>,
        name: impl Into<String>,
        address: Option<Address>,
        dispatcher: &EventDispatcher<ShopEvent>,
    ) -> Result<Self> {
        let mut customer = Self::new(id, name)?;
        customer.address = address;

        let event = CustomerCreatedEvent::new(customer.created_event_data());
        dispatcher.notify(&event.into())?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.trim().is_empty() {
            return Err(CustomerError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u32 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    /// Store the new address, then announce it with an `AddressUpdatedEvent`.
    ///
    /// The address stays changed even if a handler fails.
    pub fn change_address(
        &mut self,
        address: Address,
        dispatcher: &EventDispatcher<ShopEvent>,
    ) -> Result<()> {
        let rendered = address.to_string();
        self.address = Some(address);

        let event = AddressUpdatedEvent::new(AddressUpdatedData {
            id: self.id.clone(),
            name: self.name.clone(),
            address: rendered,
        });
        dispatcher.notify(&event.into())
    }

    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u32) {
        self.reward_points = self.reward_points.saturating_add(points);
    }

    fn created_event_data(&self) -> CustomerCreatedData {
        CustomerCreatedData {
            id: self.id.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            active: self.active,
            reward_points: self.reward_points,
        }
    }
}
