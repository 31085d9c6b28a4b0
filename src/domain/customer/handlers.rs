use anyhow::Result;

use crate::domain::event::ignore;
use crate::domain::ShopEvent;
use crate::events::{serialize_event, EventHandler};

// ============================================================================
// Customer Event Handlers
// ============================================================================
//
// Logging consumers wired by the composition root:
// - SendLogOneHandler / SendLogTwoHandler -> CustomerCreatedEvent
// - SendLogHandler                        -> AddressUpdatedEvent
//
// ============================================================================

pub struct SendLogOneHandler;

impl EventHandler<ShopEvent> for SendLogOneHandler {
    fn handle(&self, event: &ShopEvent) -> Result<()> {
        let ShopEvent::CustomerCreated(created) = event else {
            return ignore(self, event);
        };
        tracing::info!(
            customer_id = %created.event_data.id,
            "This is the first log of the CustomerCreated event"
        );
        Ok(())
    }
}

pub struct SendLogTwoHandler;

impl EventHandler<ShopEvent> for SendLogTwoHandler {
    fn handle(&self, event: &ShopEvent) -> Result<()> {
        let ShopEvent::CustomerCreated(created) = event else {
            return ignore(self, event);
        };
        tracing::info!(
            customer_id = %created.event_data.id,
            payload = %serialize_event(&created.event_data)?,
            "This is the second log of the CustomerCreated event"
        );
        Ok(())
    }
}

pub struct SendLogHandler;

impl EventHandler<ShopEvent> for SendLogHandler {
    fn handle(&self, event: &ShopEvent) -> Result<()> {
        let ShopEvent::AddressUpdated(updated) = event else {
            return ignore(self, event);
        };
        let data = &updated.event_data;
        tracing::info!(
            customer_id = %data.id,
            "Customer address: {}, {} changed to: {}",
            data.id,
            data.name,
            data.address
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::domain::customer::{
        Address, AddressUpdatedData, AddressUpdatedEvent, CustomerCreatedData, CustomerCreatedEvent,
    };
    use crate::events::testing::{EventLog, RecordingHandler};
    use crate::events::{same_handler, EventDispatcher, SharedHandler};

    fn john_doe_created() -> ShopEvent {
        CustomerCreatedEvent::new(CustomerCreatedData {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            address: Some(Address::new("Street", 123, "zip", "City").unwrap()),
            active: true,
            reward_points: 10,
        })
        .into()
    }

    #[test]
    fn test_notify_customer_created_handlers() {
        let dispatcher = EventDispatcher::new();
        let log = EventLog::default();
        let a: SharedHandler<ShopEvent> = Arc::new(RecordingHandler::new("A", &log));
        let b: SharedHandler<ShopEvent> = Arc::new(RecordingHandler::new("B", &log));
        dispatcher.register("CustomerCreatedEvent", a.clone()).unwrap();
        dispatcher.register("CustomerCreatedEvent", b.clone()).unwrap();

        let handlers = dispatcher.get_event_handlers();
        assert!(same_handler(&handlers["CustomerCreatedEvent"][0], &a));
        assert!(same_handler(&handlers["CustomerCreatedEvent"][1], &b));

        let event = john_doe_created();
        dispatcher.notify(&event).unwrap();

        let calls = log.calls();
        assert_eq!(log.handlers(), vec!["A", "B"]);
        for call in &calls {
            assert_eq!(call.event_addr, &event as *const ShopEvent as usize);
            match &call.shop_event {
                Some(ShopEvent::CustomerCreated(e)) => {
                    assert_eq!(
                        e.event_data,
                        CustomerCreatedData {
                            id: "1".to_string(),
                            name: "John Doe".to_string(),
                            address: Some(Address {
                                street: "Street".to_string(),
                                number: 123,
                                zipcode: "zip".to_string(),
                                city: "City".to_string(),
                            }),
                            active: true,
                            reward_points: 10,
                        }
                    );
                }
                other => panic!("unexpected event: {:?}", other),
            }
        }
    }

    #[test]
    fn test_address_handler_not_called_for_customer_created() {
        let dispatcher = EventDispatcher::<ShopEvent>::new();
        let log = EventLog::default();
        dispatcher
            .register("AddressUpdatedEvent", Arc::new(RecordingHandler::new("C", &log)))
            .unwrap();

        dispatcher.notify(&john_doe_created()).unwrap();

        assert!(log.calls().is_empty());
    }

    #[test]
    fn test_log_handlers_succeed() {
        let dispatcher = EventDispatcher::<ShopEvent>::new();
        dispatcher.register("CustomerCreatedEvent", Arc::new(SendLogOneHandler)).unwrap();
        dispatcher.register("CustomerCreatedEvent", Arc::new(SendLogTwoHandler)).unwrap();
        dispatcher.register("AddressUpdatedEvent", Arc::new(SendLogHandler)).unwrap();

        dispatcher.notify(&john_doe_created()).unwrap();
        dispatcher
            .notify(
                &AddressUpdatedEvent::new(AddressUpdatedData {
                    id: "1".to_string(),
                    name: "John Doe".to_string(),
                    address: "Street, 321, Zip, City".to_string(),
                })
                .into(),
            )
            .unwrap();
    }

    #[test]
    fn test_mismatched_event_is_ignored() {
        assert!(SendLogHandler.handle(&john_doe_created()).is_ok());
        assert_eq!(SendLogHandler.name(), "SendLogHandler");
    }
}
