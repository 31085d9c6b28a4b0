use anyhow::Result;

use crate::domain::event::ignore;
use crate::domain::ShopEvent;
use crate::events::EventHandler;

/// Tells the sales team about new products. Delivery is a log line for now.
pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler<ShopEvent> for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &ShopEvent) -> Result<()> {
        let ShopEvent::ProductCreated(created) = event else {
            return ignore(self, event);
        };
        tracing::info!(
            product_id = %created.event_data.id,
            product_name = %created.event_data.name,
            price = created.event_data.price,
            "Sending email about new product"
        );
        Ok(())
    }
}
