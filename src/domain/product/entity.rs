use anyhow::Result;

use crate::domain::ShopEvent;
use crate::events::EventDispatcher;
use super::errors::ProductError;
use super::events::{ProductCreatedData, ProductCreatedEvent};

// ============================================================================
// Product Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    /// Build a product and announce it with a `ProductCreatedEvent`.
    pub fn create(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        dispatcher: &EventDispatcher<ShopEvent>,
    ) -> Result<Self> {
        let product = Self::new(id, name, price)?;

        let event = ProductCreatedEvent::new(ProductCreatedData {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
        });
        dispatcher.notify(&event.into())?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.trim().is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        if self.price.is_nan() || self.price < 0.0 {
            return Err(ProductError::InvalidPrice(self.price));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let previous = std::mem::replace(&mut self.name, name.into());
        if let Err(e) = self.validate() {
            self.name = previous;
            return Err(e);
        }
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), ProductError> {
        let previous = std::mem::replace(&mut self.price, price);
        if let Err(e) = self.validate() {
            self.price = previous;
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::events::testing::{EventLog, RecordingHandler};

    #[test]
    fn test_product_validation() {
        assert!(matches!(Product::new("", "Product A", 10.0), Err(ProductError::EmptyId)));
        assert!(matches!(Product::new("1", "", 10.0), Err(ProductError::EmptyName)));
        assert!(matches!(Product::new("1", "Product A", -1.0), Err(ProductError::InvalidPrice(_))));
        assert!(Product::new("1", "Product A", f64::NAN).is_err());
        assert!(Product::new("1", "Free sample", 0.0).is_ok());
    }

    #[test]
    fn test_change_name_and_price() {
        let mut product = Product::new("123", "Product 1", 100.0).unwrap();

        product.change_name("Product 2").unwrap();
        product.change_price(200.0).unwrap();

        assert_eq!(product.name(), "Product 2");
        assert_eq!(product.price(), 200.0);
    }

    #[test]
    fn test_invalid_change_keeps_previous_value() {
        let mut product = Product::new("123", "Product 1", 100.0).unwrap();

        assert!(product.change_name(" ").is_err());
        assert!(product.change_price(-5.0).is_err());

        assert_eq!(product.name(), "Product 1");
        assert_eq!(product.price(), 100.0);
    }

    #[test]
    fn test_create_announces_product_created() {
        let dispatcher = EventDispatcher::<ShopEvent>::new();
        let log = EventLog::default();
        dispatcher
            .register(ProductCreatedEvent::EVENT_TYPE, Arc::new(RecordingHandler::new("mail", &log)))
            .unwrap();

        let product = Product::create("p1", "Product A", 10.0, &dispatcher).unwrap();

        match &log.calls()[0].shop_event {
            Some(ShopEvent::ProductCreated(e)) => {
                assert_eq!(e.event_data.id, product.id());
                assert_eq!(e.event_data.price, 10.0);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_create_without_subscribers() {
        let dispatcher = EventDispatcher::new();
        let product = Product::create("p1", "Product A", 10.0, &dispatcher).unwrap();
        assert_eq!(product.name(), "Product A");
    }
}
