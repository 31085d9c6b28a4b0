use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shop_events::domain::customer::{
    Address, AddressUpdatedEvent, Customer, CustomerCreatedEvent, SendLogHandler,
    SendLogOneHandler, SendLogTwoHandler,
};
use shop_events::domain::product::{Product, ProductCreatedEvent, SendEmailWhenProductIsCreatedHandler};
use shop_events::domain::ShopEvent;
use shop_events::events::EventDispatcher;
use shop_events::metrics::Metrics;

fn main() -> anyhow::Result<()> {
    // Structured logging, RUST_LOG overrides the default filter
    // Example: RUST_LOG=trace cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,shop_events=debug")),
        )
        .init();

    tracing::info!("🚀 Starting shop events demo");

    // === 1. Composition root: one dispatcher for the application ===
    let metrics = Arc::new(Metrics::new()?);
    let dispatcher: EventDispatcher<ShopEvent> = EventDispatcher::with_metrics(metrics.clone());

    dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, Arc::new(SendLogOneHandler))?;
    dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, Arc::new(SendLogTwoHandler))?;
    dispatcher.register(AddressUpdatedEvent::EVENT_TYPE, Arc::new(SendLogHandler))?;
    dispatcher.register(
        ProductCreatedEvent::EVENT_TYPE,
        Arc::new(SendEmailWhenProductIsCreatedHandler),
    )?;

    for (event_type, handlers) in dispatcher.get_event_handlers() {
        let names: Vec<&str> = handlers.iter().map(|h| h.name()).collect();
        tracing::info!(event_type = %event_type, handlers = ?names, "Handlers wired");
    }

    // === 2. Customer lifecycle ===
    let customer_id = uuid::Uuid::new_v4().to_string();
    let mut customer = Customer::create(
        customer_id,
        "John Doe",
        Some(Address::new("Street", 123, "zip", "City")?),
        &dispatcher,
    )?;
    customer.activate()?;
    customer.add_reward_points(10);

    customer.change_address(Address::new("Street", 321, "Zip", "City")?, &dispatcher)?;
    tracing::info!(
        customer_id = %customer.id(),
        active = customer.is_active(),
        reward_points = customer.reward_points(),
        "✅ Customer ready"
    );

    // === 3. Product lifecycle ===
    let product = Product::create(uuid::Uuid::new_v4().to_string(), "Product A", 10.0, &dispatcher)?;
    tracing::info!(product_id = %product.id(), "✅ Product created");

    // === 4. Teardown ===
    dispatcher.unregister_all();
    tracing::debug!("Metrics:\n{}", metrics.encode_text()?);

    tracing::info!("🎉 Demo complete!");
    Ok(())
}
