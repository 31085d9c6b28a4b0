//! Test doubles shared by the dispatcher and domain tests.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use super::{DomainEvent, EventHandler};
use crate::domain::ShopEvent;

/// Minimal event carrying its own type identifier.
#[derive(Debug)]
pub struct TestEvent {
    event_type: &'static str,
    pub sequence: u64,
    occurred: DateTime<Utc>,
}

impl TestEvent {
    pub fn new(event_type: &'static str, sequence: u64) -> Self {
        Self { event_type, sequence, occurred: Utc::now() }
    }
}

impl DomainEvent for TestEvent {
    fn event_type(&self) -> &'static str {
        self.event_type
    }

    fn data_time_occurred(&self) -> DateTime<Utc> {
        self.occurred
    }
}

/// One recorded `handle` call.
#[derive(Debug, Clone)]
pub struct Call {
    pub handler: String,
    pub event_type: &'static str,
    pub sequence: u64,
    pub event_addr: usize,
    pub shop_event: Option<ShopEvent>,
}

/// Calls from every handler sharing the log, in the order they happened.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<Call>>>);

impl EventLog {
    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().clone()
    }

    pub fn handlers(&self) -> Vec<String> {
        self.0.lock().iter().map(|c| c.handler.clone()).collect()
    }

    fn push(&self, call: Call) {
        self.0.lock().push(call);
    }
}

/// Records every event it sees; optionally fails after recording.
pub struct RecordingHandler {
    name: String,
    log: EventLog,
    fail: bool,
}

impl RecordingHandler {
    pub fn new(name: &str, log: &EventLog) -> Self {
        Self { name: name.to_string(), log: log.clone(), fail: false }
    }

    pub fn failing(name: &str, log: &EventLog) -> Self {
        Self { fail: true, ..Self::new(name, log) }
    }

    fn record<E: DomainEvent>(
        &self,
        event: &E,
        sequence: u64,
        shop_event: Option<ShopEvent>,
    ) -> Result<()> {
        self.log.push(Call {
            handler: self.name.clone(),
            event_type: event.event_type(),
            sequence,
            event_addr: event as *const E as usize,
            shop_event,
        });
        if self.fail {
            return Err(anyhow!("{} failed on purpose", self.name));
        }
        Ok(())
    }
}

impl EventHandler<TestEvent> for RecordingHandler {
    fn handle(&self, event: &TestEvent) -> Result<()> {
        self.record(event, event.sequence, None)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl EventHandler<ShopEvent> for RecordingHandler {
    fn handle(&self, event: &ShopEvent) -> Result<()> {
        self.record(event, 0, Some(event.clone()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
