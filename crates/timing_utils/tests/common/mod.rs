//! Shared test harness: a layer that captures every event it sees.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use timing_utils::Logger;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// One captured event
#[derive(Debug, Clone)]
pub struct Record {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

impl Record {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Collects events from any subscriber it is layered onto.
#[derive(Clone, Default)]
pub struct Capture {
    records: Arc<Mutex<Vec<Record>>>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// A logger bound to a fresh subscriber that feeds this capture.
    pub fn logger(&self) -> Logger {
        Logger::from_subscriber(tracing_subscriber::registry().with(self.clone()))
    }

    /// Make this capture the current thread's default subscriber.
    pub fn set_default(&self) -> tracing::subscriber::DefaultGuard {
        tracing_subscriber::registry().with(self.clone()).set_default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    pub fn at_level(&self, level: Level) -> Vec<Record> {
        self.records()
            .into_iter()
            .filter(|record| record.level == level)
            .collect()
    }
}

struct FieldVisitor<'a> {
    record: &'a mut Record,
}

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record
            .fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let text = format!("{value:?}");
        if field.name() == "message" {
            self.record.message = text;
        } else {
            self.record.fields.insert(field.name().to_string(), text);
        }
    }
}

impl<S: Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut record = Record {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: String::new(),
            fields: BTreeMap::new(),
        };
        event.record(&mut FieldVisitor {
            record: &mut record,
        });
        self.records.lock().unwrap().push(record);
    }
}
