// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// Events are facts, not commands: they carry only the data needed to react.
// Every cache mutation emits one, which is what lets a consumer keep a live
// view of the store (subscribe, then re-read on each emission).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

/// Emitted after a fetched record is persisted (first fetch or re-fetch).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordCached {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub record_id: u32,
    pub name: String,
}

impl RecordCached {
    pub fn new(record_id: u32, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            record_id,
            name,
        }
    }
}

impl DomainEvent for RecordCached {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "RecordCached"
    }
}

/// Emitted after a by-name delete, whether or not a row existed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub name: String,
}

impl RecordDeleted {
    pub fn new(name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            name,
        }
    }
}

impl DomainEvent for RecordDeleted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "RecordDeleted"
    }
}

/// Emitted after the whole store is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl CacheCleared {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for CacheCleared {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for CacheCleared {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "CacheCleared"
    }
}

/// Emitted once per batch run, after every name has completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchCompleted {
    pub fn new(succeeded: usize, failed: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            succeeded,
            failed,
        }
    }
}

impl DomainEvent for BatchCompleted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "BatchCompleted"
    }
}
