//! Append-only record of everything the facade created.
//!
//! The facade never updates its fixtures. Created records are returned to the
//! caller and a `JournalEntry` is appended here, so tests and the CLI can see
//! what was written and in which order. Entries are never modified or removed.

use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Appointment,
    Note,
    Vitals,
    Prescription,
    ChatMessage,
    AiReply,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Appointment => "appointment",
            EntityKind::Note => "note",
            EntityKind::Vitals => "vitals",
            EntityKind::Prescription => "prescription",
            EntityKind::ChatMessage => "chat_message",
            EntityKind::AiReply => "ai_reply",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEntry {
    /// Position in the journal, starting at 0.
    pub sequence: u64,
    pub kind: EntityKind,
    /// The patient or conversation the record belongs to, when there is one.
    pub scope: Option<String>,
    pub record_id: u64,
    pub recorded_at: DateTime<Utc>,
}

/// Shared, append-only entry list. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<JournalEntry>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its sequence number.
    pub fn append(
        &self,
        kind: EntityKind,
        scope: Option<&str>,
        record_id: u64,
        recorded_at: DateTime<Utc>,
    ) -> u64 {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let sequence = entries.len() as u64;
        entries.push(JournalEntry {
            sequence,
            kind,
            scope: scope.map(str::to_string),
            record_id,
            recorded_at,
        });
        sequence
    }

    /// A snapshot of all entries in append order.
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many entries of `kind` were appended.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.kind == kind)
            .count()
    }
}
