//! Session id sources.

use chrono::{DateTime, Local, Utc};
use coach_core::constants::SESSION_TIMESTAMP_FORMAT;

/// Produces session ids. An implementation must never return the same id
/// twice, since a reset is required to yield a fresh id.
pub trait SessionIdSource: Send {
    fn next_id(&mut self, created_at: DateTime<Utc>) -> String;
}

/// Local creation time as `%Y-%m-%d_%H%M%S` plus an 8-character random
/// suffix, e.g. `2024-05-01_093012_1f3a9c0d`. The suffix keeps two sessions
/// started within the same second apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIdSource;

impl SessionIdSource for TimestampIdSource {
    fn next_id(&mut self, created_at: DateTime<Utc>) -> String {
        let stamp = created_at
            .with_timezone(&Local)
            .format(SESSION_TIMESTAMP_FORMAT);
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        format!("{stamp}_{}", &suffix[..8])
    }
}

/// `<prefix>-1`, `<prefix>-2`, ... Deterministic; useful for hosts that
/// assign their own ids and for tests.
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    prefix: String,
    next: u64,
}

impl SequentialIdSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl SessionIdSource for SequentialIdSource {
    fn next_id(&mut self, _created_at: DateTime<Utc>) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
