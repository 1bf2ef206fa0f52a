use crate::runtime::event::FormEvent;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum SchedulerCommand {
    EmitNow(FormEvent),
    EmitAfter {
        key: String,
        delay: Duration,
        event: FormEvent,
    },
    Cancel {
        key: String,
    },
}

#[derive(Debug, Clone)]
struct Pending {
    due_at: Instant,
    key: String,
    version: u64,
    event: FormEvent,
}

/// Deferred-continuation store driven by an explicit clock: callers pass
/// `now` in, so tests advance virtual time instead of sleeping. Cancelling
/// a key bumps its version, which invalidates every event scheduled under
/// the older version without searching for it.
#[derive(Default)]
pub struct Scheduler {
    ready: VecDeque<FormEvent>,
    pending: Vec<Pending>,
    key_versions: HashMap<String, u64>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: SchedulerCommand, now: Instant) {
        match command {
            SchedulerCommand::EmitNow(event) => {
                self.ready.push_back(event);
            }
            SchedulerCommand::EmitAfter { key, delay, event } => {
                let version = *self.key_versions.entry(key.clone()).or_insert(0);
                self.pending.push(Pending {
                    due_at: now + delay,
                    key,
                    version,
                    event,
                });
            }
            SchedulerCommand::Cancel { key } => {
                self.cancel(&key);
            }
        }
    }

    pub fn cancel(&mut self, key: &str) {
        let entry = self.key_versions.entry(key.to_string()).or_insert(0);
        *entry = entry.saturating_add(1);
    }

    pub fn drain_ready(&mut self, now: Instant) -> Vec<FormEvent> {
        let mut idx = 0usize;
        while idx < self.pending.len() {
            if self.pending[idx].due_at <= now {
                let task = self.pending.swap_remove(idx);
                if self.is_live(&task) {
                    self.ready.push_back(task.event);
                }
            } else {
                idx += 1;
            }
        }

        self.ready.drain(..).collect()
    }

    /// Time until the next live pending event, capped at `default_timeout`.
    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        let mut next = default_timeout;

        for task in &self.pending {
            if !self.is_live(task) {
                continue;
            }
            let due_in = task.due_at.saturating_duration_since(now);
            if due_in < next {
                next = due_in;
            }
        }

        next
    }

    pub fn has_pending(&self, key: &str) -> bool {
        self.pending
            .iter()
            .any(|task| task.key == key && self.is_live(task))
    }

    fn is_live(&self, task: &Pending) -> bool {
        let current = *self.key_versions.get(&task.key).unwrap_or(&0);
        current == task.version
    }
}
