use crate::channel::{ChannelError, Delivery, SubmissionChannel};
use crate::core::lead::Lead;
use std::collections::VecDeque;
use std::time::Duration;

/// Stand-in for the remote lead endpoint: accepts the JSON payload,
/// then resolves after a configurable latency with the next scripted
/// outcome (success when the script runs dry).
pub struct SimulatedRemote {
    latency: Duration,
    script: VecDeque<Result<(), ChannelError>>,
    accepted: Vec<serde_json::Value>,
}

impl SimulatedRemote {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            script: VecDeque::new(),
            accepted: Vec::new(),
        }
    }

    pub fn with_outcome(mut self, outcome: Result<(), ChannelError>) -> Self {
        self.script.push_back(outcome);
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Every payload accepted so far, in dispatch order.
    pub fn accepted(&self) -> &[serde_json::Value] {
        &self.accepted
    }
}

impl SubmissionChannel for SimulatedRemote {
    fn dispatch(&mut self, lead: &Lead) -> Delivery {
        self.accepted.push(lead.to_json());
        let outcome = self.script.pop_front().unwrap_or(Ok(()));
        Delivery::Deferred {
            delay: self.latency,
            outcome,
        }
    }
}
