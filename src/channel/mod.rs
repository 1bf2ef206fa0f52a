pub mod mailto;
pub mod remote;

pub use mailto::{ComposeRequest, ComposerLauncher, MailtoChannel, RecordingLauncher};
pub use remote::SimulatedRemote;

use crate::core::lead::Lead;
use crate::core::template::ChannelConfig;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    Transport(String),
    Rejected { code: u16 },
    Composer(String),
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "transport failure: {message}"),
            Self::Rejected { code } => write!(f, "endpoint rejected the lead (status {code})"),
            Self::Composer(message) => write!(f, "mail composer failed to open: {message}"),
        }
    }
}

impl std::error::Error for ChannelError {}

/// How a dispatch resolves. The mail hand-off completes synchronously;
/// the remote call resolves after its latency has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Completed(Result<(), ChannelError>),
    Deferred {
        delay: Duration,
        outcome: Result<(), ChannelError>,
    },
}

/// External system that receives a validated lead. Invoked exactly once
/// per successful validation pass.
pub trait SubmissionChannel {
    fn dispatch(&mut self, lead: &Lead) -> Delivery;
}

pub fn build_channel(
    config: &ChannelConfig,
    launcher: Box<dyn ComposerLauncher>,
) -> Box<dyn SubmissionChannel> {
    match config {
        ChannelConfig::Mailto { to, subject } => Box::new(MailtoChannel::new(
            to.clone(),
            subject.clone(),
            launcher,
        )),
        ChannelConfig::Remote { latency_ms } => {
            Box::new(SimulatedRemote::new(Duration::from_millis(*latency_ms)))
        }
    }
}
