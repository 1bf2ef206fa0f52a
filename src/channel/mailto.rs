use crate::channel::{ChannelError, Delivery, SubmissionChannel};
use crate::core::lead::Lead;

/// A fully assembled compose request: destination, subject, the
/// `Label: value` body, and the percent-encoded `mailto:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub url: String,
}

/// Host-environment seam that opens the user's mail composer. The
/// hand-off counts as delivered once the launcher accepts the request.
pub trait ComposerLauncher {
    fn open(&mut self, request: &ComposeRequest) -> Result<(), ChannelError>;
}

/// Launcher double that records every request and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub opened: Vec<ComposeRequest>,
}

impl ComposerLauncher for RecordingLauncher {
    fn open(&mut self, request: &ComposeRequest) -> Result<(), ChannelError> {
        self.opened.push(request.clone());
        Ok(())
    }
}

pub struct MailtoChannel {
    to: String,
    subject: String,
    launcher: Box<dyn ComposerLauncher>,
}

impl MailtoChannel {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        launcher: Box<dyn ComposerLauncher>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            launcher,
        }
    }

    pub fn compose(&self, lead: &Lead) -> ComposeRequest {
        let body = render_body(lead);
        let url = format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&body),
        );

        ComposeRequest {
            to: self.to.clone(),
            subject: self.subject.clone(),
            body,
            url,
        }
    }
}

impl SubmissionChannel for MailtoChannel {
    fn dispatch(&mut self, lead: &Lead) -> Delivery {
        let request = self.compose(lead);
        Delivery::Completed(self.launcher.open(&request))
    }
}

/// One `Label: value` line per field, in template order.
pub fn render_body(lead: &Lead) -> String {
    let lines: Vec<String> = lead
        .fields()
        .iter()
        .map(|field| format!("{}: {}", field.label, field.value))
        .collect();
    lines.join("\n")
}
