use crate::core::field::{FieldId, FieldSpec};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_SUCCESS_RESET_MS: u64 = 5_000;

const DEFAULT_REMOTE_LATENCY_MS: u64 = 400;

/// Where a validated lead goes. Selecting the channel is configuration,
/// not form logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelConfig {
    Mailto { to: String, subject: String },
    Remote { latency_ms: u64 },
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self::Remote {
            latency_ms: DEFAULT_REMOTE_LATENCY_MS,
        }
    }
}

/// One page revision collapsed to data: the recognized fields in order,
/// the submission channel, and the success-panel display delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormTemplate {
    fields: Vec<FieldSpec>,
    #[serde(default)]
    channel: ChannelConfig,
    #[serde(default = "default_success_reset_ms")]
    success_reset_ms: u64,
}

fn default_success_reset_ms() -> u64 {
    DEFAULT_SUCCESS_RESET_MS
}

impl FormTemplate {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields,
            channel: ChannelConfig::default(),
            success_reset_ms: DEFAULT_SUCCESS_RESET_MS,
        }
    }

    pub fn with_channel(mut self, channel: ChannelConfig) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_success_reset(mut self, delay: Duration) -> Self {
        self.success_reset_ms = delay.as_millis() as u64;
        self
    }

    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.id.as_str() == id)
    }

    pub fn field_ids(&self) -> impl Iterator<Item = &FieldId> {
        self.fields.iter().map(|spec| &spec.id)
    }

    pub fn channel(&self) -> &ChannelConfig {
        &self.channel
    }

    pub fn success_reset_delay(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms)
    }

    /// The cooler-request page: five fields, mail hand-off.
    pub fn cooler_request() -> Self {
        Self::new(vec![
            FieldSpec::text("firstName", "First name"),
            FieldSpec::text("businessName", "Business name"),
            FieldSpec::email("email", "Email"),
            FieldSpec::text("location", "Location"),
            FieldSpec::select("spaceType", "Space type", space_types_full()),
        ])
        .with_channel(ChannelConfig::Mailto {
            to: "tommy@snackhaus.com.au".to_string(),
            subject: "New Snackhaus Cooler Request".to_string(),
        })
    }

    /// Revision with `location` as a closed choice of eight region codes
    /// and the narrowed space-type list.
    pub fn cooler_request_regions() -> Self {
        Self::new(vec![
            FieldSpec::text("firstName", "First name"),
            FieldSpec::text("businessName", "Business name"),
            FieldSpec::email("email", "Email"),
            FieldSpec::select("location", "Location", region_codes()),
            FieldSpec::select("spaceType", "Space type", space_types_narrow()),
        ])
        .with_channel(ChannelConfig::Mailto {
            to: "tommy@snackhaus.com.au".to_string(),
            subject: "New Snackhaus Cooler Request".to_string(),
        })
    }

    /// Revision that swaps `spaceType` for a free-text message and posts
    /// to the remote endpoint.
    pub fn cooler_request_message() -> Self {
        Self::new(vec![
            FieldSpec::text("firstName", "First name"),
            FieldSpec::text("businessName", "Business name"),
            FieldSpec::email("email", "Email"),
            FieldSpec::text("location", "Location"),
            FieldSpec::text("message", "Message"),
        ])
    }
}

fn space_types_full() -> Vec<String> {
    ["gym", "studio", "office", "retail", "other"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn space_types_narrow() -> Vec<String> {
    ["gym", "studio", "other"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn region_codes() -> Vec<String> {
    ["NSW", "VIC", "QLD", "WA", "SA", "TAS", "ACT", "NT"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ChannelConfig, FormTemplate};
    use crate::core::field::{Control, Rule};
    use std::time::Duration;

    #[test]
    fn cooler_request_preset_shape() {
        let template = FormTemplate::cooler_request();
        let ids: Vec<&str> = template.field_ids().map(|id| id.as_str()).collect();
        assert_eq!(
            ids,
            ["firstName", "businessName", "email", "location", "spaceType"]
        );
        assert_eq!(
            template.field("email").expect("email field").rule,
            Rule::Email
        );
        assert_eq!(template.success_reset_delay(), Duration::from_millis(5_000));
        assert_eq!(
            template.channel(),
            &ChannelConfig::Mailto {
                to: "tommy@snackhaus.com.au".to_string(),
                subject: "New Snackhaus Cooler Request".to_string(),
            }
        );
    }

    #[test]
    fn regions_preset_uses_eight_codes() {
        let template = FormTemplate::cooler_request_regions();
        let location = template.field("location").expect("location field");
        assert_eq!(location.options().len(), 8);
        let space = template.field("spaceType").expect("spaceType field");
        assert_eq!(space.options(), &["gym", "studio", "other"]);
    }

    #[test]
    fn message_preset_drops_space_type() {
        let template = FormTemplate::cooler_request_message();
        assert!(template.field("spaceType").is_none());
        assert!(template.field("message").is_some());
        assert_eq!(template.channel(), &ChannelConfig::default());
    }

    #[test]
    fn parses_from_yaml() {
        let template = FormTemplate::from_yaml(
            r#"
fields:
  - id: email
    label: Email
    rule: email
  - id: spaceType
    label: Space type
    control:
      select:
        options: [gym, studio, other]
channel:
  mailto:
    to: tommy@snackhaus.com.au
    subject: New Snackhaus Cooler Request
"#,
        )
        .expect("template should parse");

        assert_eq!(template.fields().len(), 2);
        let space = template.field("spaceType").expect("spaceType field");
        assert_eq!(
            space.control,
            Control::Select {
                options: vec!["gym".into(), "studio".into(), "other".into()]
            }
        );
        assert_eq!(template.success_reset_delay(), Duration::from_millis(5_000));
    }

    #[test]
    fn parses_from_json_with_defaults() {
        let template = FormTemplate::from_json(
            r#"{"fields": [{"id": "firstName", "label": "First name"}]}"#,
        )
        .expect("template should parse");

        let field = template.field("firstName").expect("firstName field");
        assert_eq!(field.rule, Rule::Required);
        assert_eq!(field.control, Control::Text);
        assert_eq!(template.channel(), &ChannelConfig::Remote { latency_ms: 400 });
    }
}
