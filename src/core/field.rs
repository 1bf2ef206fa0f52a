use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Borrow<str> for FieldId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for FieldId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for FieldId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&String> for FieldId {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

/// How the field is edited. A `Select` treats the empty string as
/// "no selection made".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Text,
    Select { options: Vec<String> },
}

impl Default for Control {
    fn default() -> Self {
        Self::Text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Required,
    Email,
    Optional,
}

impl Default for Rule {
    fn default() -> Self {
        Self::Required
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: String,
    #[serde(default)]
    pub control: Control,
    #[serde(default)]
    pub rule: Rule,
}

impl FieldSpec {
    pub fn text(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            control: Control::Text,
            rule: Rule::Required,
        }
    }

    pub fn email(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self::text(id, label).with_rule(Rule::Email)
    }

    pub fn select(id: impl Into<FieldId>, label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            control: Control::Select { options },
            rule: Rule::Required,
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    pub fn optional(self) -> Self {
        self.with_rule(Rule::Optional)
    }

    pub fn options(&self) -> &[String] {
        match &self.control {
            Control::Text => &[],
            Control::Select { options } => options.as_slice(),
        }
    }

    pub fn required_message(&self) -> String {
        format!("{} is required", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::{Control, FieldSpec, Rule};

    #[test]
    fn required_message_uses_label() {
        let spec = FieldSpec::text("firstName", "First name");
        assert_eq!(spec.required_message(), "First name is required");
    }

    #[test]
    fn select_exposes_options() {
        let spec = FieldSpec::select(
            "spaceType",
            "Space type",
            vec!["gym".to_string(), "studio".to_string()],
        );
        assert_eq!(spec.options(), &["gym", "studio"]);
        assert_eq!(spec.rule, Rule::Required);
    }

    #[test]
    fn text_field_has_no_options() {
        let spec = FieldSpec::text("location", "Location");
        assert!(spec.options().is_empty());
        assert_eq!(spec.control, Control::Text);
    }
}
