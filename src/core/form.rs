use crate::core::field::FieldId;
use crate::core::template::FormTemplate;
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Failed,
}

impl Default for SubmitStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// Mutable form state: field values in template order, the error map
/// (a key is present only while that field is invalid), and the
/// submission status.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: IndexMap<FieldId, String>,
    errors: IndexMap<FieldId, String>,
    status: SubmitStatus,
    failure_notice: Option<String>,
}

impl FormState {
    pub fn for_template(template: &FormTemplate) -> Self {
        let values = template
            .fields()
            .iter()
            .map(|spec| (spec.id.clone(), String::new()))
            .collect();

        Self {
            values,
            errors: IndexMap::new(),
            status: SubmitStatus::Idle,
            failure_notice: None,
        }
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(|v| v.as_str())
    }

    pub fn values(&self) -> &IndexMap<FieldId, String> {
        &self.values
    }

    /// Returns false when the id is not a recognized field; the value map
    /// is seeded from the template and never grows.
    pub fn set_value(&mut self, id: &str, value: String) -> bool {
        let Some(slot) = self.values.get_mut(id) else {
            return false;
        };
        *slot = value;
        true
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(|e| e.as_str())
    }

    pub fn errors(&self) -> &IndexMap<FieldId, String> {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn set_errors(&mut self, errors: IndexMap<FieldId, String>) {
        self.errors = errors;
    }

    pub fn clear_error(&mut self, id: &str) {
        self.errors.shift_remove(id);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn set_status(&mut self, status: SubmitStatus) {
        self.status = status;
    }

    pub fn failure_notice(&self) -> Option<&str> {
        self.failure_notice.as_deref()
    }

    pub fn set_failure_notice(&mut self, notice: Option<String>) {
        self.failure_notice = notice;
    }

    pub fn reset_values(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FormState;
    use crate::core::template::FormTemplate;

    #[test]
    fn values_are_seeded_empty_in_template_order() {
        let state = FormState::for_template(&FormTemplate::cooler_request());
        let ids: Vec<&str> = state.values().keys().map(|id| id.as_str()).collect();
        assert_eq!(
            ids,
            ["firstName", "businessName", "email", "location", "spaceType"]
        );
        assert!(state.values().values().all(|v| v.is_empty()));
    }

    #[test]
    fn set_value_rejects_unknown_fields() {
        let mut state = FormState::for_template(&FormTemplate::cooler_request());
        assert!(state.set_value("email", "sam@flexgym.com".to_string()));
        assert!(!state.set_value("favouriteSnack", "chips".to_string()));
        assert_eq!(state.values().len(), 5);
    }

    #[test]
    fn clear_error_leaves_other_fields_alone() {
        let mut state = FormState::for_template(&FormTemplate::cooler_request());
        let mut errors = indexmap::IndexMap::new();
        errors.insert("firstName".into(), "First name is required".to_string());
        errors.insert("email".into(), "Invalid email address".to_string());
        state.set_errors(errors);

        state.clear_error("firstName");
        assert_eq!(state.error("firstName"), None);
        assert_eq!(state.error("email"), Some("Invalid email address"));
    }

    #[test]
    fn reset_values_keeps_the_field_set() {
        let mut state = FormState::for_template(&FormTemplate::cooler_request());
        state.set_value("firstName", "Sam".to_string());
        state.reset_values();
        assert_eq!(state.value("firstName"), Some(""));
        assert_eq!(state.values().len(), 5);
    }
}
