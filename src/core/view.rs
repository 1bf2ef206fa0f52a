use crate::core::field::FieldId;
use crate::core::form::{FormState, SubmitStatus};
use crate::core::template::FormTemplate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub id: FieldId,
    pub label: String,
    pub value: String,
    pub options: Vec<String>,
    pub error: Option<String>,
}

/// What a rendering shell needs per frame: labeled inputs with inline
/// error text, a submit control disabled while submitting, and the
/// success panel that replaces the form for the display-delay window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub submit_enabled: bool,
    pub show_success: bool,
    pub failure_notice: Option<String>,
}

impl FormView {
    pub fn project(template: &FormTemplate, state: &FormState) -> Self {
        let fields = template
            .fields()
            .iter()
            .map(|spec| FieldView {
                id: spec.id.clone(),
                label: spec.label.clone(),
                value: state.value(spec.id.as_str()).unwrap_or("").to_string(),
                options: spec.options().to_vec(),
                error: state.error(spec.id.as_str()).map(str::to_string),
            })
            .collect();

        Self {
            fields,
            submit_enabled: state.status() != SubmitStatus::Submitting,
            show_success: state.status() == SubmitStatus::Success,
            failure_notice: state.failure_notice().map(str::to_string),
        }
    }

    pub fn field(&self, id: &str) -> Option<&FieldView> {
        self.fields.iter().find(|field| field.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::FormView;
    use crate::core::form::{FormState, SubmitStatus};
    use crate::core::template::FormTemplate;

    #[test]
    fn projection_carries_values_and_errors() {
        let template = FormTemplate::cooler_request();
        let mut state = FormState::for_template(&template);
        state.set_value("firstName", "Sam".to_string());
        let mut errors = indexmap::IndexMap::new();
        errors.insert("email".into(), "Invalid email address".to_string());
        state.set_errors(errors);

        let view = FormView::project(&template, &state);
        assert_eq!(view.field("firstName").expect("field").value, "Sam");
        assert_eq!(
            view.field("email").expect("field").error.as_deref(),
            Some("Invalid email address")
        );
        assert!(view.submit_enabled);
        assert!(!view.show_success);
    }

    #[test]
    fn submitting_disables_the_submit_control() {
        let template = FormTemplate::cooler_request();
        let mut state = FormState::for_template(&template);
        state.set_status(SubmitStatus::Submitting);

        let view = FormView::project(&template, &state);
        assert!(!view.submit_enabled);
    }

    #[test]
    fn success_shows_the_confirmation_panel() {
        let template = FormTemplate::cooler_request();
        let mut state = FormState::for_template(&template);
        state.set_status(SubmitStatus::Success);

        let view = FormView::project(&template, &state);
        assert!(view.show_success);
    }
}
