use crate::core::field::FieldId;
use crate::core::form::FormState;
use crate::core::template::FormTemplate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadField {
    pub id: FieldId,
    pub label: String,
    pub value: String,
}

/// Immutable payload snapshot captured when a submission starts. Later
/// edits to the form do not affect an in-flight lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    fields: Vec<LeadField>,
}

impl Lead {
    pub fn capture(template: &FormTemplate, state: &FormState) -> Self {
        let fields = template
            .fields()
            .iter()
            .map(|spec| LeadField {
                id: spec.id.clone(),
                label: spec.label.clone(),
                value: state.value(spec.id.as_str()).unwrap_or("").to_string(),
            })
            .collect();

        Self { fields }
    }

    pub fn fields(&self) -> &[LeadField] {
        &self.fields
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.id.as_str() == id)
            .map(|field| field.value.as_str())
    }

    /// Wire shape for the remote variant: one string per field, keyed by id.
    pub fn to_json(&self) -> serde_json::Value {
        let mut object = serde_json::Map::with_capacity(self.fields.len());
        for field in &self.fields {
            object.insert(
                field.id.to_string(),
                serde_json::Value::String(field.value.clone()),
            );
        }
        serde_json::Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::Lead;
    use crate::core::form::FormState;
    use crate::core::template::FormTemplate;

    fn filled_state(template: &FormTemplate) -> FormState {
        let mut state = FormState::for_template(template);
        state.set_value("firstName", "Sam".to_string());
        state.set_value("businessName", "Flex Gym".to_string());
        state.set_value("email", "sam@flexgym.com".to_string());
        state.set_value("location", "Gym".to_string());
        state.set_value("spaceType", "gym".to_string());
        state
    }

    #[test]
    fn capture_snapshots_values_in_template_order() {
        let template = FormTemplate::cooler_request();
        let mut state = filled_state(&template);
        let lead = Lead::capture(&template, &state);

        // A later edit must not reach the captured payload.
        state.set_value("firstName", "Alex".to_string());
        assert_eq!(lead.value("firstName"), Some("Sam"));

        let labels: Vec<&str> = lead.fields().iter().map(|f| f.label.as_str()).collect();
        assert_eq!(
            labels,
            ["First name", "Business name", "Email", "Location", "Space type"]
        );
    }

    #[test]
    fn json_payload_is_keyed_by_field_id() {
        let template = FormTemplate::cooler_request();
        let lead = Lead::capture(&template, &filled_state(&template));
        assert_eq!(
            lead.to_json(),
            serde_json::json!({
                "firstName": "Sam",
                "businessName": "Flex Gym",
                "email": "sam@flexgym.com",
                "location": "Gym",
                "spaceType": "gym",
            })
        );
    }
}
