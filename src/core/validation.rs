use crate::core::field::{Control, FieldId, FieldSpec, Rule};
use crate::core::template::FormTemplate;
use crate::core::validators::{self, Validator};
use indexmap::IndexMap;

/// Validator chain for one field, derived from its declarative rule.
pub fn compile(spec: &FieldSpec) -> Vec<Validator> {
    let mut chain = Vec::new();

    match spec.rule {
        Rule::Optional => {}
        Rule::Required => chain.push(validators::required(spec.required_message())),
        Rule::Email => {
            chain.push(validators::required(spec.required_message()));
            chain.push(validators::email());
        }
    }

    if let Control::Select { options } = &spec.control {
        // An off-list value counts as no selection made.
        chain.push(validators::one_of(options.clone(), spec.required_message()));
    }

    chain
}

pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), String> {
    for validator in compile(spec) {
        validator(value)?;
    }
    Ok(())
}

/// Pure validation pass: reads the values, never consults status, and
/// returns a fresh error map in template field order.
pub fn validate_form(
    template: &FormTemplate,
    values: &IndexMap<FieldId, String>,
) -> IndexMap<FieldId, String> {
    template
        .fields()
        .iter()
        .filter_map(|spec| {
            let value = values.get(spec.id.as_str()).map(String::as_str).unwrap_or("");
            validate_field(spec, value)
                .err()
                .map(|err| (spec.id.clone(), err))
        })
        .collect()
}
