use crate::core::form::{FormState, SubmitStatus};
use crate::core::lead::Lead;
use crate::core::template::FormTemplate;
use crate::core::validation;
use crate::runtime::effect::Effect;
use crate::runtime::event::FormEvent;
use crate::runtime::scheduler::SchedulerCommand;
use log::{debug, warn};

pub const DELIVERY_KEY: &str = "delivery";
pub const RESET_KEY: &str = "success_reset";

pub const FAILURE_NOTICE: &str =
    "Something went wrong sending your request. Please try again.";

pub struct Reducer;

impl Reducer {
    pub fn reduce(
        state: &mut FormState,
        template: &FormTemplate,
        event: FormEvent,
    ) -> Vec<Effect> {
        match event {
            FormEvent::FieldEdited { id, value } => {
                if state.set_value(id.as_str(), value) {
                    // Error clears optimistically; the field is not
                    // re-validated until the next submit attempt.
                    state.clear_error(id.as_str());
                } else {
                    warn!("ignoring edit for unrecognized field {id}");
                }
                vec![]
            }
            FormEvent::SubmitRequested => {
                if state.is_submitting() {
                    debug!("submit ignored, a submission is already in flight");
                    return vec![];
                }

                let errors = validation::validate_form(template, state.values());
                if !errors.is_empty() {
                    debug!("submit rejected with {} validation errors", errors.len());
                    state.set_errors(errors);
                    return vec![];
                }

                state.clear_errors();
                state.set_failure_notice(None);
                state.set_status(SubmitStatus::Submitting);
                let lead = Lead::capture(template, state);

                // A submit inside the success-display window supersedes the
                // pending auto-reset.
                vec![
                    Effect::Schedule(SchedulerCommand::Cancel {
                        key: RESET_KEY.to_string(),
                    }),
                    Effect::Dispatch(lead),
                ]
            }
            FormEvent::DeliveryResolved(outcome) => {
                if !state.is_submitting() {
                    debug!("stale delivery resolution dropped");
                    return vec![];
                }

                match outcome {
                    Ok(()) => {
                        state.set_status(SubmitStatus::Success);
                        vec![Effect::Schedule(SchedulerCommand::EmitAfter {
                            key: RESET_KEY.to_string(),
                            delay: template.success_reset_delay(),
                            event: FormEvent::ResetDue,
                        })]
                    }
                    Err(err) => {
                        warn!("lead delivery failed: {err}");
                        state.set_status(SubmitStatus::Failed);
                        state.set_failure_notice(Some(FAILURE_NOTICE.to_string()));
                        vec![]
                    }
                }
            }
            FormEvent::ResetDue => {
                state.reset_values();
                state.clear_errors();
                state.set_failure_notice(None);
                state.set_status(SubmitStatus::Idle);
                vec![]
            }
        }
    }
}
