use crate::channel::ChannelError;
use crate::core::field::FieldId;

/// Everything that can happen to a form. Field edits and submit requests
/// come from the embedding shell; delivery resolutions and the post-success
/// reset arrive through the scheduler.
#[derive(Debug, Clone)]
pub enum FormEvent {
    FieldEdited { id: FieldId, value: String },
    SubmitRequested,
    DeliveryResolved(Result<(), ChannelError>),
    ResetDue,
}
