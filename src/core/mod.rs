pub mod field;
pub mod form;
pub mod lead;
pub mod template;
pub mod validation;
pub mod validators;
pub mod view;

pub use field::{Control, FieldId, FieldSpec, Rule};
pub use form::{FormState, SubmitStatus};
pub use lead::{Lead, LeadField};
pub use template::{ChannelConfig, FormTemplate};
pub use view::{FieldView, FormView};
