pub mod field;
pub mod server_errors;
pub mod wizard;

pub use field::{all_ready, FieldAction, FieldRule, ValidatedField, Validity};
pub use server_errors::FieldErrors;
pub use wizard::{FormMode, Wizard, WizardCommand, WizardStep, FALLBACK_ERROR};

use serde::Serialize;

/// State of one add/edit page.
pub trait FormModel: Clone + 'static {
    type Payload: Serialize;

    /// All required inputs present and every field valid.
    fn is_ready(&self) -> bool;

    /// Body sent on submit. Only meaningful once `is_ready` holds.
    fn payload(&self) -> Self::Payload;

    /// Push server messages into the matching fields.
    fn apply_server_errors(&mut self, errors: &FieldErrors);
}
