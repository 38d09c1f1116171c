use crate::record::RequiredField;

/// Validation failure for a submitted asset draft.
///
/// Carries the first required field found empty, in the fixed check
/// order of [`crate::record::validate_draft`]. No state change has
/// occurred when this is returned; the caller may re-prompt and retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is a required field", .0.label())]
    MissingField(RequiredField),
}
