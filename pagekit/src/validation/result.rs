use super::FieldId;

/// Outcome of evaluating one field's rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// The value satisfies the rule.
    #[default]
    Valid,
    /// The first violated condition, as a message for the user.
    Invalid(String),
}

impl ValidationResult {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    /// Check if the value passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the value failed.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The error message, if the value failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}
