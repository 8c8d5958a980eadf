use std::fmt;
use std::str::FromStr;

/// The contact form's inputs.
///
/// Declaration order is the canonical order: fields are validated in this
/// order on submit, and the derived `Ord` is what makes
/// [`crate::validation::ErrorStore::first_error_field`] pick the earliest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Message,
}

impl FieldId {
    /// All fields, in canonical order.
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Phone,
        FieldId::Message,
    ];

    /// ID of the input element.
    pub fn dom_id(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirm-password",
            FieldId::Phone => "phone",
            FieldId::Message => "message",
        }
    }

    /// ID of the element showing this field's error text.
    pub fn error_id(self) -> &'static str {
        match self {
            FieldId::Name => "name-error",
            FieldId::Email => "email-error",
            FieldId::Password => "password-error",
            FieldId::ConfirmPassword => "confirm-password-error",
            FieldId::Phone => "phone-error",
            FieldId::Message => "message-error",
        }
    }

    /// Human label used in the form markup.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm Password",
            FieldId::Phone => "Phone",
            FieldId::Message => "Message",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// A DOM id that does not name a form field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a contact form field")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.dom_id() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
