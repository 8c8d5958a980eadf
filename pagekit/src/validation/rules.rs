//! One pure rule per field.
//!
//! Every rule checks its conditions in a fixed order and reports only the
//! first one violated. Lengths count characters, not bytes.

use std::sync::LazyLock;

use regex::Regex;

use super::{FieldId, ValidationResult};

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 8;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 500;

/// Characters of which a password needs at least one.
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";

// ASCII letters, Latin-1 letters À..ÿ without × and ÷, and whitespace.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZÀ-ÖØ-öø-ÿ\s]+$").expect("Invalid regex pattern"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"));

// 1 to 16 digits, no leading zero, optional leading plus.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("Invalid regex pattern"));

/// Values from other fields a rule may read.
///
/// Filled in at evaluation time from the live form; never cached between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleContext<'a> {
    /// Current value of the password field.
    pub password: &'a str,
}

/// Evaluate the rule for `field` against `value`.
pub fn validate(field: FieldId, value: &str, cx: &RuleContext<'_>) -> ValidationResult {
    match field {
        FieldId::Name => validate_name(value),
        FieldId::Email => validate_email(value),
        FieldId::Password => validate_password(value),
        FieldId::ConfirmPassword => validate_confirm_password(cx.password, value),
        FieldId::Phone => validate_phone(value),
        FieldId::Message => validate_message(value),
    }
}

pub fn validate_name(name: &str) -> ValidationResult {
    let len = name.trim().chars().count();
    if len < NAME_MIN {
        return ValidationResult::invalid("Name must have at least 2 characters");
    }
    if len > NAME_MAX {
        return ValidationResult::invalid("Name must have maximum 50 characters");
    }
    if !NAME_PATTERN.is_match(name) {
        return ValidationResult::invalid("Name must contain only letters and spaces");
    }
    ValidationResult::Valid
}

pub fn validate_email(email: &str) -> ValidationResult {
    if !EMAIL_PATTERN.is_match(email) {
        return ValidationResult::invalid("Email must have a valid format");
    }
    ValidationResult::Valid
}

pub fn validate_password(password: &str) -> ValidationResult {
    if password.chars().count() < PASSWORD_MIN {
        return ValidationResult::invalid("Password must have at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return ValidationResult::invalid("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return ValidationResult::invalid("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return ValidationResult::invalid("Password must contain at least one number");
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return ValidationResult::invalid(
            "Password must contain at least one special character (@$!%*?&)",
        );
    }
    ValidationResult::Valid
}

/// Exact string equality with the password, no normalisation.
pub fn validate_confirm_password(password: &str, confirm: &str) -> ValidationResult {
    if password != confirm {
        return ValidationResult::invalid("Passwords do not match");
    }
    ValidationResult::Valid
}

/// Whitespace, hyphens and parentheses are formatting and ignored.
pub fn validate_phone(phone: &str) -> ValidationResult {
    let digits: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    if !PHONE_PATTERN.is_match(&digits) {
        return ValidationResult::invalid("Phone must have a valid format");
    }
    ValidationResult::Valid
}

pub fn validate_message(message: &str) -> ValidationResult {
    let len = message.trim().chars().count();
    if len < MESSAGE_MIN {
        return ValidationResult::invalid("Message must have at least 10 characters");
    }
    if len > MESSAGE_MAX {
        return ValidationResult::invalid("Message must have maximum 500 characters");
    }
    ValidationResult::Valid
}
