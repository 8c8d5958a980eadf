use super::rules::{self, RuleContext};
use super::{ErrorStore, FieldId, FormView, ValidationResult};

/// Binds one field's focus-lost and value-changed triggers to its rule.
///
/// Its side effects are limited to the field's entry in the [`ErrorStore`],
/// its visible error text and its invalid marker. Store and view are always
/// updated together so an entry exists exactly while the field is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldController {
    field: FieldId,
}

impl FieldController {
    pub fn new(field: FieldId) -> Self {
        Self { field }
    }

    pub fn field(&self) -> FieldId {
        self.field
    }

    /// Evaluate the rule against the live value and record the result.
    pub fn validate(&self, store: &mut ErrorStore, view: &mut impl FormView) -> ValidationResult {
        let value = view.field_value(self.field);
        // Read at evaluation time so confirm-password always sees the current password.
        let password = match self.field {
            FieldId::ConfirmPassword => view.field_value(FieldId::Password),
            _ => String::new(),
        };
        let cx = RuleContext {
            password: &password,
        };

        let result = rules::validate(self.field, &value, &cx);
        match &result {
            ValidationResult::Valid => self.clear_error(store, view),
            ValidationResult::Invalid(message) => self.set_error(store, view, message),
        }
        result
    }

    /// Focus left the field: the value is final, check it.
    pub fn on_blur(&self, store: &mut ErrorStore, view: &mut impl FormView) -> ValidationResult {
        self.validate(store, view)
    }

    /// The user resumed typing. An invalid field is unmarked straight away;
    /// it is not re-checked until the next blur or submit.
    pub fn on_input(&self, store: &mut ErrorStore, view: &mut impl FormView) {
        if view.is_marked_invalid(self.field) {
            self.clear_error(store, view);
        }
    }

    pub fn set_error(&self, store: &mut ErrorStore, view: &mut impl FormView, message: &str) {
        log::debug!("[validation] {} invalid: {}", self.field, message);
        store.set_error(self.field, message);
        view.set_error_text(self.field, message);
        view.mark_invalid(self.field);
    }

    pub fn clear_error(&self, store: &mut ErrorStore, view: &mut impl FormView) {
        store.clear_error(self.field);
        view.clear_error_text(self.field);
        view.unmark_invalid(self.field);
    }
}
