//! Presentation boundary between the validation core and whatever renders it.

use super::FieldId;

/// Everything the validation core reads from, or writes to, the visible form.
///
/// The page implements this over the DOM; tests implement it over plain maps.
pub trait FormView {
    /// Current value of the field's input.
    fn field_value(&self, field: FieldId) -> String;

    /// Show `message` under the field.
    fn set_error_text(&mut self, field: FieldId, message: &str);

    /// Empty the field's error text.
    fn clear_error_text(&mut self, field: FieldId);

    /// Apply the invalid marker (the `error` class) to the input.
    fn mark_invalid(&mut self, field: FieldId);

    /// Remove the invalid marker.
    fn unmark_invalid(&mut self, field: FieldId);

    /// Whether the input currently carries the invalid marker.
    fn is_marked_invalid(&self, field: FieldId) -> bool;

    /// Show or hide the whole form container.
    fn set_form_visible(&mut self, visible: bool);

    /// Show or hide the success notice.
    fn set_success_visible(&mut self, visible: bool);

    /// Clear every field's value.
    fn reset_fields(&mut self);

    /// Move input focus to the field.
    fn focus_field(&mut self, field: FieldId);
}
