//! Wires the contact form's DOM events to the validation core.

use pagedom::{Event, EventKind, Scope, Window};

use crate::validation::{FieldId, FormOrchestrator, FormView, SubmitOutcome};

pub const FORM_ID: &str = "contact-form";
pub const SUCCESS_ID: &str = "form-success";
pub const SUBMIT_ID: &str = "submit-btn";
/// Class marking an input as invalid.
pub const ERROR_CLASS: &str = "error";

/// [`FormView`] over the live document, for use inside a listener.
pub struct DomFormView<'s, 'a, S> {
    scope: &'s mut Scope<'a, S>,
}

impl<'s, 'a, S: 'static> DomFormView<'s, 'a, S> {
    pub fn new(scope: &'s mut Scope<'a, S>) -> Self {
        Self { scope }
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(e) = self.scope.document_mut().set_style(id, "display", display) {
            log::warn!("Could not change visibility of {}: {}", id, e);
        }
    }
}

impl<S: 'static> FormView for DomFormView<'_, '_, S> {
    fn field_value(&self, field: FieldId) -> String {
        match self.scope.document().value(field.dom_id()) {
            Ok(value) => value.to_string(),
            Err(e) => {
                log::warn!("Could not read {}: {}", field, e);
                String::new()
            }
        }
    }

    fn set_error_text(&mut self, field: FieldId, message: &str) {
        if let Err(e) = self.scope.document_mut().set_text(field.error_id(), message) {
            log::warn!("Could not show error for {}: {}", field, e);
        }
    }

    fn clear_error_text(&mut self, field: FieldId) {
        if let Err(e) = self.scope.document_mut().set_text(field.error_id(), "") {
            log::warn!("Could not clear error for {}: {}", field, e);
        }
    }

    fn mark_invalid(&mut self, field: FieldId) {
        if let Err(e) = self.scope.document_mut().add_class(field.dom_id(), ERROR_CLASS) {
            log::warn!("Could not mark {}: {}", field, e);
        }
    }

    fn unmark_invalid(&mut self, field: FieldId) {
        if let Err(e) = self.scope.document_mut().remove_class(field.dom_id(), ERROR_CLASS) {
            log::warn!("Could not unmark {}: {}", field, e);
        }
    }

    fn is_marked_invalid(&self, field: FieldId) -> bool {
        self.scope.document().has_class(field.dom_id(), ERROR_CLASS)
    }

    fn set_form_visible(&mut self, visible: bool) {
        self.set_visible(FORM_ID, visible);
    }

    fn set_success_visible(&mut self, visible: bool) {
        self.set_visible(SUCCESS_ID, visible);
    }

    fn reset_fields(&mut self) {
        if let Err(e) = self.scope.document_mut().reset_form(FORM_ID) {
            log::warn!("Could not reset form: {}", e);
        }
    }

    fn focus_field(&mut self, field: FieldId) {
        self.scope.focus(field.dom_id());
    }
}

pub fn install<S: AsMut<FormOrchestrator> + 'static>(window: &mut Window<S>) {
    for field in FieldId::ALL {
        window.add_listener(field.dom_id(), EventKind::Blur, move |state, scope, _| {
            state.as_mut().field_blurred(field, &mut DomFormView::new(scope));
        });

        window.add_listener(field.dom_id(), EventKind::Input, move |state, scope, _| {
            state.as_mut().field_changed(field, &mut DomFormView::new(scope));
        });
    }

    window.add_listener(FORM_ID, EventKind::Submit, on_submit::<S>);
}

fn on_submit<S: AsMut<FormOrchestrator> + 'static>(
    state: &mut S,
    scope: &mut Scope<'_, S>,
    _event: &Event,
) {
    // Nothing leaves the page; the submission is simulated.
    scope.prevent_default();

    let form = state.as_mut();
    let outcome = form.submit(&mut DomFormView::new(scope));

    if let SubmitOutcome::Accepted(ticket) = outcome {
        scope.set_timeout(form.revert_delay(), move |state: &mut S, scope: &mut Scope<'_, S>| {
            state.as_mut().revert(ticket, &mut DomFormView::new(scope));
        });
    }
}
