//! Tests for the error store, field controllers and the form orchestrator.
//!
//! These run against an in-memory [`FormView`] so the validation core is
//! exercised without any document.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use pagekit::FormConfig;
use pagekit::validation::{
    ErrorStore, FieldController, FieldError, FieldId, FormOrchestrator, FormState, FormView,
    SubmitOutcome, UnknownField,
};

/// Form view backed by plain maps, recording what the core asked for.
#[derive(Debug)]
struct RecordingView {
    values: BTreeMap<FieldId, String>,
    error_text: BTreeMap<FieldId, String>,
    marked: BTreeSet<FieldId>,
    form_visible: bool,
    success_visible: bool,
    focused: Option<FieldId>,
    resets: usize,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
            error_text: BTreeMap::new(),
            marked: BTreeSet::new(),
            form_visible: true,
            success_visible: false,
            focused: None,
            resets: 0,
        }
    }
}

impl RecordingView {
    fn with(mut self, field: FieldId, value: &str) -> Self {
        self.set(field, value);
        self
    }

    fn set(&mut self, field: FieldId, value: &str) {
        self.values.insert(field, value.to_string());
    }

    fn error_text(&self, field: FieldId) -> &str {
        self.error_text.get(&field).map(String::as_str).unwrap_or("")
    }

    /// A submission every rule accepts.
    fn valid() -> Self {
        Self::default()
            .with(FieldId::Name, "Jane Doe")
            .with(FieldId::Email, "jane@example.com")
            .with(FieldId::Password, "Passw0rd!")
            .with(FieldId::ConfirmPassword, "Passw0rd!")
            .with(FieldId::Phone, "+1 (555) 123-4567")
            .with(FieldId::Message, "Hello, I would like a quote.")
    }
}

impl FormView for RecordingView {
    fn field_value(&self, field: FieldId) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_error_text(&mut self, field: FieldId, message: &str) {
        self.error_text.insert(field, message.to_string());
    }

    fn clear_error_text(&mut self, field: FieldId) {
        self.error_text.remove(&field);
    }

    fn mark_invalid(&mut self, field: FieldId) {
        self.marked.insert(field);
    }

    fn unmark_invalid(&mut self, field: FieldId) {
        self.marked.remove(&field);
    }

    fn is_marked_invalid(&self, field: FieldId) -> bool {
        self.marked.contains(&field)
    }

    fn set_form_visible(&mut self, visible: bool) {
        self.form_visible = visible;
    }

    fn set_success_visible(&mut self, visible: bool) {
        self.success_visible = visible;
    }

    fn reset_fields(&mut self) {
        self.values.clear();
        self.resets += 1;
    }

    fn focus_field(&mut self, field: FieldId) {
        self.focused = Some(field);
    }
}

/// Store entries and view markers must always agree.
fn assert_in_step(store: &ErrorStore, view: &RecordingView) {
    for field in FieldId::ALL {
        assert_eq!(
            store.contains(field),
            view.is_marked_invalid(field),
            "store and marker disagree for {field}"
        );
        assert_eq!(store.message(field).unwrap_or(""), view.error_text(field));
    }
}

// ============================================================================
// Field ids
// ============================================================================

#[test]
fn test_field_ids_round_trip_through_dom_ids() {
    for field in FieldId::ALL {
        assert_eq!(field.dom_id().parse::<FieldId>(), Ok(field));
        assert_eq!(field.error_id(), format!("{}-error", field.dom_id()));
    }
}

#[test]
fn test_unknown_field_id() {
    assert_eq!(
        "surname".parse::<FieldId>(),
        Err(UnknownField("surname".to_string()))
    );
}

#[test]
fn test_field_id_displays_as_dom_id() {
    assert_eq!(FieldId::ConfirmPassword.to_string(), "confirm-password");
    for field in FieldId::ALL {
        assert_eq!(field.to_string().parse::<FieldId>(), Ok(field));
    }
}

// ============================================================================
// Error store
// ============================================================================

#[test]
fn test_store_first_error_is_canonical_not_chronological() {
    let mut store = ErrorStore::new();
    store.set_error(FieldId::Message, "late field");
    store.set_error(FieldId::Phone, "later field");
    store.set_error(FieldId::Email, "early field");

    assert_eq!(store.first_error_field(), Some(FieldId::Email));
    let order: Vec<FieldId> = store.iter().map(|(field, _)| field).collect();
    assert_eq!(order, vec![FieldId::Email, FieldId::Phone, FieldId::Message]);
}

#[test]
fn test_store_set_overwrites_and_clear_reports() {
    let mut store = ErrorStore::new();
    assert!(!store.has_any_errors());
    assert_eq!(store.first_error_field(), None);

    store.set_error(FieldId::Name, "first");
    store.set_error(FieldId::Name, "second");
    assert_eq!(store.len(), 1);
    assert_eq!(store.message(FieldId::Name), Some("second"));

    assert!(store.clear_error(FieldId::Name));
    assert!(!store.clear_error(FieldId::Name));
    assert!(store.is_empty());
}

#[test]
fn test_store_clear_all() {
    let mut store = ErrorStore::new();
    for field in FieldId::ALL {
        store.set_error(field, "bad");
    }
    assert_eq!(store.len(), 6);
    store.clear_all();
    assert!(!store.has_any_errors());
}

// ============================================================================
// Field controller
// ============================================================================

#[test]
fn test_blur_on_invalid_field_records_and_marks() {
    let controller = FieldController::new(FieldId::Name);
    let mut store = ErrorStore::new();
    let mut view = RecordingView::default().with(FieldId::Name, "A");

    let result = controller.on_blur(&mut store, &mut view);

    assert!(result.is_invalid());
    assert_eq!(store.message(FieldId::Name), Some("Name must have at least 2 characters"));
    assert_eq!(view.error_text(FieldId::Name), "Name must have at least 2 characters");
    assert!(view.is_marked_invalid(FieldId::Name));
}

#[test]
fn test_blur_after_fix_clears_everything() {
    let controller = FieldController::new(FieldId::Name);
    let mut store = ErrorStore::new();
    let mut view = RecordingView::default().with(FieldId::Name, "A");
    controller.on_blur(&mut store, &mut view);

    view.set(FieldId::Name, "Al");
    assert!(controller.on_blur(&mut store, &mut view).is_valid());

    assert!(!store.contains(FieldId::Name));
    assert_eq!(view.error_text(FieldId::Name), "");
    assert!(!view.is_marked_invalid(FieldId::Name));
}

#[test]
fn test_input_clears_without_revalidating() {
    let controller = FieldController::new(FieldId::Email);
    let mut store = ErrorStore::new();
    let mut view = RecordingView::default().with(FieldId::Email, "nope");
    controller.on_blur(&mut store, &mut view);
    assert!(store.contains(FieldId::Email));

    // Still invalid, but typing clears the error until the next blur.
    view.set(FieldId::Email, "still nope");
    controller.on_input(&mut store, &mut view);

    assert!(!store.contains(FieldId::Email));
    assert!(!view.is_marked_invalid(FieldId::Email));
    assert_eq!(view.error_text(FieldId::Email), "");
}

#[test]
fn test_input_on_unmarked_field_does_nothing() {
    let controller = FieldController::new(FieldId::Email);
    let mut store = ErrorStore::new();
    let mut view = RecordingView::default().with(FieldId::Email, "nope");

    controller.on_input(&mut store, &mut view);

    assert!(store.is_empty());
    assert!(view.error_text.is_empty());
}

#[test]
fn test_confirm_password_reads_live_password() {
    let controller = FieldController::new(FieldId::ConfirmPassword);
    let mut store = ErrorStore::new();
    let mut view = RecordingView::default()
        .with(FieldId::Password, "Passw0rd!")
        .with(FieldId::ConfirmPassword, "Passw0rd!");
    assert!(controller.on_blur(&mut store, &mut view).is_valid());

    // Password changes afterwards; the next check sees the new value.
    view.set(FieldId::Password, "Different1!");
    let result = controller.on_blur(&mut store, &mut view);
    assert_eq!(result.message(), Some("Passwords do not match"));
}

#[test]
fn test_password_change_does_not_revalidate_confirm() {
    let mut form = FormOrchestrator::default();
    let mut view = RecordingView::default()
        .with(FieldId::Password, "Passw0rd!")
        .with(FieldId::ConfirmPassword, "Passw0rd!");
    form.field_blurred(FieldId::ConfirmPassword, &mut view);

    view.set(FieldId::Password, "Different1!");
    form.field_changed(FieldId::Password, &mut view);
    form.field_blurred(FieldId::Password, &mut view);

    assert!(!form.store().contains(FieldId::ConfirmPassword));
}

// ============================================================================
// Orchestrator
// ============================================================================

#[test]
fn test_submit_rejects_and_focuses_first_invalid() {
    let mut form = FormOrchestrator::default();
    let mut view = RecordingView::default()
        .with(FieldId::Name, "A")
        .with(FieldId::Email, "jane@example.com")
        .with(FieldId::Password, "short")
        .with(FieldId::ConfirmPassword, "different")
        .with(FieldId::Phone, "+1 555 123 4567")
        .with(FieldId::Message, "Hi");

    let outcome = form.submit(&mut view);

    let SubmitOutcome::Rejected { errors, focused } = outcome else {
        panic!("expected rejection");
    };
    assert_eq!(
        errors,
        vec![
            FieldError {
                field: FieldId::Name,
                message: "Name must have at least 2 characters".to_string(),
            },
            FieldError {
                field: FieldId::Password,
                message: "Password must have at least 8 characters".to_string(),
            },
            FieldError {
                field: FieldId::ConfirmPassword,
                message: "Passwords do not match".to_string(),
            },
            FieldError {
                field: FieldId::Message,
                message: "Message must have at least 10 characters".to_string(),
            },
        ]
    );
    assert_eq!(focused, Some(FieldId::Name));
    assert_eq!(view.focused, Some(FieldId::Name));

    assert_eq!(form.store().len(), 4);
    assert!(!form.store().contains(FieldId::Email));
    assert!(!form.store().contains(FieldId::Phone));
    assert_eq!(form.state(), FormState::Editing);
    assert!(view.form_visible);
    assert!(!view.success_visible);
    assert_eq!(view.resets, 0);
}

#[test]
fn test_submit_focuses_earliest_even_if_flagged_last() {
    let mut form = FormOrchestrator::default();
    let mut view = RecordingView::valid().with(FieldId::Message, "short");
    form.field_blurred(FieldId::Message, &mut view);

    view.set(FieldId::Email, "broken");
    let outcome = form.submit(&mut view);

    assert!(matches!(
        outcome,
        SubmitOutcome::Rejected {
            focused: Some(FieldId::Email),
            ..
        }
    ));
}

#[test]
fn test_submit_evaluates_every_field() {
    let mut form = FormOrchestrator::default();
    let mut view = RecordingView::default();

    let errors = form.validate_all(&mut view);

    // Empty confirm matches empty password; everything else fails.
    let fields: Vec<FieldId> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            FieldId::Name,
            FieldId::Email,
            FieldId::Password,
            FieldId::Phone,
            FieldId::Message,
        ]
    );
    assert_in_step(form.store(), &view);
}

#[test]
fn test_submit_accepts_valid_form() {
    let mut form = FormOrchestrator::default();
    let mut view = RecordingView::valid();

    let outcome = form.submit(&mut view);

    assert!(outcome.is_accepted());
    assert_eq!(form.state(), FormState::Submitted);
    assert!(!view.form_visible);
    assert!(view.success_visible);
    assert_eq!(view.resets, 1);
    assert!(view.values.is_empty());
    assert!(form.store().is_empty());
    assert_eq!(view.focused, None);
}

#[test]
fn test_accept_clears_earlier_errors() {
    let mut form = FormOrchestrator::default();
    let mut view = RecordingView::valid().with(FieldId::Phone, "abc");
    form.field_blurred(FieldId::Phone, &mut view);
    assert!(view.is_marked_invalid(FieldId::Phone));

    view.set(FieldId::Phone, "5551234");
    assert!(form.submit(&mut view).is_accepted());

    assert!(view.marked.is_empty());
    assert!(view.error_text.is_empty());
}

#[test]
fn test_revert_restores_editing() {
    let mut form = FormOrchestrator::new(FormConfig::default());
    let mut view = RecordingView::valid();
    let SubmitOutcome::Accepted(ticket) = form.submit(&mut view) else {
        panic!("expected acceptance");
    };

    assert!(form.revert(ticket, &mut view));
    assert_eq!(form.state(), FormState::Editing);
    assert!(view.form_visible);
    assert!(!view.success_visible);

    // A ticket is good for one revert only.
    assert!(!form.revert(ticket, &mut view));
}

#[test]
fn test_stale_ticket_is_ignored_after_second_acceptance() {
    let mut form = FormOrchestrator::default();
    let mut view = RecordingView::valid();
    let SubmitOutcome::Accepted(first) = form.submit(&mut view) else {
        panic!("expected acceptance");
    };

    let mut view = RecordingView::valid();
    let SubmitOutcome::Accepted(second) = form.submit(&mut view) else {
        panic!("expected acceptance");
    };
    assert!(second.generation() > first.generation());

    assert!(!form.revert(first, &mut view));
    assert_eq!(form.state(), FormState::Submitted);
    assert!(view.success_visible);

    assert!(form.revert(second, &mut view));
    assert_eq!(form.state(), FormState::Editing);
}

#[test]
fn test_revert_delay_comes_from_config() {
    let config = FormConfig::default().with_revert_delay(Duration::from_millis(250));
    let form = FormOrchestrator::new(config);
    assert_eq!(form.revert_delay(), Duration::from_millis(250));
    assert_eq!(
        FormOrchestrator::default().revert_delay(),
        Duration::from_millis(5000)
    );
}

#[test]
fn test_store_and_markers_stay_in_step() {
    let mut form = FormOrchestrator::default();
    let mut view = RecordingView::default()
        .with(FieldId::Name, "J")
        .with(FieldId::Email, "x@y");

    form.field_blurred(FieldId::Name, &mut view);
    assert_in_step(form.store(), &view);
    form.field_blurred(FieldId::Email, &mut view);
    assert_in_step(form.store(), &view);
    form.field_changed(FieldId::Name, &mut view);
    assert_in_step(form.store(), &view);
    form.submit(&mut view);
    assert_in_step(form.store(), &view);
}
