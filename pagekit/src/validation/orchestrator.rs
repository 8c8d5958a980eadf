use std::time::Duration;

use super::{ErrorStore, FieldController, FieldError, FieldId, FormView, ValidationResult};
use crate::config::FormConfig;

/// Whether the form is accepting input or showing the success notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Editing,
    Submitted,
}

/// Permission to revert one accepted submission back to editing.
///
/// Every accepted submission issues a ticket with a fresh generation. Only the
/// ticket from the latest acceptance is honoured, so a revert scheduled for an
/// earlier submission can never cut a later one short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTicket {
    generation: u64,
}

impl RevertTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed. The caller schedules a revert with the ticket.
    Accepted(RevertTicket),
    /// At least one field failed; `errors` are in canonical order.
    Rejected {
        errors: Vec<FieldError>,
        focused: Option<FieldId>,
    },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Owns the error store and one controller per field; decides submissions.
#[derive(Debug, Clone)]
pub struct FormOrchestrator {
    controllers: [FieldController; 6],
    store: ErrorStore,
    state: FormState,
    generation: u64,
    config: FormConfig,
}

impl Default for FormOrchestrator {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl FormOrchestrator {
    pub fn new(config: FormConfig) -> Self {
        Self {
            controllers: FieldId::ALL.map(FieldController::new),
            store: ErrorStore::new(),
            state: FormState::Editing,
            generation: 0,
            config,
        }
    }

    pub fn controller(&self, field: FieldId) -> FieldController {
        // `controllers` is built from `FieldId::ALL`, so it is indexed by discriminant.
        self.controllers[field as usize]
    }

    pub fn store(&self) -> &ErrorStore {
        &self.store
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// How long the success notice stays up before the form returns.
    pub fn revert_delay(&self) -> Duration {
        self.config.revert_delay
    }

    /// Focus left `field`.
    pub fn field_blurred(&mut self, field: FieldId, view: &mut impl FormView) -> ValidationResult {
        self.controller(field).on_blur(&mut self.store, view)
    }

    /// The value of `field` changed.
    pub fn field_changed(&mut self, field: FieldId, view: &mut impl FormView) {
        self.controller(field).on_input(&mut self.store, view);
    }

    /// Evaluate every field in canonical order, recording each result.
    /// A failure never stops the remaining fields from being checked.
    pub fn validate_all(&mut self, view: &mut impl FormView) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for controller in self.controllers {
            if let ValidationResult::Invalid(message) = controller.validate(&mut self.store, view) {
                errors.push(FieldError {
                    field: controller.field(),
                    message,
                });
            }
        }
        errors
    }

    /// Handle a submit action.
    pub fn submit(&mut self, view: &mut impl FormView) -> SubmitOutcome {
        let errors = self.validate_all(view);

        if !errors.is_empty() {
            log::info!("Form invalid, {} field(s) need fixing", errors.len());
            let focused = self.store.first_error_field();
            if let Some(field) = focused {
                view.focus_field(field);
            }
            return SubmitOutcome::Rejected { errors, focused };
        }

        log::info!("Form valid, simulating submission");
        view.set_form_visible(false);
        view.set_success_visible(true);
        view.reset_fields();
        for controller in self.controllers {
            controller.clear_error(&mut self.store, view);
        }

        self.generation += 1;
        self.state = FormState::Submitted;
        SubmitOutcome::Accepted(RevertTicket {
            generation: self.generation,
        })
    }

    /// Bring the form back after an accepted submission.
    /// Returns false, changing nothing, if the ticket is stale.
    pub fn revert(&mut self, ticket: RevertTicket, view: &mut impl FormView) -> bool {
        if self.state != FormState::Submitted || ticket.generation != self.generation {
            log::debug!(
                "[validation] ignoring stale revert (ticket {}, current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        view.set_form_visible(true);
        view.set_success_visible(false);
        self.state = FormState::Editing;
        log::debug!("[validation] form reverted to editing");
        true
    }
}
