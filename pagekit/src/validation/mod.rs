//! Contact form validation.
//!
//! Each field has exactly one rule ([`rules`]). Failures are recorded in an
//! [`ErrorStore`] owned by the [`FormOrchestrator`], and reflected through the
//! [`FormView`] presentation boundary. Nothing in this module knows about the
//! DOM; the page wires DOM events to it in `widgets::contact_form`.
//!
//! # Example
//!
//! ```ignore
//! use pagekit::validation::{FieldId, FormOrchestrator, SubmitOutcome};
//!
//! let mut form = FormOrchestrator::default();
//!
//! // Focus left the email field
//! form.field_blurred(FieldId::Email, &mut view);
//!
//! match form.submit(&mut view) {
//!     SubmitOutcome::Accepted(ticket) => schedule_revert(ticket),
//!     SubmitOutcome::Rejected { focused, .. } => log::info!("focus moved to {:?}", focused),
//! }
//! ```

mod controller;
mod field;
mod orchestrator;
mod result;
pub mod rules;
mod store;
mod view;

pub use controller::FieldController;
pub use field::{FieldId, UnknownField};
pub use orchestrator::{FormOrchestrator, FormState, RevertTicket, SubmitOutcome};
pub use result::{FieldError, ValidationResult};
pub use rules::RuleContext;
pub use store::ErrorStore;
pub use view::FormView;
