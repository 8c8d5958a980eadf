pub mod config;
pub mod page;
pub mod validation;
pub mod widgets;

pub use config::{CounterConfig, FormConfig, PageConfig};
pub use page::{Page, PageState};

pub mod prelude {
    pub use crate::config::{CounterConfig, FormConfig, PageConfig};
    pub use crate::page::{Page, PageState};
    pub use crate::validation::{
        ErrorStore, FieldController, FieldError, FieldId, FormOrchestrator, FormState, FormView,
        SubmitOutcome, ValidationResult,
    };
    pub use crate::widgets::{Counter, Theme};

    pub use pagedom::{Document, DomError, MemoryStorage, Storage};
}
