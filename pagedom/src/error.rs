/// Errors raised when a document lookup or mutation targets the wrong element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No element with the given id exists in the document.
    #[error("no element with id `{0}`")]
    NotFound(String),

    /// The element exists but does not hold a value (not an input or textarea).
    #[error("element `{0}` is not a form control")]
    NotFormControl(String),

    /// The element lacks an attribute the caller depends on.
    #[error("element `{id}` has no `{name}` attribute")]
    MissingAttribute { id: String, name: String },
}
