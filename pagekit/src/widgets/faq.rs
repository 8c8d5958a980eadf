//! FAQ accordion: at most one answer open at a time.

use pagedom::{Document, DomError, EventKind, Window};

pub const QUESTION_CLASS: &str = "faq-question";
pub const ANSWER_CLASS: &str = "faq-answer";
pub const ACTIVE_CLASS: &str = "active";

pub fn install<S: 'static>(window: &mut Window<S>) {
    for question in window.document().query_class(QUESTION_CLASS) {
        let id = question.clone();
        window.add_listener(&question, EventKind::Click, move |_, scope, _| {
            if let Err(e) = toggle(scope.document_mut(), &id) {
                log::warn!("Could not toggle FAQ item {}: {}", id, e);
            }
        });
    }
}

/// Close every item, then open `question_id` unless it was the open one.
/// Returns whether the question is open afterwards.
pub fn toggle(doc: &mut Document, question_id: &str) -> Result<bool, DomError> {
    let was_open = doc.element(question_id)?.has_class(ACTIVE_CLASS);

    for question in doc.query_class(QUESTION_CLASS) {
        doc.remove_class(&question, ACTIVE_CLASS)?;
        if let Some(answer) = answer_for(doc, &question)? {
            doc.remove_class(&answer, ACTIVE_CLASS)?;
        }
    }

    if was_open {
        return Ok(false);
    }

    doc.add_class(question_id, ACTIVE_CLASS)?;
    if let Some(answer) = answer_for(doc, question_id)? {
        doc.add_class(&answer, ACTIVE_CLASS)?;
    }
    log::info!("FAQ opened: {}", doc.text(question_id)?);
    Ok(true)
}

/// The answer sharing a parent item with `question_id`.
pub fn answer_for(doc: &Document, question_id: &str) -> Result<Option<String>, DomError> {
    let Some(item) = doc.parent_id(question_id) else {
        return Ok(None);
    };
    Ok(doc.query_class_within(item, ANSWER_CLASS)?.into_iter().next())
}

/// The currently open question, if any.
pub fn open_question(doc: &Document) -> Option<String> {
    doc.query_class(QUESTION_CLASS)
        .into_iter()
        .find(|id| doc.has_class(id, ACTIVE_CLASS))
}
