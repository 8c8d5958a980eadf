//! Tab switcher. Each `.tab-btn` names its panel in `data-tab`.

use pagedom::{Document, DomError, EventKind, Window};

pub const BUTTON_CLASS: &str = "tab-btn";
pub const CONTENT_CLASS: &str = "tab-content";
pub const ACTIVE_CLASS: &str = "active";
pub const TARGET_ATTR: &str = "data-tab";

pub fn install<S: 'static>(window: &mut Window<S>) {
    for button in window.document().query_class(BUTTON_CLASS) {
        let id = button.clone();
        window.add_listener(&button, EventKind::Click, move |_, scope, _| {
            match activate(scope.document_mut(), &id) {
                Ok(panel) => log::info!("Tab activated: {}", panel),
                Err(e) => log::warn!("Could not activate tab {}: {}", id, e),
            }
        });
    }
}

/// Make `button_id` and its panel the only active tab. Returns the panel id.
pub fn activate(doc: &mut Document, button_id: &str) -> Result<String, DomError> {
    let panel = doc
        .attribute(button_id, TARGET_ATTR)
        .map(str::to_string)
        .ok_or_else(|| DomError::MissingAttribute {
            id: button_id.to_string(),
            name: TARGET_ATTR.to_string(),
        })?;
    // Fail before touching anything if the panel does not exist.
    doc.element(&panel)?;

    for button in doc.query_class(BUTTON_CLASS) {
        doc.remove_class(&button, ACTIVE_CLASS)?;
    }
    for content in doc.query_class(CONTENT_CLASS) {
        doc.remove_class(&content, ACTIVE_CLASS)?;
    }

    doc.add_class(button_id, ACTIVE_CLASS)?;
    doc.add_class(&panel, ACTIVE_CLASS)?;
    Ok(panel)
}

/// The active panel, if any.
pub fn active_panel(doc: &Document) -> Option<String> {
    doc.query_class(CONTENT_CLASS)
        .into_iter()
        .find(|id| doc.has_class(id, ACTIVE_CLASS))
}
