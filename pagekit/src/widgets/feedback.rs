//! Hover lift and touch press feedback on interactive elements.

use pagedom::{EventKind, Window};

/// Elements carrying any of these classes get feedback.
pub const INTERACTIVE_CLASSES: [&str; 3] = ["btn", "faq-question", "tab-btn"];

pub const HOVER_TRANSFORM: &str = "translateY(-2px)";
pub const REST_TRANSFORM: &str = "translateY(0)";
pub const PRESS_TRANSFORM: &str = "scale(0.95)";
pub const RELEASE_TRANSFORM: &str = "scale(1)";

pub fn install<S: 'static>(window: &mut Window<S>) {
    let mut targets: Vec<String> = Vec::new();
    for class in INTERACTIVE_CLASSES {
        for id in window.document().query_class(class) {
            if !targets.contains(&id) {
                targets.push(id);
            }
        }
    }

    let bindings = [
        (EventKind::MouseEnter, HOVER_TRANSFORM),
        (EventKind::MouseLeave, REST_TRANSFORM),
        (EventKind::TouchStart, PRESS_TRANSFORM),
        (EventKind::TouchEnd, RELEASE_TRANSFORM),
    ];

    for target in &targets {
        for (kind, transform) in bindings {
            window.add_listener(target, kind, move |_, scope, event| {
                let Some(id) = event.target() else { return };
                if let Err(e) = scope.document_mut().set_style(id, "transform", transform) {
                    log::warn!("Could not apply feedback to {}: {}", id, e);
                }
            });
        }
    }

    log::debug!("Feedback effects installed on {} elements", targets.len());
}
