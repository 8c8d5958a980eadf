//! Plain-text snapshot of the page for the terminal.

use std::fmt::Write;

use pagekit::Page;
use pagekit::validation::FieldId;
use pagekit::widgets::{contact_form, faq, tabs};

/// Describe what a visitor would currently see.
pub fn summary(page: &Page) -> String {
    let doc = page.document();
    let state = page.state();
    let mut out = String::new();

    let _ = writeln!(out, "theme:   {}", page.theme());
    let _ = writeln!(out, "counter: {}", state.counter.value());
    let _ = writeln!(
        out,
        "faq:     {}",
        faq::open_question(doc).as_deref().unwrap_or("(all closed)")
    );
    let _ = writeln!(
        out,
        "tab:     {}",
        tabs::active_panel(doc).as_deref().unwrap_or("(none)")
    );
    let _ = writeln!(out, "focus:   {}", page.focused().unwrap_or("(none)"));

    if doc.is_hidden(contact_form::FORM_ID) {
        let _ = writeln!(out, "form:    submitted, success notice shown");
    } else {
        let _ = writeln!(out, "form:    {:?}", state.form.state());
        for field in FieldId::ALL {
            let value = doc.value(field.dom_id()).unwrap_or_default();
            let shown = match field {
                FieldId::Password | FieldId::ConfirmPassword => "*".repeat(value.chars().count()),
                _ => value.to_string(),
            };
            let _ = write!(out, "  {:<17} {:?}", field.label(), shown);
            if let Some(message) = state.form.store().message(field) {
                let _ = write!(out, "  ! {}", message);
            }
            out.push('\n');
        }
    }

    let _ = write!(out, "clock:   {} ms", page.now().as_millis());
    out
}
