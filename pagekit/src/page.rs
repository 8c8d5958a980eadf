//! The interactive page: markup, state, and listener installation.

use std::time::Duration;

use pagedom::{Document, DomError, Element, Event, EventKind, Storage, Window};

use crate::config::PageConfig;
use crate::validation::{FieldId, FormOrchestrator};
use crate::widgets::{Counter, Theme, contact_form, counter, faq, feedback, tabs, theme_toggle};

const FAQS: [(&str, &str); 3] = [
    (
        "What is this page?",
        "A small page showing interactive widgets built on a headless document.",
    ),
    (
        "Is my message sent anywhere?",
        "No. Submission is simulated locally and nothing leaves the page.",
    ),
    (
        "Is my theme remembered?",
        "Yes. Your light or dark preference is kept in local storage.",
    ),
];

const TABS: [(&str, &str); 3] = [
    ("Overview", "Everything on this page responds to clicks, typing and focus."),
    ("Features", "Theme toggle, counter, FAQ accordion, tabs and a validated contact form."),
    ("About", "Built as a reference for event-driven page behaviour."),
];

/// State shared by every listener on the page.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub form: FormOrchestrator,
    pub counter: Counter,
}

impl PageState {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            form: FormOrchestrator::new(config.form.clone()),
            counter: Counter::new(&config.counter),
        }
    }
}

impl AsMut<FormOrchestrator> for PageState {
    fn as_mut(&mut self) -> &mut FormOrchestrator {
        &mut self.form
    }
}

impl AsMut<Counter> for PageState {
    fn as_mut(&mut self) -> &mut Counter {
        &mut self.counter
    }
}

/// Build the page markup.
pub fn build_document() -> Document {
    let header = Element::header()
        .id("site-header")
        .child(Element::heading("Interactive Page"))
        .child(
            Element::button(Theme::Light.button_label())
                .id(theme_toggle::TOGGLE_ID)
                .class("btn")
                .attr("type", "button"),
        );

    let counter_section = Element::section()
        .id("counter-section")
        .child(Element::heading("Counter"))
        .child(Element::span("0").id(counter::VALUE_ID))
        .child(
            Element::div()
                .class("counter-controls")
                .child(counter_button(counter::DECREASE_ID, "-"))
                .child(counter_button(counter::RESET_ID, "Reset"))
                .child(counter_button(counter::INCREASE_ID, "+")),
        );

    let faq_section = Element::section()
        .id("faq-section")
        .child(Element::heading("Frequently Asked Questions"))
        .children(FAQS.iter().enumerate().map(|(i, (question, answer))| {
            Element::div()
                .id(format!("faq-item-{}", i + 1))
                .class("faq-item")
                .child(
                    Element::button(*question)
                        .id(format!("faq-question-{}", i + 1))
                        .class(faq::QUESTION_CLASS)
                        .attr("type", "button"),
                )
                .child(
                    Element::div()
                        .id(format!("faq-answer-{}", i + 1))
                        .class(faq::ANSWER_CLASS)
                        .child(Element::paragraph(*answer)),
                )
        }));

    let tab_buttons = Element::div()
        .class("tab-buttons")
        .children(TABS.iter().enumerate().map(|(i, (title, _))| {
            let button = Element::button(*title)
                .id(format!("tab-btn-{}", i + 1))
                .class(tabs::BUTTON_CLASS)
                .attr("type", "button")
                .attr(tabs::TARGET_ATTR, format!("tab{}", i + 1));
            if i == 0 { button.class(tabs::ACTIVE_CLASS) } else { button }
        }));
    let tab_panels = TABS.iter().enumerate().map(|(i, (_, body))| {
        let panel = Element::div()
            .id(format!("tab{}", i + 1))
            .class(tabs::CONTENT_CLASS)
            .child(Element::paragraph(*body));
        if i == 0 { panel.class(tabs::ACTIVE_CLASS) } else { panel }
    });
    let tabs_section = Element::section()
        .id("tabs-section")
        .child(tab_buttons)
        .children(tab_panels);

    let form = Element::form()
        .id(contact_form::FORM_ID)
        .children(FieldId::ALL.map(form_group))
        .child(
            Element::button("Send Message")
                .id(contact_form::SUBMIT_ID)
                .class("btn")
                .attr("type", "submit"),
        );
    let contact_section = Element::section()
        .id("contact-section")
        .child(Element::heading("Contact"))
        .child(form)
        .child(
            Element::div()
                .id(contact_form::SUCCESS_ID)
                .class("form-success")
                .hidden()
                .child(Element::paragraph(
                    "Message sent successfully! We will get back to you soon.",
                )),
        );

    Document::new(
        Element::body()
            .attr(theme_toggle::THEME_ATTR, Theme::Light.as_str())
            .child(header)
            .child(counter_section)
            .child(faq_section)
            .child(tabs_section)
            .child(contact_section),
    )
}

fn counter_button(id: &str, label: &str) -> Element {
    Element::button(label).id(id).class("btn").attr("type", "button")
}

fn form_group(field: FieldId) -> Element {
    let input = match field {
        FieldId::Message => Element::textarea(),
        FieldId::Password | FieldId::ConfirmPassword => Element::input().attr("type", "password"),
        FieldId::Email => Element::input().attr("type", "email"),
        FieldId::Phone => Element::input().attr("type", "tel"),
        FieldId::Name => Element::input().attr("type", "text"),
    };

    Element::div()
        .class("form-group")
        .child(Element::label(field.label()).attr("for", field.dom_id()))
        .child(input.id(field.dom_id()))
        .child(Element::span("").id(field.error_id()).class("error-message"))
}

/// Register every widget's listeners on `window`.
pub fn install(window: &mut Window<PageState>) {
    window.add_window_listener(EventKind::Load, |_, _, _| {
        log::info!("Interactive page loaded successfully!");
    });

    theme_toggle::install(window);
    counter::install(window);
    faq::install(window);
    tabs::install(window);
    contact_form::install(window);
    feedback::install(window);
}

/// A loaded page: the window plus the state its listeners share.
pub struct Page {
    window: Window<PageState>,
    state: PageState,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("window", &self.window)
            .field("state", &self.state)
            .finish()
    }
}

impl Page {
    /// Build the page, install its listeners and fire `Load`.
    pub fn new(storage: impl Storage + 'static, config: PageConfig) -> Self {
        let mut window = Window::new(build_document(), storage);
        install(&mut window);

        let mut state = PageState::new(&config);
        window.dispatch(&mut state, Event::Load);
        Self { window, state }
    }

    pub fn window(&self) -> &Window<PageState> {
        &self.window
    }

    pub fn document(&self) -> &Document {
        self.window.document()
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        theme_toggle::current(self.window.document())
    }

    pub fn focused(&self) -> Option<&str> {
        self.window.focused()
    }

    pub fn storage(&self) -> &dyn Storage {
        self.window.storage()
    }

    pub fn click(&mut self, id: &str) -> Result<(), DomError> {
        self.window.click(&mut self.state, id)
    }

    pub fn focus(&mut self, id: &str) -> Result<(), DomError> {
        self.window.focus(&mut self.state, id)
    }

    pub fn blur(&mut self) {
        self.window.blur(&mut self.state);
    }

    pub fn type_text(&mut self, id: &str, text: &str) -> Result<(), DomError> {
        self.window.type_text(&mut self.state, id, text)
    }

    /// Fill a field and move focus off it, the way a user finishes an entry.
    pub fn fill(&mut self, field: FieldId, text: &str) -> Result<(), DomError> {
        self.type_text(field.dom_id(), text)?;
        self.blur();
        Ok(())
    }

    /// Submit the contact form directly, without clicking the button.
    pub fn submit(&mut self) -> Result<bool, DomError> {
        self.window.submit(&mut self.state, contact_form::FORM_ID)
    }

    pub fn hover(&mut self, id: &str) -> Result<(), DomError> {
        self.window.hover(&mut self.state, id)
    }

    pub fn leave(&mut self, id: &str) -> Result<(), DomError> {
        self.window.leave(&mut self.state, id)
    }

    pub fn touch_start(&mut self, id: &str) -> Result<(), DomError> {
        self.window.touch_start(&mut self.state, id)
    }

    pub fn touch_end(&mut self, id: &str) -> Result<(), DomError> {
        self.window.touch_end(&mut self.state, id)
    }

    /// Let `by` pass on the page clock, firing due timers.
    pub fn advance(&mut self, by: Duration) {
        self.window.advance(&mut self.state, by);
    }

    pub fn now(&self) -> Duration {
        self.window.now()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.window.next_deadline()
    }
}
