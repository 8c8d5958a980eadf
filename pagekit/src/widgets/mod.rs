//! Page widgets. Each `install` registers its listeners on a window.
//!
//! Widgets that keep state beyond the DOM reach it through `AsMut` on the
//! window's state type, so they can be hosted by any page state.

pub mod contact_form;
pub mod counter;
pub mod faq;
pub mod feedback;
pub mod tabs;
pub mod theme_toggle;

pub use contact_form::DomFormView;
pub use counter::Counter;
pub use theme_toggle::Theme;
