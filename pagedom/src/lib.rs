pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod storage;
pub mod timer;
pub mod window;

pub use document::Document;
pub use element::{Element, Style, Tag};
pub use error::DomError;
pub use event::{Event, EventKind};
pub use focus::FocusState;
pub use storage::{MemoryStorage, Storage, StorageError};
pub use timer::{TimerCallback, TimerId, TimerQueue};
pub use window::{ListenerId, Scope, Window};
