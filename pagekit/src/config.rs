//! Tunables for the page. Defaults match the shipped page.

use std::time::Duration;

/// Default time the success notice stays up after an accepted submission.
pub const DEFAULT_REVERT_DELAY: Duration = Duration::from_millis(5000);

/// Default length of the counter's pop animation.
pub const DEFAULT_COUNTER_POP: Duration = Duration::from_millis(200);

/// Contact form settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Delay before a submitted form is shown again.
    pub revert_delay: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            revert_delay: DEFAULT_REVERT_DELAY,
        }
    }
}

impl FormConfig {
    pub fn with_revert_delay(mut self, delay: Duration) -> Self {
        self.revert_delay = delay;
        self
    }
}

/// Settings for the whole page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageConfig {
    pub form: FormConfig,
    pub counter: CounterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    /// How long the value stays enlarged after a change.
    pub pop_duration: Duration,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            pop_duration: DEFAULT_COUNTER_POP,
        }
    }
}
