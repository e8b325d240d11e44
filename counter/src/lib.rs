//! Click counter shared by the component and script templates.

use std::fmt;

/// Text shown in front of the current value on the counter button.
pub const LABEL_PREFIX: &str = "计数";

/// The state behind the counter button.
///
/// The only way to change a counter is [`Counter::increment`], so the value
/// never decreases and never skips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Counter {
    value: u32,
}

impl Counter {
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Records one click and returns the new value.
    ///
    /// Saturates at `u32::MAX`.
    pub fn increment(&mut self) -> u32 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    /// Button text for the current value, e.g. `计数: 3`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", LABEL_PREFIX, self.value)
    }
}
