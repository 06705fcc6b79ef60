/// Remaining time for the active question, counted in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Consumes one second. Returns `true` once the countdown reaches zero.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    #[must_use]
    pub fn label(&self) -> String {
        format_countdown(self.remaining)
    }
}

/// Renders seconds as `00:SS`; minutes are always zero.
#[must_use]
pub fn format_countdown(seconds: u32) -> String {
    format!("00:{seconds:02}")
}
