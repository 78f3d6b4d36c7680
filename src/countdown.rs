use std::time::Duration;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// What a call to [`Countdown::advance`] produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStatus {
    /// Less than a whole second elapsed since the last change
    Pending,
    /// One or more whole seconds passed; carries the new remaining value
    Ticked(u32),
    /// Reached zero on this call. Reported once per countdown.
    Expired,
    /// Already expired or cancelled
    Inactive,
}

/// Per-question countdown in whole seconds.
///
/// Driven by elapsed time from the runtime's ticker rather than its own
/// thread, so cancelling is just dropping or calling [`Countdown::cancel`].
#[derive(Debug, Clone)]
pub struct Countdown {
    id: u64,
    seconds_remaining: u32,
    carry: Duration,
    active: bool,
}

impl Countdown {
    pub fn new(id: u64, seconds: u32) -> Self {
        Self {
            id,
            seconds_remaining: seconds,
            carry: Duration::ZERO,
            active: true,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Idempotent
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn advance(&mut self, elapsed: Duration) -> CountdownStatus {
        if !self.active {
            return CountdownStatus::Inactive;
        }

        self.carry += elapsed;
        let mut changed = false;
        while self.carry >= ONE_SECOND && self.seconds_remaining > 0 {
            self.carry -= ONE_SECOND;
            self.seconds_remaining -= 1;
            changed = true;
        }

        if self.seconds_remaining == 0 {
            self.active = false;
            CountdownStatus::Expired
        } else if changed {
            CountdownStatus::Ticked(self.seconds_remaining)
        } else {
            CountdownStatus::Pending
        }
    }
}
