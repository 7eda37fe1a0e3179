use std::time::{Duration, SystemTime};

/// Wall-clock abstraction used to stamp log lines.
pub trait Clock {
    fn now(&self) -> SystemTime;
}

/// Default clock backed by `SystemTime::now()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Deterministic clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(SystemTime);

impl Default for FixedClock {
    fn default() -> Self {
        Self::at(SystemTime::UNIX_EPOCH)
    }
}

impl FixedClock {
    pub fn at(t: SystemTime) -> Self {
        Self(t)
    }

    /// Clock frozen `secs` seconds after the Unix epoch.
    pub fn at_unix_secs(secs: u64) -> Self {
        Self::at(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}
