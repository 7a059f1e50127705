use time::{Date, OffsetDateTime, UtcOffset};

/// Source of the current time. Everything that defaults a date to "today"
/// goes through this instead of reading the system clock directly.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;

    fn today(&self) -> Date {
        self.now().date()
    }
}

/// Wall clock shifted into the configured reference offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

#[cfg(test)]
pub use fixed::FixedClock;

#[cfg(test)]
mod fixed {
    use std::sync::Mutex;

    use time::{Duration, OffsetDateTime};

    use super::Clock;

    /// Clock that only moves when told to.
    #[derive(Debug)]
    pub struct FixedClock {
        now: Mutex<OffsetDateTime>,
    }

    impl FixedClock {
        pub fn at(now: OffsetDateTime) -> Self {
            Self {
                now: Mutex::new(now),
            }
        }

        pub fn advance(&self, by: Duration) {
            let mut now = self.now.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> OffsetDateTime {
            *self.now.lock().unwrap()
        }
    }
}
