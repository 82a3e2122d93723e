//! Wall-clock source used for file names and file age

use chrono::{DateTime, Local};

/// Source of local wall-clock time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

/// Whole seconds elapsed between two instants, truncated like `time_t` arithmetic
pub fn elapsed_secs(since: DateTime<Local>, now: DateTime<Local>) -> i64 {
    now.timestamp() - since.timestamp()
}

#[cfg(test)]
pub(crate) mod manual {
    use super::*;
    use chrono::TimeZone;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Clock that only moves when told to. Clones share the same time.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        secs: Rc<Cell<i64>>,
    }

    impl ManualClock {
        pub fn at(secs: i64) -> Self {
            Self {
                secs: Rc::new(Cell::new(secs)),
            }
        }

        pub fn set(&self, secs: i64) {
            self.secs.set(secs);
        }

        pub fn advance(&self, secs: i64) {
            self.secs.set(self.secs.get() + secs);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Local> {
            Local.timestamp_opt(self.secs.get(), 0).unwrap()
        }
    }
}
