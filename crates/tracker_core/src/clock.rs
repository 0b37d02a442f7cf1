//! Source of "today" for default deadlines.
//!
//! # Responsibility
//! - Decouple deadline defaults from the wall clock so sessions can be
//!   replayed deterministically.

use crate::model::deadline::Deadline;
use chrono::Local;

/// Supplies the current calendar date.
pub trait Clock {
    fn today(&self) -> Deadline;
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Deadline {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Deadline);

impl Clock for FixedClock {
    fn today(&self) -> Deadline {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Deadline {
        (**self).today()
    }
}
