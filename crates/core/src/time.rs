use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate};

/// A simple clock abstraction for deterministic time in services and tests.
///
/// Due dates are calendar dates in the user's own time zone, so the clock
/// hands out offset-carrying instants: `Local` captures the system zone at
/// the moment of the call, `Fixed` replays a chosen instant (in any offset)
/// for tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Local,
    Fixed(DateTime<FixedOffset>),
}

impl Clock {
    /// Returns a clock that follows the system's local time.
    #[must_use]
    pub fn local_clock() -> Self {
        Self::Local
    }

    /// Returns a clock fixed at the given instant.
    #[must_use]
    pub fn fixed(at: DateTime<FixedOffset>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current instant according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            Clock::Local => Local::now().fixed_offset(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Returns the clock's current calendar date, in its own offset.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Local`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    /// Returns true if this clock follows real time.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Clock::Local)
    }

    /// Returns true if this clock is fixed.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic instant for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<FixedOffset> {
    DateTime::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
        .fixed_offset()
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
