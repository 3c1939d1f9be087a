//! Simulated time-of-day.
//!
//! # Design
//!
//! `SimTime` counts **milliseconds since midnight** of the simulated day.
//! Every clock in the simulator (truck clocks, availability windows,
//! deadlines, departure/delivery stamps) uses this one anchor, so 08:00 is
//! always `SimTime(28_800_000)` and reports print plain wall-clock times.
//!
//! Using an integer as the canonical time unit keeps deadline comparisons
//! exact.  Spans between instants are plain [`Duration`]s.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;
use std::time::Duration;

use crate::{CoreError, CoreResult};

const MS_PER_SEC:  u64 = 1_000;
const MS_PER_MIN:  u64 = 60 * MS_PER_SEC;
const MS_PER_HOUR: u64 = 60 * MS_PER_MIN;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An instant on the simulated day, in milliseconds since midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const MIDNIGHT: SimTime = SimTime(0);

    /// `h:m` on the simulated day.
    #[inline]
    pub const fn hm(h: u64, m: u64) -> SimTime {
        SimTime(h * MS_PER_HOUR + m * MS_PER_MIN)
    }

    /// `h:m:s` on the simulated day.
    #[inline]
    pub const fn hms(h: u64, m: u64, s: u64) -> SimTime {
        SimTime(h * MS_PER_HOUR + m * MS_PER_MIN + s * MS_PER_SEC)
    }

    #[inline]
    pub fn from_duration(since_midnight: Duration) -> SimTime {
        SimTime(since_midnight.as_millis() as u64)
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Time elapsed from `earlier` to `self`; zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: SimTime) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }

    /// Break into (hour, minute, second), truncating sub-second precision.
    pub fn hms_parts(self) -> (u64, u64, u64) {
        let hours   = self.0 / MS_PER_HOUR;
        let minutes = (self.0 % MS_PER_HOUR) / MS_PER_MIN;
        let seconds = (self.0 % MS_PER_MIN) / MS_PER_SEC;
        (hours, minutes, seconds)
    }
}

impl SimTime {
    /// `self + d`, or `None` if the result does not fit.
    #[inline]
    pub fn checked_add(self, d: Duration) -> Option<SimTime> {
        u64::try_from(d.as_millis())
            .ok()
            .and_then(|ms| self.0.checked_add(ms))
            .map(SimTime)
    }

    /// `self + d`, or [`CoreError::ClockOverflow`] if the result does not fit.
    pub fn advance(self, d: Duration) -> CoreResult<SimTime> {
        self.checked_add(d).ok_or(CoreError::ClockOverflow { at: self, by: d })
    }
}

/// Saturates at the largest representable instant.
impl Add<Duration> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: Duration) -> SimTime {
        self.checked_add(rhs).unwrap_or(SimTime(u64::MAX))
    }
}

impl AddAssign<Duration> for SimTime {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl Sub for SimTime {
    type Output = Duration;
    /// Saturates at zero, like [`SimTime::since`].
    #[inline]
    fn sub(self, rhs: SimTime) -> Duration {
        self.since(rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms_parts();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

impl FromStr for SimTime {
    type Err = CoreError;

    /// Accepts `H:MM`, `HH:MM:SS` (24-hour) and `H:MM AM` / `H:MM:SS PM`.
    fn from_str(s: &str) -> CoreResult<SimTime> {
        let raw = s.trim();
        let upper = raw.to_ascii_uppercase();

        let (clock, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
            (rest.trim_end(), Some(false))
        } else if let Some(rest) = upper.strip_suffix("PM") {
            (rest.trim_end(), Some(true))
        } else {
            (upper.as_str(), None)
        };

        let bad = || CoreError::TimeParse(format!("{raw:?}: expected H:MM[:SS] [AM|PM]"));

        let mut parts = clock.split(':');
        let mut field = |max: u64| -> CoreResult<u64> {
            let part = parts.next().ok_or_else(bad)?;
            let value = part.parse::<u64>().map_err(|_| bad())?;
            if value > max { Err(bad()) } else { Ok(value) }
        };

        let mut h = field(23)?;
        let m = field(59)?;
        let sec = match clock.matches(':').count() {
            1 => 0,
            2 => field(59)?,
            _ => return Err(bad()),
        };

        if let Some(pm) = meridiem {
            if h == 0 || h > 12 {
                return Err(bad());
            }
            h = match (h, pm) {
                (12, false) => 0,
                (12, true)  => 12,
                (h, false)  => h,
                (h, true)   => h + 12,
            };
        }

        Ok(SimTime::hms(h, m, sec))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SimTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SimTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Travel time ───────────────────────────────────────────────────────────────

/// Time to drive `miles` at a constant `mph`, rounded to the nearest
/// millisecond.
///
/// # Errors
///
/// [`CoreError::InvalidSpeed`] if `mph` is not finite and positive;
/// [`CoreError::InvalidDistance`] if `miles` is negative, not finite, or
/// too long for the drive to be counted in `u64` milliseconds.
pub fn travel_time(miles: f64, mph: f64) -> CoreResult<Duration> {
    if !mph.is_finite() || mph <= 0.0 {
        return Err(CoreError::InvalidSpeed(mph));
    }
    if !miles.is_finite() || miles < 0.0 {
        return Err(CoreError::InvalidDistance(miles));
    }
    let ms = (miles / mph * MS_PER_HOUR as f64).round();
    // `as u64` saturates; anything at or past 2^64 would be silently clamped.
    if !ms.is_finite() || ms >= u64::MAX as f64 {
        return Err(CoreError::InvalidDistance(miles));
    }
    Ok(Duration::from_millis(ms as u64))
}
