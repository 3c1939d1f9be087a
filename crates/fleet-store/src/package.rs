//! The package record and its delivery state.

use std::fmt;
use std::str::FromStr;

use fleet_core::{CoreError, PackageId, SimTime, TruckId};

// ── Deadline ──────────────────────────────────────────────────────────────────

/// Latest acceptable delivery time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Deadline {
    /// No constraint.
    #[default]
    EndOfDay,
    /// Must be delivered at or before this time.
    By(SimTime),
}

impl Deadline {
    /// `true` if arriving at `arrival` is later than the deadline.
    #[inline]
    pub fn is_missed_by(self, arrival: SimTime) -> bool {
        match self {
            Deadline::EndOfDay => false,
            Deadline::By(t) => arrival > t,
        }
    }

    pub fn time(self) -> Option<SimTime> {
        match self {
            Deadline::EndOfDay => None,
            Deadline::By(t) => Some(t),
        }
    }
}

impl FromStr for Deadline {
    type Err = CoreError;

    /// `"EOD"` (any case) or a time accepted by [`SimTime`]'s parser.
    fn from_str(s: &str) -> Result<Self, CoreError> {
        if s.trim().eq_ignore_ascii_case("EOD") {
            Ok(Deadline::EndOfDay)
        } else {
            s.parse().map(Deadline::By)
        }
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deadline::EndOfDay => f.write_str("EOD"),
            Deadline::By(t) => write!(f, "{t}"),
        }
    }
}

// ── PackageStatus ─────────────────────────────────────────────────────────────

/// Delivery lifecycle of a package within one simulated day.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum PackageStatus {
    #[default]
    AtHub,
    EnRoute,
    Delivered,
}

impl PackageStatus {
    /// Human-readable label, used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            PackageStatus::AtHub     => "At the hub",
            PackageStatus::EnRoute   => "En route",
            PackageStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Package ───────────────────────────────────────────────────────────────────

/// One manifest entry plus its per-run delivery state.
///
/// Manifest attributes (`street` … `corrected_street`) are set at load time
/// and by [`apply_overrides`][crate::apply_overrides].  The trailing four
/// fields are written by the router and cleared by [`Package::reset`].
#[derive(Clone, Debug, PartialEq)]
pub struct Package {
    pub id:     PackageId,
    pub street: String,
    pub city:   String,
    pub state:  String,
    pub zip:    String,
    /// Kilograms, as printed on the manifest.
    pub weight: String,
    /// Free text.  Never interpreted by the simulator.
    pub notes:  String,

    pub deadline: Deadline,
    /// Earliest time the package is at the hub and can be loaded.
    pub available_time: SimTime,
    /// Time from which `corrected_street` replaces `street`.
    pub correction_time: Option<SimTime>,
    pub corrected_street: Option<String>,

    // ── Delivery state ────────────────────────────────────────────────────
    pub status:         PackageStatus,
    pub departure_time: Option<SimTime>,
    pub delivery_time:  Option<SimTime>,
    pub truck_id:       Option<TruckId>,
}

impl Package {
    /// A package at `street` with no deadline, available from midnight.
    pub fn new(id: PackageId, street: impl Into<String>) -> Self {
        Self {
            id,
            street:           street.into(),
            city:             String::new(),
            state:            String::new(),
            zip:              String::new(),
            weight:           String::new(),
            notes:            String::new(),
            deadline:         Deadline::EndOfDay,
            available_time:   SimTime::MIDNIGHT,
            correction_time:  None,
            corrected_street: None,
            status:           PackageStatus::AtHub,
            departure_time:   None,
            delivery_time:    None,
            truck_id:         None,
        }
    }

    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn available_at(mut self, t: SimTime) -> Self {
        self.available_time = t;
        self
    }

    pub fn corrected_at(mut self, t: SimTime, street: impl Into<String>) -> Self {
        self.correction_time = Some(t);
        self.corrected_street = Some(street.into());
        self
    }

    /// `true` once the package is at the hub and may be loaded.
    #[inline]
    pub fn is_available(&self, at: SimTime) -> bool {
        at >= self.available_time
    }

    /// Street to deliver to at simulated time `at`.
    ///
    /// The corrected street applies from `correction_time` onward, and only
    /// when both correction fields are present.
    pub fn effective_street(&self, at: SimTime) -> &str {
        match (self.correction_time, self.corrected_street.as_deref()) {
            (Some(t), Some(street)) if at >= t && !street.trim().is_empty() => street,
            _ => &self.street,
        }
    }

    /// Earliest availability or correction event strictly after `now`.
    pub fn next_event_after(&self, now: SimTime) -> Option<SimTime> {
        [Some(self.available_time), self.correction_time]
            .into_iter()
            .flatten()
            .filter(|&t| t > now)
            .min()
    }

    /// Status as it would have been observed at `at`, derived from the
    /// departure and delivery stamps of the last simulated day.
    pub fn status_at(&self, at: SimTime) -> PackageStatus {
        match (self.departure_time, self.delivery_time) {
            (_, Some(delivered)) if delivered <= at => PackageStatus::Delivered,
            (Some(departed), _) if departed <= at => PackageStatus::EnRoute,
            _ => PackageStatus::AtHub,
        }
    }

    /// `true` if delivered after its deadline.
    pub fn delivered_late(&self) -> bool {
        self.delivery_time
            .is_some_and(|t| self.deadline.is_missed_by(t))
    }

    /// Restore the load-time delivery state.
    pub fn reset(&mut self) {
        self.status = PackageStatus::AtHub;
        self.departure_time = None;
        self.delivery_time = None;
        self.truck_id = None;
    }
}
