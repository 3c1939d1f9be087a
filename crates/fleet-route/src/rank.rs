//! Candidate ranking.
//!
//! Each loop iteration the router builds one [`Candidate`] per available
//! pending package and takes the head of a total order:
//!
//! | Tier     | Members                                                    |
//! |----------|------------------------------------------------------------|
//! | `Urgent` | meets its deadline, slack ≤ the urgent window              |
//! | `OnTime` | meets its deadline (including every end-of-day package)    |
//! | `Late`   | would miss its deadline if driven to next                  |
//!
//! Within a tier the nearer candidate wins; equal distances fall back to
//! the lower package ID.  `Late` candidates are only picked when nothing
//! else is left, so an infeasible deadline never stalls the truck.
//!
//! Everything here is pure, so the ordering is testable without running the
//! routing loop.

use std::cmp::Ordering;
use std::time::Duration;

use fleet_core::{PackageId, SimTime};
use fleet_store::Deadline;

/// A pending package that is available at the current clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub package:  PackageId,
    /// Miles from the truck's current location to the effective address.
    pub miles:    f64,
    /// Projected arrival if driven to next.
    pub arrival:  SimTime,
    pub deadline: Deadline,
}

impl Candidate {
    /// `true` if `arrival` is after the deadline.
    #[inline]
    pub fn misses_deadline(&self) -> bool {
        self.deadline.is_missed_by(self.arrival)
    }

    /// Deadline minus arrival.  `None` for end-of-day or missed deadlines.
    pub fn slack(&self) -> Option<Duration> {
        match self.deadline {
            Deadline::By(t) if t >= self.arrival => Some(t.since(self.arrival)),
            _ => None,
        }
    }

    pub fn tier(&self, urgent_window: Duration) -> Tier {
        if self.misses_deadline() {
            Tier::Late
        } else if self.slack().is_some_and(|s| s <= urgent_window) {
            Tier::Urgent
        } else {
            Tier::OnTime
        }
    }
}

/// Selection priority, best first.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Tier {
    Urgent,
    OnTime,
    Late,
}

/// A candidate together with the tier it was ranked in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a> {
    pub tier:      Tier,
    pub candidate: &'a Candidate,
}

impl Ranked<'_> {
    fn cmp_priority(&self, other: &Self) -> Ordering {
        self.tier
            .cmp(&other.tier)
            .then_with(|| self.candidate.miles.total_cmp(&other.candidate.miles))
            .then_with(|| self.candidate.package.cmp(&other.candidate.package))
    }
}

/// All candidates in selection order.
pub fn rank_candidates(candidates: &[Candidate], urgent_window: Duration) -> Vec<Ranked<'_>> {
    let mut ranked: Vec<Ranked<'_>> = candidates
        .iter()
        .map(|candidate| Ranked { tier: candidate.tier(urgent_window), candidate })
        .collect();
    ranked.sort_by(Ranked::cmp_priority);
    ranked
}

/// The head of [`rank_candidates`] without sorting the rest.
pub fn select_next(candidates: &[Candidate], urgent_window: Duration) -> Option<Ranked<'_>> {
    candidates
        .iter()
        .map(|candidate| Ranked { tier: candidate.tier(urgent_window), candidate })
        .min_by(Ranked::cmp_priority)
}
