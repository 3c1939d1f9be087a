//! Structured per-package overrides.
//!
//! Delayed arrivals and mid-day address corrections are declared as data,
//! one [`PackageOverride`] per affected package, and applied once after the
//! manifest is loaded.  Package notes are never parsed.

use fleet_core::{PackageId, SimTime};

use crate::{PackageStore, StoreError, StoreResult};

/// Scenario rule for one package.  `None` fields leave the package as is.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageOverride {
    pub id:               PackageId,
    pub available_time:   Option<SimTime>,
    pub correction_time:  Option<SimTime>,
    pub corrected_street: Option<String>,
}

impl PackageOverride {
    pub fn new(id: PackageId) -> Self {
        Self {
            id,
            available_time:   None,
            correction_time:  None,
            corrected_street: None,
        }
    }

    /// Package reaches the hub at `t`.
    pub fn available_at(mut self, t: SimTime) -> Self {
        self.available_time = Some(t);
        self
    }

    /// Delivery address becomes `street` at `t`.
    pub fn corrected_at(mut self, t: SimTime, street: impl Into<String>) -> Self {
        self.correction_time = Some(t);
        self.corrected_street = Some(street.into());
        self
    }
}

/// Apply every rule in order.  Later rules for the same package overwrite
/// the fields they set.
///
/// # Errors
///
/// [`StoreError::PackageNotFound`] for a rule naming an unknown package.
/// Rules before the failing one stay applied.
pub fn apply_overrides(store: &PackageStore, rules: &[PackageOverride]) -> StoreResult<()> {
    for rule in rules {
        store
            .with_mut(rule.id, |pkg| {
                if let Some(t) = rule.available_time {
                    pkg.available_time = t;
                }
                if let Some(t) = rule.correction_time {
                    pkg.correction_time = Some(t);
                }
                if let Some(street) = &rule.corrected_street {
                    pkg.corrected_street = Some(street.trim().to_owned());
                }
            })
            .ok_or(StoreError::PackageNotFound(rule.id))?;
        tracing::debug!(package = %rule.id, "applied package override");
    }
    Ok(())
}
