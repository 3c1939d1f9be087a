//! The distance oracle consumed by the router.
//!
//! # Pluggability
//!
//! `fleet-route` asks for distances through the [`DistanceOracle`] trait,
//! so tests and applications can substitute any symmetric distance source.
//! [`GeoLookup`] (address index + matrix) is the default implementation.

use fleet_core::NodeId;

use crate::{AddressIndex, DistanceMatrix, GeoError, GeoResult};

// ── DistanceOracle trait ──────────────────────────────────────────────────────

/// Read-only road distance between two addresses.
///
/// Implementations must be symmetric, non-negative, and return zero for
/// `distance(a, a)`.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so concurrently routed trucks can
/// share one oracle.
pub trait DistanceOracle: Send + Sync {
    /// Miles from `from` to `to`.
    ///
    /// Returns [`GeoError::UnknownAddress`] if either address is not known.
    fn distance(&self, from: &str, to: &str) -> GeoResult<f64>;
}

// ── GeoLookup ─────────────────────────────────────────────────────────────────

/// Address index plus distance matrix.
///
/// Construct with [`GeoLookup::new`], [`GeoLookupBuilder`], or
/// [`load_geo_csv`][crate::load_geo_csv].
#[derive(Debug, Clone, Default)]
pub struct GeoLookup {
    index:  AddressIndex,
    matrix: DistanceMatrix,
}

impl GeoLookup {
    /// Pair an index with a matrix.  Every indexed node must fit the matrix.
    pub fn new(index: AddressIndex, matrix: DistanceMatrix) -> GeoResult<Self> {
        if let Some((node, _)) = index.iter().find(|(n, _)| n.index() >= matrix.size()) {
            return Err(GeoError::NodeOutOfRange { node, size: matrix.size() });
        }
        Ok(Self { index, matrix })
    }

    pub fn index(&self) -> &AddressIndex {
        &self.index
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn node_for(&self, address: &str) -> GeoResult<NodeId> {
        self.index
            .node_for(address)
            .ok_or_else(|| GeoError::UnknownAddress(address.trim().to_owned()))
    }

    /// Verify `d(a, b) == d(b, a)` and `d(a, a) == 0` for every indexed pair.
    pub fn check_symmetry(&self) -> GeoResult<()> {
        let nodes: Vec<NodeId> = self.index.iter().map(|(n, _)| n).collect();
        for &a in &nodes {
            let own = self.matrix.get(a, a)?;
            if own != 0.0 {
                return Err(GeoError::InvalidDistance { from: a, to: a, miles: own });
            }
            for &b in &nodes {
                let forward = self.matrix.get(a, b)?;
                let reverse = self.matrix.get(b, a)?;
                if forward != reverse {
                    return Err(GeoError::Asymmetric { from: a, to: b, forward, reverse });
                }
            }
        }
        Ok(())
    }
}

impl DistanceOracle for GeoLookup {
    fn distance(&self, from: &str, to: &str) -> GeoResult<f64> {
        let a = self.node_for(from)?;
        let b = self.node_for(to)?;
        self.matrix.get(a, b)
    }
}

// ── GeoLookupBuilder ──────────────────────────────────────────────────────────

/// In-memory builder for small hand-written address sets.
///
/// ```rust,ignore
/// let geo = GeoLookupBuilder::new()
///     .distance("HUB", "A", 3.0)?
///     .distance("HUB", "B", 5.0)?
///     .distance("A", "B", 4.0)?
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct GeoLookupBuilder {
    index:  AddressIndex,
    matrix: DistanceMatrix,
}

impl GeoLookupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `address` (idempotent) and return its node.
    pub fn add_address(&mut self, address: &str) -> NodeId {
        let node = self.index.push(address);
        self.matrix.resize(self.index.node_count());
        node
    }

    /// Set the symmetric distance between two addresses, registering them
    /// as needed.
    pub fn set_distance(&mut self, a: &str, b: &str, miles: f64) -> GeoResult<()> {
        let from = self.add_address(a);
        let to = self.add_address(b);
        self.matrix.set(from, to, miles)
    }

    /// Chaining form of [`set_distance`][Self::set_distance].
    pub fn distance(mut self, a: &str, b: &str, miles: f64) -> GeoResult<Self> {
        self.set_distance(a, b, miles)?;
        Ok(self)
    }

    pub fn build(self) -> GeoLookup {
        GeoLookup { index: self.index, matrix: self.matrix }
    }
}
