//! Square symmetric miles matrix.

use fleet_core::NodeId;

use crate::{GeoError, GeoResult};

/// Miles between every pair of nodes, stored row-major.
///
/// Invariants (enforced by every constructor): square, symmetric, zero
/// diagonal, every entry finite and `>= 0`.
#[derive(Debug, Clone, Default)]
pub struct DistanceMatrix {
    size:  usize,
    miles: Vec<f64>,
}

impl DistanceMatrix {
    /// An all-zero `size × size` matrix.
    pub fn zeros(size: usize) -> Self {
        Self { size, miles: vec![0.0; size * size] }
    }

    /// Build from possibly-ragged rows where `None` marks a blank cell.
    ///
    /// Blank cells are mirrored from the transpose, which is how the
    /// lower-triangular distance tables are completed.  Where both cells are
    /// present the lower triangle wins.  Cells blank in both directions stay
    /// zero and the diagonal is forced to zero.
    pub fn from_partial_rows(rows: &[Vec<Option<f64>>]) -> GeoResult<Self> {
        let size = rows.len().max(rows.iter().map(Vec::len).max().unwrap_or(0));
        let cell = |i: usize, j: usize| rows.get(i).and_then(|r| r.get(j)).copied().flatten();

        let mut matrix = Self::zeros(size);
        for i in 0..size {
            for j in 0..i {
                let miles = cell(i, j).or_else(|| cell(j, i)).unwrap_or(0.0);
                matrix.set(NodeId(i as u32), NodeId(j as u32), miles)?;
            }
        }
        Ok(matrix)
    }

    /// Set both `from→to` and `to→from`.
    pub fn set(&mut self, from: NodeId, to: NodeId, miles: f64) -> GeoResult<()> {
        self.check(from)?;
        self.check(to)?;
        if !miles.is_finite() || miles < 0.0 {
            return Err(GeoError::InvalidDistance { from, to, miles });
        }
        if from == to {
            return Ok(());
        }
        let size = self.size;
        self.miles[from.index() * size + to.index()] = miles;
        self.miles[to.index() * size + from.index()] = miles;
        Ok(())
    }

    pub fn get(&self, from: NodeId, to: NodeId) -> GeoResult<f64> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.miles[from.index() * self.size + to.index()])
    }

    /// Grow to `size × size`, preserving existing entries.
    pub fn resize(&mut self, size: usize) {
        if size <= self.size {
            return;
        }
        let mut grown = vec![0.0; size * size];
        for i in 0..self.size {
            let src = &self.miles[i * self.size..(i + 1) * self.size];
            grown[i * size..i * size + self.size].copy_from_slice(src);
        }
        self.size = size;
        self.miles = grown;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn check(&self, node: NodeId) -> GeoResult<()> {
        if node.index() < self.size {
            Ok(())
        } else {
            Err(GeoError::NodeOutOfRange { node, size: self.size })
        }
    }
}
