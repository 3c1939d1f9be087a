//! Address ↔ node mapping.
//!
//! The distance table is organised by row/column index.  `AddressIndex`
//! stores each address once and resolves it to the [`NodeId`] of its row.
//! Addresses are trimmed before every insert and lookup, so stray
//! whitespace from CSV sources never causes a miss.

use fleet_core::NodeId;

#[cfg(feature = "fx-hash")]
type AddressMap = rustc_hash::FxHashMap<String, NodeId>;
#[cfg(not(feature = "fx-hash"))]
type AddressMap = std::collections::HashMap<String, NodeId>;

/// Bidirectional address ↔ `NodeId` table.
#[derive(Debug, Clone, Default)]
pub struct AddressIndex {
    to_node:    AddressMap,
    /// Indexed by `NodeId`; empty string for unused slots.
    to_address: Vec<String>,
}

impl AddressIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `address` to `node`, growing the reverse table as needed.
    ///
    /// Rebinding either side drops the stale pairing, so the two maps stay
    /// inverse to each other.
    pub fn insert(&mut self, node: NodeId, address: &str) {
        let address = normalize(address).to_owned();
        if self.to_address.len() <= node.index() {
            self.to_address.resize(node.index() + 1, String::new());
        }

        let old_address = std::mem::replace(&mut self.to_address[node.index()], address.clone());
        if old_address != address && self.to_node.get(&old_address) == Some(&node) {
            self.to_node.remove(&old_address);
        }

        if let Some(old_node) = self.to_node.insert(address, node).filter(|&n| n != node) {
            if let Some(slot) = self.to_address.get_mut(old_node.index()) {
                slot.clear();
            }
        }
    }

    /// Append `address` at the next free node, or return its existing node.
    pub fn push(&mut self, address: &str) -> NodeId {
        if let Some(node) = self.node_for(address) {
            return node;
        }
        let node = NodeId(self.to_address.len() as u32);
        self.insert(node, address);
        node
    }

    pub fn node_for(&self, address: &str) -> Option<NodeId> {
        self.to_node.get(normalize(address)).copied()
    }

    pub fn address_for(&self, node: NodeId) -> Option<&str> {
        self.to_address
            .get(node.index())
            .map(String::as_str)
            .filter(|a| !a.is_empty())
    }

    /// Number of node slots (highest bound node + 1).
    pub fn node_count(&self) -> usize {
        self.to_address.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_node.is_empty()
    }

    /// Iterator over `(NodeId, address)` for every bound node.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.to_address
            .iter()
            .enumerate()
            .filter(|(_, a)| !a.is_empty())
            .map(|(i, a)| (NodeId(i as u32), a.as_str()))
    }
}

#[inline]
fn normalize(address: &str) -> &str {
    address.trim()
}
