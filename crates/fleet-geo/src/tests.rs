//! Unit tests for fleet-geo.
//!
//! All tests use hand-written tables so they run without any data files.

#[cfg(test)]
mod helpers {
    use crate::{GeoLookup, GeoLookupBuilder};

    /// Hub plus three stops.
    ///
    /// ```text
    /// HUB-A 3   HUB-B 5   A-B 4
    /// HUB-C 10  A-C 6     B-C 7
    /// ```
    pub fn four_stop() -> GeoLookup {
        GeoLookupBuilder::new()
            .distance("HUB", "A", 3.0).unwrap()
            .distance("HUB", "B", 5.0).unwrap()
            .distance("A", "B", 4.0).unwrap()
            .distance("HUB", "C", 10.0).unwrap()
            .distance("A", "C", 6.0).unwrap()
            .distance("B", "C", 7.0).unwrap()
            .build()
    }
}

// ── Index & matrix ────────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use fleet_core::NodeId;

    use crate::AddressIndex;

    #[test]
    fn trims_before_lookup() {
        let mut index = AddressIndex::new();
        index.insert(NodeId(2), "  410 S State St ");
        assert_eq!(index.node_for("410 S State St"), Some(NodeId(2)));
        assert_eq!(index.address_for(NodeId(2)), Some("410 S State St"));
        assert_eq!(index.address_for(NodeId(0)), None);
        assert_eq!(index.node_count(), 3);
    }

    #[test]
    fn push_is_idempotent() {
        let mut index = AddressIndex::new();
        let a = index.push("A");
        let b = index.push("B");
        assert_eq!(index.push("A"), a);
        assert_ne!(a, b);
        assert_eq!(index.iter().count(), 2);
    }

    #[test]
    fn rebinding_a_node_forgets_its_old_address() {
        let mut index = AddressIndex::new();
        index.insert(NodeId(0), "Old St");
        index.insert(NodeId(0), "New St");
        assert_eq!(index.node_for("Old St"), None);
        assert_eq!(index.node_for("New St"), Some(NodeId(0)));
        assert_eq!(index.iter().count(), 1);
    }

    #[test]
    fn rebinding_an_address_clears_its_old_node() {
        let mut index = AddressIndex::new();
        index.insert(NodeId(0), "Main St");
        index.insert(NodeId(1), "Main St");
        assert_eq!(index.address_for(NodeId(0)), None);
        assert_eq!(index.address_for(NodeId(1)), Some("Main St"));
        assert_eq!(index.iter().collect::<Vec<_>>(), vec![(NodeId(1), "Main St")]);
    }
}

#[cfg(test)]
mod matrix {
    use fleet_core::NodeId;

    use crate::DistanceMatrix;

    #[test]
    fn lower_triangle_is_mirrored() {
        let rows = vec![
            vec![Some(0.0)],
            vec![Some(7.2), Some(0.0)],
            vec![Some(3.8), Some(7.1), None],
        ];
        let m = DistanceMatrix::from_partial_rows(&rows).unwrap();
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(NodeId(0), NodeId(1)).unwrap(), 7.2);
        assert_eq!(m.get(NodeId(1), NodeId(2)).unwrap(), 7.1);
        assert_eq!(m.get(NodeId(2), NodeId(1)).unwrap(), 7.1);
        assert_eq!(m.get(NodeId(2), NodeId(2)).unwrap(), 0.0);
    }

    #[test]
    fn negative_distance_rejected() {
        let mut m = DistanceMatrix::zeros(2);
        assert!(m.set(NodeId(0), NodeId(1), -1.0).is_err());
        assert!(m.set(NodeId(0), NodeId(1), f64::INFINITY).is_err());
    }

    #[test]
    fn out_of_range_node() {
        let m = DistanceMatrix::zeros(2);
        assert!(m.get(NodeId(0), NodeId(2)).is_err());
    }

    #[test]
    fn resize_preserves_entries() {
        let mut m = DistanceMatrix::zeros(2);
        m.set(NodeId(0), NodeId(1), 1.5).unwrap();
        m.resize(4);
        assert_eq!(m.get(NodeId(1), NodeId(0)).unwrap(), 1.5);
        assert_eq!(m.get(NodeId(3), NodeId(0)).unwrap(), 0.0);
    }
}

// ── Lookup ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lookup {
    use crate::{DistanceOracle, GeoError};

    #[test]
    fn builder_distances_are_symmetric() {
        let geo = super::helpers::four_stop();
        assert_eq!(geo.distance("A", "C").unwrap(), 6.0);
        assert_eq!(geo.distance("C", "A").unwrap(), 6.0);
        assert_eq!(geo.distance("B", "B").unwrap(), 0.0);
        geo.check_symmetry().unwrap();
    }

    #[test]
    fn unknown_address_is_an_error() {
        let geo = super::helpers::four_stop();
        assert!(matches!(
            geo.distance("HUB", "Nowhere"),
            Err(GeoError::UnknownAddress(a)) if a == "Nowhere"
        ));
    }
}

// ── CSV loaders ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use fleet_core::NodeId;

    use crate::{DistanceOracle, GeoError, GeoLookup, load_addresses_reader, load_distances_reader};

    const ADDRESSES: &str = "\
node,name,address\n\
0,Hub,4001 South 700 East\n\
1,Peace Gardens, 1060 Dalton Ave S\n\
2,Sugar House Park,1330 2100 S\n\
";

    const DISTANCES: &str = "\
0.0\n\
7.2,0.0\n\
3.8,7.1,0.0\n\
";

    #[test]
    fn addresses_skip_header() {
        let index = load_addresses_reader(Cursor::new(ADDRESSES)).unwrap();
        assert_eq!(index.node_for("1060 Dalton Ave S"), Some(NodeId(1)));
        assert_eq!(index.iter().count(), 3);
    }

    #[test]
    fn paired_lookup() {
        let index = load_addresses_reader(Cursor::new(ADDRESSES)).unwrap();
        let matrix = load_distances_reader(Cursor::new(DISTANCES)).unwrap();
        let geo = GeoLookup::new(index, matrix).unwrap();
        assert_eq!(geo.distance("4001 South 700 East", "1330 2100 S").unwrap(), 3.8);
        assert_eq!(geo.distance("1330 2100 S", "1060 Dalton Ave S").unwrap(), 7.1);
        geo.check_symmetry().unwrap();
    }

    #[test]
    fn matrix_smaller_than_index_is_rejected() {
        let index = load_addresses_reader(Cursor::new(ADDRESSES)).unwrap();
        let matrix = load_distances_reader(Cursor::new("0.0\n1.0,0.0\n")).unwrap();
        assert!(GeoLookup::new(index, matrix).is_err());
    }

    #[test]
    fn bad_cells_are_rejected() {
        assert!(load_distances_reader(Cursor::new("0.0\nfar,0.0\n")).is_err());
        assert!(load_distances_reader(Cursor::new("0.0\n-2.0,0.0\n")).is_err());
    }

    #[test]
    fn node_past_the_row_count_is_rejected() {
        let err = load_addresses_reader(Cursor::new("node,name,address\n4294967295,X,Far St\n"))
            .unwrap_err();
        assert!(matches!(
            err,
            GeoError::NodeOutOfRange { node: NodeId(4294967295), size: 1 }
        ));
        assert!(load_addresses_reader(Cursor::new("0,Hub,A\n2,Gap,B\n")).is_err());
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use crate::{DistanceOracle, GeoLookupBuilder};

    proptest! {
        #[test]
        fn every_pair_is_symmetric(
            miles in proptest::collection::vec(0.0f64..50.0, 10)
        ) {
            let names = ["HUB", "A", "B", "C", "D"];
            let mut builder = GeoLookupBuilder::new();
            let mut k = 0;
            for i in 0..names.len() {
                for j in 0..i {
                    builder.set_distance(names[i], names[j], miles[k]).unwrap();
                    k += 1;
                }
            }
            let geo = builder.build();
            for a in names {
                prop_assert_eq!(geo.distance(a, a).unwrap(), 0.0);
                for b in names {
                    prop_assert_eq!(geo.distance(a, b).unwrap(), geo.distance(b, a).unwrap());
                }
            }
        }
    }
}
