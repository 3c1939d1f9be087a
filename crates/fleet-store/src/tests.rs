//! Unit tests for fleet-store.

#[cfg(test)]
mod package {
    use fleet_core::{PackageId, SimTime, TruckId};

    use crate::{Deadline, Package, PackageStatus};

    #[test]
    fn deadline_parsing() {
        assert_eq!("EOD".parse::<Deadline>().unwrap(), Deadline::EndOfDay);
        assert_eq!("eod".parse::<Deadline>().unwrap(), Deadline::EndOfDay);
        assert_eq!(
            "10:30 AM".parse::<Deadline>().unwrap(),
            Deadline::By(SimTime::hm(10, 30))
        );
        assert!("soon".parse::<Deadline>().is_err());
    }

    #[test]
    fn end_of_day_is_never_missed() {
        assert!(!Deadline::EndOfDay.is_missed_by(SimTime::hm(23, 59)));
        let nine = Deadline::By(SimTime::hm(9, 0));
        assert!(!nine.is_missed_by(SimTime::hm(9, 0)));
        assert!(nine.is_missed_by(SimTime::hms(9, 0, 1)));
    }

    #[test]
    fn correction_switches_at_correction_time() {
        let pkg = Package::new(PackageId(9), "300 State St")
            .corrected_at(SimTime::hm(10, 20), "410 S State St");
        assert_eq!(pkg.effective_street(SimTime::hms(10, 19, 59)), "300 State St");
        assert_eq!(pkg.effective_street(SimTime::hm(10, 20)), "410 S State St");
        assert_eq!(pkg.effective_street(SimTime::hm(14, 0)), "410 S State St");
    }

    #[test]
    fn correction_time_without_street_keeps_original() {
        let mut pkg = Package::new(PackageId(9), "300 State St");
        pkg.correction_time = Some(SimTime::hm(10, 20));
        assert_eq!(pkg.effective_street(SimTime::hm(11, 0)), "300 State St");
    }

    #[test]
    fn next_event_is_strictly_future() {
        let pkg = Package::new(PackageId(1), "A")
            .available_at(SimTime::hm(9, 5))
            .corrected_at(SimTime::hm(10, 20), "B");
        assert_eq!(pkg.next_event_after(SimTime::hm(8, 0)), Some(SimTime::hm(9, 5)));
        assert_eq!(pkg.next_event_after(SimTime::hm(9, 5)), Some(SimTime::hm(10, 20)));
        assert_eq!(pkg.next_event_after(SimTime::hm(10, 20)), None);
    }

    #[test]
    fn status_at_follows_stamps() {
        let mut pkg = Package::new(PackageId(1), "A");
        pkg.departure_time = Some(SimTime::hm(8, 0));
        pkg.delivery_time = Some(SimTime::hm(9, 0));
        assert_eq!(pkg.status_at(SimTime::hm(7, 59)), PackageStatus::AtHub);
        assert_eq!(pkg.status_at(SimTime::hm(8, 30)), PackageStatus::EnRoute);
        assert_eq!(pkg.status_at(SimTime::hm(9, 0)), PackageStatus::Delivered);
    }

    #[test]
    fn reset_clears_delivery_state_only() {
        let mut pkg = Package::new(PackageId(1), "A")
            .available_at(SimTime::hm(9, 5))
            .with_deadline(Deadline::By(SimTime::hm(10, 30)));
        pkg.status = PackageStatus::Delivered;
        pkg.departure_time = Some(SimTime::hm(9, 5));
        pkg.delivery_time = Some(SimTime::hm(9, 40));
        pkg.truck_id = Some(TruckId(2));

        pkg.reset();

        assert_eq!(pkg.status, PackageStatus::AtHub);
        assert_eq!(pkg.departure_time, None);
        assert_eq!(pkg.delivery_time, None);
        assert_eq!(pkg.truck_id, None);
        assert_eq!(pkg.available_time, SimTime::hm(9, 5));
        assert_eq!(pkg.deadline, Deadline::By(SimTime::hm(10, 30)));
    }

    #[test]
    fn late_delivery_detection() {
        let mut pkg = Package::new(PackageId(1), "A")
            .with_deadline(Deadline::By(SimTime::hm(9, 0)));
        assert!(!pkg.delivered_late());
        pkg.delivery_time = Some(SimTime::hm(9, 10));
        assert!(pkg.delivered_late());
    }

    #[test]
    fn status_labels() {
        assert_eq!(PackageStatus::AtHub.to_string(), "At the hub");
        assert_eq!(PackageStatus::EnRoute.to_string(), "En route");
    }
}

#[cfg(test)]
mod store {
    use std::sync::Arc;
    use std::thread;

    use fleet_core::{PackageId, SimTime, TruckId};

    use crate::{Package, PackageStatus, PackageStore};

    fn sample() -> PackageStore {
        (1..=4).map(|i| Package::new(PackageId(i), format!("{i} Main St"))).collect()
    }

    #[test]
    fn get_returns_snapshot_or_none() {
        let store = sample();
        assert_eq!(store.get(PackageId(2)).unwrap().street, "2 Main St");
        assert!(store.get(PackageId(99)).is_none());
        assert!(store.with_mut(PackageId(99), |p| p.truck_id = Some(TruckId(1))).is_none());
    }

    #[test]
    fn with_mut_writes_through() {
        let store = sample();
        store.with_mut(PackageId(3), |p| p.status = PackageStatus::EnRoute);
        assert_eq!(store.get(PackageId(3)).unwrap().status, PackageStatus::EnRoute);
    }

    #[test]
    fn iteration_is_ordered() {
        let mut store = sample();
        store.insert(Package::new(PackageId(0), "Zero"));
        let ids: Vec<u32> = store.ids().map(|id| id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(store.iter().count(), 5);
    }

    #[test]
    fn reset_all_restores_hub_state() {
        let store = sample();
        for id in store.ids().collect::<Vec<_>>() {
            store.with_mut(id, |p| {
                p.status = PackageStatus::Delivered;
                p.delivery_time = Some(SimTime::hm(9, 0));
            });
        }
        store.reset_all();
        assert!(store.iter().all(|(_, p)| p.status == PackageStatus::AtHub
            && p.delivery_time.is_none()
            && p.departure_time.is_none()));
    }

    #[test]
    fn concurrent_writes_to_disjoint_keys() {
        let store = Arc::new(sample());
        let handles: Vec<_> = [(1u8, [1u32, 2]), (2u8, [3, 4])]
            .into_iter()
            .map(|(truck, ids)| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for id in ids {
                        store.with_mut(PackageId(id), |p| p.truck_id = Some(TruckId(truck)));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.get(PackageId(2)).unwrap().truck_id, Some(TruckId(1)));
        assert_eq!(store.get(PackageId(4)).unwrap().truck_id, Some(TruckId(2)));
    }
}

#[cfg(test)]
mod loading {
    use std::io::Cursor;

    use fleet_core::{PackageId, SimTime};

    use crate::{
        Deadline, PackageOverride, StoreError, apply_overrides, load_overrides_reader,
        load_packages_reader,
    };

    const MANIFEST: &str = "\
id,street,city,state,zip,deadline,weight,notes\n\
1,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,21,\n\
6,3060 Lester St,West Valley City,UT,84119,10:30 AM,88,Delayed on flight\n\
9,300 State St,Salt Lake City,UT,84103,EOD,2,Wrong address listed\n\
";

    const OVERRIDES: &str = "\
id,available_time,correction_time,corrected_street\n\
6,9:05,,\n\
9,10:20,10:20,410 S State St\n\
";

    #[test]
    fn manifest_rows_become_packages() {
        let store = load_packages_reader(Cursor::new(MANIFEST), SimTime::hm(8, 0)).unwrap();
        assert_eq!(store.len(), 3);
        let p1 = store.get(PackageId(1)).unwrap();
        assert_eq!(p1.deadline, Deadline::By(SimTime::hm(10, 30)));
        assert_eq!(p1.available_time, SimTime::hm(8, 0));
        assert_eq!(p1.zip, "84115");
        // Notes are carried verbatim and never interpreted.
        let p9 = store.get(PackageId(9)).unwrap();
        assert_eq!(p9.notes, "Wrong address listed");
        assert_eq!(p9.correction_time, None);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let csv = "id,street,city,state,zip,deadline,weight,notes\n\
                   1,A,C,UT,1,EOD,1,\n\
                   1,B,C,UT,1,EOD,1,\n";
        assert!(load_packages_reader(Cursor::new(csv), SimTime::hm(8, 0)).is_err());
    }

    #[test]
    fn overrides_apply_structured_rules() {
        let store = load_packages_reader(Cursor::new(MANIFEST), SimTime::hm(8, 0)).unwrap();
        let rules = load_overrides_reader(Cursor::new(OVERRIDES)).unwrap();
        assert_eq!(rules[0], PackageOverride::new(PackageId(6)).available_at(SimTime::hm(9, 5)));

        apply_overrides(&store, &rules).unwrap();

        let p6 = store.get(PackageId(6)).unwrap();
        assert_eq!(p6.available_time, SimTime::hm(9, 5));
        assert_eq!(p6.corrected_street, None);

        let p9 = store.get(PackageId(9)).unwrap();
        assert_eq!(p9.effective_street(SimTime::hm(10, 0)), "300 State St");
        assert_eq!(p9.effective_street(SimTime::hm(10, 20)), "410 S State St");
    }

    #[test]
    fn override_for_unknown_package_fails() {
        let store = load_packages_reader(Cursor::new(MANIFEST), SimTime::hm(8, 0)).unwrap();
        let rules = [PackageOverride::new(PackageId(40)).available_at(SimTime::hm(9, 0))];
        assert!(matches!(
            apply_overrides(&store, &rules),
            Err(StoreError::PackageNotFound(PackageId(40)))
        ));
    }

    #[test]
    fn malformed_override_time_fails() {
        let csv = "id,available_time,correction_time,corrected_street\n6,later,,\n";
        assert!(load_overrides_reader(Cursor::new(csv)).is_err());
    }
}
