//! Integration tests for fleet-sim.

use fleet_core::{FleetConfig, PackageId, SimTime, TruckId};
use fleet_geo::{GeoLookup, GeoLookupBuilder};
use fleet_store::{Package, PackageStore};

use crate::{Holds, Loads};

// ── Helpers ───────────────────────────────────────────────────────────────────

const HUB: &str = "4001 South 700 East";

/// ```text
/// HUB-A 3   HUB-B 5   A-B 4
/// HUB-C 10  A-C 6     B-C 7
/// ```
fn four_stop() -> GeoLookup {
    GeoLookupBuilder::new()
        .distance(HUB, "A", 3.0).unwrap()
        .distance(HUB, "B", 5.0).unwrap()
        .distance("A", "B", 4.0).unwrap()
        .distance(HUB, "C", 10.0).unwrap()
        .distance("A", "C", 6.0).unwrap()
        .distance("B", "C", 7.0).unwrap()
        .build()
}

/// Packages 1 → A, 2 → B, 3 → C, 4 → A, all available at 8:00.
fn store() -> PackageStore {
    [(1, "A"), (2, "B"), (3, "C"), (4, "A")]
        .into_iter()
        .map(|(id, street)| Package::new(PackageId(id), street).available_at(SimTime::hm(8, 0)))
        .collect()
}

fn loads(entries: &[(u8, &[u32])]) -> Loads {
    entries
        .iter()
        .map(|&(truck, ids)| (TruckId(truck), ids.iter().map(|&i| PackageId(i)).collect()))
        .collect()
}

fn holds(entries: &[(u8, SimTime)]) -> Holds {
    entries.iter().map(|&(truck, t)| (TruckId(truck), t)).collect()
}

// ── Driver pool ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod drivers {
    use super::*;
    use crate::{DaySimulator, NoopObserver};

    fn run(loads: &Loads, holds: &Holds) -> crate::DayReport {
        let sim = DaySimulator::greedy(FleetConfig::default()).unwrap();
        sim.simulate_day(&store(), &four_stop(), loads, holds, &mut NoopObserver).unwrap()
    }

    #[test]
    fn third_truck_waits_for_first_free_driver() {
        // Truck 1: hub→A→hub, 6 mi, back 8:20.  Truck 2: hub→C→hub, 20 mi, back 9:06:40.
        let report = run(&loads(&[(1, &[1]), (2, &[3]), (3, &[2])]), &Holds::new());

        let t1 = report.truck(TruckId(1)).unwrap();
        let t2 = report.truck(TruckId(2)).unwrap();
        let t3 = report.truck(TruckId(3)).unwrap();
        assert_eq!(t1.finish(), SimTime::hm(8, 20));
        assert_eq!(t2.finish(), SimTime::hms(9, 6, 40));
        assert_eq!(t3.start(), SimTime::hm(8, 20));
        assert!(t3.start() >= t1.finish().min(t2.finish()));
        assert_eq!(t3.finish(), SimTime::hms(8, 53, 20));
        assert_eq!(report.total_miles, 6.0 + 20.0 + 10.0);
    }

    #[test]
    fn later_hold_wins_over_free_driver() {
        let report = run(
            &loads(&[(1, &[1]), (2, &[3]), (3, &[2])]),
            &holds(&[(3, SimTime::hm(10, 20))]),
        );
        assert_eq!(report.truck(TruckId(3)).unwrap().start(), SimTime::hm(10, 20));
    }

    #[test]
    fn earlier_hold_still_waits_for_driver() {
        let report = run(
            &loads(&[(1, &[1]), (2, &[3]), (3, &[2])]),
            &holds(&[(3, SimTime::hm(8, 10))]),
        );
        assert_eq!(report.truck(TruckId(3)).unwrap().start(), SimTime::hm(8, 20));
    }

    #[test]
    fn idle_first_wave_truck_frees_its_driver_at_start() {
        let report = run(&loads(&[(2, &[3]), (3, &[2])]), &Holds::new());
        assert!(report.truck(TruckId(1)).unwrap().log.is_none());
        assert_eq!(report.truck(TruckId(3)).unwrap().start(), SimTime::hm(8, 0));
    }

    #[test]
    fn held_first_wave_truck_departs_late() {
        let report = run(
            &loads(&[(1, &[1]), (2, &[3])]),
            &holds(&[(2, SimTime::hm(9, 5))]),
        );
        let t2 = report.truck(TruckId(2)).unwrap();
        assert_eq!(t2.start(), SimTime::hm(9, 5));
        assert_eq!(t2.log.as_ref().unwrap().stops[0].departed, SimTime::hm(9, 5));
    }

    #[test]
    fn unloaded_third_truck_stays_home() {
        let report = run(&loads(&[(1, &[1]), (2, &[3])]), &Holds::new());
        let t3 = report.truck(TruckId(3)).unwrap();
        assert!(t3.log.is_none());
        assert_eq!(t3.miles(), 0.0);
        assert_eq!(t3.start(), SimTime::hm(8, 0));
    }

    #[test]
    fn unknown_trucks_are_ignored() {
        let report = run(&loads(&[(1, &[1]), (7, &[2])]), &holds(&[(9, SimTime::hm(9, 0))]));
        assert_eq!(report.trucks.len(), 3);
        assert_eq!(report.total_miles, 6.0);
    }
}

// ── Report & terminal states ──────────────────────────────────────────────────

#[cfg(test)]
mod reporting {
    use fleet_store::{Deadline, PackageStatus};

    use super::*;
    use crate::{DaySimulator, NoopObserver, simulate_day};

    #[test]
    fn free_function_uses_default_fleet() {
        let store = store();
        let report = simulate_day(
            &store,
            &four_stop(),
            &loads(&[(1, &[1, 2, 3, 4])]),
            &Holds::new(),
        )
        .unwrap();
        // hub → A (1, 4) → B → C → hub = 3 + 0 + 4 + 7 + 10.
        assert_eq!(report.total_miles, 24.0);
        assert_eq!(report.finish(), Some(SimTime::hm(9, 20)));
        assert!(store.iter().all(|(_, p)| p.status == PackageStatus::Delivered));
    }

    #[test]
    fn undelivered_and_late_are_detectable() {
        let mut store = store();
        store.insert(
            Package::new(PackageId(5), "C")
                .available_at(SimTime::hm(8, 0))
                .with_deadline(Deadline::By(SimTime::hm(8, 15))),
        );
        let sim = DaySimulator::greedy(FleetConfig::default()).unwrap();
        let report = sim
            .simulate_day(
                &store,
                &four_stop(),
                &loads(&[(1, &[1, 5]), (2, &[99])]),
                &Holds::new(),
                &mut NoopObserver,
            )
            .unwrap();

        assert_eq!(report.undelivered(&store), vec![PackageId(2), PackageId(3), PackageId(4)]);
        assert_eq!(report.late_deliveries(&store), vec![PackageId(5)]);
        assert_eq!(report.missing(), vec![PackageId(99)]);
        assert!(report.stranded().is_empty());
    }

    #[test]
    fn reset_makes_reruns_identical() {
        let store = store();
        let geo = four_stop();
        let plan = loads(&[(1, &[1, 2]), (2, &[3]), (3, &[4])]);

        let first = simulate_day(&store, &geo, &plan, &Holds::new()).unwrap();
        let stamps: Vec<_> = store.iter().map(|(_, p)| (p.departure_time, p.delivery_time)).collect();

        store.reset_all();
        assert!(store.iter().all(|(_, p)| p.status == PackageStatus::AtHub
            && p.departure_time.is_none()
            && p.delivery_time.is_none()));

        let second = simulate_day(&store, &geo, &plan, &Holds::new()).unwrap();
        let again: Vec<_> = store.iter().map(|(_, p)| (p.departure_time, p.delivery_time)).collect();

        assert_eq!(first.total_miles, second.total_miles);
        assert_eq!(stamps, again);
    }

    #[test]
    fn routing_failure_names_the_truck() {
        let mut store = store();
        store.insert(Package::new(PackageId(6), "Nowhere"));
        let err = simulate_day(
            &store,
            &four_stop(),
            &loads(&[(1, &[1]), (2, &[6])]),
            &Holds::new(),
        )
        .unwrap_err();
        assert!(matches!(err, crate::SimError::Route { truck: TruckId(2), .. }));
        // Truck 1's packages were still delivered.
        assert_eq!(store.get(PackageId(1)).unwrap().status, PackageStatus::Delivered);
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = FleetConfig { driver_count: 4, ..FleetConfig::default() };
        assert!(DaySimulator::greedy(cfg).is_err());
    }

    #[test]
    fn config_edited_after_construction_is_rechecked() {
        let store = store();
        let mut sim = DaySimulator::greedy(FleetConfig::default()).unwrap();
        sim.config.driver_count = 5;
        let err = sim
            .simulate_day(&store, &four_stop(), &loads(&[(1, &[1])]), &Holds::new(), &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, crate::SimError::Config(_)));
        assert_eq!(store.get(PackageId(1)).unwrap().status, PackageStatus::AtHub);
    }

    #[test]
    fn unrepresentable_drive_fails_without_panicking() {
        let store: PackageStore = [Package::new(PackageId(1), "Z").available_at(SimTime::hm(8, 0))]
            .into_iter()
            .collect();
        let geo = GeoLookupBuilder::new()
            .distance(HUB, "Z", 1.0e18).unwrap()
            .build();
        let err = simulate_day(&store, &geo, &loads(&[(1, &[1])]), &Holds::new()).unwrap_err();
        assert!(matches!(err, crate::SimError::Route { truck: TruckId(1), .. }));
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use fleet_route::{RouteLog, Stop, Truck};

    use super::*;
    use crate::{DayReport, DaySimulator, SimObserver};

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        days:   usize,
    }

    impl SimObserver for Recorder {
        fn on_truck_start(&mut self, truck: TruckId, start: SimTime) {
            self.events.push(format!("start {truck} {start}"));
        }
        fn on_delivery(&mut self, truck: TruckId, stop: &Stop) {
            self.events.push(format!("deliver {truck} {}", stop.package));
        }
        fn on_truck_finish(&mut self, truck: &Truck, _log: &RouteLog) {
            self.events.push(format!("finish {}", truck.id));
        }
        fn on_day_end(&mut self, _report: &DayReport) {
            self.days += 1;
        }
    }

    #[test]
    fn hooks_fire_in_truck_order() {
        let sim = DaySimulator::greedy(FleetConfig::default()).unwrap();
        let mut rec = Recorder::default();
        sim.simulate_day(
            &store(),
            &four_stop(),
            &loads(&[(1, &[1]), (2, &[3]), (3, &[2])]),
            &Holds::new(),
            &mut rec,
        )
        .unwrap();

        assert_eq!(
            rec.events,
            vec![
                "start 1 08:00:00", "deliver 1 1", "finish 1",
                "start 2 08:00:00", "deliver 2 3", "finish 2",
                "start 3 08:20:00", "deliver 3 2", "finish 3",
            ]
        );
        assert_eq!(rec.days, 1);
    }
}
