//! The built-in sample day: thirteen stops around Salt Lake City, fifteen
//! packages, three trucks and two drivers.
//!
//! Package 6 arrives at the hub late (09:05) and package 9's address is
//! corrected at 10:20, so trucks 2 and 3 are held until those times.

use fleet_core::{SimTime, TruckId};

// ── Address & distance tables ─────────────────────────────────────────────────

pub const ADDRESSES_CSV: &str = "\
node,name,address\n\
0,Western Governors University,4001 South 700 East\n\
1,International Peace Gardens,1060 Dalton Ave S\n\
2,Sugar House Park,1330 2100 S\n\
3,Taylorsville-Bennion Heritage City Gov Off,1488 4800 S\n\
4,Salt Lake City Division of Health Services,177 W Price Ave\n\
5,South Salt Lake Public Works,195 W Oakland Ave\n\
6,Salt Lake City Streets and Sanitation,2010 W 500 S\n\
7,Deker Lake,2300 Parkway Blvd\n\
8,Salt Lake City Ottinger Hall,233 Canyon Rd\n\
9,Columbus Library,2530 S 500 E\n\
10,Council Hall,300 State St\n\
11,Redwood Park,3595 Main St\n\
12,Rice Terrace Pavilion Park,410 S State St\n\
";

// Lower triangle; row i, column j is the distance between nodes i and j.
pub const DISTANCES_CSV: &str = "\
0.0\n\
7.2,0.0\n\
3.8,7.1,0.0\n\
11.0,6.4,9.2,0.0\n\
2.2,6.0,4.4,5.6,0.0\n\
3.5,4.8,2.8,6.9,1.9,0.0\n\
10.9,1.6,8.6,8.6,7.9,6.3,0.0\n\
8.6,2.8,6.3,4.0,5.1,4.3,4.0,0.0\n\
7.6,4.8,5.3,11.1,7.5,4.5,4.2,7.7,0.0\n\
2.8,6.3,1.6,7.3,2.6,1.5,8.0,9.3,4.8,0.0\n\
6.4,7.3,10.4,1.0,6.5,8.7,8.6,4.6,11.9,9.4,0.0\n\
3.2,5.3,3.0,6.4,1.5,0.8,9.5,3.3,5.0,3.1,7.0,0.0\n\
7.0,5.1,5.8,2.1,6.0,7.9,7.5,4.2,10.8,8.3,1.1,6.2,0.0\n\
";

// ── Packages ──────────────────────────────────────────────────────────────────

pub const PACKAGES_CSV: &str = "\
id,street,city,state,zip,deadline,weight,notes\n\
1,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,21,\n\
2,2530 S 500 E,Salt Lake City,UT,84106,EOD,44,\n\
3,233 Canyon Rd,Salt Lake City,UT,84103,EOD,2,Can only be on truck 2\n\
4,1330 2100 S,Salt Lake City,UT,84106,EOD,4,\n\
5,1060 Dalton Ave S,Salt Lake City,UT,84104,10:30 AM,5,\n\
6,3595 Main St,Salt Lake City,UT,84115,10:30 AM,88,Delayed on flight until 9:05 am\n\
7,1488 4800 S,Salt Lake City,UT,84123,EOD,7,\n\
8,177 W Price Ave,Salt Lake City,UT,84115,EOD,2,\n\
9,300 State St,Salt Lake City,UT,84103,EOD,2,Wrong address listed\n\
10,2010 W 500 S,Salt Lake City,UT,84104,EOD,1,\n\
11,2300 Parkway Blvd,West Valley City,UT,84119,EOD,1,\n\
12,3595 Main St,Salt Lake City,UT,84115,EOD,1,\n\
13,2010 W 500 S,Salt Lake City,UT,84104,10:30 AM,2,\n\
14,195 W Oakland Ave,Salt Lake City,UT,84115,9:00 AM,88,\n\
15,4001 South 700 East,Salt Lake City,UT,84107,EOD,3,\n\
";

pub const OVERRIDES_CSV: &str = "\
id,available_time,correction_time,corrected_street\n\
6,9:05 AM,,\n\
9,,10:20 AM,410 S State St\n\
";

// ── Loads & holds ─────────────────────────────────────────────────────────────

pub const LOADS_CSV: &str = "\
truck_id,package_id\n\
1,14\n\
1,1\n\
1,5\n\
1,13\n\
1,8\n\
1,4\n\
2,3\n\
2,6\n\
2,12\n\
2,2\n\
2,15\n\
3,9\n\
3,7\n\
3,10\n\
3,11\n\
";

pub const HOLDS: [(TruckId, SimTime); 2] = [
    (TruckId(2), SimTime::hm(9, 5)),
    (TruckId(3), SimTime::hm(10, 20)),
];
