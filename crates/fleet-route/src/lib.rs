//! `fleet-route`: drives one truck through its load.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`truck`]  | `Truck` (clock, mileage, location, load)                     |
//! | [`rank`]   | `Candidate`, `Tier`, `rank_candidates`, `select_next`        |
//! | [`router`] | `Router` trait, `GreedyRouter`, `RouteLog`, `Stop`, `Wait`   |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                               |
//!
//! # Greedy loop (summary)
//!
//! ```text
//! load      = ids[..capacity]          (excess dropped, assigned nothing)
//! clock     = start_time, location = hub
//! while pending:
//!   candidates = pending packages available at clock
//!   none?      → advance clock to next availability/correction event,
//!                or stop if there is none (packages left stranded)
//!   pick       = head of rank_candidates (urgent, on-time, late; nearest first)
//!   drive, stamp departure/delivery, move to the pick's address at arrival
//! return to hub
//! ```

pub mod error;
pub mod rank;
pub mod router;
pub mod truck;


pub use error::{RouteError, RouteResult};
pub use rank::{Candidate, Ranked, Tier, rank_candidates, select_next};
pub use router::{GreedyRouter, RouteLog, Router, Stop, Wait};
pub use truck::Truck;
