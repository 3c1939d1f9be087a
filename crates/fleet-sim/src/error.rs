use fleet_core::{CoreError, TruckId};
use fleet_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("routing failed for truck {truck}: {source}")]
    Route {
        truck:  TruckId,
        #[source]
        source: RouteError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
