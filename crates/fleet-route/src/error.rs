use fleet_core::CoreError;
use fleet_geo::GeoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("distance lookup failed: {0}")]
    Geo(#[from] GeoError),
}

pub type RouteResult<T> = Result<T, RouteError>;
