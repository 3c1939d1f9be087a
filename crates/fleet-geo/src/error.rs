//! Geo-lookup error type.

use thiserror::Error;

use fleet_core::NodeId;

/// Errors produced by `fleet-geo`.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("unknown address {0:?}")]
    UnknownAddress(String),

    #[error("node {node} outside the {size}x{size} distance matrix")]
    NodeOutOfRange { node: NodeId, size: usize },

    #[error("invalid distance {miles} between nodes {from} and {to}")]
    InvalidDistance { from: NodeId, to: NodeId, miles: f64 },

    #[error("asymmetric distance: {from}→{to} is {forward}, reverse is {reverse}")]
    Asymmetric { from: NodeId, to: NodeId, forward: f64, reverse: f64 },

    #[error("geo parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GeoResult<T> = Result<T, GeoError>;
