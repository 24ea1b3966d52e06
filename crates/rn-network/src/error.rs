//! Network-subsystem error type.

use thiserror::Error;

use rn_core::NodeId;

/// Errors produced by `rn-network`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    #[error("no point named {0:?} in network")]
    UnknownNode(String),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
