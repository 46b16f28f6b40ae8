//! Domain-specific errors for the cereal storage accountant.
//!
//! Every variant represents a usage error raised synchronously to the
//! caller: invalid construction parameters, a negative operation amount,
//! an add that would need a container slot beyond the storage budget, or
//! a free-space query against a container that does not exist. There is
//! no recovery layer inside the component; callers decide how to react.

use thiserror::Error;

use crate::Cereal;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid capacity: {0}")]
    InvalidCapacity(&'static str),

    #[error("amount must not be negative")]
    NegativeAmount,

    #[error("storage cannot fit another container for a new cereal")]
    CapacityExceeded,

    #[error("no container for {0} to report free space on")]
    ContainerNotFound(Cereal),
}
