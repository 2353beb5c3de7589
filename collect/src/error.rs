//! Error types for reducers, containers, and filters.

use thiserror::Error;

/// Errors that can occur while folding a sequence or interacting with a container.
///
/// Every error is returned at the point of detection and aborts the surrounding fold. The
/// accumulator observed before the failure should not be relied upon.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A resolved grouping/collecting key was not a string.
    #[error("resolved key must be a string, actual: value - {value} type - {kind}")]
    KeyType { value: String, kind: &'static str },

    /// A key was collected twice without a merge function.
    #[error("key: \"{0}\" has duplicates")]
    DuplicateKey(String),

    /// A merge strategy refused to overwrite a key.
    #[error("failed to merge: object already has key \"{0}\"")]
    MergeConflict(String),

    /// A write was attempted against an immutable container or frozen object.
    #[error("immutable container cannot be updated at key \"{0}\"")]
    ImmutableWrite(String),

    /// A read was attempted against a builder before it was built.
    #[error("{0} is not supported before the builder is built")]
    NotSupported(&'static str),

    /// A matcher, key, or projection had an unsupported shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An arithmetic fold left the range of its numeric type.
    #[error("arithmetic overflow at index {0}")]
    Overflow(usize),
}
