//! Error taxonomy for grid construction and search invocation.
//!
//! Only configuration-shape problems are errors; algorithmic outcomes
//! (found, not found, cancelled) are ordinary values on
//! [SearchResult](crate::SearchResult) that callers branch on.

use thiserror::Error;

use crate::{MAX_DIM, MIN_DIM};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Requested grid dimensions fall outside the configured bounds.
    /// Interactive boundaries are expected to clamp instead of surfacing this.
    #[error("invalid grid dimensions {rows}x{cols}: sides must be within {min}..={max}", min = MIN_DIM, max = MAX_DIM)]
    InvalidDimension { rows: usize, cols: usize },

    /// A search was requested before both endpoints were placed. No cell is
    /// mutated when this is returned.
    #[error("both a start and a finish cell must be set before running a search")]
    MissingEndpoints,

    /// An algorithm name that is not one of the four supported UI names.
    #[error("unknown algorithm name: {0:?}")]
    UnknownAlgorithm(String),
}
