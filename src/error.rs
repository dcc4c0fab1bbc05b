// Copyright 2025 Lars Brubaker
// License: MIT

use thiserror::Error;

use crate::boundary::Boundary;

/// Errors raised at the public entry points.
///
/// Merge outcomes that are not a clean union (`Boundary::NoUnion`,
/// `Boundary::Invalid`) are ordinary return values, not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid polygon #{index}: {reason}")]
    InvalidPolygon { index: usize, reason: String },

    #[error("no polygons supplied")]
    NoPolygons,

    #[error("polygons cannot be merged into one outline ({0:?})")]
    Unmergeable(Boundary),
}

pub type Result<T> = std::result::Result<T, Error>;
