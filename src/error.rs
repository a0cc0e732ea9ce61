// Copyright 2026 the Swrender Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error values reported by the raster entry points.

use thiserror::Error;

/// The ways a raster call can fail.
///
/// Every entry point validates its inputs before touching the destination,
/// so an `Err` return guarantees no pixel was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RasterError {
    /// The surface dimensions and buffer length do not describe a valid
    /// pixel grid (zero width or height, `stride < width`, or a buffer too
    /// short for `stride * (height - 1) + width` pixels).
    #[error("invalid surface geometry")]
    InvalidSurface,
    /// The shape carries no coverage data for the selected path, e.g. a
    /// non-rect shape without an RLE stream, or a gradient draw without a
    /// fill.
    #[error("shape is missing data for the selected raster path")]
    InvalidShape,
    /// The gradient parameters collapse to a point: a linear gradient
    /// vector shorter than epsilon or a radial radius coefficient below
    /// epsilon.
    #[error("degenerate gradient")]
    DegenerateGradient,
    /// The image transform has no inverse.
    #[error("image transform is not invertible")]
    SingularTransform,
}
