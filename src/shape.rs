// Copyright 2026 the Swrender Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tessellated shape descriptor consumed by the raster dispatch.

use crate::fill::GradientFill;
use crate::math::BBox;
use crate::span::Rle;

/// Everything the raster core needs to know about one tessellated shape.
///
/// `rect == true` is the tessellator's proof that the geometry is exactly
/// the axis-aligned `bbox` at full coverage, which unlocks the rect fast
/// paths; otherwise fills walk `rle` and strokes walk `stroke_rle`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shape<'a> {
    pub rect: bool,
    pub bbox: BBox,
    pub rle: Option<&'a Rle>,
    pub stroke_rle: Option<&'a Rle>,
    pub fill: Option<&'a GradientFill>,
    pub stroke_fill: Option<&'a GradientFill>,
}

impl<'a> Shape<'a> {
    /// A shape whose geometry is exactly `bbox` at full coverage.
    pub fn from_rect(bbox: BBox) -> Self {
        Self {
            rect: true,
            bbox,
            ..Self::default()
        }
    }

    /// A shape rasterized through its coverage spans.
    pub fn from_rle(rle: &'a Rle) -> Self {
        Self {
            rle: Some(rle),
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, fill: &'a GradientFill) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke_rle: &'a Rle) -> Self {
        self.stroke_rle = Some(stroke_rle);
        self
    }

    pub fn with_stroke_fill(mut self, fill: &'a GradientFill) -> Self {
        self.stroke_fill = Some(fill);
        self
    }
}
