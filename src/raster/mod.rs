// Copyright 2026 the Swrender Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raster entry points and the dispatch over shape kind, paint kind,
//! opacity, and bound mask.
//!
//! Every entry validates first and writes after, so failures never leave
//! a partially drawn destination. Spans and rect regions arrive
//! pre-clipped from the tessellator; nothing here clips again.

mod gradient;
mod image;
mod rect;
mod rle;

use crate::color;
use crate::error::RasterError;
use crate::math::{BBox, Matrix};
use crate::shape::Shape;
use crate::simd;
use crate::surface::{Image, Surface};

/// Zero every pixel of the surface. The only operation that writes
/// without blending.
pub fn clear(surface: &mut Surface<'_>) -> Result<(), RasterError> {
    if surface.w == surface.stride {
        let len = surface.w as usize * surface.h as usize;
        simd::fill_row(&mut surface.buf[..len], 0);
    } else {
        for y in 0..surface.h {
            let row = surface.row(y, 0, surface.w);
            simd::fill_row(row, 0);
        }
    }
    Ok(())
}

/// Fill a shape with a solid color.
///
/// The channels arrive straight; they are premultiplied by `a` and packed
/// for the surface's color space here, once, before dispatch.
pub fn fill_solid(
    surface: &mut Surface<'_>,
    shape: &Shape<'_>,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
) -> Result<(), RasterError> {
    let color = premultiplied(surface, r, g, b, a);
    let translucent = surface.is_translucent(a);

    if shape.rect {
        if translucent {
            rect::translucent(surface, &shape.bbox, color);
        } else {
            rect::solid(surface, &shape.bbox, color);
        }
        return Ok(());
    }

    let rle = shape.rle.ok_or(RasterError::InvalidShape)?;
    if translucent {
        rle::translucent(surface, rle, color);
    } else {
        rle::solid(surface, rle, color);
    }
    Ok(())
}

/// Fill a shape with its gradient.
pub fn fill_gradient(surface: &mut Surface<'_>, shape: &Shape<'_>) -> Result<(), RasterError> {
    let fill = shape.fill.ok_or(RasterError::InvalidShape)?;

    if shape.rect {
        gradient::fill_rect(surface, &shape.bbox, fill)
    } else {
        let rle = shape.rle.ok_or(RasterError::InvalidShape)?;
        gradient::fill_rle(surface, rle, fill)
    }
}

/// Fill a shape's stroke coverage with a solid color.
pub fn stroke_solid(
    surface: &mut Surface<'_>,
    shape: &Shape<'_>,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
) -> Result<(), RasterError> {
    let color = premultiplied(surface, r, g, b, a);
    let rle = shape.stroke_rle.ok_or(RasterError::InvalidShape)?;

    if surface.is_translucent(a) {
        rle::translucent(surface, rle, color);
    } else {
        rle::solid(surface, rle, color);
    }
    Ok(())
}

/// Fill a shape's stroke coverage with the stroke's gradient.
pub fn stroke_gradient(surface: &mut Surface<'_>, shape: &Shape<'_>) -> Result<(), RasterError> {
    let fill = shape.stroke_fill.ok_or(RasterError::InvalidShape)?;
    let rle = shape.stroke_rle.ok_or(RasterError::InvalidShape)?;
    gradient::fill_rle(surface, rle, fill)
}

/// Draw an image, optionally transformed, at the given opacity.
///
/// A missing transform counts as the identity, and an exact identity
/// takes the direct blit path; anything else is inverted up front and
/// resampled nearest-neighbor. A singular transform fails before any
/// pixel is touched. When the image carries an RLE, iteration follows its
/// coverage spans instead of `bbox`.
pub fn draw_image(
    surface: &mut Surface<'_>,
    image: &Image<'_>,
    transform: Option<&Matrix>,
    bbox: &BBox,
    opacity: u8,
) -> Result<(), RasterError> {
    let inverse = match transform {
        Some(m) if !m.is_identity() => Some(m.invert().ok_or(RasterError::SingularTransform)?),
        _ => None,
    };
    let translucent = surface.is_translucent(opacity);

    match (image.rle, inverse) {
        (Some(rle), None) => {
            if translucent {
                image::blit_rle_translucent(surface, image, rle, opacity);
            } else {
                image::blit_rle(surface, image, rle);
            }
        }
        (Some(rle), Some(inv)) => {
            if translucent {
                image::sample_rle_translucent(surface, image, rle, &inv, opacity);
            } else {
                image::sample_rle(surface, image, rle, &inv);
            }
        }
        (None, None) => {
            if translucent {
                image::blit_rect_translucent(surface, image, bbox, opacity);
            } else {
                image::blit_rect(surface, image, bbox);
            }
        }
        (None, Some(inv)) => {
            if translucent {
                image::sample_rect_translucent(surface, image, bbox, &inv, opacity);
            } else {
                image::sample_rect(surface, image, bbox, &inv);
            }
        }
    }
    Ok(())
}

fn premultiplied(surface: &Surface<'_>, r: u8, g: u8, b: u8, a: u8) -> u32 {
    surface.cs.join(
        color::mul8(r, a),
        color::mul8(g, a),
        color::mul8(b, a),
        a,
    )
}
