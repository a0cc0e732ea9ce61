// Copyright 2026 the Swrender Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient fills over rectangles and coverage spans.
//!
//! Opaque gradients at full coverage are fetched straight into the
//! destination row, one write per pixel. Every other combination fetches
//! into a scanline scratch first, then folds coverage in and composites.
//! The scratch is bounded by the surface width and lives only for the
//! duration of one call.

use smallvec::SmallVec;

use crate::color;
use crate::error::RasterError;
use crate::fill::GradientFill;
use crate::math::BBox;
use crate::span::Rle;
use crate::surface::Surface;

/// Scanlines up to this many pixels composite without touching the heap.
const SCRATCH_INLINE: usize = 256;

type Scratch = SmallVec<[u32; SCRATCH_INLINE]>;

pub(crate) fn fill_rect(
    surface: &mut Surface<'_>,
    region: &BBox,
    fill: &GradientFill,
) -> Result<(), RasterError> {
    if fill.is_degenerate() {
        return Err(RasterError::DegenerateGradient);
    }

    let w = region.width() as usize;

    if fill.translucent() {
        let mut scratch: Scratch = SmallVec::new();
        scratch.resize(w, 0);

        for y in region.min.y..region.max.y {
            fill.fetch(&mut scratch, region.min.x as u32, y as u32);
            let row = surface.row(y as u32, region.min.x as u32, region.max.x as u32);
            for (dst, &src) in row.iter_mut().zip(scratch.iter()) {
                *dst = color::src_over(src, *dst);
            }
        }
    } else {
        for y in region.min.y..region.max.y {
            let row = surface.row(y as u32, region.min.x as u32, region.max.x as u32);
            fill.fetch(row, region.min.x as u32, y as u32);
        }
    }

    Ok(())
}

pub(crate) fn fill_rle(
    surface: &mut Surface<'_>,
    rle: &Rle,
    fill: &GradientFill,
) -> Result<(), RasterError> {
    if fill.is_degenerate() {
        return Err(RasterError::DegenerateGradient);
    }

    let mut scratch: Scratch = SmallVec::new();
    scratch.resize(surface.w as usize, 0);

    if fill.translucent() {
        for span in rle.spans() {
            let len = span.len as usize;
            fill.fetch(&mut scratch[..len], span.x, span.y);
            let row = surface.row(span.y, span.x, span.x + span.len);

            if span.coverage == 255 {
                for (dst, &src) in row.iter_mut().zip(scratch.iter()) {
                    *dst = color::src_over(src, *dst);
                }
            } else {
                for (dst, &src) in row.iter_mut().zip(scratch.iter()) {
                    let p = color::alpha_mul(src, span.coverage);
                    *dst = color::src_over(p, *dst);
                }
            }
        }
    } else {
        for span in rle.spans() {
            let len = span.len as usize;
            let row = surface.row(span.y, span.x, span.x + span.len);

            if span.coverage == 255 {
                fill.fetch(row, span.x, span.y);
            } else {
                // An opaque gradient under partial coverage dissolves
                // against the destination instead of compositing.
                fill.fetch(&mut scratch[..len], span.x, span.y);
                let ialpha = 255 - span.coverage;
                for (dst, &src) in row.iter_mut().zip(scratch.iter()) {
                    *dst = color::alpha_mul(src, span.coverage)
                        + color::alpha_mul(*dst, ialpha);
                }
            }
        }
    }

    Ok(())
}
