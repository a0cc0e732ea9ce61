// Copyright 2026 the Swrender Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fills over run-length coverage spans.
//!
//! Coverage is uniform within a span, so it folds into the source color
//! once per span; only the mask paths touch per-pixel data beyond the
//! destination itself.

use crate::color;
use crate::simd;
use crate::span::Rle;
use crate::surface::{MaskImage, MaskMethod, Surface};

/// Fill with an opaque color. Fully covered spans take the direct store
/// path; partial spans blend with the coverage folded into the source.
pub(crate) fn solid(surface: &mut Surface<'_>, rle: &Rle, color: u32) {
    debug_assert_eq!(color >> 24, 255, "solid fills require an opaque color");

    let level = surface.level;
    for span in rle.spans() {
        let row = surface.row(span.y, span.x, span.x + span.len);
        if span.coverage == 255 {
            simd::fill_row(row, color);
        } else {
            simd::blend_row_solid(level, row, color::alpha_mul(color, span.coverage));
        }
    }
}

/// SRC-OVER blend of a premultiplied color, routed through the bound mask
/// when one modulates.
pub(crate) fn translucent(surface: &mut Surface<'_>, rle: &Rle, color: u32) {
    if let Some(compositor) = surface.compositor {
        match compositor.method {
            MaskMethod::AlphaMask => {
                return masked(surface, rle, color, compositor.image, false);
            }
            MaskMethod::InvAlphaMask => {
                return masked(surface, rle, color, compositor.image, true);
            }
            MaskMethod::ClipPath => {}
        }
    }

    let level = surface.level;
    for span in rle.spans() {
        let src = if span.coverage < 255 {
            color::alpha_mul(color, span.coverage)
        } else {
            color
        };
        let row = surface.row(span.y, span.x, span.x + span.len);
        simd::blend_row_solid(level, row, src);
    }
}

fn masked(
    surface: &mut Surface<'_>,
    rle: &Rle,
    color: u32,
    mask: MaskImage<'_>,
    inverse: bool,
) {
    log::debug!(
        "rle composition with {} mask",
        if inverse { "inverse alpha" } else { "alpha" }
    );

    let stride = surface.stride as usize;
    for span in rle.spans() {
        let src = if span.coverage < 255 {
            color::alpha_mul(color, span.coverage)
        } else {
            color
        };

        let base = span.y as usize * stride + span.x as usize;
        let mask_row = &mask.data[base..base + span.len as usize];
        let row = surface.row(span.y, span.x, span.x + span.len);

        for (dst, &m) in row.iter_mut().zip(mask_row) {
            let mut a = color::alpha(m);
            if inverse {
                a = 255 - a;
            }
            let modulated = color::alpha_mul(src, a);
            *dst = color::src_over(modulated, *dst);
        }
    }
}
