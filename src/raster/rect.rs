// Copyright 2026 the Swrender Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fills over an axis-aligned integer rectangle.

use crate::color;
use crate::math::BBox;
use crate::simd;
use crate::surface::{MaskImage, MaskMethod, Surface};

/// Direct store of an opaque color. The destination is never read.
pub(crate) fn solid(surface: &mut Surface<'_>, region: &BBox, color: u32) {
    debug_assert_eq!(color >> 24, 255, "solid fills require an opaque color");
    debug_assert!(surface.compositor.is_none());

    for y in region.min.y..region.max.y {
        let row = surface.row(y as u32, region.min.x as u32, region.max.x as u32);
        simd::fill_row(row, color);
    }
}

/// SRC-OVER blend of a premultiplied color, routed through the bound mask
/// when one modulates.
pub(crate) fn translucent(surface: &mut Surface<'_>, region: &BBox, color: u32) {
    if let Some(compositor) = surface.compositor {
        match compositor.method {
            MaskMethod::AlphaMask => {
                return masked(surface, region, color, compositor.image, false);
            }
            MaskMethod::InvAlphaMask => {
                return masked(surface, region, color, compositor.image, true);
            }
            // Clip geometry was folded into the coverage upstream.
            MaskMethod::ClipPath => {}
        }
    }

    let level = surface.level;
    for y in region.min.y..region.max.y {
        let row = surface.row(y as u32, region.min.x as u32, region.max.x as u32);
        simd::blend_row_solid(level, row, color);
    }
}

fn masked(
    surface: &mut Surface<'_>,
    region: &BBox,
    color: u32,
    mask: MaskImage<'_>,
    inverse: bool,
) {
    log::debug!(
        "rect composition with {} mask",
        if inverse { "inverse alpha" } else { "alpha" }
    );

    let stride = surface.stride as usize;
    for y in region.min.y..region.max.y {
        let base = y as usize * stride;
        let mask_row = &mask.data[base + region.min.x as usize..base + region.max.x as usize];
        let row = surface.row(y as u32, region.min.x as u32, region.max.x as u32);

        for (dst, &m) in row.iter_mut().zip(mask_row) {
            let mut a = color::alpha(m);
            if inverse {
                a = 255 - a;
            }
            let src = color::alpha_mul(color, a);
            *dst = color::src_over(src, *dst);
        }
    }
}
